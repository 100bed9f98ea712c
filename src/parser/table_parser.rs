use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::storage::{Level, Record};

/// 每个表格行固定占4个单元格
const GROUP: usize = 4;

/// 一页表格的提取结果
#[derive(Debug, Default)]
pub struct TableExtraction {
    pub records: Vec<Record>,
    /// 末尾不足一组而被丢弃的单元格数量
    pub dropped_cells: usize,
}

pub struct TableParser {
    cell_selector: Selector,
}

impl TableParser {
    pub fn new() -> Self {
        Self {
            cell_selector: Selector::parse("td").unwrap(),
        }
    }

    /// 按文档顺序取出所有 td 的文本，不做裁剪
    pub fn cells(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        document
            .select(&self.cell_selector)
            .map(|td| td.text().collect::<String>())
            .collect()
    }

    /// 解析整页HTML
    pub fn extract_html(&self, level: Level, html: &str) -> TableExtraction {
        let cells = self.cells(html);
        debug!("{}: 找到 {} 个单元格", level, cells.len());
        self.extract(level, &cells)
    }

    /// 以4为步长扫描单元格，每组的第2、3格是汉字和拼音
    pub fn extract(&self, level: Level, cells: &[String]) -> TableExtraction {
        let mut records = Vec::with_capacity(cells.len() / GROUP);

        let mut idx = GROUP;
        while idx <= cells.len() {
            let mut record = Record::new(level, cells[idx - 3].trim(), cells[idx - 2].trim());
            record.normalize_character();
            records.push(record);

            idx += GROUP;
        }

        let dropped_cells = cells.len() % GROUP;
        if dropped_cells > 0 {
            debug!("{}: 末尾 {} 个单元格不足一行，已忽略", level, dropped_cells);
        }

        info!("{}: 表格解析完成，共 {} 条", level, records.len());
        TableExtraction {
            records,
            dropped_cells,
        }
    }
}

impl Default for TableParser {
    fn default() -> Self {
        Self::new()
    }
}
