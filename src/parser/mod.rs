pub mod line_extractor;
pub mod pdf_parser;
pub mod table_parser;

pub use line_extractor::{LineExtraction, LineExtractor};
pub use pdf_parser::{DocumentSource, PdfParser};
pub use table_parser::{TableExtraction, TableParser};

use std::collections::BTreeMap;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::{AppConfig, SourceConfig};
use crate::crawler::PageFetcher;
use crate::storage::{Exporter, Level, Record};
use crate::utils::HskResult;

/// 提取统计，只用于日志，不影响结果
#[derive(Debug, Clone, Default)]
pub struct ExtractionStats {
    pub per_level: BTreeMap<Level, usize>,
    pub pages_fetched: usize,
    pub document_pages: usize,
    pub dropped_cells: usize,
    pub skipped_lines: usize,
}

impl ExtractionStats {
    pub fn total(&self) -> usize {
        self.per_level.values().sum()
    }

    fn count(&mut self, records: &[Record]) {
        for record in records {
            *self.per_level.entry(record.level).or_default() += 1;
        }
    }
}

/// 全部记录，按来源顺序排列
#[derive(Debug, Default)]
pub struct Extracted {
    pub records: Vec<Record>,
    pub stats: ExtractionStats,
}

/// 统一提取管道：先网页（1-6级），后PDF（7-9级）
pub struct ExtractionPipeline<F> {
    sources: SourceConfig,
    request_delay: Duration,
    fetcher: F,
    table_parser: TableParser,
    line_extractor: LineExtractor,
}

impl<F: PageFetcher> ExtractionPipeline<F> {
    pub fn new(config: &AppConfig, fetcher: F) -> Self {
        Self {
            sources: config.sources.clone(),
            request_delay: Duration::from_millis(config.crawler.request_delay_ms),
            fetcher,
            table_parser: TableParser::new(),
            line_extractor: LineExtractor::new(),
        }
    }

    /// 依次抓取并解析所有来源；任一来源失败则整体失败
    pub async fn run<D, O>(&self, open_document: O) -> HskResult<Extracted>
    where
        D: DocumentSource,
        O: FnOnce(&str) -> HskResult<D>,
    {
        let mut out = Extracted::default();

        // 1. 网页词表
        info!("开始处理网页词表 (HSK1-6)");
        for (i, source) in self.sources.pages.iter().enumerate() {
            if i > 0 && !self.request_delay.is_zero() {
                tokio::time::sleep(self.request_delay).await;
            }

            let html = self.fetcher.fetch(&source.url).await?;
            let table = self.table_parser.extract_html(source.level, &html);

            out.stats.pages_fetched += 1;
            out.stats.dropped_cells += table.dropped_cells;
            out.stats.count(&table.records);
            out.records.extend(table.records);
        }

        // 2. PDF词表
        info!("开始处理PDF词表: {}", self.sources.document_path);
        let document = open_document(&self.sources.document_path)?;
        let lines = self.line_extractor.extract_document(&document)?;

        out.stats.document_pages = document.page_count();
        out.stats.skipped_lines += lines.skipped_lines;
        out.stats.count(&lines.records);
        out.records.extend(lines.records);

        if out.stats.dropped_cells > 0 || out.stats.skipped_lines > 0 {
            warn!(
                "忽略了 {} 个多余单元格和 {} 行不完整的PDF文本",
                out.stats.dropped_cells, out.stats.skipped_lines
            );
        }
        for (level, count) in &out.stats.per_level {
            info!("  {}: {} 条", level, count);
        }
        info!("提取完成，共 {} 条记录", out.records.len());

        Ok(out)
    }

    /// 完整运行后一次性导出
    pub async fn run_and_export<D, O, E>(
        &self,
        open_document: O,
        exporter: &E,
    ) -> HskResult<ExtractionStats>
    where
        D: DocumentSource,
        O: FnOnce(&str) -> HskResult<D>,
        E: Exporter + ?Sized,
    {
        let extracted = self.run(open_document).await?;
        exporter.export(&extracted.records)?;
        Ok(extracted.stats)
    }
}
