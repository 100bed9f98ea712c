use regex::Regex;
use tracing::{debug, info};

use super::pdf_parser::DocumentSource;
use crate::storage::{Level, Record};
use crate::utils::HskResult;

/// 汉字、拼音，加至少一个释义词
const MIN_TOKENS: usize = 3;

/// 一页文本的提取结果
#[derive(Debug, Default)]
pub struct LineExtraction {
    pub records: Vec<Record>,
    /// 含汉字但词数不足的行
    pub skipped_lines: usize,
}

/// 从PDF页面文本中逐行识别7-9级词汇
pub struct LineExtractor {
    han_re: Regex,
}

impl LineExtractor {
    pub fn new() -> Self {
        Self {
            han_re: Regex::new(r"[\x{4e00}-\x{9fff}]+").unwrap(),
        }
    }

    pub fn extract(&self, page_text: &str) -> LineExtraction {
        let mut out = LineExtraction::default();

        for line in page_text.split('\n') {
            // 页眉、页码等不含汉字的行
            if !self.han_re.is_match(line) {
                continue;
            }

            let tokens: Vec<&str> = line.split(' ').collect();
            if tokens.len() < MIN_TOKENS {
                debug!("跳过词数不足的行: {:?}", line);
                out.skipped_lines += 1;
                continue;
            }

            out.records.push(Record::new(Level::Hsk7to9, tokens[0], tokens[1]));
        }

        info!("页面解析完成: {} 条, 跳过 {} 行", out.records.len(), out.skipped_lines);
        out
    }

    /// 按页序解析整个文档，任一页取文本失败即返回错误
    pub fn extract_document<D: DocumentSource + ?Sized>(
        &self,
        document: &D,
    ) -> HskResult<LineExtraction> {
        let mut out = LineExtraction::default();

        for index in 0..document.page_count() {
            let page = self.extract(&document.page_text(index)?);
            out.skipped_lines += page.skipped_lines;
            out.records.extend(page.records);
        }

        Ok(out)
    }
}

impl Default for LineExtractor {
    fn default() -> Self {
        Self::new()
    }
}
