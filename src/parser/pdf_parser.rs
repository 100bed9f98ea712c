use std::path::Path;

use tracing::{info, warn};

use crate::utils::{HskError, HskResult};

/// 按页提供纯文本的文档
pub trait DocumentSource {
    fn page_count(&self) -> usize;

    /// 第 `index` 页（从0开始）的文本，保留换行
    fn page_text(&self, index: usize) -> HskResult<String>;
}

/// 通过 pdf-extract 按页提取文本，CJK 字体经由 ToUnicode 映射解码
pub struct PdfParser {
    pages: Vec<String>,
}

impl PdfParser {
    pub fn open(pdf_path: &str) -> HskResult<Self> {
        info!("解析PDF: {}", pdf_path);

        if !Path::new(pdf_path).exists() {
            return Err(HskError::PdfError(format!("PDF文件不存在: {}", pdf_path)));
        }

        let bytes = std::fs::read(pdf_path)?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> HskResult<Self> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)?;

        if pages.is_empty() {
            warn!("PDF中没有页面");
        } else {
            info!("PDF共 {} 页", pages.len());
        }

        Ok(Self { pages })
    }
}

impl DocumentSource for PdfParser {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> HskResult<String> {
        self.pages
            .get(index)
            .cloned()
            .ok_or_else(|| HskError::PdfError(format!("页码越界: {}", index)))
    }
}
