pub mod logger;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HskError {
    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("网络请求错误: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("页面抓取失败: {url} 返回状态码 {status}")]
    FetchStatus { url: String, status: u16 },

    #[error("PDF处理错误: {0}")]
    PdfError(String),

    #[error("导出错误: {0}")]
    ExportError(#[from] csv::Error),

    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl From<pdf_extract::OutputError> for HskError {
    fn from(err: pdf_extract::OutputError) -> Self {
        HskError::PdfError(err.to_string())
    }
}

impl From<::config::ConfigError> for HskError {
    fn from(err: ::config::ConfigError) -> Self {
        HskError::ConfigError(err.to_string())
    }
}

pub type HskResult<T> = Result<T, HskError>;
