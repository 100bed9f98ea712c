pub mod mandarinbean;

pub use mandarinbean::MandarinbeanCrawler;

use std::future::Future;

use crate::utils::HskResult;

/// 抓取网页HTML文本
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = HskResult<String>> + Send;
}
