use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::{error, info};

use super::PageFetcher;
use crate::config::CrawlerConfig;
use crate::utils::{HskError, HskResult};

/// 以普通浏览器身份抓取词表页面
pub struct MandarinbeanCrawler {
    client: Client,
}

impl MandarinbeanCrawler {
    pub fn new(config: &CrawlerConfig) -> HskResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .default_headers(Self::browser_headers(config)?)
            .build()?;

        Ok(Self { client })
    }

    fn browser_headers(config: &CrawlerConfig) -> HskResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        let pairs = [
            (header::ACCEPT, &config.accept),
            (header::ACCEPT_CHARSET, &config.accept_charset),
            (header::ACCEPT_ENCODING, &config.accept_encoding),
            (header::ACCEPT_LANGUAGE, &config.accept_language),
        ];

        for (name, value) in pairs {
            let value = HeaderValue::from_str(value)
                .map_err(|e| HskError::ConfigError(format!("请求头 {} 无效: {}", name, e)))?;
            headers.insert(name, value);
        }
        headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));

        Ok(headers)
    }
}

impl PageFetcher for MandarinbeanCrawler {
    async fn fetch(&self, url: &str) -> HskResult<String> {
        info!("抓取页面: {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("抓取失败，状态码: {}", status);
            return Err(HskError::FetchStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        info!("响应状态: {}, 内容长度: {} 字节", status, text.len());

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn default_headers_are_accepted() {
        let config = AppConfig::default();
        let headers = MandarinbeanCrawler::browser_headers(&config.crawler).unwrap();
        assert_eq!(headers[header::ACCEPT_LANGUAGE], "en-US,en;q=0.8");
        assert_eq!(headers[header::CONNECTION], "keep-alive");
    }

    #[test]
    fn invalid_header_value_is_a_config_error() {
        let mut config = AppConfig::default().crawler;
        config.accept_language = "en\nUS".to_string();
        assert!(matches!(
            MandarinbeanCrawler::browser_headers(&config),
            Err(HskError::ConfigError(_))
        ));
    }
}
