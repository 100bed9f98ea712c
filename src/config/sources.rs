use serde::{Deserialize, Serialize};

use crate::storage::Level;

/// 单个等级对应的词表网页
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelSource {
    pub level: Level,
    pub url: String,
}

impl LevelSource {
    pub fn new(level: Level, url: impl Into<String>) -> Self {
        Self {
            level,
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// 按顺序抓取，输出顺序与此一致
    pub pages: Vec<LevelSource>,
    /// 7-9级词表PDF
    pub document_path: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        let pages = [
            (Level::Hsk1, "https://mandarinbean.com/new-hsk-1-word-list/"),
            (Level::Hsk2, "https://mandarinbean.com/new-hsk-2-word-list/"),
            (Level::Hsk3, "https://mandarinbean.com/new-hsk-3-word-list/"),
            (Level::Hsk4, "https://mandarinbean.com/new-hsk-4-word-list/"),
            (Level::Hsk5, "https://mandarinbean.com/new-hsk-5-word-list/"),
            (Level::Hsk6, "https://mandarinbean.com/new-hsk-6-word-list/"),
        ]
        .into_iter()
        .map(|(level, url)| LevelSource::new(level, url))
        .collect();

        Self {
            pages,
            document_path: "hsknewlevel.pdf".to_string(),
        }
    }
}
