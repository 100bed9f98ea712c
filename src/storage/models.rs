use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::utils::HskError;

/// HSK 等级标签，由数据来源决定，不从内容推断
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "hsk1")]
    Hsk1,
    #[serde(rename = "hsk2")]
    Hsk2,
    #[serde(rename = "hsk3")]
    Hsk3,
    #[serde(rename = "hsk4")]
    Hsk4,
    #[serde(rename = "hsk5")]
    Hsk5,
    #[serde(rename = "hsk6")]
    Hsk6,
    #[serde(rename = "hsk7-9")]
    Hsk7to9,
}

impl Level {
    pub const ALL: [Level; 7] = [
        Level::Hsk1,
        Level::Hsk2,
        Level::Hsk3,
        Level::Hsk4,
        Level::Hsk5,
        Level::Hsk6,
        Level::Hsk7to9,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Hsk1 => "hsk1",
            Level::Hsk2 => "hsk2",
            Level::Hsk3 => "hsk3",
            Level::Hsk4 => "hsk4",
            Level::Hsk5 => "hsk5",
            Level::Hsk6 => "hsk6",
            Level::Hsk7to9 => "hsk7-9",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = HskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .iter()
            .copied()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| HskError::ConfigError(format!("未知的HSK等级: {}", s)))
    }
}

/// 词汇条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub level: Level,
    pub character: String,
    #[serde(rename = "pinyin")]
    pub reading: String,
}

// 全角括号注释，例如 "爱（愛）" 中的 "（愛）"
fn annotation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*（[^）]*）").expect("annotation pattern is valid"))
}

impl Record {
    pub fn new(level: Level, character: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            level,
            character: character.into(),
            reading: reading.into(),
        }
    }

    /// 去掉汉字中的全角括号注释（繁体/异体写法）
    pub fn normalize_character(&mut self) {
        if let std::borrow::Cow::Owned(trimmed) = annotation_re().replace_all(&self.character, "") {
            self.character = trimmed;
        }
    }

    /// 导出顺序固定为 (level, character, reading)
    pub fn as_tuple(&self) -> (&str, &str, &str) {
        (self.level.as_str(), &self.character, &self.reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_fullwidth_annotation() {
        let mut record = Record::new(Level::Hsk1, "爱（愛）", "ài");
        record.normalize_character();
        assert_eq!(record.character, "爱");
    }

    #[test]
    fn plain_character_is_untouched() {
        let mut record = Record::new(Level::Hsk1, "爱", "ài");
        record.normalize_character();
        assert_eq!(record.character, "爱");
    }

    #[test]
    fn normalization_is_idempotent() {
        let mut once = Record::new(Level::Hsk3, "打算 （打筭）（異）", "dǎsuàn");
        once.normalize_character();
        let mut twice = once.clone();
        twice.normalize_character();
        assert_eq!(once, twice);
        assert_eq!(once.character, "打算");
    }

    #[test]
    fn ascii_parentheses_are_kept() {
        let mut record = Record::new(Level::Hsk2, "的(de)", "de");
        record.normalize_character();
        assert_eq!(record.character, "的(de)");
    }

    #[test]
    fn tuple_order_is_level_character_reading() {
        let record = Record::new(Level::Hsk7to9, "安置", "ānzhì");
        assert_eq!(record.as_tuple(), ("hsk7-9", "安置", "ānzhì"));
    }

    #[test]
    fn level_tags_round_trip_through_from_str() {
        for level in Level::ALL {
            assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
        }
        assert!("hsk10".parse::<Level>().is_err());
    }
}
