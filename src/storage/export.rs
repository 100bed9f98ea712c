use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use super::models::Record;
use crate::utils::HskResult;

pub const HEADER: [&str; 3] = ["level", "character", "pinyin"];
pub const DELIMITER: u8 = b';';

/// 导出词汇表
pub trait Exporter {
    fn export(&self, records: &[Record]) -> HskResult<()>;
}

/// 分号分隔的CSV导出，覆盖已有文件
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 写入任意输出流，表头总是先写
    pub fn write_to<W: Write>(writer: W, records: &[Record]) -> HskResult<()> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .from_writer(writer);

        wtr.write_record(HEADER)?;
        for record in records {
            let (level, character, reading) = record.as_tuple();
            wtr.write_record([level, character, reading])?;
        }
        wtr.flush()?;

        Ok(())
    }
}

impl Exporter for CsvExporter {
    fn export(&self, records: &[Record]) -> HskResult<()> {
        let file = File::create(&self.path)?;
        Self::write_to(file, records)?;
        info!("已导出 {} 条记录: {}", records.len(), self.path.display());
        Ok(())
    }
}

/// JSON数组导出，每条为 {level, character, pinyin}
pub struct JsonExporter {
    path: PathBuf,
}

impl JsonExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Exporter for JsonExporter {
    fn export(&self, records: &[Record]) -> HskResult<()> {
        let content = serde_json::to_string_pretty(records)?;
        std::fs::write(&self.path, content)?;
        info!("已导出 {} 条记录: {}", records.len(), self.path.display());
        Ok(())
    }
}
