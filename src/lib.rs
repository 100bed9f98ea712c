pub mod config;
pub mod crawler;
pub mod parser;
pub mod storage;
pub mod utils;

pub use config::AppConfig;
pub use parser::{ExtractionPipeline, ExtractionStats};
pub use storage::{Level, Record};
pub use utils::{HskError, HskResult};
