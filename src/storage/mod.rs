pub mod export;
pub mod models;

pub use export::{CsvExporter, Exporter, JsonExporter};
pub use models::{Level, Record};
