use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use hskvocab::config::{AppConfig, SETTINGS_PATH};
use hskvocab::crawler::MandarinbeanCrawler;
use hskvocab::parser::{ExtractionPipeline, LineExtractor, PdfParser, TableParser};
use hskvocab::storage::{CsvExporter, Exporter, JsonExporter, Level, Record};
use hskvocab::utils::logger;

#[derive(Parser)]
#[command(name = "hskvocab")]
#[command(about = "HSK 词汇表抓取与导出", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// 生成默认配置文件
    Init,
    /// 抓取全部来源并导出词汇表
    Scrape {
        /// 输出路径，默认取配置中的 export.output_path
        #[arg(short, long)]
        output: Option<String>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
    /// 解析本地文件，结果输出到标准输出
    Extract {
        /// 已保存的词表网页
        #[arg(long, conflicts_with = "pdf", requires = "level")]
        html: Option<String>,
        /// 网页对应的等级，例如 hsk3
        #[arg(long)]
        level: Option<Level>,
        /// 7-9级词表PDF
        #[arg(long)]
        pdf: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    logger::init_logger();
    info!("hskvocab 启动");

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            init_command()?;
        }
        Commands::Scrape { output, format } => {
            scrape_command(output, format).await?;
        }
        Commands::Extract { html, level, pdf } => {
            extract_command(html, level, pdf)?;
        }
    }

    Ok(())
}

fn init_command() -> Result<()> {
    std::fs::create_dir_all("config")?;

    AppConfig::default().save(SETTINGS_PATH)?;
    info!("已生成配置文件: {}", SETTINGS_PATH);
    info!("下一步: 将7-9级词表PDF放到 sources.document_path 指定的位置，然后运行 'hskvocab scrape'");

    Ok(())
}

async fn scrape_command(output: Option<String>, format: OutputFormat) -> Result<()> {
    let app_config = AppConfig::load().context("加载配置失败")?;
    let output_path = output.unwrap_or_else(|| app_config.export.output_path.clone());

    let exporter: Box<dyn Exporter> = match format {
        OutputFormat::Csv => Box::new(CsvExporter::new(&output_path)),
        OutputFormat::Json => Box::new(JsonExporter::new(&output_path)),
    };

    let crawler = MandarinbeanCrawler::new(&app_config.crawler)?;
    let pipeline = ExtractionPipeline::new(&app_config, crawler);

    let stats = pipeline
        .run_and_export(PdfParser::open, exporter.as_ref())
        .await?;

    info!(
        "✅ 完成: {} 个网页, {} 页PDF, 共 {} 条 -> {}",
        stats.pages_fetched,
        stats.document_pages,
        stats.total(),
        output_path
    );
    Ok(())
}

fn extract_command(html: Option<String>, level: Option<Level>, pdf: Option<String>) -> Result<()> {
    let records: Vec<Record> = match (html, level, pdf) {
        (Some(path), Some(level), None) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("无法读取 {}", path))?;
            TableParser::new().extract_html(level, &content).records
        }
        (None, _, Some(path)) => {
            let document = PdfParser::open(&path)?;
            LineExtractor::new().extract_document(&document)?.records
        }
        _ => anyhow::bail!("请指定 --html 与 --level，或者 --pdf"),
    };

    CsvExporter::write_to(std::io::stdout().lock(), &records)?;
    Ok(())
}
