use bookfinder::core::config::{self, CliOverrides};
use bookfinder::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "bookfinder", about = "Search books from the terminal")]
struct Args {
    /// Search immediately on startup
    query: Option<String>,

    /// Search API root (default: https://www.googleapis.com/books/v1)
    #[arg(long)]
    base_url: Option<String>,

    /// Results per search, 1-40
    #[arg(short = 'n', long)]
    max_results: Option<u32>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to bookfinder.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("bookfinder.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            config::BookfinderConfig::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url,
            max_results: args.max_results,
        },
    );

    log::info!(
        "bookfinder starting up against {} (max_results={:?})",
        resolved.base_url,
        resolved.max_results
    );

    tui::run(resolved, args.query)
}
