//! # news_bow
//!
//! Fetches a single news article, appends it to a local CSV dataset, and
//! shows a bag-of-words summary of its text.
//!
//! ## Usage
//!
//! ```sh
//! news_bow https://g1.globo.com/economia/noticia/2025/05/06/exemplo.ghtml
//! ```
//!
//! ## Architecture
//!
//! Each invocation runs one linear pipeline:
//! 1. **Fetching**: GET the article page (no retries)
//! 2. **Extraction**: headline plus body paragraphs, with an all-paragraphs fallback
//! 3. **Persistence**: append one row to the CSV dataset
//! 4. **Analysis**: stopword-filtered word counts, capped to the most frequent terms
//! 5. **Output**: a terminal report with table and bar chart, or JSON

use clap::Parser;
use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod analysis;
mod cli;
mod config;
mod error;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod utils;

use cli::{Cli, OutputFormat};
use config::AppConfig;
use outputs::{json, terminal};
use pipeline::Outcome;

#[tokio::main]
#[instrument]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(dataset) = args.dataset {
        config.dataset_path = dataset;
    }

    let url = match args.url {
        Some(url) => url,
        None => {
            prompt_for_url(BufReader::new(tokio::io::stdin()), &mut io::stderr()).await?
        }
    };

    let client = scrapers::build_client(&config)?;
    let outcome = pipeline::run(&url, &config, &client).await;

    let code = match outcome {
        Ok(Outcome::Saved(report)) => {
            let mut stdout = io::stdout().lock();
            match args.format {
                OutputFormat::Text => terminal::render_report(&mut stdout, &report)?,
                OutputFormat::Json => json::write_report(&mut stdout, &report)?,
            }
            stdout.flush()?;
            ExitCode::SUCCESS
        }
        Ok(Outcome::MissingUrl) => {
            warn!("Empty URL; nothing fetched");
            terminal::render_warning(&mut io::stderr(), "Please enter a URL.")?;
            ExitCode::SUCCESS
        }
        Err(e) if e.is_network() => {
            error!(%url, error = %e, "Fetching the article failed");
            terminal::render_error(&mut io::stderr(), &format!("Failed to fetch the article: {e}"))?;
            ExitCode::FAILURE
        }
        Err(e) => return Err(e.into()),
    };

    let elapsed = start_time.elapsed();
    info!(?elapsed, millis = elapsed.as_millis() as u64, "Execution complete");
    Ok(code)
}

/// Write the prompt to `out` and return the first line of `input`, trimmed.
///
/// `main` passes stderr so stdout carries only the report.
async fn prompt_for_url<R, W>(mut input: R, out: &mut W) -> io::Result<String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "Paste the article URL: ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).await?;
    Ok(line.trim().to_string())
}
