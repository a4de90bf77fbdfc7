//! Command-line interface definitions for news_bow.
//!
//! Options can be given as flags or environment variables. When the URL is
//! omitted the user is prompted for it on stdin.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for news_bow.
///
/// # Examples
///
/// ```sh
/// # Fetch one article and append it to the default dataset
/// news_bow https://g1.globo.com/economia/noticia/2025/05/06/exemplo.ghtml
///
/// # Use another dataset file and print JSON
/// news_bow -d ./articles.csv -f json https://g1.globo.com/...
///
/// # Tune stopwords and the feature cap through a YAML file
/// news_bow -c ./news_bow.yaml https://g1.globo.com/...
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// URL of the news article; prompted for when omitted
    pub url: Option<String>,

    /// CSV dataset to append to (overrides the config file)
    #[arg(short, long, env = "NEWS_BOW_DATASET")]
    pub dataset: Option<PathBuf>,

    /// Optional path to a YAML config file
    #[arg(short, long, env = "NEWS_BOW_CONFIG")]
    pub config: Option<PathBuf>,

    /// How to print the result
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
