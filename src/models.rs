//! Data models for extracted articles and the per-run report.
//!
//! - [`ArticleRecord`]: one extracted article, also one row of the CSV dataset
//! - [`TermCount`]: a single bag-of-words entry
//! - [`Report`]: everything the presenter shows after a successful run

use crate::analysis::BagOfWords;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An article as extracted from a fetched page.
///
/// Field order is the dataset column order: `title,fulltext,link`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// Text of the first `<h1>`, or empty when the page has none.
    pub title: String,
    /// Paragraph texts joined with `\n`.
    pub fulltext: String,
    /// The URL the article was fetched from.
    pub link: String,
}

/// A word and how many times it occurs in the analyzed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub word: String,
    pub count: usize,
}

/// Result of one successful fetch-extract-persist-analyze cycle.
#[derive(Debug, Serialize)]
pub struct Report {
    pub record: ArticleRecord,
    pub dataset_path: PathBuf,
    /// Number of data rows in the dataset after this run's append.
    pub dataset_rows: usize,
    pub bag_of_words: BagOfWords,
    /// The terms selected for the chart (a prefix of `bag_of_words`).
    pub top_terms: Vec<TermCount>,
}
