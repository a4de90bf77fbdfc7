//! Everything a run writes: the persistent dataset and the rendered report.
//!
//! # Submodules
//!
//! - [`dataset`]: appends articles to the CSV dataset
//! - [`terminal`]: banners, record fields, frequency table, and bar chart
//! - [`json`]: the same report as JSON for `--format json`
//!
//! # Output Structure
//!
//! ```text
//! src/data/
//! └── news-dataset.csv   # title,fulltext,link; one row per saved article
//! ```

pub mod dataset;
pub mod json;
pub mod terminal;
