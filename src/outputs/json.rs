//! JSON rendering of a run report.
//!
//! Used with `--format json` so the result can be piped into other tools:
//!
//! ```text
//! {
//!   "record": { "title": "...", "fulltext": "...", "link": "..." },
//!   "dataset_path": "src/data/news-dataset.csv",
//!   "dataset_rows": 12,
//!   "bag_of_words": { "terms": [ { "word": "texto", "count": 2 } ] },
//!   "top_terms": [ { "word": "texto", "count": 2 } ]
//! }
//! ```

use crate::error::Result;
use crate::models::Report;
use std::io::Write;
use tracing::instrument;

/// Write `report` as pretty-printed JSON followed by a newline.
#[instrument(level = "debug", skip_all)]
pub fn write_report<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
