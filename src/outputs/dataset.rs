//! Append-only CSV dataset of extracted articles.
//!
//! The file has the header `title,fulltext,link` followed by one row per
//! saved article. Fields are quoted as needed, so multi-line `fulltext`
//! values stay inside a single record. Rows are never rewritten or
//! deduplicated.
//!
//! Appends hold an exclusive advisory lock on the file, so two runs saving
//! at the same moment write whole rows one after the other, and the header
//! is written exactly once by whichever writer finds the file empty.

use crate::error::Result;
use crate::models::ArticleRecord;
use crate::utils::ensure_parent_dir;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Append `record` to the dataset at `path`, creating the file (and its
/// parent directories) with a header row on first use.
///
/// Returns the number of data rows in the dataset after the append. The
/// count is taken under the lock and skips rows that fail to parse, so a
/// damaged earlier row never turns a completed append into an error.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn append_record(path: &Path, record: &ArticleRecord) -> Result<usize> {
    ensure_parent_dir(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)?;
    file.lock()?;

    let len = file.metadata()?.len();
    let write_header = len == 0;
    if !write_header && !ends_with_newline(&mut file)? {
        warn!("Dataset does not end with a newline; terminating last row");
        file.write_all(b"\n")?;
    }
    debug!(write_header, "Dataset opened for append");
    {
        let mut writer = WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(&file);
        writer.serialize(record)?;
        writer.flush()?;
    }

    let rows = count_rows(&mut file)?;
    file.unlock()?;

    info!(rows, "Appended article to dataset");
    Ok(rows)
}

fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

/// Count data rows, skipping any that do not parse.
fn count_rows(file: &mut File) -> Result<usize> {
    file.seek(SeekFrom::Start(0))?;
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(&*file);
    let mut rows = 0;
    let mut skipped = 0;
    for row in reader.byte_records() {
        match row {
            Ok(_) => rows += 1,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(_) => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, "Dataset has rows that do not parse");
    }
    Ok(rows)
}

/// Read every row of the dataset at `path`.
#[cfg(test)]
pub fn read_records(path: &Path) -> Result<Vec<ArticleRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}
