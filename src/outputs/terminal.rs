//! Plain-text rendering for the terminal.
//!
//! A successful run prints, in order:
//!
//! ```text
//! ✔ Article saved to src/data/news-dataset.csv (row 3)
//!
//! Title: ...
//! Link:  ...
//! Text:
//! ...
//!
//! Bag of words
//! Word     Frequency
//! ...
//!
//! Top 2 words
//! 2 │  ███
//! 1 │  ███   ███
//!   └────────────
//!     texto teste
//! ```

use crate::models::{Report, TermCount};
use std::io::{self, Write};

const CHART_HEIGHT: usize = 10;
const MAX_LABEL_WIDTH: usize = 10;
const BAR: &str = "███";

pub fn render_success<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "✔ {message}")
}

pub fn render_warning<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "⚠ {message}")
}

pub fn render_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "✖ {message}")
}

/// Render the full result of a run.
pub fn render_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    render_success(
        out,
        &format!(
            "Article saved to {} (row {})",
            report.dataset_path.display(),
            report.dataset_rows
        ),
    )?;
    writeln!(out)?;

    writeln!(out, "Title: {}", report.record.title)?;
    writeln!(out, "Link:  {}", report.record.link)?;
    writeln!(out, "Text:")?;
    writeln!(out, "{}", report.record.fulltext)?;
    writeln!(out)?;

    writeln!(out, "Bag of words")?;
    if report.bag_of_words.is_empty() {
        writeln!(out, "(no terms left after removing stopwords)")?;
        return Ok(());
    }
    for line in frequency_table(report.bag_of_words.ranked()) {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;

    writeln!(out, "Top {} words", report.top_terms.len())?;
    for line in bar_chart(&report.top_terms) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Two-column table of terms in the order given.
pub fn frequency_table(terms: &[TermCount]) -> Vec<String> {
    let word_width = terms
        .iter()
        .map(|t| t.word.chars().count())
        .max()
        .unwrap_or(0)
        .max("Word".len());

    let mut lines = Vec::with_capacity(terms.len() + 2);
    lines.push(format!("{:<word_width$}  {:>9}", "Word", "Frequency"));
    lines.push(format!("{}  {}", "-".repeat(word_width), "-".repeat(9)));
    for term in terms {
        lines.push(format!("{:<word_width$}  {:>9}", term.word, term.count));
    }
    lines
}

/// Vertical bar chart: one column per term left to right, count on the y-axis.
///
/// Bars are scaled so the tallest is at most `CHART_HEIGHT` rows. Labels
/// longer than the column are cut and end in `…`.
pub fn bar_chart(terms: &[TermCount]) -> Vec<String> {
    let max = terms.iter().map(|t| t.count).max().unwrap_or(0);
    if max == 0 {
        return Vec::new();
    }

    let rows = max.min(CHART_HEIGHT);
    let width = terms
        .iter()
        .map(|t| t.word.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(BAR.chars().count(), MAX_LABEL_WIDTH);
    let axis_width = max.to_string().len();
    let heights: Vec<usize> = terms.iter().map(|t| (t.count * rows).div_ceil(max)).collect();

    let mut lines = Vec::with_capacity(rows + 2);
    for level in (1..=rows).rev() {
        let value = (level * max).div_ceil(rows);
        let mut line = format!("{value:>axis_width$} │");
        for &height in &heights {
            let cell = if height >= level { BAR } else { "" };
            line.push_str(&format!(" {cell:^width$}"));
        }
        lines.push(line.trim_end().to_string());
    }

    lines.push(format!(
        "{} └{}",
        " ".repeat(axis_width),
        "─".repeat(terms.len() * (width + 1))
    ));

    let mut labels = " ".repeat(axis_width + 2);
    for term in terms {
        labels.push_str(&format!(" {:^width$}", fit_label(&term.word, width)));
    }
    lines.push(labels.trim_end().to_string());
    lines
}

fn fit_label(word: &str, width: usize) -> String {
    if word.chars().count() <= width {
        word.to_string()
    } else {
        let mut cut: String = word.chars().take(width - 1).collect();
        cut.push('…');
        cut
    }
}
