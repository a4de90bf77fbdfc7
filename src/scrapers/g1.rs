//! Article extraction for G1-style news pages.
//!
//! The headline is the first `<h1>`. The body comes from the first strategy
//! in [`BodyStrategy::ORDER`] that applies:
//!
//! 1. [`BodyStrategy::ArticleBody`]: paragraphs inside `div.mc-article-body`.
//!    Applies whenever the container exists, even if it holds no paragraphs.
//! 2. [`BodyStrategy::AllParagraphs`]: every `<p>` in the document. Always applies.
//!
//! Extraction never fails: a page without a headline or paragraphs yields a
//! record with empty fields.

use crate::models::ArticleRecord;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument};

static HEADLINE: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());
static ARTICLE_BODY: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.mc-article-body").unwrap());
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyStrategy {
    ArticleBody,
    AllParagraphs,
}

impl BodyStrategy {
    pub const ORDER: [BodyStrategy; 2] = [BodyStrategy::ArticleBody, BodyStrategy::AllParagraphs];

    /// Paragraph texts this strategy finds, or `None` when it does not apply to the page.
    pub fn paragraphs(self, document: &Html) -> Option<Vec<String>> {
        match self {
            BodyStrategy::ArticleBody => document
                .select(&ARTICLE_BODY)
                .next()
                .map(|body| body.select(&PARAGRAPH).map(element_text).collect()),
            BodyStrategy::AllParagraphs => {
                Some(document.select(&PARAGRAPH).map(element_text).collect())
            }
        }
    }
}

/// Build an [`ArticleRecord`] from a fetched page.
#[instrument(level = "info", skip(html), fields(bytes = html.len()))]
pub fn extract_article(html: &str, link: &str) -> ArticleRecord {
    let document = Html::parse_document(html);

    let title = document
        .select(&HEADLINE)
        .next()
        .map(element_text)
        .unwrap_or_default();

    let mut fulltext = String::new();
    for strategy in BodyStrategy::ORDER {
        if let Some(paragraphs) = strategy.paragraphs(&document) {
            debug!(?strategy, paragraphs = paragraphs.len(), "Body strategy applied");
            fulltext = paragraphs.join("\n");
            break;
        }
    }

    info!(
        title_chars = title.chars().count(),
        text_chars = fulltext.chars().count(),
        "Extracted article"
    );
    ArticleRecord {
        title,
        fulltext,
        link: link.to_string(),
    }
}

/// Text content of an element with whitespace runs collapsed and ends trimmed.
///
/// Text nodes are concatenated before collapsing, so inline markup keeps word
/// breaks: `Segundo <b>parágrafo</b>` gives "Segundo parágrafo", not "Segundoparágrafo".
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
