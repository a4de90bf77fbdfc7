//! Bag-of-words analysis over a single article's text.
//!
//! Tokenization follows the usual count-vectorizer defaults: the text is
//! lowercased and tokens are runs of two or more word characters, so
//! single-letter words never reach the counter. Stopwords are dropped,
//! the remaining tokens are counted, and only the `max_features` most
//! frequent terms are kept. Equal counts are ordered alphabetically.

use crate::models::TermCount;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Lowercased tokens of `text`, in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Word frequencies for one text, ranked by count descending then word ascending.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BagOfWords {
    terms: Vec<TermCount>,
}

impl BagOfWords {
    /// Count the non-stopword tokens of `text`, keeping the `max_features` most frequent.
    pub fn from_text(text: &str, stopwords: &[String], max_features: usize) -> Self {
        let stop: HashSet<&str> = stopwords.iter().map(String::as_str).collect();

        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in tokenize(text) {
            if stop.contains(token.as_str()) {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
        let distinct = counts.len();

        let terms = counts
            .into_iter()
            .map(|(word, count)| TermCount { word, count })
            .sorted_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)))
            .take(max_features)
            .collect::<Vec<_>>();

        debug!(distinct, kept = terms.len(), max_features, "Built bag of words");
        Self { terms }
    }

    /// All kept terms, most frequent first.
    pub fn ranked(&self) -> &[TermCount] {
        &self.terms
    }

    /// The `n` most frequent terms (fewer if the bag is smaller).
    pub fn top(&self, n: usize) -> &[TermCount] {
        &self.terms[..n.min(self.terms.len())]
    }

    #[cfg(test)]
    pub fn get(&self, word: &str) -> Option<usize> {
        self.terms.iter().find(|t| t.word == word).map(|t| t.count)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
