//! Runtime configuration for fetching, persistence, and analysis.
//!
//! Every field has a default, so a YAML file only needs the keys it changes:
//!
//! ```yaml
//! max_features: 30
//! top_n_chart: 5
//! dataset_path: data/articles.csv
//! stopwords: [o, a, de, que]
//! ```

use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Portuguese stopwords excluded from the bag-of-words.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "à", "ao", "aos", "as", "àquela", "àquelas", "àquele", "àqueles", "àquilo", "com",
    "como", "da", "das", "de", "dela", "delas", "dele", "deles", "depois", "do", "dos", "e",
    "é", "ela", "elas", "ele", "eles", "em", "entre", "era", "eram", "essa", "essas", "esse",
    "esses", "esta", "está", "estão", "estas", "estava", "estavam", "este", "estes", "eu",
    "foi", "foram", "há", "isso", "isto", "já", "lhe", "lhes", "mais", "mas", "me", "mesmo",
    "meu", "meus", "minha", "minhas", "na", "nas", "não", "nem", "no", "nos", "nós", "nossa",
    "nossas", "nosso", "nossos", "num", "numa", "o", "os", "ou", "para", "pela", "pelas",
    "pelo", "pelos", "por", "qual", "quando", "que", "quem", "se", "sem", "ser", "seu", "seus",
    "só", "sua", "suas", "também", "te", "tem", "tendo", "tenho", "ter", "teu", "teus", "teve",
    "tinha", "tinham", "tive", "tu", "tua", "tuas", "um", "uma", "você", "vocês",
];

pub const DEFAULT_DATASET_PATH: &str = "src/data/news-dataset.csv";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Terms never counted. Compared after lowercasing.
    pub stopwords: Vec<String>,
    /// Cap on the number of distinct terms kept in the bag-of-words.
    pub max_features: usize,
    /// How many of the most frequent terms go into the chart.
    pub top_n_chart: usize,
    pub dataset_path: PathBuf,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
            max_features: 20,
            top_n_chart: 10,
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            timeout_secs: 30,
            user_agent: concat!("news_bow/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a YAML document, filling unspecified keys with defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let mut config: AppConfig = serde_yaml::from_str(yaml)?;
        config.normalize();
        Ok(config)
    }

    /// Load from `path`, or return the defaults when no path is given.
    #[instrument(level = "debug")]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let yaml = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&yaml)?;
        info!(
            path = %path.display(),
            stopwords = config.stopwords.len(),
            max_features = config.max_features,
            top_n_chart = config.top_n_chart,
            "Loaded configuration"
        );
        Ok(config)
    }

    fn normalize(&mut self) {
        for word in &mut self.stopwords {
            *word = word.trim().to_lowercase();
        }
        self.stopwords.retain(|w| !w.is_empty());
    }
}
