//! Error types shared across the fetch, persist, and configuration stages.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset error: {0}")]
    Dataset(#[from] csv::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl Error {
    /// Whether this error belongs to the fetch stage (bad URL, transport, or status).
    ///
    /// Fetch errors are reported to the user and end the run; everything else is
    /// a local failure that propagates out of `main`.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Error::InvalidUrl { .. } | Error::Http(_) | Error::Status { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_classification() {
        let invalid = Error::InvalidUrl {
            url: "nope".into(),
            reason: "relative URL without a base".into(),
        };
        assert!(invalid.is_network());

        let status = Error::Status {
            url: "http://example.com".into(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert!(status.is_network());
        assert!(status.to_string().contains("404"));

        let io = Error::Io(std::io::Error::other("disk full"));
        assert!(!io.is_network());
    }
}
