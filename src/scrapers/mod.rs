//! Fetching article pages and extracting their content.
//!
//! Fetching is a single HTTP GET per run with no retries. A response only
//! counts as a page when the status is 2xx; anything else is an error the
//! caller reports before touching the dataset.
//!
//! # Extractors
//!
//! | Site | Module | Body container |
//! |------|--------|----------------|
//! | G1 (Globo) | [`g1`] | `div.mc-article-body`, falling back to every `<p>` |

pub mod g1;

use crate::config::AppConfig;
use crate::error::{Error, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{info, instrument};
use url::Url;

/// Build the HTTP client used for article fetches.
pub fn build_client(config: &AppConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

/// Check that `raw` is an absolute http(s) URL.
pub fn parse_article_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| Error::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme {other:?}"),
        }),
    }
}

/// GET `url` and return the response body as text.
#[instrument(level = "info", skip(client))]
pub async fn fetch_html(client: &Client, url: &str) -> Result<String> {
    let parsed = parse_article_url(url)?;
    let response = client.get(parsed).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await?;
    info!(bytes = body.len(), %status, "Fetched article page");
    Ok(body)
}
