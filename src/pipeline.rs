//! One fetch → extract → persist → analyze cycle.
//!
//! Nothing is written unless the page was fetched successfully, and a blank
//! URL stops the run before any network or file access.

use crate::analysis::BagOfWords;
use crate::config::AppConfig;
use crate::error::Result;
use crate::models::Report;
use crate::outputs::dataset;
use crate::scrapers::{self, g1};
use crate::utils::truncate_for_log;
use reqwest::Client;
use tracing::{debug, info, instrument};

#[derive(Debug)]
pub enum Outcome {
    /// The URL was empty or whitespace; nothing was fetched or written.
    MissingUrl,
    /// The article was extracted and appended to the dataset.
    Saved(Report),
}

#[instrument(level = "info", skip(config, client))]
pub async fn run(url: &str, config: &AppConfig, client: &Client) -> Result<Outcome> {
    let url = url.trim();
    if url.is_empty() {
        info!("No URL given; skipping run");
        return Ok(Outcome::MissingUrl);
    }

    let html = scrapers::fetch_html(client, url).await?;
    let record = g1::extract_article(&html, url);
    debug!(
        title = %record.title,
        preview = %truncate_for_log(&record.fulltext, 120),
        "Extracted record"
    );

    let dataset_rows = dataset::append_record(&config.dataset_path, &record)?;

    let bag_of_words =
        BagOfWords::from_text(&record.fulltext, &config.stopwords, config.max_features);
    let top_terms = bag_of_words.top(config.top_n_chart).to_vec();
    info!(
        terms = bag_of_words.len(),
        charted = top_terms.len(),
        dataset_rows,
        "Run complete"
    );

    Ok(Outcome::Saved(Report {
        record,
        dataset_path: config.dataset_path.clone(),
        dataset_rows,
        bag_of_words,
        top_terms,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::scrapers::build_client;
    use std::net::SocketAddr;
    use tempfile::TempDir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve `body` with `status` to every connection on a local port.
    async fn serve(status: &'static str, body: &'static str) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        addr
    }

    fn config_in(tmp: &TempDir) -> AppConfig {
        AppConfig {
            dataset_path: tmp.path().join("data").join("news-dataset.csv"),
            timeout_secs: 5,
            ..AppConfig::default()
        }
    }

    const ARTICLE: &str = r#"<html><body><h1>Title</h1><div class="mc-article-body"><p>Texto de teste texto</p></div></body></html>"#;

    #[tokio::test]
    async fn test_end_to_end_saves_and_counts() {
        let addr = serve("200 OK", ARTICLE).await;
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp);
        let client = build_client(&config).unwrap();
        let url = format!("http://{addr}/noticia.ghtml");

        let outcome = run(&url, &config, &client).await.unwrap();
        let Outcome::Saved(report) = outcome else {
            panic!("expected a saved report");
        };

        assert_eq!(report.record.title, "Title");
        assert_eq!(report.record.fulltext, "Texto de teste texto");
        assert_eq!(report.record.link, url);
        assert_eq!(report.bag_of_words.get("texto"), Some(2));
        assert_eq!(report.bag_of_words.get("de"), None);
        assert_eq!(report.top_terms[0].word, "texto");
        assert_eq!(report.dataset_rows, 1);

        let rows = dataset::read_records(&config.dataset_path).unwrap();
        assert_eq!(rows, vec![report.record.clone()]);
    }

    #[tokio::test]
    async fn test_second_run_appends_one_row() {
        let addr = serve("200 OK", ARTICLE).await;
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp);
        let client = build_client(&config).unwrap();
        let url = format!("http://{addr}/");

        run(&url, &config, &client).await.unwrap();
        let before = dataset::read_records(&config.dataset_path).unwrap();
        run(&url, &config, &client).await.unwrap();
        let after = dataset::read_records(&config.dataset_path).unwrap();

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after[..before.len()], before[..]);
    }

    #[tokio::test]
    async fn test_page_without_headline_is_still_saved() {
        let addr = serve("200 OK", "<p>Somente um parágrafo</p>").await;
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp);
        let client = build_client(&config).unwrap();

        let outcome = run(&format!("http://{addr}/"), &config, &client).await.unwrap();
        let Outcome::Saved(report) = outcome else {
            panic!("expected a saved report");
        };
        assert_eq!(report.record.title, "");
        assert_eq!(report.record.fulltext, "Somente um parágrafo");
        assert_eq!(dataset::read_records(&config.dataset_path).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_url_touches_nothing() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp);
        let client = build_client(&config).unwrap();

        let outcome = run("   ", &config, &client).await.unwrap();
        assert!(matches!(outcome, Outcome::MissingUrl));
        assert!(!config.dataset_path.exists());
    }

    #[tokio::test]
    async fn test_connection_refused_writes_nothing() {
        // Bind then drop to get a port nobody listens on.
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp);
        let client = build_client(&config).unwrap();

        let err = run(&format!("http://{addr}/"), &config, &client)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Http(_)));
        assert!(err.is_network());
        assert!(!config.dataset_path.exists());
    }

    #[tokio::test]
    async fn test_error_status_writes_nothing() {
        let addr = serve("404 Not Found", "<h1>Não encontrada</h1>").await;
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp);
        let client = build_client(&config).unwrap();

        let err = run(&format!("http://{addr}/missing"), &config, &client)
            .await
            .unwrap_err();
        match err {
            Error::Status { status, .. } => assert_eq!(status.as_u16(), 404),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!config.dataset_path.exists());
    }

    #[tokio::test]
    async fn test_invalid_url_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp);
        let client = build_client(&config).unwrap();

        let err = run("not a url", &config, &client).await.unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
        assert!(!config.dataset_path.exists());
    }

    #[tokio::test]
    async fn test_chart_respects_top_n() {
        let addr = serve(
            "200 OK",
            "<p>alfa alfa alfa beta beta gama delta</p>",
        )
        .await;
        let tmp = TempDir::new().unwrap();
        let config = AppConfig {
            top_n_chart: 2,
            ..config_in(&tmp)
        };
        let client = build_client(&config).unwrap();

        let Outcome::Saved(report) = run(&format!("http://{addr}/"), &config, &client)
            .await
            .unwrap()
        else {
            panic!("expected a saved report");
        };
        assert_eq!(report.bag_of_words.len(), 4);
        let charted: Vec<&str> = report.top_terms.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(charted, vec!["alfa", "beta"]);
    }
}
