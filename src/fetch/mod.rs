pub mod messages;

use crate::catalog::SkipOption;
use messages::CatalogMessage;
use std::future::Future;
use std::sync::mpsc::Sender;
use thiserror::Error;

/// Failure to obtain the catalog
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("Malformed catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Http(e) => format!("Network error: {}", e),
            FetchError::Status { status } => format!("Server error ({})", status),
            FetchError::Decode(e) => format!("Unexpected catalog format: {}", e),
        }
    }
}

/// Anything that can produce the skip list.
pub trait CatalogSource {
    fn describe(&self) -> String;

    fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<SkipOption>, FetchError>> + Send;
}

/// Reads the catalog from the HTTP endpoint.
///
/// The client has no timeout and never retries.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    url: String,
}

impl CatalogClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CatalogSource for CatalogClient {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch_catalog(&self) -> Result<Vec<SkipOption>, FetchError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Fetch once, turning any failure into an empty catalog.
///
/// The error is logged and never reaches the caller.
pub async fn load_catalog<S: CatalogSource>(source: &S) -> Vec<SkipOption> {
    match source.fetch_catalog().await {
        Ok(options) => {
            tracing::info!(count = options.len(), source = %source.describe(), "catalog loaded");
            options
        }
        Err(e) => {
            tracing::error!(source = %source.describe(), "Error fetching data: {}", e);
            Vec::new()
        }
    }
}

/// Run [`load_catalog`] in the background and report to the UI thread.
///
/// If the UI has gone away by the time the response lands, the result is
/// dropped.
pub fn spawn_catalog_fetch<S>(source: S, tx: Sender<CatalogMessage>) -> tokio::task::JoinHandle<()>
where
    S: CatalogSource + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let _ = tx.send(CatalogMessage::Started {
            url: source.describe(),
        });
        let options = load_catalog(&source).await;
        if tx.send(CatalogMessage::Loaded(options)).is_err() {
            tracing::debug!("catalog arrived after the UI closed, discarding");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{SkipId, sample};
    use super::messages::CatalogChannels;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    struct FailingSource;

    impl CatalogSource for FailingSource {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        async fn fetch_catalog(&self) -> Result<Vec<SkipOption>, FetchError> {
            Err(FetchError::Status { status: 503 })
        }
    }

    struct FixedSource(Vec<SkipOption>);

    impl CatalogSource for FixedSource {
        fn describe(&self) -> String {
            "fixed".to_string()
        }

        async fn fetch_catalog(&self) -> Result<Vec<SkipOption>, FetchError> {
            Ok(self.0.clone())
        }
    }

    /// Serve a single canned HTTP response on a loopback port.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let mut request = Vec::new();
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{}/api/skips/by-location?postcode=NR32&area=Lowestoft", addr)
    }

    /// Loopback client that ignores any proxy settings in the environment.
    fn local_client(url: String) -> CatalogClient {
        CatalogClient {
            http: reqwest::Client::builder().no_proxy().build().unwrap(),
            url,
        }
    }

    #[tokio::test]
    async fn test_load_catalog_failure_is_empty() {
        let options = load_catalog(&FailingSource).await;
        assert!(options.is_empty());
    }

    #[tokio::test]
    async fn test_load_catalog_success() {
        let source = FixedSource(vec![sample(1, 4, 100.0), sample(2, 6, 200.0)]);
        let options = load_catalog(&source).await;
        assert_eq!(options.len(), 2);
    }

    #[tokio::test]
    async fn test_client_parses_valid_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            r#"[{"id":17933,"size":4,"hire_period_days":14,"price_before_vat":278,"vat":20,
                "postcode":"NR32","allowed_on_road":true,"allows_heavy_waste":true}]"#,
        )
        .await;
        let client = local_client(url);
        let options = client.fetch_catalog().await.unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].id, SkipId::Number(17933));
    }

    #[tokio::test]
    async fn test_client_malformed_body() {
        let url = serve_once("HTTP/1.1 200 OK", r#"{"error":"nope"}"#).await;
        let client = local_client(url);
        let err = client.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_client_server_error() {
        let url = serve_once("HTTP/1.1 500 Internal Server Error", "oops").await;
        let client = local_client(url);
        let err = client.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 500 }));
        assert!(err.user_message().contains("500"));
    }

    #[tokio::test]
    async fn test_client_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = local_client(format!("http://{}/skips", addr));
        assert!(matches!(
            client.fetch_catalog().await,
            Err(FetchError::Http(_))
        ));
    }

    #[tokio::test]
    async fn test_spawn_reports_started_then_loaded() {
        let CatalogChannels { tx, rx } = CatalogChannels::new();
        spawn_catalog_fetch(FailingSource, tx).await.unwrap();

        assert!(matches!(rx.recv(), Ok(CatalogMessage::Started { .. })));
        match rx.recv() {
            Ok(CatalogMessage::Loaded(options)) => assert!(options.is_empty()),
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_spawn_with_closed_receiver() {
        let CatalogChannels { tx, rx } = CatalogChannels::new();
        drop(rx);
        let source = FixedSource(vec![sample(1, 4, 100.0)]);
        assert!(spawn_catalog_fetch(source, tx).await.is_ok());
    }
}
