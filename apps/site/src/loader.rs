//! Data Loader — fetches the resume document from the primary source and
//! falls back to the bundled static copy when the primary is unreachable or
//! returns something unparseable.
//!
//! Contract: `load()` resolves to a document or an explicit `LoadError`;
//! nothing escapes this boundary. Exactly one fallback attempt, no retries,
//! and the two fetches are strictly sequential.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::resume::ResumeDocument;

const ACCEPT_JSON: &str = "application/json";

/// Why a single source failed. Parse failures deliberately take the same
/// fallback path as transport failures — the caller cannot act differently
/// on them; the variants exist for logs.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("invalid JSON body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}

/// Terminal failure: both sources failed.
#[derive(Debug, Error)]
#[error("could not load resume data: primary failed ({primary}); fallback failed ({fallback})")]
pub struct LoadError {
    pub primary: SourceError,
    pub fallback: SourceError,
}

/// A place a resume document can be fetched from.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Human-readable name for logs.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<ResumeDocument, SourceError>;
}

/// HTTP source: GET with an `Accept: application/json` header.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            url: url.into(),
        }
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    fn describe(&self) -> String {
        format!("GET {}", self.url)
    }

    async fn fetch(&self) -> Result<ResumeDocument, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, ACCEPT_JSON)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }

        // Read the body as text first so malformed JSON surfaces as Parse,
        // not as a transport error.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Bundled static source: the JSON file shipped next to the binary.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn fetch(&self) -> Result<ResumeDocument, SourceError> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Two-stage loader: primary source, then one fallback attempt.
pub struct Loader {
    primary: Box<dyn DocumentSource>,
    fallback: Box<dyn DocumentSource>,
}

impl Loader {
    pub fn new(primary: Box<dyn DocumentSource>, fallback: Box<dyn DocumentSource>) -> Self {
        Self { primary, fallback }
    }

    /// Fetches the document. A primary failure of any kind (transport, bad
    /// status, unparseable body) triggers exactly one fallback fetch; the
    /// primary failure is invisible to callers when the fallback succeeds.
    pub async fn load(&self) -> Result<ResumeDocument, LoadError> {
        match self.primary.fetch().await {
            Ok(doc) => {
                debug!("loaded resume document from {}", self.primary.describe());
                Ok(doc)
            }
            Err(primary) => {
                warn!(
                    "primary source failed ({}): {primary}; trying fallback",
                    self.primary.describe()
                );
                match self.fallback.fetch().await {
                    Ok(doc) => {
                        info!("using fallback data from {}", self.fallback.describe());
                        Ok(doc)
                    }
                    Err(fallback) => Err(LoadError { primary, fallback }),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use std::io::Write;
    use std::net::SocketAddr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn sample_doc_json() -> String {
        serde_json::json!({
            "personal": { "fullName": "Ada Lovelace", "title": "Engineer" },
            "skills": [ { "name": "Rust", "level": 80 } ]
        })
        .to_string()
    }

    async fn spawn(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    /// Router serving `body` with `status` at /, counting hits.
    fn counting_router(status: StatusCode, body: String, hits: Arc<AtomicUsize>) -> Router {
        Router::new().route(
            "/",
            get(move || {
                let hits = hits.clone();
                let body = body.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    (status, body)
                }
            }),
        )
    }

    fn http_source(addr: SocketAddr) -> Box<dyn DocumentSource> {
        Box::new(HttpSource::new(
            format!("http://{addr}/"),
            Duration::from_secs(5),
        ))
    }

    #[tokio::test]
    async fn test_primary_success_skips_fallback() {
        let fallback_hits = Arc::new(AtomicUsize::new(0));
        let primary = spawn(counting_router(
            StatusCode::OK,
            sample_doc_json(),
            Arc::new(AtomicUsize::new(0)),
        ))
        .await;
        let fallback = spawn(counting_router(
            StatusCode::OK,
            sample_doc_json(),
            fallback_hits.clone(),
        ))
        .await;

        let loader = Loader::new(http_source(primary), http_source(fallback));
        let doc = loader.load().await.unwrap();

        assert_eq!(
            doc.personal.unwrap().full_name.as_deref(),
            Some("Ada Lovelace")
        );
        assert_eq!(fallback_hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_primary_500_falls_back_exactly_once() {
        let primary_hits = Arc::new(AtomicUsize::new(0));
        let fallback_hits = Arc::new(AtomicUsize::new(0));
        let primary = spawn(counting_router(
            StatusCode::INTERNAL_SERVER_ERROR,
            String::new(),
            primary_hits.clone(),
        ))
        .await;
        let fallback = spawn(counting_router(
            StatusCode::OK,
            sample_doc_json(),
            fallback_hits.clone(),
        ))
        .await;

        let loader = Loader::new(http_source(primary), http_source(fallback));
        let doc = loader.load().await.unwrap();

        // Primary failure is invisible to the caller.
        assert_eq!(doc.skills.unwrap().len(), 1);
        assert_eq!(primary_hits.load(Ordering::SeqCst), 1);
        assert_eq!(fallback_hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_malformed_primary_body_falls_back() {
        let primary = spawn(counting_router(
            StatusCode::OK,
            "not json at all".to_string(),
            Arc::new(AtomicUsize::new(0)),
        ))
        .await;
        let fallback = spawn(counting_router(
            StatusCode::OK,
            sample_doc_json(),
            Arc::new(AtomicUsize::new(0)),
        ))
        .await;

        let loader = Loader::new(http_source(primary), http_source(fallback));
        assert!(loader.load().await.is_ok());
    }

    #[tokio::test]
    async fn test_both_sources_failing_is_a_terminal_error() {
        let primary = spawn(counting_router(
            StatusCode::INTERNAL_SERVER_ERROR,
            String::new(),
            Arc::new(AtomicUsize::new(0)),
        ))
        .await;
        let fallback = spawn(counting_router(
            StatusCode::NOT_FOUND,
            String::new(),
            Arc::new(AtomicUsize::new(0)),
        ))
        .await;

        let loader = Loader::new(http_source(primary), http_source(fallback));
        let err = loader.load().await.unwrap_err();

        assert!(matches!(
            err.primary,
            SourceError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
        ));
        assert!(matches!(
            err.fallback,
            SourceError::Status(reqwest::StatusCode::NOT_FOUND)
        ));
    }

    #[tokio::test]
    async fn test_http_source_sends_accept_json_header() {
        // Server answers 500 unless the Accept header is present, so a
        // successful load proves the header was sent.
        let router = Router::new().route(
            "/",
            get(move |headers: HeaderMap| async move {
                if headers.get(header::ACCEPT).and_then(|v| v.to_str().ok())
                    == Some("application/json")
                {
                    (StatusCode::OK, sample_doc_json())
                } else {
                    (StatusCode::INTERNAL_SERVER_ERROR, String::new())
                }
            }),
        );
        let addr = spawn(router).await;

        let source = HttpSource::new(format!("http://{addr}/"), Duration::from_secs(5));
        assert!(source.fetch().await.is_ok());
    }

    #[tokio::test]
    async fn test_file_source_reads_bundled_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", sample_doc_json()).unwrap();

        let source = FileSource::new(file.path());
        let doc = source.fetch().await.unwrap();
        assert_eq!(doc.skills.unwrap()[0].name.as_deref(), Some("Rust"));
    }

    #[tokio::test]
    async fn test_file_source_missing_file_is_io_error() {
        let source = FileSource::new("/definitely/not/here.json");
        assert!(matches!(
            source.fetch().await.unwrap_err(),
            SourceError::Io(_)
        ));
    }

    #[tokio::test]
    async fn test_file_source_bad_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ nope").unwrap();

        let source = FileSource::new(file.path());
        assert!(matches!(
            source.fetch().await.unwrap_err(),
            SourceError::Parse(_)
        ));
    }
}
