//! Document sources.

use crate::FetchError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Something that can read a named static document.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Read the raw bytes of a document.
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, FetchError>;

    /// Where `name` would be read from, for logs and errors.
    fn locate(&self, name: &str) -> String;
}

/// Documents in a local directory.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DocumentSource for FsSource {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, FetchError> {
        let path = self.root.join(name);
        tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FetchError::NotFound(path.display().to_string()),
            _ => FetchError::RequestError(format!("{}: {}", path.display(), e)),
        })
    }

    fn locate(&self, name: &str) -> String {
        self.root.join(name).display().to_string()
    }
}

/// Documents served under a base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: reqwest::Url,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        // A trailing slash makes `join` append rather than replace the last segment
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = reqwest::Url::parse(&normalized)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        Ok(Self {
            base_url,
            client: reqwest::Client::new(),
        })
    }

    fn url(&self, name: &str) -> Result<reqwest::Url, FetchError> {
        self.base_url
            .join(name)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", name, e)))
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.url(name)?;
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpError {
                status: status.as_u16(),
                location: url.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn locate(&self, name: &str) -> String {
        self.url(name)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| format!("{}{}", self.base_url, name))
    }
}

/// In-memory documents, with optional injected failures.
#[derive(Debug, Default)]
pub struct MemorySource {
    documents: HashMap<String, Vec<u8>>,
    failing: HashMap<String, u16>,
    fetches: Mutex<HashMap<String, usize>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` under `name`.
    pub fn with_document(mut self, name: &str, body: impl Into<Vec<u8>>) -> Self {
        self.documents.insert(name.to_string(), body.into());
        self
    }

    /// Answer `name` with an HTTP error status.
    pub fn with_failure(mut self, name: &str, status: u16) -> Self {
        self.failing.insert(name.to_string(), status);
        self
    }

    /// How many times `name` has been fetched.
    pub fn fetch_count(&self, name: &str) -> usize {
        self.fetches
            .lock()
            .map(|f| f.get(name).copied().unwrap_or(0))
            .unwrap_or(0)
    }
}

#[async_trait]
impl DocumentSource for MemorySource {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, FetchError> {
        if let Ok(mut fetches) = self.fetches.lock() {
            *fetches.entry(name.to_string()).or_insert(0) += 1;
        }

        if let Some(status) = self.failing.get(name) {
            return Err(FetchError::HttpError {
                status: *status,
                location: self.locate(name),
            });
        }

        self.documents
            .get(name)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(self.locate(name)))
    }

    fn locate(&self, name: &str) -> String {
        format!("memory:{}", name)
    }
}

// Lets tests keep a handle on a source after giving it to a client.
#[async_trait]
impl<S: DocumentSource + ?Sized> DocumentSource for std::sync::Arc<S> {
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(name).await
    }

    fn locate(&self, name: &str) -> String {
        (**self).locate(name)
    }
}
