//! Catalog data providers: where the static product/portfolio JSON comes from.

use crate::domain::model::CatalogPayload;
use crate::infra::error::{FetchError, FetchResult};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

/// A source of the catalog. Implementations perform a single fetch per call
/// and never retry.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch(&self) -> FetchResult<CatalogPayload>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// GET of a static JSON resource.
pub struct HttpCatalogProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl CatalogProvider for HttpCatalogProvider {
    async fn fetch(&self) -> FetchResult<CatalogPayload> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: self.url.clone(),
            });
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the catalog JSON from disk.
pub struct FileCatalogProvider {
    path: PathBuf,
}

impl FileCatalogProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogProvider for FileCatalogProvider {
    async fn fetch(&self) -> FetchResult<CatalogPayload> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// An in-memory catalog, handed out as-is on every fetch.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogProvider {
    payload: CatalogPayload,
}

impl StaticCatalogProvider {
    pub fn new(payload: CatalogPayload) -> Self {
        Self { payload }
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalogProvider {
    async fn fetch(&self) -> FetchResult<CatalogPayload> {
        Ok(self.payload.clone())
    }

    fn describe(&self) -> String {
        "static catalog".to_string()
    }
}

/// Picks the provider for a `CATALOG_SOURCE` value.
pub fn provider_for_source(source: &str) -> Arc<dyn CatalogProvider> {
    if source.starts_with("http://") || source.starts_with("https://") {
        Arc::new(HttpCatalogProvider::new(source))
    } else {
        Arc::new(FileCatalogProvider::new(source))
    }
}
