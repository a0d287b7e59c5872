//! reqwest-backed catalog client

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use cloudcmp_core::prelude::*;
use cloudcmp_core::{Category, FilterCriteria, Service};

use crate::base_url::{encode_segment, BaseUrl};
use crate::source::CatalogSource;
use crate::wire::{query_pairs, CatalogPage, CategoriesBody, Comparison, HealthStatus};

/// Request timeout used when configuration does not override it
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the catalog backend
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: BaseUrl,
}

impl CatalogClient {
    pub fn new(base_url: BaseUrl, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        info!("Catalog client targeting {} (timeout {:?})", base_url, timeout);
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    async fn send(&self, path: &str, query: &[(&'static str, String)]) -> Result<Response> {
        let url = self.base_url.endpoint(path);
        debug!("GET {} {:?}", url, query);

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        request.send().await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            Error::unavailable(e.to_string())
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T> {
        let response = self.send(path, query).await?;
        decode(path, response).await
    }
}

/// Map a non-success status to `ServiceUnavailable`, otherwise decode the body
async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T> {
    let status = response.status();
    debug!("{} -> {}", path, status);

    if !status.is_success() {
        return Err(Error::unavailable(format!("{path} returned {status}")));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| Error::unavailable(format!("{path} returned an undecodable body: {e}")))
}

impl CatalogSource for CatalogClient {
    async fn list_services(&self, criteria: &FilterCriteria) -> Result<CatalogPage> {
        self.get_json("/api/services", &query_pairs(criteria)).await
    }

    async fn get_service(&self, id: &str) -> Result<Service> {
        let path = format!("/api/services/{}", encode_segment(id));
        let response = self.send(&path, &[]).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::not_found(id));
        }
        decode(&path, response).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let body: CategoriesBody = self.get_json("/api/categories", &[]).await?;
        Ok(body.categories)
    }

    async fn services_by_category(&self, category: Category) -> Result<Vec<Service>> {
        let path = format!(
            "/api/services/category/{}",
            encode_segment(category.as_str())
        );
        self.get_json(&path, &[]).await
    }

    async fn compare(&self, ids: &[String]) -> Result<Comparison> {
        self.get_json("/api/compare", &[("service_ids", ids.join(","))])
            .await
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.get_json("/health", &[]).await
    }
}
