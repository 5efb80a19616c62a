//! HTTP adapter for the listing API
//!
//! One [`SwapiClient`] serves every resource. [`ResourceFetcher`] binds it to
//! a single list endpoint so it can be handed to a
//! [`ListController`](crate::controller::ListController) as a
//! [`ListFetcher`].
//!
//! ```rust,ignore
//! let client = SwapiClient::new(&ClientConfig::default())?;
//! let people = client.people();
//! let page = people.fetch_list(&FetchParams::default()).await?;
//! println!("{} of {}", page.results.len(), page.count);
//! ```

use crate::config::ClientConfig;
use crate::core::{
    FetchError, FetchParams, Insight, InsightFetcher, ListFetcher, ListPage, ListResource, Person,
    Planet, Resource,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;

/// Path of the insight endpoint under the base URL
const INSIGHT_PATH: &str = "simulate-ai-insight";

/// HTTP client bound to one API base URL
#[derive(Debug, Clone)]
pub struct SwapiClient {
    http: reqwest::Client,
    base_url: String,
}

impl SwapiClient {
    /// Build a client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::with_http(http, &config.base_url))
    }

    /// Build a client around an existing `reqwest::Client`
    pub fn with_http(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a path under the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET a JSON document
    ///
    /// Non-2xx responses become [`FetchError::Http`] carrying the status and
    /// the response body text.
    async fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<R, FetchError> {
        let url = self.endpoint(path);
        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(url = %url, status = status.as_u16(), "Request rejected");
            return Err(FetchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// List fetcher for the records of type `T`
    pub fn resource<T: ListResource>(&self) -> ResourceFetcher<T> {
        ResourceFetcher {
            client: self.clone(),
            resource: T::resource(),
            _record: PhantomData,
        }
    }

    pub fn people(&self) -> ResourceFetcher<Person> {
        self.resource()
    }

    pub fn planets(&self) -> ResourceFetcher<Planet> {
        self.resource()
    }
}

#[async_trait]
impl InsightFetcher for SwapiClient {
    async fn fetch_insight(&self, name: &str) -> Result<Insight, FetchError> {
        tracing::debug!(name = %name, "Fetching insight");
        self.get_json(INSIGHT_PATH, &[("name", name.to_string())])
            .await
    }
}

/// A [`SwapiClient`] bound to one list endpoint
pub struct ResourceFetcher<T> {
    client: SwapiClient,
    resource: Resource,
    _record: PhantomData<fn() -> T>,
}

impl<T> ResourceFetcher<T> {
    pub fn resource(&self) -> Resource {
        self.resource
    }
}

impl<T> Clone for ResourceFetcher<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            resource: self.resource,
            _record: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ResourceFetcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceFetcher")
            .field("base_url", &self.client.base_url)
            .field("resource", &self.resource)
            .finish()
    }
}

#[async_trait]
impl<T: ListResource> ListFetcher<T> for ResourceFetcher<T> {
    async fn fetch_list(&self, params: &FetchParams) -> Result<ListPage<T>, FetchError> {
        tracing::debug!(
            resource = %self.resource,
            page = params.page,
            search = %params.search,
            sort_by = %params.sort_by,
            order = %params.order,
            "Fetching listing page"
        );
        self.client
            .get_json(self.resource.path(), &params.query_pairs())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_paths() {
        let client = SwapiClient::with_http(reqwest::Client::new(), "http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.endpoint("people"), "http://localhost:8000/api/people");
        assert_eq!(
            client.endpoint("/simulate-ai-insight"),
            "http://localhost:8000/api/simulate-ai-insight"
        );
    }

    #[test]
    fn test_resource_fetchers_bind_paths() {
        let client = SwapiClient::with_http(reqwest::Client::new(), "http://localhost:8000/api");
        assert_eq!(client.people().resource(), Resource::People);
        assert_eq!(client.planets().resource(), Resource::Planets);
    }
}
