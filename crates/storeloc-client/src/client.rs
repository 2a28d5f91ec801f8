//! HTTP client for the store locator REST API.
//!
//! Wraps `reqwest` with envelope deserialization and typed errors. The
//! cookie store is enabled so the server-minted session cookie rides along
//! on every later request; that cookie is what keys the caller's
//! current-store selection.

use std::time::Duration;

use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use storeloc_core::{Store, StoreId};

use crate::pager::Pager;

/// Errors returned by the store locator API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned an error envelope.
    #[error("API error ({code}): {message}")]
    Api { code: String, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// The selection in effect after a search result lands.
#[derive(Debug)]
pub struct EffectiveSelection {
    pub store: Option<Store>,
    /// True when the first result was auto-assigned by this call.
    pub assigned: bool,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// Client for the store locator REST API.
///
/// Use [`StoreApiClient::new`] against a deployed service or point
/// `base_url` at a mock server in tests.
pub struct StoreApiClient {
    client: Client,
    base_url: Url,
}

impl StoreApiClient {
    /// Creates a client for the API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("storeloc/0.1")
            .cookie_store(true)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join appends instead of replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Ranked stores around a coordinate pair.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Api`] if the API rejects the query.
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::Deserialize`] if the response shape is unexpected.
    pub async fn stores_by_geo(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Store>, ClientError> {
        self.request(Method::GET, &format!("api/v1/store/geo/{latitude}/{longitude}"))
            .await
    }

    /// Ranked stores for a zipcode.
    ///
    /// The server validates the zipcode; a malformed one surfaces as
    /// [`ClientError::Api`] with code `validation_error`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::stores_by_geo`].
    pub async fn stores_by_zip(&self, zipcode: &str) -> Result<Vec<Store>, ClientError> {
        self.request(Method::GET, &format!("api/v1/store/zipcode/{zipcode}"))
            .await
    }

    /// The store currently selected for this client's session, if any.
    ///
    /// # Errors
    ///
    /// Same as [`Self::stores_by_geo`].
    pub async fn current_store(&self) -> Result<Option<Store>, ClientError> {
        self.request(Method::GET, "api/v1/store").await
    }

    /// A single store by id.
    ///
    /// # Errors
    ///
    /// [`ClientError::Api`] with code `not_found` for an unknown id.
    pub async fn store_by_id(&self, id: StoreId) -> Result<Store, ClientError> {
        self.request(Method::GET, &format!("api/v1/store/{id}")).await
    }

    /// Selects `id` as the current store for this client's session.
    ///
    /// Returns the selected store as echoed by the server.
    ///
    /// # Errors
    ///
    /// [`ClientError::Api`] with code `not_found` for an unknown id.
    pub async fn set_current(&self, id: StoreId) -> Result<Store, ClientError> {
        self.request(Method::POST, &format!("api/v1/store/{id}")).await
    }

    /// Ensures the caller session has a current store once search results
    /// land: an existing selection is kept as-is; otherwise the first-ranked
    /// result is selected and persisted. With no results and no selection the
    /// outcome is empty.
    ///
    /// # Errors
    ///
    /// Same as [`Self::set_current`].
    pub async fn ensure_default_selection(
        &self,
        pager: &Pager,
    ) -> Result<EffectiveSelection, ClientError> {
        if let Some(store) = self.current_store().await? {
            return Ok(EffectiveSelection {
                store: Some(store),
                assigned: false,
            });
        }

        match pager.first_store() {
            Some(first) => {
                let store = self.set_current(first.id).await?;
                Ok(EffectiveSelection {
                    store: Some(store),
                    assigned: true,
                })
            }
            None => Ok(EffectiveSelection {
                store: None,
                assigned: false,
            }),
        }
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<T, ClientError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{path}: {e}")))?;

        tracing::debug!(%url, %method, "store API request");
        let response = self.client.request(method, url).send().await?;
        let status = response.status();
        let body: serde_json::Value = response.json().await?;

        if !status.is_success() {
            if let Ok(envelope) = serde_json::from_value::<ErrorEnvelope>(body.clone()) {
                return Err(ClientError::Api {
                    code: envelope.error.code,
                    message: envelope.error.message,
                });
            }
            return Err(ClientError::Api {
                code: status.as_u16().to_string(),
                message: "unexpected error response".to_string(),
            });
        }

        let envelope: Envelope<T> =
            serde_json::from_value(body).map_err(|e| ClientError::Deserialize {
                context: path.to_string(),
                source: e,
            })?;

        Ok(envelope.data)
    }
}
