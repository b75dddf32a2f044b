/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/1/26
******************************************************************************/

//! Client for the AnimalSpotter API
//!
//! This module provides the [`ApiClient`], which handles:
//! - User registration and login
//! - Bearer-token session state
//! - Fetching animal names, detail records and photos
//!
//! Each operation performs exactly one network round trip; nothing is
//! retried. The bearer token is the only shared mutable state and lives
//! behind an `RwLock` inside the client, so a failed login never clobbers a
//! previously stored token and concurrent reads see a consistent value.
//!
//! # Example
//! ```ignore
//! use animal_spotter_client::client::ApiClient;
//! use animal_spotter_client::config::Config;
//! use animal_spotter_client::model::auth::Credentials;
//!
//! let client = ApiClient::new(Config::new())?;
//! client.authenticate(&Credentials::new("spotter", "hunter2")).await?;
//! let names = client.list_animal_names().await?;
//! ```

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::{AppError, NetworkError};
use crate::model::animal::AnimalDetail;
use crate::model::auth::{Bearer, Credentials};
use image::DynamicImage;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Client for the AnimalSpotter animal-catalog API
///
/// Holds the service base URL, the HTTP transport and the session's bearer
/// token. The token slot starts empty, is filled by [`ApiClient::authenticate`]
/// and is overwritten by each subsequent successful login. There is no
/// logout; the slot lives as long as the client.
pub struct ApiClient {
    config: Arc<Config>,
    http_client: HttpClient,
    bearer: Arc<RwLock<Option<Bearer>>>,
}

impl ApiClient {
    /// Creates a new client from the given configuration
    ///
    /// No network traffic happens here; authentication is explicit via
    /// [`ApiClient::authenticate`].
    ///
    /// # Arguments
    /// * `config` - Configuration containing the base URL and timeout
    ///
    /// # Returns
    /// * `Ok(ApiClient)` - Client ready to use
    /// * `Err(AppError)` - If the HTTP transport cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            config,
            http_client,
            bearer: Arc::new(RwLock::new(None)),
        })
    }

    /// Registers a new account
    ///
    /// POSTs the credentials as JSON to `{base}/users/signup`. A body that
    /// fails to serialize is reported without sending anything.
    ///
    /// # Arguments
    /// * `credentials` - Username and password for the new account
    ///
    /// # Returns
    /// * `Ok(())` - The server accepted the registration
    /// * `Err(AppError)` - Serialization, transport or HTTP-status failure
    pub async fn register(&self, credentials: &Credentials) -> Result<(), AppError> {
        let url = format!("{}/users/signup", self.config.rest_api.base_url);
        let response = self.post_credentials(&url, credentials).await?;
        self.check_account_status(response).await?;
        Ok(())
    }

    /// Logs in and stores the bearer token for subsequent requests
    ///
    /// Same request shape as [`ApiClient::register`] but targets
    /// `{base}/users/login` and decodes a [`Bearer`] from the response body.
    /// A previously stored token is replaced only after the new one decodes
    /// successfully.
    ///
    /// # Arguments
    /// * `credentials` - Username and password of an existing account
    ///
    /// # Returns
    /// * `Ok(())` - Token decoded and stored
    /// * `Err(AppError)` - Serialization, transport, HTTP-status or decode failure
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<(), AppError> {
        let url = format!("{}/users/login", self.config.rest_api.base_url);
        let response = self.post_credentials(&url, credentials).await?;
        let response = self.check_account_status(response).await?;

        let bytes = response.bytes().await?;
        let bearer: Bearer = serde_json::from_slice(&bytes).map_err(|e| {
            error!("Error decoding bearer token: {}", e);
            AppError::Deserialization(e.to_string())
        })?;

        let mut slot = self.bearer.write().await;
        *slot = Some(bearer);

        info!("✓ Login successful, bearer token stored");
        Ok(())
    }

    /// Fetches the names of all animals in the catalog
    ///
    /// Requires a stored bearer token; without one the call fails with
    /// [`NetworkError::NoAuth`] and no request is issued. Names are returned
    /// in server order, not re-sorted.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Animal names as received
    /// * `Err(NetworkError)` - `BadAuth` on 401, `BadData` on transport
    ///   failure, `NoDecode` when the body is not a JSON array of strings
    pub async fn list_animal_names(&self) -> Result<Vec<String>, NetworkError> {
        let auth_header = self.bearer_header().await?;
        let url = format!("{}/animals/all", self.config.rest_api.base_url);

        debug!("GET {}", url);
        let response = self
            .http_client
            .get(&url)
            .header(AUTHORIZATION, auth_header)
            .send()
            .await
            .map_err(|e| {
                error!("Transport failure fetching animal names: {}", e);
                NetworkError::BadData
            })?;

        let status = response.status();
        debug!("Response status: {}", status);
        if status == StatusCode::UNAUTHORIZED {
            warn!("Server rejected bearer token");
            return Err(NetworkError::BadAuth);
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice::<Vec<String>>(&bytes).map_err(|e| {
            error!("Error decoding animal names: {}", e);
            NetworkError::NoDecode
        })
    }

    /// Fetches the detail record of a single animal
    ///
    /// Requires a stored bearer token; without one the call fails with
    /// [`NetworkError::NoAuth`] and no request is issued. The name is
    /// percent-encoded into the request path.
    ///
    /// # Arguments
    /// * `name` - Animal name as returned by [`ApiClient::list_animal_names`]
    ///
    /// # Returns
    /// * `Ok(AnimalDetail)` - The decoded record
    /// * `Err(NetworkError)` - `BadAuth` on 401, `BadData` on transport
    ///   failure or an empty body, `NoDecode` on schema mismatch
    pub async fn fetch_animal_detail(&self, name: &str) -> Result<AnimalDetail, NetworkError> {
        let auth_header = self.bearer_header().await?;
        let url = format!(
            "{}/animals/{}",
            self.config.rest_api.base_url,
            urlencoding::encode(name)
        );

        debug!("GET {}", url);
        let response = self
            .http_client
            .get(&url)
            .header(AUTHORIZATION, auth_header)
            .send()
            .await
            .map_err(|e| {
                error!("Transport failure fetching animal detail: {}", e);
                NetworkError::BadData
            })?;

        let status = response.status();
        debug!("Response status: {}", status);
        if status == StatusCode::UNAUTHORIZED {
            warn!("Server rejected bearer token");
            return Err(NetworkError::BadAuth);
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            error!("Empty body fetching detail for '{}'", name);
            return Err(NetworkError::BadData);
        }

        serde_json::from_slice::<AnimalDetail>(&bytes).map_err(|e| {
            error!("Error decoding animal detail: {}", e);
            NetworkError::NoDecode
        })
    }

    /// Downloads and decodes an animal photo
    ///
    /// No authentication required. The URL is fetched exactly as given, with
    /// no base-URL prefixing. A payload that is not a decodable image is a
    /// typed error, never a panic.
    ///
    /// # Arguments
    /// * `url` - Absolute URL of the image
    ///
    /// # Returns
    /// * `Ok(DynamicImage)` - The decoded bitmap
    /// * `Err(NetworkError)` - `OtherError` on transport failure, `BadData`
    ///   on an empty or undecodable payload
    pub async fn fetch_image(&self, url: &str) -> Result<DynamicImage, NetworkError> {
        debug!("GET {}", url);
        let response = self.http_client.get(url).send().await.map_err(|e| {
            error!("Transport failure fetching image: {}", e);
            NetworkError::OtherError
        })?;

        debug!("Response status: {}", response.status());
        let bytes = response.bytes().await.map_err(|e| {
            error!("Failed to read image body: {}", e);
            NetworkError::OtherError
        })?;

        if bytes.is_empty() {
            return Err(NetworkError::BadData);
        }

        image::load_from_memory(&bytes).map_err(|e| {
            error!("Error decoding image payload: {}", e);
            NetworkError::BadData
        })
    }

    /// Returns the currently stored bearer token, if any
    pub async fn bearer_token(&self) -> Option<String> {
        self.bearer.read().await.as_ref().map(|b| b.token.clone())
    }

    /// Builds the `Authorization` header value from the stored bearer token
    ///
    /// Fails with [`NetworkError::NoAuth`] when the slot is empty; callers
    /// check this before building any request, so an unauthenticated call
    /// never reaches the network.
    async fn bearer_header(&self) -> Result<String, NetworkError> {
        let slot = self.bearer.read().await;
        match slot.as_ref() {
            Some(bearer) => Ok(format!("Bearer {}", bearer.token)),
            None => {
                warn!("No bearer token stored, call not attempted");
                Err(NetworkError::NoAuth)
            }
        }
    }

    /// Gets a reference to the client configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Serializes the credentials and POSTs them as a JSON body
    ///
    /// Serialization happens up front so a failure is reported before any
    /// request is sent.
    async fn post_credentials(
        &self,
        url: &str,
        credentials: &Credentials,
    ) -> Result<reqwest::Response, AppError> {
        let body = serde_json::to_vec(credentials)
            .map_err(|e| AppError::SerializationError(e.to_string()))?;

        debug!("POST {}", url);
        let response = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        debug!("Response status: {}", response.status());
        Ok(response)
    }

    /// Maps non-2xx statuses of the account endpoints onto `AppError`
    async fn check_account_status(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, AppError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            let body_text = response.text().await.unwrap_or_default();
            error!("Unauthorized: {}", body_text);
            return Err(AppError::Unauthorized);
        }

        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body_text);
            return Err(AppError::Unexpected(status));
        }

        Ok(response)
    }
}

impl Default for ApiClient {
    /// Creates a client from the environment-derived [`Config`]
    ///
    /// # Panics
    /// Panics if the underlying HTTP transport cannot be built (for example
    /// when no TLS backend is available). Use [`ApiClient::new`] for
    /// fallible construction.
    fn default() -> Self {
        let config = Config::default();
        Self::new(config).expect("Failed to create HTTP client")
    }
}
