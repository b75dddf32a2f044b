/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/1/26
******************************************************************************/

//! # AnimalSpotter Client
//!
//! Async client library for the AnimalSpotter animal-catalog REST API.
//!
//! The crate exposes a single [`client::ApiClient`] that performs user
//! registration and login, lists the catalog's animal names, fetches
//! per-animal detail records, and downloads animal photos. Login stores a
//! bearer token inside the client; the authenticated operations read it and
//! fail with [`error::NetworkError::NoAuth`] when it is absent, without
//! touching the network.
//!
//! Every operation performs exactly one round trip and reports failures
//! through a typed error channel; nothing is retried or swallowed.
//!
//! # Example
//! ```ignore
//! use animal_spotter_client::prelude::*;
//!
//! let client = ApiClient::new(Config::new())?;
//! let credentials = Credentials::new("spotter", "hunter2");
//!
//! client.authenticate(&credentials).await?;
//! let names = client.list_animal_names().await?;
//! let detail = client.fetch_animal_detail(&names[0]).await?;
//! ```

/// Client for the AnimalSpotter REST API
pub mod client;
/// Application configuration module
pub mod config;
/// Global constants
pub mod constants;
/// Error types for the client
pub mod error;
/// Request and response models
pub mod model;
/// Convenience re-exports of the most commonly used types
pub mod prelude;
/// Utility modules (environment helpers, logging)
pub mod utils;

/// Current version of the crate as defined in Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the current version of the crate
pub fn version() -> &'static str {
    VERSION
}
