/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/1/26
******************************************************************************/

//! # AnimalSpotter Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types from the library.
//!
//! ## Usage
//!
//! ```rust
//! use animal_spotter_client::prelude::*;
//!
//! let config = Config::new();
//! let credentials = Credentials::new("spotter", "hunter2");
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the AnimalSpotter API client
pub use crate::config::{Config, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error channel for the account operations
pub use crate::error::AppError;

/// Error taxonomy for the catalog fetches and the image download
pub use crate::error::NetworkError;

// ============================================================================
// CLIENT
// ============================================================================

/// The AnimalSpotter API client
pub use crate::client::ApiClient;

// ============================================================================
// MODELS
// ============================================================================

/// Account credentials and bearer token
pub use crate::model::auth::{Bearer, Credentials};

/// Animal catalog record
pub use crate::model::animal::AnimalDetail;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};

/// Re-export the decoded image type returned by `ApiClient::fetch_image`
pub use image::DynamicImage;
