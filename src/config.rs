/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/1/26
******************************************************************************/

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_REST_TIMEOUT};
use crate::model::auth::Credentials;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the AnimalSpotter API client
pub struct Config {
    /// Default account credentials, loaded from the environment
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the AnimalSpotter REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from environment variables
    ///
    /// Reads `ANIMAL_SPOTTER_USERNAME`, `ANIMAL_SPOTTER_PASSWORD`,
    /// `ANIMAL_SPOTTER_BASE_URL` and `ANIMAL_SPOTTER_REST_TIMEOUT`,
    /// falling back to defaults when a variable is missing.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username =
            get_env_or_default("ANIMAL_SPOTTER_USERNAME", String::from("default_username"));
        let password =
            get_env_or_default("ANIMAL_SPOTTER_PASSWORD", String::from("default_password"));

        // Check if we are using default values
        if username == "default_username" {
            error!("ANIMAL_SPOTTER_USERNAME not found in environment variables or .env file");
        }
        if password == "default_password" {
            error!("ANIMAL_SPOTTER_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { username, password },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "ANIMAL_SPOTTER_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                ),
                timeout: get_env_or_default("ANIMAL_SPOTTER_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
        }
    }

    /// Creates a configuration pointing at the given base URL with default
    /// credentials and timeout, bypassing the environment
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                username: String::new(),
                password: String::new(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_REST_TIMEOUT,
            },
        }
    }
}
