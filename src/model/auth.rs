/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/1/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Account credentials, serialized as the JSON body of signup/login requests
///
/// Constructed by the caller and never persisted by this crate.
pub struct Credentials {
    /// Username for the AnimalSpotter account
    pub username: String,
    /// Password for the AnimalSpotter account
    pub password: String,
}

impl Credentials {
    /// Creates a new credentials pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Bearer token returned by the login endpoint
///
/// The opaque token string is sent in the `Authorization` header of every
/// authenticated request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bearer {
    /// The opaque token value
    pub token: String,
}
