/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/1/26
******************************************************************************/

//! Error types for the AnimalSpotter client
//!
//! Two channels exist. [`AppError`] is the generic channel used by the
//! account operations (`register`/`authenticate`), where any serialization,
//! HTTP-status or transport failure is reported as-is. [`NetworkError`] is
//! the refined taxonomy used by the catalog fetches and the image download,
//! where callers branch on the error kind (prompt for login on `NoAuth`,
//! re-login on `BadAuth`, treat `NoDecode` as a schema mismatch).

use reqwest::StatusCode;
use std::fmt;

/// Main error type for account operations and client construction
#[derive(Debug)]
pub enum AppError {
    /// Request body could not be serialized; the request was never sent
    SerializationError(String),
    /// Response body could not be deserialized into the expected type
    Deserialization(String),
    /// The server rejected the request with HTTP 401
    Unauthorized,
    /// The server answered with an unexpected HTTP status code
    Unexpected(StatusCode),
    /// Transport-level failure (DNS, TCP, TLS, timeout)
    Network(reqwest::Error),
    /// JSON processing error
    Json(serde_json::Error),
    /// I/O error
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::SerializationError(msg) => write!(f, "serialization error: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::Unexpected(status) => write!(f, "unexpected status code: {status}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io(error)
    }
}

/// Error taxonomy for the catalog fetches and the image download
///
/// `NoAuth` means the call was refused locally because no bearer token is
/// stored; no request is issued in that case. `BadAuth` means the server
/// rejected the token that was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkError {
    /// No bearer token stored; the request was not attempted
    NoAuth,
    /// The server rejected the bearer token (HTTP 401)
    BadAuth,
    /// Generic transport failure on the image path
    OtherError,
    /// Missing or unreadable response body, or transport failure on a data endpoint
    BadData,
    /// Response body was present but failed to decode into the expected shape
    NoDecode,
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::NoAuth => write!(f, "no authentication token stored"),
            NetworkError::BadAuth => write!(f, "server rejected the authentication token"),
            NetworkError::OtherError => write!(f, "transport failure"),
            NetworkError::BadData => write!(f, "missing or unreadable response data"),
            NetworkError::NoDecode => write!(f, "response body failed to decode"),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Transport failures on the data endpoints surface as `BadData`; the image
/// path maps them to `OtherError` explicitly at the call site.
impl From<reqwest::Error> for NetworkError {
    fn from(_: reqwest::Error) -> Self {
        NetworkError::BadData
    }
}
