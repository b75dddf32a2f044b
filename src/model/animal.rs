/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/1/26
******************************************************************************/
use chrono::serde::ts_seconds_option;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A single animal record from the catalog
///
/// Only `name` is required; the remaining fields are optional so the client
/// tolerates partial records from the server. `timeSeen` travels as seconds
/// since the epoch.
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AnimalDetail {
    /// Server-side identifier of the record
    #[serde(default)]
    pub id: Option<u64>,
    /// Name of the animal
    pub name: String,
    /// Latitude of the sighting
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude of the sighting
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Timestamp of the sighting
    #[serde(default, with = "ts_seconds_option")]
    pub time_seen: Option<DateTime<Utc>>,
    /// Free-form description of the animal
    #[serde(default)]
    pub description: Option<String>,
    /// Absolute URL of the animal's photo, fetched separately
    #[serde(default, rename = "imageURL")]
    pub image_url: Option<String>,
}
