//! Location Models

use serde::{Deserialize, Serialize};

/// A storefront location as drafted in step 1
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationDraft {
    /// Persisted or client-generated id; `None` for a not-yet-saved draft
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub address: String,
    /// Coordinates come from the address picker; both-or-neither in practice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Place id from the external address provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_place_id: Option<String>,
}

/// Scratch form for the location currently being entered
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub external_place_id: Option<String>,
}

/// Partial update for the scratch form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationFormPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub external_place_id: Option<String>,
}

/// Step 1 slice of the draft
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocationsDraft {
    pub locations: Vec<LocationDraft>,
    /// In-progress location entry form
    #[serde(default)]
    pub form: LocationForm,
    /// Set after a location is added so the UI offers to add another
    #[serde(default)]
    pub offer_add_another: bool,
}
