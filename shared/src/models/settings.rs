//! Operating Settings Models

use serde::{Deserialize, Serialize};

fn default_pickup_interval() -> u32 {
    15
}

/// Step 5 slice of the draft
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingsDraft {
    /// Accepted payment method identifiers; must be non-empty at save
    pub payment_methods: Vec<String>,
    /// Pickup slot interval in minutes; must be positive at save
    #[serde(default = "default_pickup_interval")]
    pub pickup_interval_minutes: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub loyalty_enabled: bool,
}

impl Default for SettingsDraft {
    fn default() -> Self {
        Self {
            payment_methods: Vec::new(),
            pickup_interval_minutes: default_pickup_interval(),
            description: String::new(),
            loyalty_enabled: false,
        }
    }
}

/// Partial settings update, shallow-merged over the draft
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsPatch {
    pub payment_methods: Option<Vec<String>>,
    pub pickup_interval_minutes: Option<u32>,
    pub description: Option<String>,
    pub loyalty_enabled: Option<bool>,
}
