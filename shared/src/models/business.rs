//! Business Identity

use serde::{Deserialize, Serialize};

/// Identity of the business being onboarded.
///
/// `None` in the draft until the business record has been created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BusinessRef {
    pub id: String,
    pub name: String,
    pub slug: String,
}
