use serde::{Deserialize, Serialize};

/// A zero-waste place as loaded from the Seoul open-data feed or a user
/// report. Consumers supply already-deduplicated lists; no identity
/// invariants are enforced here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
