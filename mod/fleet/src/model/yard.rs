use serde::{Deserialize, Serialize};

/// Yard ("patio") — a physical lot where motos are parked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Yard {
    pub id: String,

    /// Human-readable name, unique across all yards.
    pub name: String,

    pub city: String,

    pub state: String,

    pub country: String,

    /// Area in square meters.
    pub area_m2: f64,
}

/// Payload for creating or fully updating a yard. Every field is
/// mutable, so create and update share the same shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YardInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub area_m2: f64,
}
