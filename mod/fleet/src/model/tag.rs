use serde::{Deserialize, Serialize};

/// Hardware revision of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TagType {
    V1,
}

impl Default for TagType {
    fn default() -> Self {
        Self::V1
    }
}

/// Tag — an RFID identifier attachable to at most one moto.
///
/// Serial is fixed at creation. The moto association is optional and
/// may be moved between motos, one tag per moto at any time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,

    /// Associated moto, if attached.
    #[serde(default)]
    pub moto_id: Option<String>,

    /// Serial number, unique across all tags.
    pub serial: String,

    #[serde(rename = "type", default)]
    pub tag_type: TagType,

    /// Battery level, 0-100.
    #[serde(default)]
    pub battery_pct: i64,

    /// Instant of the last known read, RFC 3339.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen_at: Option<String>,
}

/// Payload for creating a tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTag {
    #[serde(default)]
    pub moto_id: Option<String>,
    #[serde(default)]
    pub serial: String,
    #[serde(rename = "type", default)]
    pub tag_type: TagType,
    #[serde(default)]
    pub battery_pct: i64,
}

/// Payload for updating a tag. Serial is deliberately absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTag {
    #[serde(default)]
    pub moto_id: Option<String>,
    #[serde(rename = "type", default)]
    pub tag_type: TagType,
    #[serde(default)]
    pub battery_pct: i64,
}
