use serde::{Deserialize, Serialize};

/// Operational status of a moto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MotoStatus {
    Available,
    Maintenance,
    InUse,
    Lost,
}

impl Default for MotoStatus {
    fn default() -> Self {
        Self::Available
    }
}

impl MotoStatus {
    /// Wire/database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MotoStatus::Available => "AVAILABLE",
            MotoStatus::Maintenance => "MAINTENANCE",
            MotoStatus::InUse => "IN_USE",
            MotoStatus::Lost => "LOST",
        }
    }
}

/// Moto — a tracked motorcycle belonging to exactly one yard.
///
/// Plate and yard reference are fixed at creation; only model and
/// status change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moto {
    pub id: String,

    /// Owning yard.
    pub yard_id: String,

    /// License plate, unique across all motos.
    pub plate: String,

    pub model: String,

    #[serde(default)]
    pub status: MotoStatus,
}

/// Payload for creating a moto.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMoto {
    #[serde(default)]
    pub yard_id: String,
    #[serde(default)]
    pub plate: String,
    #[serde(default)]
    pub model: String,
    /// Defaults to AVAILABLE when omitted.
    #[serde(default)]
    pub status: Option<MotoStatus>,
}

/// Payload for updating a moto. Plate and yard are deliberately absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMoto {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub status: MotoStatus,
}
