//! Room Rate Model
//!
//! Three-level tree: room type -> rate package -> room configuration.
//! Field names on the wire follow the collection schema (`room_type`,
//! `total`, `rate_types`, `room`, ...).

use serde::{Deserialize, Serialize};

use super::season::SeasonKey;

/// Pricing package applied to a room type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateType {
    #[serde(rename = "Full Board")]
    FullBoard,
    #[serde(rename = "Game Package")]
    GamePackage,
}

impl RateType {
    pub fn label(&self) -> &'static str {
        match self {
            RateType::FullBoard => "Full Board",
            RateType::GamePackage => "Game Package",
        }
    }
}

impl std::fmt::Display for RateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Occupancy mode of a priced row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomConfig {
    Single,
    Double,
    Triple,
    #[serde(rename = "Per Room")]
    PerRoom,
}

impl RoomConfig {
    pub fn label(&self) -> &'static str {
        match self {
            RoomConfig::Single => "Single",
            RoomConfig::Double => "Double",
            RoomConfig::Triple => "Triple",
            RoomConfig::PerRoom => "Per Room",
        }
    }
}

impl std::fmt::Display for RoomConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One priced row: a room configuration with its four seasonal amounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomConfigRate {
    /// CMS array row id, kept verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "room")]
    pub room_config: RoomConfig,
    pub low: f64,
    pub mid: f64,
    pub high: f64,
    pub peak: f64,
}

impl RoomConfigRate {
    pub fn price(&self, season: SeasonKey) -> f64 {
        match season {
            SeasonKey::Peak => self.peak,
            SeasonKey::High => self.high,
            SeasonKey::Mid => self.mid,
            SeasonKey::Low => self.low,
        }
    }
}

/// A rate package for a room type and its priced rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTypeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub rate_type: RateType,
    #[serde(default)]
    pub rooms: Vec<RoomConfigRate>,
}

/// A room category with its descriptive fields and rate packages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRateEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub room_type: String,
    /// Number of rooms of this type
    #[serde(rename = "total")]
    pub total_rooms: u32,
    pub size: String,
    pub bed_options: String,
    pub features: String,
    /// Interconnecting rooms, accessibility notes, ...
    #[serde(default)]
    pub additional: Option<String>,
    pub occupancy: String,
    #[serde(default)]
    pub rate_types: Vec<RateTypeEntry>,
}

impl RoomRateEntry {
    /// Number of priced rows across all rate packages
    pub fn row_count(&self) -> usize {
        self.rate_types.iter().map(|rt| rt.rooms.len()).sum()
    }
}
