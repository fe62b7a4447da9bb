//! Season Model

use serde::{Deserialize, Serialize};

/// Pricing tier of the year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonKey {
    Peak,
    High,
    Mid,
    Low,
}

impl SeasonKey {
    /// Fixed display order of the season columns
    pub const DISPLAY_ORDER: [SeasonKey; 4] = [
        SeasonKey::Peak,
        SeasonKey::High,
        SeasonKey::Mid,
        SeasonKey::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonKey::Peak => "peak",
            SeasonKey::High => "high",
            SeasonKey::Mid => "mid",
            SeasonKey::Low => "low",
        }
    }
}

impl std::fmt::Display for SeasonKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Date ranges of the four seasons (e.g. `"1 Jul - 31 Oct"`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonDefinition {
    pub peak: String,
    pub high: String,
    pub mid: String,
    pub low: String,
}

impl SeasonDefinition {
    /// Date range for a season
    pub fn date_range(&self, key: SeasonKey) -> &str {
        match key {
            SeasonKey::Peak => &self.peak,
            SeasonKey::High => &self.high,
            SeasonKey::Mid => &self.mid,
            SeasonKey::Low => &self.low,
        }
    }

    /// Seasons with their date ranges, in display order
    pub fn iter(&self) -> impl Iterator<Item = (SeasonKey, &str)> + '_ {
        SeasonKey::DISPLAY_ORDER
            .into_iter()
            .map(move |key| (key, self.date_range(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_follows_display_order() {
        let seasons = SeasonDefinition {
            peak: "Jul - Oct".to_string(),
            high: "Nov - Dec".to_string(),
            mid: "Jan - Mar".to_string(),
            low: "Apr - Jun".to_string(),
        };

        let keys: Vec<_> = seasons.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["peak", "high", "mid", "low"]);
        assert_eq!(seasons.date_range(SeasonKey::Mid), "Jan - Mar");
    }

    #[test]
    fn test_season_key_serde() {
        let json = serde_json::to_string(&SeasonKey::Peak).unwrap();
        assert_eq!(json, "\"peak\"");
        let key: SeasonKey = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(key, SeasonKey::Low);
    }
}
