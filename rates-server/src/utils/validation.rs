//! Input validation helpers
//!
//! Required-field and length checks for room rates drafts, run after the
//! before-change hooks and before anything is stored. Errors carry the
//! offending field path in the `field` detail.

use shared::models::{
    RateTypeEntry, RoomConfigRate, RoomRateEntry, RoomRatesData, RoomRatesDraft, SeasonDefinition,
    SeasonKey,
};

use crate::utils::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Short texts: room type names, sizes, bed options, occupancy, date ranges
pub const MAX_NAME_LEN: usize = 200;

/// Long texts: features and additional notes
pub const MAX_TEXT_LEN: usize = 2000;

/// Accepted document years
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=9999;

// ── Generic helpers ─────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_field(
            field,
            format!("{field} must not be empty"),
        ));
    }
    if value.len() > max_len {
        return Err(AppError::invalid_field(
            field,
            format!("{field} is too long ({} chars, max {max_len})", value.len()),
        ));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(value: &Option<String>, field: &str, max_len: usize) -> AppResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::invalid_field(
            field,
            format!("{field} is too long ({} chars, max {max_len})", v.len()),
        ));
    }
    Ok(())
}

/// Validate that an amount is a finite, non-negative number.
pub fn validate_amount(value: f64, field: &str) -> AppResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::out_of_range(
            field,
            format!("{field} must be a non-negative number"),
        ));
    }
    Ok(())
}

// ── Room rates ──────────────────────────────────────────────────────

/// Check a draft against the collection schema and unwrap its required fields
pub fn validate_room_rates(draft: RoomRatesDraft) -> AppResult<RoomRatesData> {
    let year = draft
        .year
        .ok_or_else(|| AppError::required_field("year"))?;
    if !YEAR_RANGE.contains(&year) {
        return Err(AppError::out_of_range(
            "year",
            format!("year must be between {} and {}", YEAR_RANGE.start(), YEAR_RANGE.end()),
        ));
    }

    let seasons = draft
        .seasons
        .ok_or_else(|| AppError::required_field("seasons"))?;
    validate_seasons(&seasons)?;

    let rates = draft
        .rates
        .ok_or_else(|| AppError::required_field("rates"))?;
    for (i, entry) in rates.iter().enumerate() {
        validate_entry(entry, &format!("rates[{i}]"))?;
    }

    Ok(RoomRatesData {
        year,
        seasons,
        rates,
    })
}

fn validate_seasons(seasons: &SeasonDefinition) -> AppResult<()> {
    for key in SeasonKey::DISPLAY_ORDER {
        validate_required_text(
            seasons.date_range(key),
            &format!("seasons.{key}"),
            MAX_NAME_LEN,
        )?;
    }
    Ok(())
}

fn validate_entry(entry: &RoomRateEntry, path: &str) -> AppResult<()> {
    validate_required_text(&entry.room_type, &format!("{path}.room_type"), MAX_NAME_LEN)?;
    validate_required_text(&entry.size, &format!("{path}.size"), MAX_NAME_LEN)?;
    validate_required_text(&entry.bed_options, &format!("{path}.bed_options"), MAX_NAME_LEN)?;
    validate_required_text(&entry.features, &format!("{path}.features"), MAX_TEXT_LEN)?;
    validate_optional_text(&entry.additional, &format!("{path}.additional"), MAX_TEXT_LEN)?;
    validate_required_text(&entry.occupancy, &format!("{path}.occupancy"), MAX_NAME_LEN)?;

    for (i, group) in entry.rate_types.iter().enumerate() {
        validate_group(group, &format!("{path}.rate_types[{i}]"))?;
    }
    Ok(())
}

fn validate_group(group: &RateTypeEntry, path: &str) -> AppResult<()> {
    for (i, room) in group.rooms.iter().enumerate() {
        validate_room(room, &format!("{path}.rooms[{i}]"))?;
    }
    Ok(())
}

fn validate_room(room: &RoomConfigRate, path: &str) -> AppResult<()> {
    for season in SeasonKey::DISPLAY_ORDER {
        validate_amount(room.price(season), &format!("{path}.{season}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;
    use shared::models::{RateType, RoomConfig};

    fn valid_draft() -> RoomRatesDraft {
        RoomRatesDraft {
            year: Some(2025),
            json_upload: None,
            seasons: Some(SeasonDefinition {
                peak: "Jul - Oct".into(),
                high: "Nov - Dec".into(),
                mid: "Jan - Mar".into(),
                low: "Apr - Jun".into(),
            }),
            rates: Some(vec![RoomRateEntry {
                id: None,
                room_type: "Savannah".into(),
                total_rooms: 10,
                size: "46 sq/m".into(),
                bed_options: "King".into(),
                features: "Deck".into(),
                additional: None,
                occupancy: "2 adults".into(),
                rate_types: vec![RateTypeEntry {
                    id: None,
                    rate_type: RateType::FullBoard,
                    rooms: vec![RoomConfigRate {
                        id: None,
                        room_config: RoomConfig::Double,
                        low: 100.0,
                        mid: 150.0,
                        high: 200.0,
                        peak: 250.0,
                    }],
                }],
            }]),
        }
    }

    fn field_of(err: AppError) -> String {
        err.details
            .and_then(|d| d.get("field").and_then(|v| v.as_str().map(String::from)))
            .unwrap_or_default()
    }

    #[test]
    fn test_valid_draft() {
        let data = validate_room_rates(valid_draft()).unwrap();
        assert_eq!(data.year, 2025);
        assert_eq!(data.rates.len(), 1);
    }

    #[test]
    fn test_empty_arrays_are_allowed() {
        let mut draft = valid_draft();
        draft.rates.as_mut().unwrap()[0].rate_types[0].rooms.clear();
        assert!(validate_room_rates(draft).is_ok());

        let mut draft = valid_draft();
        draft.rates = Some(vec![]);
        assert!(validate_room_rates(draft).is_ok());
    }

    #[test]
    fn test_missing_sections() {
        let mut draft = valid_draft();
        draft.year = None;
        assert_eq!(field_of(validate_room_rates(draft).unwrap_err()), "year");

        let mut draft = valid_draft();
        draft.seasons = None;
        assert_eq!(field_of(validate_room_rates(draft).unwrap_err()), "seasons");

        let mut draft = valid_draft();
        draft.rates = None;
        let err = validate_room_rates(draft).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "rates is required");
        assert_eq!(field_of(err), "rates");
    }

    #[test]
    fn test_year_out_of_range() {
        let mut draft = valid_draft();
        draft.year = Some(25);
        let err = validate_room_rates(draft).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(field_of(err), "year");
    }

    #[test]
    fn test_blank_season_range() {
        let mut draft = valid_draft();
        draft.seasons.as_mut().unwrap().mid = "   ".into();
        let err = validate_room_rates(draft).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "seasons.mid must not be empty");
        assert_eq!(field_of(err), "seasons.mid");
    }

    #[test]
    fn test_nested_paths() {
        let mut draft = valid_draft();
        draft.rates.as_mut().unwrap()[0].occupancy = String::new();
        assert_eq!(
            field_of(validate_room_rates(draft).unwrap_err()),
            "rates[0].occupancy"
        );

        let mut draft = valid_draft();
        draft.rates.as_mut().unwrap()[0].rate_types[0].rooms[0].peak = -1.0;
        assert_eq!(
            field_of(validate_room_rates(draft).unwrap_err()),
            "rates[0].rate_types[0].rooms[0].peak"
        );

        let mut draft = valid_draft();
        draft.rates.as_mut().unwrap()[0].rate_types[0].rooms[0].low = f64::INFINITY;
        assert_eq!(
            field_of(validate_room_rates(draft).unwrap_err()),
            "rates[0].rate_types[0].rooms[0].low"
        );
    }

    #[test]
    fn test_too_long_text() {
        let mut draft = valid_draft();
        draft.rates.as_mut().unwrap()[0].additional = Some("x".repeat(MAX_TEXT_LEN + 1));
        let err = validate_room_rates(draft).unwrap_err();
        assert!(err.message.contains("is too long"));
        assert_eq!(field_of(err), "rates[0].additional");
    }
}
