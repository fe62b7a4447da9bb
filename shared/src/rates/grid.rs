//! Rate Grid Builder
//!
//! Flattens the `room type -> rate package -> room configuration` tree into
//! table rows with row-span grouping. A room type cell covers all priced rows
//! of its entry, a rate type cell covers the rows of its package.
//!
//! Entries and packages without priced rows are skipped. Rows keep input
//! order; nothing is sorted or deduplicated.

use serde::{Deserialize, Serialize};

use crate::models::{
    RateType, RoomConfig, RoomConfigRate, RoomRateEntry, RoomRatesDocument, SeasonDefinition,
    SeasonKey,
};

/// Season column header with its date range (shown as tooltip)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonHeader {
    pub key: SeasonKey,
    pub date_range: String,
}

/// Room type cell, spanning every priced row of its entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomTypeCell {
    pub room_type: String,
    pub total_rooms: u32,
    pub size: String,
    pub bed_options: String,
    pub features: String,
    pub additional: Option<String>,
    pub occupancy: String,
    pub rowspan: usize,
}

impl RoomTypeCell {
    fn from_entry(entry: &RoomRateEntry, rowspan: usize) -> Self {
        Self {
            room_type: entry.room_type.clone(),
            total_rooms: entry.total_rooms,
            size: entry.size.clone(),
            bed_options: entry.bed_options.clone(),
            features: entry.features.clone(),
            additional: entry.additional.clone(),
            occupancy: entry.occupancy.clone(),
            rowspan,
        }
    }
}

/// Rate type cell, spanning the rows of one package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTypeCell {
    pub rate_type: RateType,
    pub rowspan: usize,
}

/// Which spanning cells a row opens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowLead {
    /// First row of an entry; always also the first row of a package
    RoomTypeStart {
        room_type: RoomTypeCell,
        rate_type: RateTypeCell,
    },
    /// First row of a package further down the entry
    RateTypeStart { rate_type: RateTypeCell },
    /// Covered by spans opened on earlier rows
    Plain,
}

/// Amount for one season column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceCell {
    pub season: SeasonKey,
    pub amount: f64,
}

/// One table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRow {
    pub lead: RowLead,
    pub room_config: RoomConfig,
    /// Prices in display order: peak, high, mid, low
    pub prices: [PriceCell; 4],
    /// Last room of an entry's last package, when another entry follows in the input
    pub group_boundary: bool,
}

impl GridRow {
    fn new(lead: RowLead, room: &RoomConfigRate) -> Self {
        Self {
            lead,
            room_config: room.room_config,
            prices: SeasonKey::DISPLAY_ORDER.map(|season| PriceCell {
                season,
                amount: room.price(season),
            }),
            group_boundary: false,
        }
    }

    pub fn room_type_cell(&self) -> Option<&RoomTypeCell> {
        match &self.lead {
            RowLead::RoomTypeStart { room_type, .. } => Some(room_type),
            _ => None,
        }
    }

    pub fn rate_type_cell(&self) -> Option<&RateTypeCell> {
        match &self.lead {
            RowLead::RoomTypeStart { rate_type, .. } | RowLead::RateTypeStart { rate_type } => {
                Some(rate_type)
            }
            RowLead::Plain => None,
        }
    }
}

/// Seasonal price grid ready for a merged-cell table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateGrid {
    /// `Room Rates {year}` when built from a document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub seasons: Vec<SeasonHeader>,
    pub rows: Vec<GridRow>,
}

impl RateGrid {
    /// Build the grid of a stored document
    pub fn for_document(doc: &RoomRatesDocument) -> Self {
        let mut grid = build_rate_grid(&doc.seasons, &doc.rates);
        grid.title = Some(format!("Room Rates {}", doc.year));
        grid
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the merged-cell grid for a set of seasons and rate entries
pub fn build_rate_grid(seasons: &SeasonDefinition, rates: &[RoomRateEntry]) -> RateGrid {
    let mut rows: Vec<GridRow> = Vec::new();
    let last_entry = rates.len().saturating_sub(1);

    for (entry_index, entry) in rates.iter().enumerate() {
        let room_type_span = entry.row_count();
        if room_type_span == 0 {
            continue;
        }

        let last_group = entry.rate_types.len() - 1;
        let mut first_in_entry = true;
        for (group_index, group) in entry.rate_types.iter().enumerate() {
            let rate_type_span = group.rooms.len();
            if rate_type_span == 0 {
                continue;
            }

            let rate_type = RateTypeCell {
                rate_type: group.rate_type,
                rowspan: rate_type_span,
            };

            for (index, room) in group.rooms.iter().enumerate() {
                let lead = if first_in_entry {
                    first_in_entry = false;
                    RowLead::RoomTypeStart {
                        room_type: RoomTypeCell::from_entry(entry, room_type_span),
                        rate_type,
                    }
                } else if index == 0 {
                    RowLead::RateTypeStart { rate_type }
                } else {
                    RowLead::Plain
                };

                let mut row = GridRow::new(lead, room);
                // Last room of the entry's last package, unless the entry closes the input
                row.group_boundary = group_index == last_group
                    && index == rate_type_span - 1
                    && entry_index != last_entry;
                rows.push(row);
            }
        }
    }

    tracing::debug!(entries = rates.len(), rows = rows.len(), "Built rate grid");

    RateGrid {
        title: None,
        seasons: seasons
            .iter()
            .map(|(key, range)| SeasonHeader {
                key,
                date_range: range.to_string(),
            })
            .collect(),
        rows,
    }
}
