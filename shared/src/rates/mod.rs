//! Room rates logic
//!
//! Pure, synchronous transforms over room rates documents:
//! - [`normalize_import`]: applies a JSON upload before a draft is stored
//! - [`build_rate_grid`]: lays out the merged-cell pricing table
//! - [`format_amount`]: display formatting for prices

mod format;
pub mod grid;
pub mod import;

pub use format::format_amount;
pub use grid::{
    GridRow, PriceCell, RateGrid, RateTypeCell, RoomTypeCell, RowLead, SeasonHeader,
    build_rate_grid,
};
pub use import::{ImportPayload, normalize_import};
