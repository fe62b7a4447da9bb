//! HTML rendering of rate grids and page blocks

mod table;

pub use table::{NO_DATA_PLACEHOLDER, RateTableRenderer, escape};
