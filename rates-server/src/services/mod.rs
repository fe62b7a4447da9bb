//! Collection services

pub mod room_rates;

pub use room_rates::RoomRatesService;
