//! Storage layer

pub mod repository;
