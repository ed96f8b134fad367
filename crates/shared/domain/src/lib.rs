//! # Domain Models
//!
//! This crate contains pure domain types with a single dependency (`serde`).
//! Keep it lean: no I/O, no event bus, no heavy logic. Just the payloads that
//! travel over the bus and the configuration shapes the applications load.

pub mod config;
pub mod events;
