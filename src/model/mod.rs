//! Domain models shared across the data and service layers.
//!
//! This module contains the plain data types the bot operates on: dialogue
//! turns fed to the completion endpoint and warning records persisted by the
//! warning ledger. Models are kept free of Discord and HTTP concerns so the
//! data layer can be tested without a gateway connection.

pub mod turn;
pub mod warning;

pub use turn::{Role, Turn};
pub use warning::WarningRecord;
