//! Rule-based outfit generation for a personal wardrobe.
//!
//! The [`styling`] module owns the engine: item classification, weather and
//! activity filtering, multi-dimension scoring, combination enumeration, and
//! final selection. [`config`] and [`telemetry`] carry the service-level
//! plumbing shared with the API binary.

pub mod config;
pub mod error;
pub mod styling;
pub mod telemetry;
