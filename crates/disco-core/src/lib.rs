//! # disco-core
//!
//! Core types and error types for the Discobase manager.
//!
//! This crate provides the foundational types shared across all Discobase crates:
//! - Unit kinds (commands and events) and their display labels
//! - The enable/disable marker state read from a unit file
//! - The `UnitFile` entity produced by every directory scan
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod unit;

pub use enums::{EnabledMarker, UnitKind};
pub use errors::CoreError;
pub use unit::{ROOT_CATEGORY, UnitFile, category_of};
