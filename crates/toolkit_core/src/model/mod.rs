//! Converter domain models.
//!
//! # Responsibility
//! - Define canonical values and arithmetic used by every toolkit converter.
//! - Keep models free of text parsing and display formatting.
//!
//! # Invariants
//! - Each model owns one canonical value; derived views are computed on read.

pub mod area;
pub mod currency;
pub mod loan;
