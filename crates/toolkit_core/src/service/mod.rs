//! Converter use-case services.
//!
//! # Responsibility
//! - Accept raw form text and turn it into model operations.
//! - Render model values into display text.
//! - Keep form/CLI layers decoupled from converter arithmetic.

pub mod currency_service;
pub mod input;
pub mod land_service;
pub mod loan_service;
