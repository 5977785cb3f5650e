//! Land converter session.
//!
//! # Responsibility
//! - Accept `(field_name, raw_value)` edits from a form layer.
//! - Return all seven display values after every edit.
//!
//! # Invariants
//! - The session stores only one `AreaQuantity`; unit fields are re-derived.
//! - A rejected edit leaves the session value unchanged.
//! - Rounding happens only when rendering `LandDisplayText`.

use crate::model::area::{AreaQuantity, AreaResult, LandField};
use crate::service::input::{classify, format_fixed, format_trimmed, parse_or_zero};
use log::{debug, warn};
use serde::Serialize;

const TERMINAL_UNIT_DECIMALS: usize = 2;

/// Numeric values of every land form field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LandDisplay {
    pub sqft: f64,
    pub ropani: f64,
    pub aana: f64,
    pub paisa: f64,
    pub dam: f64,
    pub bigha: f64,
    pub kattha: f64,
    pub dhur: f64,
}

impl LandDisplay {
    /// Derives all field values from one canonical area.
    pub fn from_quantity(quantity: &AreaQuantity) -> Self {
        let hill = quantity.hill();
        let terai = quantity.terai();
        Self {
            sqft: quantity.sq_ft(),
            ropani: hill.ropani,
            aana: hill.aana,
            paisa: hill.paisa,
            dam: hill.dam,
            bigha: terai.bigha,
            kattha: terai.kattha,
            dhur: terai.dhur,
        }
    }

    pub fn value(&self, field: LandField) -> f64 {
        match field {
            LandField::SqFt => self.sqft,
            LandField::Ropani => self.ropani,
            LandField::Aana => self.aana,
            LandField::Paisa => self.paisa,
            LandField::Dam => self.dam,
            LandField::Bigha => self.bigha,
            LandField::Kattha => self.kattha,
            LandField::Dhur => self.dhur,
        }
    }

    /// Text shown in the form fields.
    pub fn formatted(&self) -> LandDisplayText {
        let text = |field: LandField| format_field(field, self.value(field));
        LandDisplayText {
            sqft: text(LandField::SqFt),
            ropani: text(LandField::Ropani),
            aana: text(LandField::Aana),
            paisa: text(LandField::Paisa),
            dam: text(LandField::Dam),
            bigha: text(LandField::Bigha),
            kattha: text(LandField::Kattha),
            dhur: text(LandField::Dhur),
        }
    }
}

/// Rendered text of every land form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandDisplayText {
    pub sqft: String,
    pub ropani: String,
    pub aana: String,
    pub paisa: String,
    pub dam: String,
    pub bigha: String,
    pub kattha: String,
    pub dhur: String,
}

impl LandDisplayText {
    pub fn get(&self, field: LandField) -> &str {
        match field {
            LandField::SqFt => &self.sqft,
            LandField::Ropani => &self.ropani,
            LandField::Aana => &self.aana,
            LandField::Paisa => &self.paisa,
            LandField::Dam => &self.dam,
            LandField::Bigha => &self.bigha,
            LandField::Kattha => &self.kattha,
            LandField::Dhur => &self.dhur,
        }
    }
}

/// Single-owner editing session over one land area.
#[derive(Debug, Clone, Default)]
pub struct LandConverter {
    quantity: AreaQuantity,
}

impl LandConverter {
    /// Starts a session at 0 sq ft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session at an existing area.
    pub fn with_quantity(quantity: AreaQuantity) -> Self {
        Self { quantity }
    }

    pub fn quantity(&self) -> AreaQuantity {
        self.quantity
    }

    pub fn display(&self) -> LandDisplay {
        LandDisplay::from_quantity(&self.quantity)
    }

    /// Clears the session back to 0 sq ft.
    pub fn reset(&mut self) {
        self.quantity = AreaQuantity::ZERO;
    }

    /// Applies one raw form edit.
    ///
    /// `field_name` is matched case-insensitively; `raw_value` is read with
    /// parse-or-zero, so empty or malformed text edits the field to `0`.
    ///
    /// # Errors
    /// - `AreaError::UnknownField` for an unrecognized field name.
    /// - `AreaError::NegativeValue` for a negative parsed value.
    /// - `AreaError::OutOfRange` when the edit overflows the area.
    pub fn apply_edit(&mut self, field_name: &str, raw_value: &str) -> AreaResult<LandDisplay> {
        let field = match field_name.parse::<LandField>() {
            Ok(field) => field,
            Err(err) => {
                warn!(
                    "event=land_edit module=land status=error reason={}",
                    err.reason()
                );
                return Err(err);
            }
        };
        debug!(
            "event=land_input module=land field={} input_class={}",
            field,
            classify(raw_value).as_str()
        );
        self.set(field, parse_or_zero(raw_value))
    }

    /// Applies one typed edit.
    pub fn set(&mut self, field: LandField, value: f64) -> AreaResult<LandDisplay> {
        match self.quantity.set_field(field, value) {
            Ok(next) => {
                self.quantity = next;
                debug!("event=land_edit module=land status=ok field={}", field);
                Ok(self.display())
            }
            Err(err) => {
                warn!(
                    "event=land_edit module=land status=error field={} reason={}",
                    field,
                    err.reason()
                );
                Err(err)
            }
        }
    }
}

fn format_field(field: LandField, value: f64) -> String {
    match field {
        LandField::SqFt => format_trimmed(value),
        field if field.is_terminal() => format_fixed(value, TERMINAL_UNIT_DECIMALS),
        _ => format_fixed(value, 0),
    }
}
