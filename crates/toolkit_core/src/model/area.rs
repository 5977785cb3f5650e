//! Land area domain model.
//!
//! # Responsibility
//! - Hold one canonical land area, measured in square feet.
//! - Derive Hill (Ropani/Aana/Paisa/Dam) and Terai (Bigha/Kattha/Dhur)
//!   breakdowns from that value on every read.
//! - Apply single-field edits that keep sibling fields of the same system.
//!
//! # Invariants
//! - `sq_ft` is finite and `>= 0`; no unit field is ever stored.
//! - Recomposing either breakdown reproduces `sq_ft` within float tolerance.
//! - Coarse units are floored; only the terminal unit (Dam, Dhur) is fractional.
//! - Non-finite input is folded to `0` before it reaches the canonical value.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Square feet in one Ropani.
pub const SQFT_PER_ROPANI: f64 = 5476.0;
/// Square feet in one Aana (1/16 Ropani).
pub const SQFT_PER_AANA: f64 = 342.25;
/// Square feet in one Paisa (1/4 Aana).
pub const SQFT_PER_PAISA: f64 = 85.5625;
/// Square feet in one Dam (1/4 Paisa).
pub const SQFT_PER_DAM: f64 = 21.390625;
/// Square feet in one Bigha.
pub const SQFT_PER_BIGHA: f64 = 72900.0;
/// Square feet in one Kattha (1/20 Bigha).
pub const SQFT_PER_KATTHA: f64 = 3645.0;
/// Square feet in one Dhur (1/20 Kattha).
pub const SQFT_PER_DHUR: f64 = 182.25;

// Why: a remainder this close to a full unit is float noise (e.g. `3 * 342.25`
// reached through another path); anything larger is real area and is kept.
const SNAP_TOLERANCE_SQFT: f64 = 1e-9;

pub type AreaResult<T> = Result<T, AreaError>;

/// Regional unit system used to view an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Ropani/Aana/Paisa/Dam, used in hill regions.
    Hill,
    /// Bigha/Kattha/Dhur, used in the Terai plains.
    Terai,
}

impl UnitSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hill => "hill",
            Self::Terai => "terai",
        }
    }
}

/// Field of the Hill system, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HillField {
    Ropani,
    Aana,
    Paisa,
    Dam,
}

impl HillField {
    pub const ALL: [HillField; 4] = [Self::Ropani, Self::Aana, Self::Paisa, Self::Dam];

    /// Size of one unit of this field in square feet.
    pub fn sq_ft(self) -> f64 {
        match self {
            Self::Ropani => SQFT_PER_ROPANI,
            Self::Aana => SQFT_PER_AANA,
            Self::Paisa => SQFT_PER_PAISA,
            Self::Dam => SQFT_PER_DAM,
        }
    }
}

/// Field of the Terai system, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeraiField {
    Bigha,
    Kattha,
    Dhur,
}

impl TeraiField {
    pub const ALL: [TeraiField; 3] = [Self::Bigha, Self::Kattha, Self::Dhur];

    /// Size of one unit of this field in square feet.
    pub fn sq_ft(self) -> f64 {
        match self {
            Self::Bigha => SQFT_PER_BIGHA,
            Self::Kattha => SQFT_PER_KATTHA,
            Self::Dhur => SQFT_PER_DHUR,
        }
    }
}

/// Any editable field of the land form, including the canonical square feet.
///
/// String ids (`sqft|ropani|aana|paisa|dam|bigha|kattha|dhur`) are stable and
/// shared by parsing, display and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandField {
    #[serde(rename = "sqft")]
    SqFt,
    Ropani,
    Aana,
    Paisa,
    Dam,
    Bigha,
    Kattha,
    Dhur,
}

impl LandField {
    /// All fields in form order: canonical value, then Hill, then Terai.
    pub const ALL: [LandField; 8] = [
        Self::SqFt,
        Self::Ropani,
        Self::Aana,
        Self::Paisa,
        Self::Dam,
        Self::Bigha,
        Self::Kattha,
        Self::Dhur,
    ];

    /// Stable string id for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SqFt => "sqft",
            Self::Ropani => "ropani",
            Self::Aana => "aana",
            Self::Paisa => "paisa",
            Self::Dam => "dam",
            Self::Bigha => "bigha",
            Self::Kattha => "kattha",
            Self::Dhur => "dhur",
        }
    }

    /// Unit system owning this field, `None` for the canonical square feet.
    pub fn system(self) -> Option<UnitSystem> {
        match self {
            Self::SqFt => None,
            Self::Ropani | Self::Aana | Self::Paisa | Self::Dam => Some(UnitSystem::Hill),
            Self::Bigha | Self::Kattha | Self::Dhur => Some(UnitSystem::Terai),
        }
    }

    /// Whether this is the smallest, fraction-capable unit of its system.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Dam | Self::Dhur)
    }
}

impl Display for LandField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LandField {
    type Err = AreaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sqft" | "sq_ft" | "sq.ft" => Ok(Self::SqFt),
            "ropani" => Ok(Self::Ropani),
            "aana" => Ok(Self::Aana),
            "paisa" => Ok(Self::Paisa),
            "dam" => Ok(Self::Dam),
            "bigha" => Ok(Self::Bigha),
            "kattha" => Ok(Self::Kattha),
            "dhur" => Ok(Self::Dhur),
            _ => Err(AreaError::UnknownField(value.trim().to_string())),
        }
    }
}

impl From<HillField> for LandField {
    fn from(value: HillField) -> Self {
        match value {
            HillField::Ropani => Self::Ropani,
            HillField::Aana => Self::Aana,
            HillField::Paisa => Self::Paisa,
            HillField::Dam => Self::Dam,
        }
    }
}

impl From<TeraiField> for LandField {
    fn from(value: TeraiField) -> Self {
        match value {
            TeraiField::Bigha => Self::Bigha,
            TeraiField::Kattha => Self::Kattha,
            TeraiField::Dhur => Self::Dhur,
        }
    }
}

/// Errors raised by area construction and edits.
#[derive(Debug, Clone, PartialEq)]
pub enum AreaError {
    /// A field was given a negative value.
    NegativeValue { field: LandField, value: f64 },
    /// Field name does not match any known land field.
    UnknownField(String),
    /// The edit would push the area past the largest representable value.
    OutOfRange { field: LandField },
}

impl Display for AreaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeValue { field, value } => {
                write!(f, "{field} must be >= 0, got {value}")
            }
            Self::UnknownField(name) => write!(
                f,
                "unknown land field `{name}`; expected sqft|ropani|aana|paisa|dam|bigha|kattha|dhur"
            ),
            Self::OutOfRange { field } => {
                write!(f, "{field} edit exceeds the representable area range")
            }
        }
    }
}

impl AreaError {
    /// Stable reason id for metadata-only logs.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::NegativeValue { .. } => "negative_value",
            Self::UnknownField(_) => "unknown_field",
            Self::OutOfRange { .. } => "out_of_range",
        }
    }
}

impl Error for AreaError {}

/// Hill view of an area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HillBreakdown {
    pub ropani: f64,
    pub aana: f64,
    pub paisa: f64,
    /// Terminal unit; may carry a fraction.
    pub dam: f64,
}

impl HillBreakdown {
    pub fn get(&self, field: HillField) -> f64 {
        match field {
            HillField::Ropani => self.ropani,
            HillField::Aana => self.aana,
            HillField::Paisa => self.paisa,
            HillField::Dam => self.dam,
        }
    }

    /// Returns a copy with one field replaced and the others untouched.
    pub fn with(mut self, field: HillField, value: f64) -> Self {
        match field {
            HillField::Ropani => self.ropani = value,
            HillField::Aana => self.aana = value,
            HillField::Paisa => self.paisa = value,
            HillField::Dam => self.dam = value,
        }
        self
    }

    /// Total square feet represented by this breakdown.
    pub fn recompose(&self) -> f64 {
        HillField::ALL
            .iter()
            .map(|field| self.get(*field) * field.sq_ft())
            .sum()
    }
}

/// Terai view of an area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TeraiBreakdown {
    pub bigha: f64,
    pub kattha: f64,
    /// Terminal unit; may carry a fraction.
    pub dhur: f64,
}

impl TeraiBreakdown {
    pub fn get(&self, field: TeraiField) -> f64 {
        match field {
            TeraiField::Bigha => self.bigha,
            TeraiField::Kattha => self.kattha,
            TeraiField::Dhur => self.dhur,
        }
    }

    /// Returns a copy with one field replaced and the others untouched.
    pub fn with(mut self, field: TeraiField, value: f64) -> Self {
        match field {
            TeraiField::Bigha => self.bigha = value,
            TeraiField::Kattha => self.kattha = value,
            TeraiField::Dhur => self.dhur = value,
        }
        self
    }

    /// Total square feet represented by this breakdown.
    pub fn recompose(&self) -> f64 {
        TeraiField::ALL
            .iter()
            .map(|field| self.get(*field) * field.sq_ft())
            .sum()
    }
}

/// Breakdown in either unit system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "system", rename_all = "snake_case")]
pub enum Breakdown {
    Hill(HillBreakdown),
    Terai(TeraiBreakdown),
}

impl Breakdown {
    pub fn system(&self) -> UnitSystem {
        match self {
            Self::Hill(_) => UnitSystem::Hill,
            Self::Terai(_) => UnitSystem::Terai,
        }
    }

    pub fn recompose(&self) -> f64 {
        match self {
            Self::Hill(hill) => hill.recompose(),
            Self::Terai(terai) => terai.recompose(),
        }
    }
}

/// Canonical land area.
///
/// A small `Copy` value: every edit returns a new quantity and leaves the
/// receiver untouched, so callers own exactly one source of truth.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "AreaQuantityWire", into = "AreaQuantityWire")]
pub struct AreaQuantity {
    sq_ft: f64,
}

impl AreaQuantity {
    /// Empty area.
    pub const ZERO: AreaQuantity = AreaQuantity { sq_ft: 0.0 };

    /// Creates an area from square feet.
    ///
    /// Non-finite input is treated as `0`.
    ///
    /// # Errors
    /// - `AreaError::NegativeValue` when `value < 0`.
    pub fn from_sq_ft(value: f64) -> AreaResult<Self> {
        let value = finite_or_zero(value);
        if value < 0.0 {
            return Err(AreaError::NegativeValue {
                field: LandField::SqFt,
                value,
            });
        }
        // Why: `+ 0.0` turns `-0.0` into `0.0` so display never shows a signed zero.
        Ok(Self { sq_ft: value + 0.0 })
    }

    /// Canonical area in square feet.
    pub fn sq_ft(&self) -> f64 {
        self.sq_ft
    }

    /// Mixed-radix Hill view of the canonical value.
    pub fn hill(&self) -> HillBreakdown {
        let (ropani, rest) = split_whole(self.sq_ft, SQFT_PER_ROPANI);
        let (aana, rest) = split_whole(rest, SQFT_PER_AANA);
        let (paisa, rest) = split_whole(rest, SQFT_PER_PAISA);
        HillBreakdown {
            ropani,
            aana,
            paisa,
            dam: rest / SQFT_PER_DAM,
        }
    }

    /// Mixed-radix Terai view of the canonical value.
    pub fn terai(&self) -> TeraiBreakdown {
        let (bigha, rest) = split_whole(self.sq_ft, SQFT_PER_BIGHA);
        let (kattha, rest) = split_whole(rest, SQFT_PER_KATTHA);
        TeraiBreakdown {
            bigha,
            kattha,
            dhur: rest / SQFT_PER_DHUR,
        }
    }

    /// Breakdown in the requested unit system.
    pub fn decompose(&self, system: UnitSystem) -> Breakdown {
        match system {
            UnitSystem::Hill => Breakdown::Hill(self.hill()),
            UnitSystem::Terai => Breakdown::Terai(self.terai()),
        }
    }

    /// Current value of one field as derived from the canonical value.
    pub fn field_value(&self, field: LandField) -> f64 {
        match field {
            LandField::SqFt => self.sq_ft,
            LandField::Ropani => self.hill().ropani,
            LandField::Aana => self.hill().aana,
            LandField::Paisa => self.hill().paisa,
            LandField::Dam => self.hill().dam,
            LandField::Bigha => self.terai().bigha,
            LandField::Kattha => self.terai().kattha,
            LandField::Dhur => self.terai().dhur,
        }
    }

    /// Sets one field and recomputes the canonical value.
    ///
    /// Siblings in the edited field's system keep their current derived
    /// values; the other system is simply re-derived afterwards. Editing
    /// `LandField::SqFt` overwrites the canonical value.
    ///
    /// Non-finite `value` is treated as `0`.
    ///
    /// # Errors
    /// - `AreaError::NegativeValue` when `value < 0`.
    /// - `AreaError::OutOfRange` when the recomposed area overflows.
    pub fn set_field(&self, field: impl Into<LandField>, value: f64) -> AreaResult<Self> {
        let field = field.into();
        let value = finite_or_zero(value);
        if value < 0.0 {
            return Err(AreaError::NegativeValue { field, value });
        }

        let sq_ft = match field {
            LandField::SqFt => value,
            LandField::Ropani => self.hill().with(HillField::Ropani, value).recompose(),
            LandField::Aana => self.hill().with(HillField::Aana, value).recompose(),
            LandField::Paisa => self.hill().with(HillField::Paisa, value).recompose(),
            LandField::Dam => self.hill().with(HillField::Dam, value).recompose(),
            LandField::Bigha => self.terai().with(TeraiField::Bigha, value).recompose(),
            LandField::Kattha => self.terai().with(TeraiField::Kattha, value).recompose(),
            LandField::Dhur => self.terai().with(TeraiField::Dhur, value).recompose(),
        };
        // Why: overflow must not reach `from_sq_ft`, which folds non-finite
        // input to zero and would silently wipe the area.
        if !sq_ft.is_finite() {
            return Err(AreaError::OutOfRange { field });
        }
        Self::from_sq_ft(sq_ft)
    }
}

impl TryFrom<f64> for AreaQuantity {
    type Error = AreaError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_sq_ft(value)
    }
}

#[derive(Serialize, Deserialize)]
struct AreaQuantityWire {
    sq_ft: f64,
}

impl TryFrom<AreaQuantityWire> for AreaQuantity {
    type Error = AreaError;

    fn try_from(value: AreaQuantityWire) -> Result<Self, Self::Error> {
        Self::from_sq_ft(value.sq_ft)
    }
}

impl From<AreaQuantity> for AreaQuantityWire {
    fn from(value: AreaQuantity) -> Self {
        Self { sq_ft: value.sq_ft }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Splits `value` into whole `unit`s and the square-feet remainder.
///
/// At most `SNAP_TOLERANCE_SQFT` is ever dropped, so recomposing stays exact
/// to that absolute bound regardless of unit size.
fn split_whole(value: f64, unit: f64) -> (f64, f64) {
    let mut whole = (value / unit).floor();
    // Why: the division may round up to the next integer for values a hair
    // below a unit boundary; step back when that overshoots by real area.
    if whole > 0.0 && whole * unit - value > SNAP_TOLERANCE_SQFT {
        whole -= 1.0;
    }
    if (whole + 1.0) * unit - value <= SNAP_TOLERANCE_SQFT {
        return (whole + 1.0, 0.0);
    }
    (whole, (value - whole * unit).max(0.0))
}
