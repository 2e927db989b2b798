//! Serialized form of units and measures.
//!
//! A measure is encoded as a record:
//!
//! ```json
//! { "value": 1.0, "unit": { "coefficient": 1.0, "constant": 0.0, "symbol": "s" } }
//! ```
//!
//! [`MeasureRecord`] and [`UnitRecord`] are the plain, unvalidated shapes; converting them into [`Measure`] or
//! [`UnitDescriptor`] applies the same checks as direct construction. With the `serde` feature the records derive
//! `Serialize`/`Deserialize`, and `Measure<U>` and `UnitDescriptor` (de)serialize through them.

use crate::descriptor::UnitDescriptor;
use crate::error::{MeasureError, Result};
use crate::measure::Measure;
use crate::unit::Unit;
use alloc::string::{String, ToString};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Unvalidated unit record.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitRecord {
    /// Multiplicative factor to the base unit.
    pub coefficient: f64,
    /// Additive offset to the base unit; `0` when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub constant: f64,
    /// Printable symbol.
    pub symbol: String,
}

/// Unvalidated measure record.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeasureRecord {
    /// Scalar expressed in `unit`.
    pub value: f64,
    /// Unit of the scalar.
    pub unit: UnitRecord,
}

impl From<&UnitDescriptor> for UnitRecord {
    fn from(descriptor: &UnitDescriptor) -> Self {
        Self {
            coefficient: descriptor.coefficient(),
            constant: descriptor.constant(),
            symbol: descriptor.symbol().to_string(),
        }
    }
}

impl TryFrom<UnitRecord> for UnitDescriptor {
    type Error = MeasureError;

    fn try_from(record: UnitRecord) -> Result<Self> {
        UnitDescriptor::new(record.coefficient, record.constant, record.symbol)
    }
}

impl<U: Unit> From<&Measure<U>> for MeasureRecord {
    fn from(measure: &Measure<U>) -> Self {
        Self {
            value: measure.value(),
            unit: UnitRecord::from(measure.unit().descriptor()),
        }
    }
}

impl<U: Unit> From<Measure<U>> for MeasureRecord {
    fn from(measure: Measure<U>) -> Self {
        Self::from(&measure)
    }
}

impl<U: Unit> TryFrom<MeasureRecord> for Measure<U> {
    type Error = MeasureError;

    fn try_from(record: MeasureRecord) -> Result<Self> {
        let descriptor = UnitDescriptor::try_from(record.unit)?;
        Measure::new(record.value, U::from_descriptor(descriptor))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for UnitDescriptor {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        UnitRecord::from(self).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for UnitDescriptor {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = UnitRecord::deserialize(deserializer)?;
        UnitDescriptor::try_from(record).map_err(de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl<U: Unit> Serialize for Measure<U> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        MeasureRecord::from(self).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> Deserialize<'de> for Measure<U> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = MeasureRecord::deserialize(deserializer)?;
        Measure::try_from(record).map_err(de::Error::custom)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON helpers
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "json")]
impl<U: Unit> Measure<U> {
    /// Encodes this measure as a JSON record.
    ///
    /// A serializer failure yields [`MeasureError::Encode`].
    ///
    /// ```rust
    /// use measures_core::Measure;
    /// use measures_core::time::Time;
    ///
    /// let json = Measure::new(1, Time::SECOND).unwrap().to_json().unwrap();
    /// assert_eq!(json, r#"{"value":1.0,"unit":{"coefficient":1.0,"constant":0.0,"symbol":"s"}}"#);
    /// ```
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&MeasureRecord::from(self))
            .map_err(|err| MeasureError::Encode(err.to_string()))
    }

    /// Decodes a measure from a JSON record.
    ///
    /// Malformed JSON yields [`MeasureError::Decode`]; a negative value or an invalid unit yields the same error as
    /// direct construction.
    pub fn from_json(json: &str) -> Result<Self> {
        let record: MeasureRecord = serde_json::from_str(json).map_err(|err| {
            log::debug!("rejected measure record: {}", err);
            MeasureError::Decode(err.to_string())
        })?;
        Measure::try_from(record)
    }
}
