//! Mass units.
//!
//! The base unit of this quantity kind is [`Mass::KILOGRAM`]. The metric family is built on the gram, so its
//! unprefixed coefficient is `1e-3`.

use crate::UnitDescriptor;
use measures_derive::Unit;

/// A unit of mass.
#[derive(Clone, Debug, PartialEq, Unit)]
#[unit(kind = "mass", base = Self::KILOGRAM)]
pub struct Mass(UnitDescriptor);

/// Kilograms per avoirdupois pound (exact by definition).
pub const KILOGRAMS_PER_POUND: f64 = 0.453_592_37;

impl Mass {
    /// Grams.
    pub const GRAM: Self = Self(UnitDescriptor::from_static(1e-3, 0.0, "g"));

    /// Tonnes (`1_000 kg`).
    pub const TONNE: Self = Self(UnitDescriptor::from_static(1_000.0, 0.0, "t"));

    /// Avoirdupois pound.
    pub const POUND: Self = Self(UnitDescriptor::from_static(KILOGRAMS_PER_POUND, 0.0, "lb"));

    /// Avoirdupois ounce (`1/16 lb`).
    pub const OUNCE: Self = Self(UnitDescriptor::from_static(KILOGRAMS_PER_POUND / 16.0, 0.0, "oz"));
}

crate::metric_units! {
    Mass, 1e-3;
    /// Micrograms.
    MICROGRAM = Micro, "µg";
    /// Milligrams.
    MILLIGRAM = Milli, "mg";
    /// Centigrams.
    CENTIGRAM = Centi, "cg";
    /// Decigrams.
    DECIGRAM = Deci, "dg";
    /// Kilograms (SI base unit).
    KILOGRAM = Kilo, "kg";
    /// Megagrams.
    MEGAGRAM = Mega, "Mg";
}
