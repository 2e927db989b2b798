//! Volume units.
//!
//! The base unit of this quantity kind is [`Volume::CUBIC_METRE`]. The litre family is built on `1 L = 1e-3 m³`.

use crate::UnitDescriptor;
use measures_derive::Unit;

/// A unit of volume.
#[derive(Clone, Debug, PartialEq, Unit)]
#[unit(kind = "volume", base = Self::CUBIC_METRE)]
pub struct Volume(UnitDescriptor);

impl Volume {
    /// Cubic metres (SI coherent unit).
    pub const CUBIC_METRE: Self = Self(UnitDescriptor::from_static(1.0, 0.0, "m³"));

    /// Cubic decimetres (`1 L`).
    pub const CUBIC_DECIMETRE: Self = Self(UnitDescriptor::from_static(1e-3, 0.0, "dm³"));

    /// Cubic centimetres (`1 mL`).
    pub const CUBIC_CENTIMETRE: Self = Self(UnitDescriptor::from_static(1e-6, 0.0, "cm³"));

    /// Litres.
    pub const LITRE: Self = Self(UnitDescriptor::from_static(1e-3, 0.0, "L"));
}

crate::metric_units! {
    Volume, 1e-3;
    /// Microlitres.
    MICROLITRE = Micro, "µL";
    /// Millilitres.
    MILLILITRE = Milli, "mL";
    /// Centilitres.
    CENTILITRE = Centi, "cL";
    /// Decilitres.
    DECILITRE = Deci, "dL";
    /// Hectolitres.
    HECTOLITRE = Hecto, "hL";
}
