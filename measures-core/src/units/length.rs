//! Length units.
//!
//! The base unit of this quantity kind is [`Length::METRE`]. Imperial units use the international definitions
//! (`1 in = 25.4 mm` exactly).

use crate::UnitDescriptor;
use measures_derive::Unit;

/// A unit of length.
#[derive(Clone, Debug, PartialEq, Unit)]
#[unit(kind = "length", base = Self::METRE)]
pub struct Length(UnitDescriptor);

impl Length {
    /// Metres (SI base unit).
    pub const METRE: Self = Self(UnitDescriptor::from_static(1.0, 0.0, "m"));

    /// International inch (`0.0254 m`).
    pub const INCH: Self = Self(UnitDescriptor::from_static(0.0254, 0.0, "in"));

    /// International foot (`12 in`).
    pub const FOOT: Self = Self(UnitDescriptor::from_static(0.3048, 0.0, "ft"));

    /// International yard (`3 ft`).
    pub const YARD: Self = Self(UnitDescriptor::from_static(0.9144, 0.0, "yd"));

    /// International mile (`1_760 yd`).
    pub const MILE: Self = Self(UnitDescriptor::from_static(1_609.344, 0.0, "mi"));

    /// Nautical mile (`1_852 m`).
    pub const NAUTICAL_MILE: Self = Self(UnitDescriptor::from_static(1_852.0, 0.0, "nmi"));
}

crate::metric_units! {
    Length, 1.0;
    /// Nanometres.
    NANOMETRE = Nano, "nm";
    /// Micrometres.
    MICROMETRE = Micro, "µm";
    /// Millimetres.
    MILLIMETRE = Milli, "mm";
    /// Centimetres.
    CENTIMETRE = Centi, "cm";
    /// Decimetres.
    DECIMETRE = Deci, "dm";
    /// Decametres.
    DECAMETRE = Deca, "dam";
    /// Hectometres.
    HECTOMETRE = Hecto, "hm";
    /// Kilometres.
    KILOMETRE = Kilo, "km";
    /// Megametres.
    MEGAMETRE = Mega, "Mm";
}
