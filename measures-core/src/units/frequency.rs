//! Frequency units.

use crate::UnitDescriptor;
use measures_derive::Unit;

/// A unit of frequency.
#[derive(Clone, Debug, PartialEq, Unit)]
#[unit(kind = "frequency", base = Self::HERTZ)]
pub struct Frequency(UnitDescriptor);

impl Frequency {
    /// Hertz (`1/s`).
    pub const HERTZ: Self = Self(UnitDescriptor::from_static(1.0, 0.0, "Hz"));

    /// Revolutions per minute.
    pub const REVOLUTIONS_PER_MINUTE: Self = Self(UnitDescriptor::from_static(1.0 / 60.0, 0.0, "rpm"));
}

crate::metric_units! {
    Frequency, 1.0;
    /// Millihertz.
    MILLIHERTZ = Milli, "mHz";
    /// Kilohertz.
    KILOHERTZ = Kilo, "kHz";
    /// Megahertz.
    MEGAHERTZ = Mega, "MHz";
    /// Gigahertz.
    GIGAHERTZ = Giga, "GHz";
    /// Terahertz.
    TERAHERTZ = Tera, "THz";
}
