//! Speed units.
//!
//! Speed is a derived kind; its units are length units divided by time units. The constants below spell out the
//! common ones, and [`Unit::divided_by`](crate::Unit::divided_by) builds any other quotient at runtime:
//!
//! ```rust
//! use measures_core::Unit;
//! use measures_core::{length::Length, speed::Speed, time::Time};
//!
//! let mm_per_s: Speed = Length::MILLIMETRE.divided_by(&Time::SECOND);
//! assert_eq!(mm_per_s.symbol(), "mm/s");
//! ```

use crate::UnitDescriptor;
use measures_derive::Unit;

/// A unit of speed.
#[derive(Clone, Debug, PartialEq, Unit)]
#[unit(kind = "speed", base = Self::METRES_PER_SECOND)]
pub struct Speed(UnitDescriptor);

impl Speed {
    /// Metres per second (SI coherent unit).
    pub const METRES_PER_SECOND: Self = Self(UnitDescriptor::from_static(1.0, 0.0, "m/s"));

    /// Kilometres per hour.
    pub const KILOMETRES_PER_HOUR: Self = Self(UnitDescriptor::from_static(1_000.0 / 3_600.0, 0.0, "km/h"));

    /// Miles per hour.
    pub const MILES_PER_HOUR: Self = Self(UnitDescriptor::from_static(1_609.344 / 3_600.0, 0.0, "mi/h"));

    /// Knots (nautical miles per hour).
    pub const KNOT: Self = Self(UnitDescriptor::from_static(1_852.0 / 3_600.0, 0.0, "nmi/h"));
}
