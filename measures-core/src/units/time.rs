//! Time units.
//!
//! The base unit of this quantity kind is [`Time::SECOND`]. Civil units use the conventional mapping
//! `1 day = 86_400 s` (leap seconds ignored).
//!
//! ```rust
//! use measures_core::Measure;
//! use measures_core::time::Time;
//!
//! let half_hour = Measure::new(0.5, Time::HOUR).unwrap();
//! let seconds = half_hour.to(Time::SECOND).unwrap();
//! assert!((seconds.value() - 1800.0).abs() < 1e-12);
//! ```

use crate::UnitDescriptor;
use measures_derive::Unit;

/// A unit of time.
#[derive(Clone, Debug, PartialEq, Unit)]
#[unit(kind = "time", base = Self::SECOND)]
pub struct Time(UnitDescriptor);

/// Conventional civil mapping used by this module: seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

impl Time {
    /// Seconds (SI base unit).
    pub const SECOND: Self = Self(UnitDescriptor::from_static(1.0, 0.0, "s"));

    /// Minutes (`60 s`).
    pub const MINUTE: Self = Self(UnitDescriptor::from_static(60.0, 0.0, "min"));

    /// Hours (`3_600 s`).
    pub const HOUR: Self = Self(UnitDescriptor::from_static(3_600.0, 0.0, "h"));

    /// Days (`86_400 s`).
    pub const DAY: Self = Self(UnitDescriptor::from_static(SECONDS_PER_DAY, 0.0, "d"));

    /// Weeks (`7 d`).
    pub const WEEK: Self = Self(UnitDescriptor::from_static(7.0 * SECONDS_PER_DAY, 0.0, "wk"));
}

crate::metric_units! {
    Time, 1.0;
    /// Picoseconds.
    PICOSECOND = Pico, "ps";
    /// Nanoseconds.
    NANOSECOND = Nano, "ns";
    /// Microseconds.
    MICROSECOND = Micro, "µs";
    /// Milliseconds.
    MILLISECOND = Milli, "ms";
    /// Centiseconds.
    CENTISECOND = Centi, "cs";
    /// Deciseconds.
    DECISECOND = Deci, "ds";
    /// Kiloseconds.
    KILOSECOND = Kilo, "ks";
    /// Megaseconds.
    MEGASECOND = Mega, "Ms";
    /// Gigaseconds.
    GIGASECOND = Giga, "Gs";
}
