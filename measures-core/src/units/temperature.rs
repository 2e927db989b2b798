//! Thermodynamic temperature units.
//!
//! The base unit of this quantity kind is [`ThermodynamicTemperature::KELVIN`]. Celsius and Fahrenheit are affine
//! units: besides the coefficient they carry an additive constant, so that
//!
//! ```text
//! kelvin = value * coefficient + constant
//! ```
//!
//! Because a measure can never be negative, readings below 0 °C or 0 °F cannot be represented in those units.
//!
//! ```rust
//! use measures_core::Measure;
//! use measures_core::temperature::ThermodynamicTemperature;
//!
//! let hot = Measure::new(5, ThermodynamicTemperature::KILOKELVIN).unwrap();
//! let celsius = hot.to(ThermodynamicTemperature::CELSIUS).unwrap();
//! assert_eq!(celsius.to_string(), "4726.85 °C");
//! ```

use crate::UnitDescriptor;
use measures_derive::Unit;

/// A unit of thermodynamic temperature.
#[derive(Clone, Debug, PartialEq, Unit)]
#[unit(kind = "thermodynamic temperature", base = Self::KELVIN)]
pub struct ThermodynamicTemperature(UnitDescriptor);

/// Kelvin value of 0 °C.
pub const CELSIUS_ZERO: f64 = 273.15;

const FAHRENHEIT_DEGREE: f64 = 5.0 / 9.0;

impl ThermodynamicTemperature {
    /// Kelvin (SI base unit).
    pub const KELVIN: Self = Self(UnitDescriptor::from_static(1.0, 0.0, "K"));

    /// Degrees Celsius (`K = °C + 273.15`).
    pub const CELSIUS: Self = Self(UnitDescriptor::from_static(1.0, CELSIUS_ZERO, "°C"));

    /// Degrees Fahrenheit (`K = (°F - 32) * 5/9 + 273.15`).
    pub const FAHRENHEIT: Self = Self(UnitDescriptor::from_static(
        FAHRENHEIT_DEGREE,
        CELSIUS_ZERO - 32.0 * FAHRENHEIT_DEGREE,
        "°F",
    ));

    /// Degrees Rankine (`K = °R * 5/9`).
    pub const RANKINE: Self = Self(UnitDescriptor::from_static(FAHRENHEIT_DEGREE, 0.0, "°R"));
}

crate::metric_units! {
    ThermodynamicTemperature, 1.0;
    /// Nanokelvin.
    NANOKELVIN = Nano, "nK";
    /// Microkelvin.
    MICROKELVIN = Micro, "µK";
    /// Millikelvin.
    MILLIKELVIN = Milli, "mK";
    /// Kilokelvin.
    KILOKELVIN = Kilo, "kK";
    /// Megakelvin.
    MEGAKELVIN = Mega, "MK";
}
