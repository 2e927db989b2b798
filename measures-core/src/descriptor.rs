//! The runtime description of a unit: an affine map to the base unit of its quantity kind.

use crate::error::{MeasureError, Result};
use crate::magnitude::Magnitude;
use alloc::borrow::Cow;
use alloc::format;

/// Coefficient, constant and symbol of a unit.
///
/// A descriptor represents the affine map `to_base(v) = v * coefficient + constant` and its inverse
/// `from_base(v) = (v - constant) / coefficient`. The coefficient is always positive and finite, so both directions
/// are well defined.
///
/// Quantity kinds wrap a descriptor in a newtype (see [`Unit`](crate::Unit)); the descriptor alone carries no
/// quantity-kind information.
///
/// ```rust
/// use measures_core::UnitDescriptor;
///
/// let celsius = UnitDescriptor::new(1.0, 273.15, "°C").unwrap();
/// assert!((celsius.to_base(100.0) - 373.15).abs() < 1e-12);
/// assert!((celsius.from_base(273.15)).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UnitDescriptor {
    coefficient: f64,
    constant: f64,
    symbol: Cow<'static, str>,
}

impl UnitDescriptor {
    /// Builds a descriptor usable in `const` unit tables.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) if `coefficient` is not positive and finite or `constant` is
    /// not finite.
    #[inline]
    pub const fn from_static(coefficient: f64, constant: f64, symbol: &'static str) -> Self {
        assert!(
            coefficient > 0.0 && coefficient < f64::INFINITY,
            "unit coefficient must be positive and finite"
        );
        assert!(
            constant > f64::NEG_INFINITY && constant < f64::INFINITY,
            "unit constant must be finite"
        );
        Self {
            coefficient,
            constant,
            symbol: Cow::Borrowed(symbol),
        }
    }

    /// Builds a prefixed descriptor usable in `const` unit tables.
    ///
    /// The coefficient is `magnitude.coefficient() * coefficient` and the constant is `0`. The full symbol has to be
    /// spelled out because `const` evaluation cannot concatenate strings; [`UnitDescriptor::with_magnitude`] derives
    /// it at runtime.
    #[inline]
    pub const fn from_magnitude(magnitude: Magnitude, coefficient: f64, symbol: &'static str) -> Self {
        Self::from_static(magnitude.coefficient() * coefficient, 0.0, symbol)
    }

    /// Builds a validated descriptor.
    ///
    /// ```rust
    /// use measures_core::{MeasureError, UnitDescriptor};
    ///
    /// assert!(UnitDescriptor::new(1000.0, 0.0, "km").is_ok());
    /// assert!(matches!(
    ///     UnitDescriptor::new(0.0, 0.0, "broken"),
    ///     Err(MeasureError::InvalidCoefficient { .. })
    /// ));
    /// ```
    pub fn new(
        coefficient: f64,
        constant: f64,
        symbol: impl Into<Cow<'static, str>>,
    ) -> Result<Self> {
        let symbol = symbol.into();

        if !(coefficient > 0.0 && coefficient.is_finite()) {
            log::debug!("rejected unit `{}`: coefficient {}", symbol, coefficient);
            return Err(MeasureError::InvalidCoefficient {
                symbol: symbol.into_owned(),
                coefficient,
            });
        }
        if !constant.is_finite() {
            log::debug!("rejected unit `{}`: constant {}", symbol, constant);
            return Err(MeasureError::InvalidConstant {
                symbol: symbol.into_owned(),
                constant,
            });
        }

        Ok(Self {
            coefficient,
            constant,
            symbol,
        })
    }

    /// Multiplicative factor to the base unit.
    #[inline]
    pub const fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Additive offset to the base unit.
    #[inline]
    pub const fn constant(&self) -> f64 {
        self.constant
    }

    /// Printable symbol.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Expresses `value` (in this unit) in the base unit.
    #[inline]
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.coefficient + self.constant
    }

    /// Expresses `value_in_base` (in the base unit) in this unit.
    #[inline]
    pub fn from_base(&self, value_in_base: f64) -> f64 {
        (value_in_base - self.constant) / self.coefficient
    }

    /// Derives a prefixed unit.
    ///
    /// The constant of the result is always `0`, even when `self` carries an offset.
    ///
    /// ```rust
    /// use measures_core::{Magnitude, UnitDescriptor};
    ///
    /// let gram = UnitDescriptor::new(1e-3, 0.0, "g").unwrap();
    /// let milligram = gram.with_magnitude(Magnitude::Milli);
    /// assert_eq!(milligram.symbol(), "mg");
    /// assert!((milligram.coefficient() - 1e-6).abs() < 1e-18);
    /// ```
    pub fn with_magnitude(&self, magnitude: Magnitude) -> Self {
        let symbol = if magnitude.symbol().is_empty() {
            self.symbol.clone()
        } else {
            Cow::Owned(format!("{}{}", magnitude.symbol(), self.symbol))
        };

        Self {
            coefficient: magnitude.coefficient() * self.coefficient,
            constant: 0.0,
            symbol,
        }
    }

    /// Derives the quotient unit `self / denominator` (e.g. `km` per `h`).
    ///
    /// ```rust
    /// use measures_core::UnitDescriptor;
    ///
    /// let km = UnitDescriptor::new(1000.0, 0.0, "km").unwrap();
    /// let h = UnitDescriptor::new(3600.0, 0.0, "h").unwrap();
    /// let kmh = km.per(&h);
    /// assert_eq!(kmh.symbol(), "km/h");
    /// assert_eq!(kmh.coefficient(), 1000.0 / 3600.0);
    /// ```
    pub fn per(&self, denominator: &UnitDescriptor) -> Self {
        Self {
            coefficient: self.coefficient / denominator.coefficient,
            constant: 0.0,
            symbol: Cow::Owned(format!("{}/{}", self.symbol, denominator.symbol)),
        }
    }

    /// Same descriptor with another symbol.
    pub fn with_symbol(&self, symbol: impl Into<Cow<'static, str>>) -> Self {
        Self {
            coefficient: self.coefficient,
            constant: self.constant,
            symbol: symbol.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    const KELVIN: UnitDescriptor = UnitDescriptor::from_static(1.0, 0.0, "K");
    const CELSIUS: UnitDescriptor = UnitDescriptor::from_static(1.0, 273.15, "°C");
    const KILOMETRE: UnitDescriptor = UnitDescriptor::from_magnitude(Magnitude::Kilo, 1.0, "km");

    #[test]
    fn affine_map() {
        assert_abs_diff_eq!(CELSIUS.to_base(0.0), 273.15);
        assert_abs_diff_eq!(CELSIUS.from_base(373.15), 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(KILOMETRE.to_base(2.5), 2500.0);
        assert_abs_diff_eq!(KILOMETRE.from_base(2500.0), 2.5);
    }

    #[test]
    fn new_rejects_bad_coefficients() {
        for coefficient in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = UnitDescriptor::new(coefficient, 0.0, "x").unwrap_err();
            assert!(matches!(err, MeasureError::InvalidCoefficient { .. }));
        }
    }

    #[test]
    fn new_rejects_non_finite_constant() {
        let err = UnitDescriptor::new(1.0, f64::NAN, "x").unwrap_err();
        assert!(matches!(err, MeasureError::InvalidConstant { .. }));
    }

    #[test]
    fn new_accepts_owned_symbol() {
        let symbol = alloc::string::String::from("km/L");
        let unit = UnitDescriptor::new(1000.0, 0.0, symbol).unwrap();
        assert_eq!(unit.symbol(), "km/L");
    }

    #[test]
    fn magnitude_matches_const_table() {
        let meter = UnitDescriptor::from_static(1.0, 0.0, "m");
        assert_eq!(meter.with_magnitude(Magnitude::Kilo), KILOMETRE);
    }

    #[test]
    fn magnitude_drops_constant() {
        let kilo_celsius = CELSIUS.with_magnitude(Magnitude::Kilo);
        assert_eq!(kilo_celsius.constant(), 0.0);
        assert_eq!(kilo_celsius.coefficient(), 1000.0);
        assert_eq!(kilo_celsius.symbol(), "k°C");
    }

    #[test]
    fn unity_magnitude_keeps_symbol() {
        let same = KELVIN.with_magnitude(Magnitude::Unity);
        assert_eq!(same, KELVIN);
    }

    #[test]
    fn per_composes_symbol_and_coefficient() {
        let hour = UnitDescriptor::from_static(3600.0, 0.0, "h");
        let speed = KILOMETRE.per(&hour);
        assert_eq!(speed.symbol(), "km/h");
        assert_eq!(speed.constant(), 0.0);
        assert_abs_diff_eq!(speed.coefficient(), 1000.0 / 3600.0);
    }

    #[test]
    fn per_ignores_constants() {
        let per_second = CELSIUS.per(&UnitDescriptor::from_static(1.0, 0.0, "s"));
        assert_eq!(per_second.constant(), 0.0);
    }

    #[test]
    fn equality_requires_identical_triplet() {
        assert_ne!(KELVIN, KELVIN.with_symbol("kelvin"));
        assert_ne!(KELVIN, CELSIUS);
        assert_eq!(KELVIN, UnitDescriptor::new(1.0, 0.0, "K").unwrap());
    }

    proptest! {
        #[test]
        fn prop_roundtrip(v in 0.0..1e9f64, coefficient in 1e-6..1e6f64, constant in -1e3..1e3f64) {
            let unit = UnitDescriptor::new(coefficient, constant, "u").unwrap();
            let back = unit.from_base(unit.to_base(v));
            prop_assert!((back - v).abs() <= 1e-9 * v.max(1.0) * coefficient.max(1.0 / coefficient));
        }
    }
}
