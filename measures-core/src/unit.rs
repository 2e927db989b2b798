//! The unit capability and the affine conversion functions built on it.

use crate::descriptor::UnitDescriptor;
use crate::magnitude::Magnitude;
use core::fmt::Debug;

/// Trait implemented by every **quantity kind** (time, length, temperature, …).
///
/// A value of a quantity-kind type is one unit of that kind: it exposes a [`UnitDescriptor`] (coefficient, constant,
/// symbol) and the kind nominates one of its units as [`Unit::base`], the pivot every conversion is routed through.
///
/// Quantity kinds inside this crate are newtypes over [`UnitDescriptor`] deriving `Unit`; external kinds implement
/// the trait by hand.
///
/// # Invariants
///
/// - `coefficient() > 0` and finite for every value of the type.
/// - `base()` returns the same unit every time it is called.
///
/// # Example
///
/// ```rust
/// use measures_core::{Measure, Unit, UnitDescriptor};
///
/// #[derive(Clone, Debug, PartialEq)]
/// pub struct FuelEfficiency(UnitDescriptor);
///
/// impl FuelEfficiency {
///     pub const KILOMETRES_PER_LITRE: Self = Self(UnitDescriptor::from_static(1e6, 0.0, "km/L"));
///     pub const METRES_PER_LITRE: Self = Self(UnitDescriptor::from_static(1e3, 0.0, "m/L"));
/// }
///
/// impl Unit for FuelEfficiency {
///     const KIND: &'static str = "fuel efficiency";
///     fn base() -> Self { Self::KILOMETRES_PER_LITRE }
///     fn descriptor(&self) -> &UnitDescriptor { &self.0 }
///     fn from_descriptor(descriptor: UnitDescriptor) -> Self { Self(descriptor) }
/// }
///
/// let m = Measure::new(5, FuelEfficiency::KILOMETRES_PER_LITRE).unwrap();
/// let m = m.to(FuelEfficiency::METRES_PER_LITRE).unwrap();
/// assert_eq!(m.to_string(), "5000 m/L");
/// ```
pub trait Unit: Clone + PartialEq + Debug + 'static {
    /// Human-readable quantity-kind name, used in diagnostics.
    const KIND: &'static str;

    /// The nominated base unit of this quantity kind.
    fn base() -> Self;

    /// Coefficient, constant and symbol of this unit.
    fn descriptor(&self) -> &UnitDescriptor;

    /// Wraps a descriptor as a unit of this quantity kind.
    ///
    /// Used when decoding and when deriving units; the descriptor is assumed to be valid.
    fn from_descriptor(descriptor: UnitDescriptor) -> Self;

    /// Multiplicative factor to the base unit.
    #[inline]
    fn coefficient(&self) -> f64 {
        self.descriptor().coefficient()
    }

    /// Additive offset to the base unit.
    #[inline]
    fn constant(&self) -> f64 {
        self.descriptor().constant()
    }

    /// Printable symbol.
    #[inline]
    fn symbol(&self) -> &str {
        self.descriptor().symbol()
    }

    /// Whether this unit is the nominated base unit.
    fn is_base(&self) -> bool {
        *self == Self::base()
    }

    /// Prefixed unit of the same kind (`kilo` × `metre` → `km`).
    ///
    /// The result never carries an additive constant.
    fn with_magnitude(&self, magnitude: Magnitude) -> Self {
        Self::from_descriptor(self.descriptor().with_magnitude(magnitude))
    }

    /// Quotient unit of another quantity kind (`km` per `h` → a speed unit).
    ///
    /// This builds unit constants; it is not an operator on measured values.
    fn divided_by<D: Unit, Q: Unit>(&self, denominator: &D) -> Q {
        Q::from_descriptor(self.descriptor().per(denominator.descriptor()))
    }
}

/// Expresses `value` (in `unit`) in the base unit of its quantity kind.
#[inline]
pub fn to_base<U: Unit>(value: f64, unit: &U) -> f64 {
    unit.descriptor().to_base(value)
}

/// Expresses `value_in_base` (in the base unit) in `unit`.
#[inline]
pub fn from_base<U: Unit>(value_in_base: f64, unit: &U) -> f64 {
    unit.descriptor().from_base(value_in_base)
}

/// Converts a raw scalar between two units of the same quantity kind.
///
/// ```rust
/// use measures_core::convert;
/// use measures_core::temperature::ThermodynamicTemperature;
///
/// let c = convert(5.0, &ThermodynamicTemperature::KILOKELVIN, &ThermodynamicTemperature::CELSIUS);
/// assert!((c - 4726.85).abs() < 1e-9);
/// ```
#[inline]
pub fn convert<U: Unit>(value: f64, from: &U, to: &U) -> f64 {
    if from == to {
        return value;
    }
    from_base(to_base(value, from), to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::Length;
    use crate::units::speed::Speed;
    use crate::units::temperature::ThermodynamicTemperature;
    use crate::units::time::Time;
    use approx::assert_abs_diff_eq;

    #[test]
    fn base_is_nominated_unit() {
        assert_eq!(Time::base(), Time::SECOND);
        assert!(Time::SECOND.is_base());
        assert!(!Time::MINUTE.is_base());
    }

    #[test]
    fn accessors_forward_to_descriptor() {
        let celsius = ThermodynamicTemperature::CELSIUS;
        assert_eq!(celsius.coefficient(), 1.0);
        assert_eq!(celsius.constant(), 273.15);
        assert_eq!(celsius.symbol(), "°C");
    }

    #[test]
    fn free_functions_apply_affine_map() {
        let celsius = ThermodynamicTemperature::CELSIUS;
        assert_abs_diff_eq!(to_base(100.0, &celsius), 373.15, epsilon = 1e-12);
        assert_abs_diff_eq!(from_base(373.15, &celsius), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn convert_same_unit_is_identity() {
        let v = 0.1 + 0.2;
        assert_eq!(convert(v, &ThermodynamicTemperature::CELSIUS, &ThermodynamicTemperature::CELSIUS), v);
    }

    #[test]
    fn convert_between_offset_units() {
        let f = convert(
            100.0,
            &ThermodynamicTemperature::CELSIUS,
            &ThermodynamicTemperature::FAHRENHEIT,
        );
        assert_abs_diff_eq!(f, 212.0, epsilon = 1e-9);
    }

    #[test]
    fn with_magnitude_builds_family_member() {
        let km = Length::METRE.with_magnitude(Magnitude::Kilo);
        assert_eq!(km, Length::KILOMETRE);
    }

    #[test]
    fn divided_by_builds_other_kind() {
        let kmh: Speed = Length::KILOMETRE.divided_by(&Time::HOUR);
        assert_eq!(kmh, Speed::KILOMETRES_PER_HOUR);
    }
}
