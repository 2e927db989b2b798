//! Measure type and its implementations.

use crate::error::{MeasureError, Result};
use crate::unit::{from_base, to_base, Unit};
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, RangeInclusive, Sub, SubAssign};

/// A non-negative scalar tagged with a unit of quantity kind `U`.
///
/// The type parameter keeps quantity kinds apart at compile time: a `Measure<Time>` can never be added to or compared
/// with a `Measure<Length>`. Within a kind, operands may use different units; every operation routes through the
/// base unit of `U`.
///
/// `==` compares the literal `(value, unit)` pair. Use [`Measure::is_equivalent`] to compare physical amounts.
///
/// # Examples
///
/// ```rust
/// use measures_core::Measure;
/// use measures_core::time::Time;
///
/// let a = Measure::new(1, Time::MINUTE).unwrap();
/// let b = Measure::new(60, Time::SECOND).unwrap();
/// assert!(a.is_equivalent(&b));
/// assert_ne!(a, b);
///
/// let sum = a.checked_add(&b).unwrap();
/// assert_eq!(sum.to_string(), "2 min");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Measure<U: Unit> {
    value: f64,
    unit: U,
}

impl<U: Unit> Measure<U> {
    /// Creates a measure, rejecting negative and NaN values.
    ///
    /// ```rust
    /// use measures_core::Measure;
    /// use measures_core::length::Length;
    ///
    /// assert!(Measure::new(3.5, Length::METRE).is_ok());
    /// assert!(Measure::new(-1, Length::METRE).unwrap_err().is_invalid_value());
    /// ```
    pub fn new<V: Into<f64>>(value: V, unit: U) -> Result<Self> {
        let value = value.into();
        check_value::<U>(value)?;
        Ok(Self { value, unit })
    }

    /// Creates a measure in the base unit of `U`.
    pub fn in_base<V: Into<f64>>(value: V) -> Result<Self> {
        Self::new(value, U::base())
    }

    /// A zero measure in `unit`.
    #[inline]
    pub fn zero(unit: U) -> Self {
        Self { value: 0.0, unit }
    }

    /// Returns the raw scalar, expressed in [`Measure::unit`].
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the unit.
    #[inline]
    pub fn unit(&self) -> &U {
        &self.unit
    }

    /// Splits the measure into scalar and unit.
    #[inline]
    pub fn into_parts(self) -> (f64, U) {
        (self.value, self.unit)
    }

    /// The scalar expressed in the base unit of `U`.
    #[inline]
    pub fn base_value(&self) -> f64 {
        to_base(self.value, &self.unit)
    }

    /// Size of the terms that make up [`Measure::base_value`]; bounds its rounding error.
    fn base_magnitude(&self) -> f64 {
        abs(self.base_value()) + abs(self.unit.constant())
    }

    /// Sum of two measures, expressed in `self`'s unit.
    ///
    /// Fails only if the result would be negative, which can happen with units whose constant is negative.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        let value = settle(
            self.base_value() + other.base_value(),
            self.base_magnitude() + other.base_magnitude(),
            &self.unit,
        )?;
        Ok(Self {
            value,
            unit: self.unit.clone(),
        })
    }

    /// Difference of two measures, expressed in `self`'s unit.
    ///
    /// ```rust
    /// use measures_core::Measure;
    /// use measures_core::time::Time;
    ///
    /// let minute = Measure::new(1, Time::MINUTE).unwrap();
    /// let seconds = Measure::new(30, Time::SECOND).unwrap();
    /// assert_eq!(minute.checked_sub(&seconds).unwrap().value(), 0.5);
    /// assert!(seconds.checked_sub(&minute).is_err());
    /// ```
    ///
    /// A difference that is zero up to floating-point rounding is reported as exactly `0`, so `(a + b) - b` never
    /// fails for a zero `a`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        let value = settle(
            self.base_value() - other.base_value(),
            self.base_magnitude() + other.base_magnitude(),
            &self.unit,
        )?;
        Ok(Self {
            value,
            unit: self.unit.clone(),
        })
    }

    /// Subtracts `other` in place. On failure `self` is left unchanged.
    pub fn subtract(&mut self, other: &Self) -> Result<()> {
        let difference = self.checked_sub(other)?;
        self.value = difference.value;
        Ok(())
    }

    /// Compares the amounts of two measures through their base values.
    ///
    /// Returns `None` only when a base value is not comparable (e.g. both operands infinite in units with different
    /// scales produce NaN).
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        self.base_value().partial_cmp(&other.base_value())
    }

    /// `self < other`, by amount.
    pub fn is_less_than(&self, other: &Self) -> bool {
        matches!(self.compare(other), Some(Ordering::Less))
    }

    /// `self <= other`, by amount.
    pub fn is_less_than_or_equal(&self, other: &Self) -> bool {
        matches!(self.compare(other), Some(Ordering::Less | Ordering::Equal))
    }

    /// `self > other`, by amount.
    pub fn is_greater_than(&self, other: &Self) -> bool {
        matches!(self.compare(other), Some(Ordering::Greater))
    }

    /// `self >= other`, by amount.
    pub fn is_greater_than_or_equal(&self, other: &Self) -> bool {
        matches!(self.compare(other), Some(Ordering::Greater | Ordering::Equal))
    }

    /// Whether `lower <= self <= upper`, by amount.
    ///
    /// ```rust
    /// use measures_core::Measure;
    /// use measures_core::time::Time;
    ///
    /// let t = Measure::new(90, Time::SECOND).unwrap();
    /// let lower = Measure::new(1, Time::MINUTE).unwrap();
    /// let upper = Measure::new(2, Time::MINUTE).unwrap();
    /// assert!(t.is_within(&lower, &upper));
    /// ```
    pub fn is_within(&self, lower: &Self, upper: &Self) -> bool {
        self.is_greater_than_or_equal(lower) && self.is_less_than_or_equal(upper)
    }

    /// Whether `self` lies in the closed range, by amount.
    pub fn is_within_range(&self, range: &RangeInclusive<Self>) -> bool {
        self.is_within(range.start(), range.end())
    }

    /// Whether both measures denote the same amount (exact equality of base values).
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.base_value() == other.base_value()
    }

    /// Whether both base values differ by at most `tolerance` (in base units).
    pub fn is_equivalent_within(&self, other: &Self, tolerance: f64) -> bool {
        abs(self.base_value() - other.base_value()) <= tolerance
    }

    /// Converts this measure to `unit` in place.
    ///
    /// Converting to the current unit leaves the value untouched. If the converted value would be negative (e.g. a
    /// small kelvin value expressed in celsius) the measure is left unchanged and an error is returned.
    ///
    /// ```rust
    /// use measures_core::Measure;
    /// use measures_core::speed::Speed;
    ///
    /// let mut v = Measure::new(5, Speed::KILOMETRES_PER_HOUR).unwrap();
    /// v.convert(Speed::METRES_PER_SECOND).unwrap();
    /// assert_eq!(v.to_string(), "1.3888888888888888 m/s");
    /// ```
    pub fn convert(&mut self, unit: U) -> Result<()> {
        if unit == self.unit {
            return Ok(());
        }

        let value = settle(self.base_value(), self.base_magnitude(), &unit)?;
        log::trace!(
            "converting {} {} to {} {}",
            self.value,
            self.unit.symbol(),
            value,
            unit.symbol()
        );

        self.value = value;
        self.unit = unit;
        Ok(())
    }

    /// Returns this measure converted to `unit`.
    pub fn to(&self, unit: U) -> Result<Self> {
        let mut converted = self.clone();
        converted.convert(unit)?;
        Ok(converted)
    }

    /// Returns this measure expressed in the base unit of `U`.
    pub fn to_base_unit(&self) -> Result<Self> {
        self.to(U::base())
    }
}

/// Relative rounding error, in ulps of the operands, absorbed when a result lands just below zero.
const ROUNDING_ULPS: f64 = 8.0;

/// Expresses `value_in_base` in `unit`.
///
/// `magnitude` is the size of the base-unit terms that produced `value_in_base`. A negative result no larger than
/// their rounding error is an exact zero that rounding pushed below it, and becomes `0`; anything more negative is
/// rejected.
fn settle<U: Unit>(value_in_base: f64, magnitude: f64, unit: &U) -> Result<f64> {
    let value = from_base(value_in_base, unit);
    if value < 0.0 {
        let tolerance =
            ROUNDING_ULPS * f64::EPSILON * (magnitude + abs(unit.constant())) / unit.coefficient();
        if -value <= tolerance {
            log::trace!("rounding {} {} up to zero", value, unit.symbol());
            return Ok(0.0);
        }
    }
    check_value::<U>(value)?;
    Ok(value)
}

fn check_value<U: Unit>(value: f64) -> Result<()> {
    if value >= 0.0 {
        return Ok(());
    }
    log::debug!("rejected {} measure with value {}", U::KIND, value);
    Err(MeasureError::InvalidValue {
        kind: U::KIND,
        value,
    })
}

#[inline]
fn abs(value: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        value.abs()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::fabs(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

/// # Panics
///
/// Panics if the sum is negative. Use [`Measure::checked_add`] to handle that case.
impl<U: Unit> Add for Measure<U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.checked_add(&rhs).unwrap_or_else(|err| panic!("{}", err))
    }
}

impl<U: Unit> AddAssign for Measure<U> {
    fn add_assign(&mut self, rhs: Self) {
        match self.checked_add(&rhs) {
            Ok(sum) => self.value = sum.value,
            Err(err) => panic!("{}", err),
        }
    }
}

/// # Panics
///
/// Panics if the difference is negative. Use [`Measure::checked_sub`] to handle that case.
impl<U: Unit> Sub for Measure<U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(&rhs).unwrap_or_else(|err| panic!("{}", err))
    }
}

impl<U: Unit> SubAssign for Measure<U> {
    fn sub_assign(&mut self, rhs: Self) {
        if let Err(err) = self.subtract(&rhs) {
            panic!("{}", err);
        }
    }
}

/// Formats as `"<value> <symbol>"`, using Rust's shortest round-trip formatting for the value: whole numbers print
/// without a fractional part (`4 s`, not `4.0 s`). Use a precision (`{:.1}`) for a fixed number of decimals.
impl<U: Unit> fmt::Display for Measure<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {}", precision, self.value, self.unit.symbol()),
            None => write!(f, "{} {}", self.value, self.unit.symbol()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::Length;
    use crate::units::mass::Mass;
    use crate::units::speed::Speed;
    use crate::units::temperature::ThermodynamicTemperature;
    use crate::units::time::Time;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn time(value: f64, unit: Time) -> Measure<Time> {
        Measure::new(value, unit).unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn new_accepts_integers_and_floats() {
        assert_eq!(Measure::new(4, Time::SECOND).unwrap().value(), 4.0);
        assert_eq!(Measure::new(2.5f32, Time::SECOND).unwrap().value(), 2.5);
        assert_eq!(Measure::new(7u8, Time::SECOND).unwrap().value(), 7.0);
    }

    #[test]
    fn new_accepts_zero() {
        assert_eq!(Measure::new(0.0, Time::SECOND).unwrap(), Measure::zero(Time::SECOND));
    }

    #[test]
    fn new_rejects_negative_and_nan() {
        let err = Measure::new(-0.5, Time::SECOND).unwrap_err();
        assert_eq!(
            err,
            MeasureError::InvalidValue {
                kind: "time",
                value: -0.5
            }
        );
        assert!(Measure::new(f64::NAN, Time::SECOND).is_err());
    }

    #[test]
    fn in_base_uses_nominated_unit() {
        let m = Measure::<Length>::in_base(3).unwrap();
        assert_eq!(m.unit(), &Length::METRE);
    }

    #[test]
    fn into_parts_returns_value_and_unit() {
        let (value, unit) = time(3.0, Time::HOUR).into_parts();
        assert_eq!(value, 3.0);
        assert_eq!(unit, Time::HOUR);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Addition and subtraction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn add_same_unit() {
        let sum = time(2.0, Time::SECOND) + time(4.0, Time::SECOND);
        assert_eq!(sum, time(6.0, Time::SECOND));
    }

    #[test]
    fn add_keeps_left_unit() {
        let sum = time(1.0, Time::MINUTE).checked_add(&time(30.0, Time::SECOND)).unwrap();
        assert_eq!(sum.unit(), &Time::MINUTE);
        assert_abs_diff_eq!(sum.value(), 1.5);
    }

    #[test]
    fn add_assign() {
        let mut sum = time(2.0, Time::SECOND);
        sum += time(4.0, Time::SECOND);
        assert_eq!(sum, time(6.0, Time::SECOND));
    }

    #[test]
    fn sub_same_unit() {
        let difference = time(6.0, Time::SECOND) - time(4.0, Time::SECOND);
        assert_eq!(difference, time(2.0, Time::SECOND));
    }

    #[test]
    fn sub_assign() {
        let mut difference = time(6.0, Time::SECOND);
        difference -= time(4.0, Time::SECOND);
        assert_eq!(difference, time(2.0, Time::SECOND));
    }

    #[test]
    fn subtract_in_place() {
        let mut difference = time(6.0, Time::SECOND);
        difference.subtract(&time(4.0, Time::SECOND)).unwrap();
        assert_eq!(difference, time(2.0, Time::SECOND));
    }

    #[test]
    fn zero_plus_b_minus_b_is_zero() {
        let zero = time(0.0, Time::NANOSECOND);
        let b = time(935.5115346038115, Time::HOUR);
        let sum = zero.checked_add(&b).unwrap();
        let back = sum.checked_sub(&b).unwrap();
        assert_eq!(back.unit(), &Time::NANOSECOND);
        assert_eq!(back.value(), 0.0);

        let mut in_place = sum.clone();
        in_place -= b.clone();
        assert_eq!(in_place.value(), 0.0);
        assert_eq!((sum - b).value(), 0.0);
    }

    #[test]
    fn rounding_does_not_hide_real_deficit() {
        let almost = time(3_367_841.5, Time::SECOND);
        let b = time(935.5115346038115, Time::HOUR);
        let err = almost.checked_sub(&b).unwrap_err();
        assert!(err.is_invalid_value());
    }

    #[test]
    fn subtract_below_zero_fails_and_keeps_value() {
        let mut m = time(4.0, Time::SECOND);
        let err = m.subtract(&time(1.0, Time::MINUTE)).unwrap_err();
        assert!(err.is_invalid_value());
        assert_eq!(m, time(4.0, Time::SECOND));
    }

    #[test]
    #[should_panic(expected = "cannot be negative")]
    fn sub_operator_panics_below_zero() {
        let _ = time(4.0, Time::SECOND) - time(1.0, Time::MINUTE);
    }

    #[test]
    fn add_affine_units_in_base() {
        let a = Measure::new(10.0, ThermodynamicTemperature::CELSIUS).unwrap();
        let b = Measure::new(10.0, ThermodynamicTemperature::KELVIN).unwrap();
        let sum = a.checked_add(&b).unwrap();
        // 283.15 K + 10 K = 293.15 K = 20 °C
        assert_abs_diff_eq!(sum.value(), 20.0, epsilon = 1e-9);
        assert_eq!(sum.unit(), &ThermodynamicTemperature::CELSIUS);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Comparison
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn ordering_uses_base_values() {
        let four_seconds = time(4.0, Time::SECOND);
        let one_minute = time(1.0, Time::MINUTE);
        assert!(four_seconds.is_less_than(&one_minute));
        assert!(one_minute.is_greater_than(&four_seconds));
        assert_eq!(four_seconds.compare(&one_minute), Some(Ordering::Less));
    }

    #[test]
    fn less_and_greater_or_equal() {
        let a = time(1.0, Time::SECOND);
        let b = time(1.0, Time::SECOND);
        let c = time(2.0, Time::SECOND);
        assert!(a.is_less_than_or_equal(&b));
        assert!(a.is_greater_than_or_equal(&b));
        assert!(!c.is_less_than_or_equal(&a));
        assert!(!a.is_greater_than_or_equal(&c));
        assert!(!a.is_less_than(&b));
        assert!(!a.is_greater_than(&b));
    }

    #[test]
    fn within_bounds() {
        let lower = time(1.0, Time::SECOND);
        let upper = time(3.0, Time::SECOND);
        assert!(time(2.0, Time::SECOND).is_within(&lower, &upper));
        assert!(time(3.0, Time::SECOND).is_within(&lower, &upper));
        assert!(!time(4.0, Time::SECOND).is_within(&lower, &upper));
    }

    #[test]
    fn within_range() {
        let range = time(1.0, Time::SECOND)..=time(3.0, Time::SECOND);
        assert!(time(2.0, Time::SECOND).is_within_range(&range));
        assert!(!time(4.0, Time::SECOND).is_within_range(&range));
        assert!(time(0.03, Time::MINUTE).is_within_range(&range));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Equality and equivalence
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn equality_is_literal() {
        assert_eq!(time(1.0, Time::SECOND), time(1.0, Time::SECOND));
        assert_ne!(time(1.0, Time::SECOND), time(2.0, Time::SECOND));
        assert_ne!(time(1.0, Time::MINUTE), time(60.0, Time::SECOND));
    }

    #[test]
    fn equivalence_ignores_unit() {
        assert!(time(1.0, Time::MINUTE).is_equivalent(&time(60.0, Time::SECOND)));
        assert!(!time(1.0, Time::MINUTE).is_equivalent(&time(1.0, Time::SECOND)));
    }

    #[test]
    fn equivalence_within_tolerance() {
        let hour_fraction = time(1.0 / 60.0, Time::HOUR);
        let minute = time(1.0, Time::MINUTE);
        assert!(hour_fraction.is_equivalent_within(&minute, 1e-9));
        assert!(!time(61.0, Time::SECOND).is_equivalent_within(&minute, 0.5));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn convert_speed() {
        let mut m = Measure::new(5, Speed::KILOMETRES_PER_HOUR).unwrap();
        m.convert(Speed::METRES_PER_SECOND).unwrap();
        assert_abs_diff_eq!(m.value(), 1.3888888888888888, epsilon = 1e-12);
        assert_eq!(m.unit().symbol(), "m/s");

        m.convert(Speed::KILOMETRES_PER_HOUR).unwrap();
        assert_abs_diff_eq!(m.value(), 5.0, epsilon = 1e-12);
        assert_eq!(m.unit().symbol(), "km/h");
    }

    #[test]
    fn convert_temperature_with_offset() {
        let mut m = Measure::new(5, ThermodynamicTemperature::KILOKELVIN).unwrap();
        m.convert(ThermodynamicTemperature::CELSIUS).unwrap();
        assert_abs_diff_eq!(m.value(), 4726.85, epsilon = 1e-9);
        assert_eq!(m.unit().symbol(), "°C");

        m.convert(ThermodynamicTemperature::KILOKELVIN).unwrap();
        assert_abs_diff_eq!(m.value(), 5.0, epsilon = 1e-12);
        assert_eq!(m.unit().symbol(), "kK");
    }

    #[test]
    fn convert_to_same_unit_is_idempotent() {
        let mut m = time(0.1 + 0.2, Time::HOUR);
        let before = m.clone();
        m.convert(Time::HOUR).unwrap();
        assert_eq!(m, before);
    }

    #[test]
    fn convert_to_negative_fails_and_keeps_measure() {
        let mut m = Measure::new(100.0, ThermodynamicTemperature::KELVIN).unwrap();
        let err = m.convert(ThermodynamicTemperature::CELSIUS).unwrap_err();
        assert!(err.is_invalid_value());
        assert_eq!(m.unit(), &ThermodynamicTemperature::KELVIN);
        assert_eq!(m.value(), 100.0);
    }

    #[test]
    fn to_returns_new_measure() {
        let kg = Measure::new(1.5, Mass::KILOGRAM).unwrap();
        let g = kg.to(Mass::GRAM).unwrap();
        assert_abs_diff_eq!(g.value(), 1500.0, epsilon = 1e-9);
        assert_eq!(kg.value(), 1.5);
    }

    #[test]
    fn to_base_unit() {
        let m = time(2.0, Time::MINUTE).to_base_unit().unwrap();
        assert_eq!(m.unit(), &Time::SECOND);
        assert_abs_diff_eq!(m.value(), 120.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_value_and_symbol() {
        assert_eq!(time(4.0, Time::SECOND).to_string(), "4 s");
        assert_eq!(time(2.5, Time::HOUR).to_string(), "2.5 h");
    }

    #[test]
    fn display_with_precision() {
        assert_eq!(format!("{:.1}", time(4.0, Time::SECOND)), "4.0 s");
        assert_eq!(
            format!("{:.1}", Measure::new(5, Speed::KILOMETRES_PER_HOUR).unwrap()),
            "5.0 km/h"
        );
        assert_eq!(format!("{:.3}", time(2.0 / 3.0, Time::HOUR)), "0.667 h");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_additive_inverse(
            a in prop_oneof![Just(0.0), 0.0..1e6f64],
            b in 0.0..1e6f64,
            left in 0usize..5,
            right in 0usize..5,
        ) {
            let units = [Time::NANOSECOND, Time::SECOND, Time::MINUTE, Time::HOUR, Time::DAY];
            let a = Measure::new(a, units[left].clone()).unwrap();
            let b = Measure::new(b, units[right].clone()).unwrap();
            let back = a.checked_add(&b).unwrap().checked_sub(&b).unwrap();
            prop_assert_eq!(back.unit(), a.unit());
            let scale = a.base_value() + b.base_value();
            prop_assert!((back.base_value() - a.base_value()).abs() <= 1e-12 * scale);
        }

        #[test]
        fn prop_convert_roundtrip(v in 0.0..1e9f64) {
            let original = Measure::new(v, Length::MILE).unwrap();
            let back = original.to(Length::MILLIMETRE).unwrap().to(Length::MILE).unwrap();
            prop_assert!((back.value() - v).abs() <= 1e-9 * v.max(1.0));
        }

        #[test]
        fn prop_negative_construction_fails(v in -1e9..-1e-12f64) {
            prop_assert!(Measure::new(v, Time::SECOND).is_err());
            prop_assert!(Measure::new(v, Length::METRE).is_err());
            prop_assert!(Measure::new(v, Mass::GRAM).is_err());
            prop_assert!(Measure::new(v, ThermodynamicTemperature::CELSIUS).is_err());
            prop_assert!(Measure::new(v, Speed::KNOT).is_err());
        }
    }
}
