//! Metric magnitudes (SI prefixes) used to build unit families.
//!
//! A [`Magnitude`] scales a unit by a power of ten. Prefixed units never carry an additive constant, even when the
//! unit they are built from does (see [`UnitDescriptor::with_magnitude`](crate::UnitDescriptor::with_magnitude)).
//!
//! ```rust
//! use measures_core::Magnitude;
//!
//! assert_eq!(Magnitude::Kilo.coefficient(), 1e3);
//! assert_eq!(Magnitude::Micro.symbol(), "µ");
//! assert!(Magnitude::Milli < Magnitude::Centi);
//! assert_eq!("mega".parse::<Magnitude>().unwrap(), Magnitude::Mega);
//! ```

use crate::error::MeasureError;
use alloc::string::ToString;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

/// One of the 25 metric prefixes between `1e-30` and `1e+30`.
///
/// Two magnitudes are equal only when they are the same variant. Ordering follows the coefficient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Magnitude {
    /// `1e30`
    Quetta,
    /// `1e27`
    Ronna,
    /// `1e24`
    Yotta,
    /// `1e21`
    Zetta,
    /// `1e18`
    Exa,
    /// `1e15`
    Peta,
    /// `1e12`
    Tera,
    /// `1e9`
    Giga,
    /// `1e6`
    Mega,
    /// `1e3`
    Kilo,
    /// `1e2`
    Hecto,
    /// `1e1`
    Deca,
    /// `1`, the prefix that leaves a unit unchanged.
    Unity,
    /// `1e-1`
    Deci,
    /// `1e-2`
    Centi,
    /// `1e-3`
    Milli,
    /// `1e-6`
    Micro,
    /// `1e-9`
    Nano,
    /// `1e-12`
    Pico,
    /// `1e-15`
    Femto,
    /// `1e-18`
    Atto,
    /// `1e-21`
    Zepto,
    /// `1e-24`
    Yocto,
    /// `1e-27`
    Ronto,
    /// `1e-30`
    Quecto,
}

impl Magnitude {
    /// Every magnitude, from the largest coefficient to the smallest.
    pub const ALL: [Magnitude; 25] = [
        Magnitude::Quetta,
        Magnitude::Ronna,
        Magnitude::Yotta,
        Magnitude::Zetta,
        Magnitude::Exa,
        Magnitude::Peta,
        Magnitude::Tera,
        Magnitude::Giga,
        Magnitude::Mega,
        Magnitude::Kilo,
        Magnitude::Hecto,
        Magnitude::Deca,
        Magnitude::Unity,
        Magnitude::Deci,
        Magnitude::Centi,
        Magnitude::Milli,
        Magnitude::Micro,
        Magnitude::Nano,
        Magnitude::Pico,
        Magnitude::Femto,
        Magnitude::Atto,
        Magnitude::Zepto,
        Magnitude::Yocto,
        Magnitude::Ronto,
        Magnitude::Quecto,
    ];

    /// Multiplier applied to the unit this magnitude prefixes.
    #[inline]
    pub const fn coefficient(self) -> f64 {
        match self {
            Magnitude::Quetta => 1e30,
            Magnitude::Ronna => 1e27,
            Magnitude::Yotta => 1e24,
            Magnitude::Zetta => 1e21,
            Magnitude::Exa => 1e18,
            Magnitude::Peta => 1e15,
            Magnitude::Tera => 1e12,
            Magnitude::Giga => 1e9,
            Magnitude::Mega => 1e6,
            Magnitude::Kilo => 1e3,
            Magnitude::Hecto => 1e2,
            Magnitude::Deca => 1e1,
            Magnitude::Unity => 1.0,
            Magnitude::Deci => 1e-1,
            Magnitude::Centi => 1e-2,
            Magnitude::Milli => 1e-3,
            Magnitude::Micro => 1e-6,
            Magnitude::Nano => 1e-9,
            Magnitude::Pico => 1e-12,
            Magnitude::Femto => 1e-15,
            Magnitude::Atto => 1e-18,
            Magnitude::Zepto => 1e-21,
            Magnitude::Yocto => 1e-24,
            Magnitude::Ronto => 1e-27,
            Magnitude::Quecto => 1e-30,
        }
    }

    /// Always `0.0`: magnitudes are purely multiplicative.
    #[inline]
    pub const fn constant(self) -> f64 {
        0.0
    }

    /// Symbol prepended to the prefixed unit's symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Magnitude::Quetta => "Q",
            Magnitude::Ronna => "R",
            Magnitude::Yotta => "Y",
            Magnitude::Zetta => "Z",
            Magnitude::Exa => "E",
            Magnitude::Peta => "P",
            Magnitude::Tera => "T",
            Magnitude::Giga => "G",
            Magnitude::Mega => "M",
            Magnitude::Kilo => "k",
            Magnitude::Hecto => "h",
            Magnitude::Deca => "da",
            Magnitude::Unity => "",
            Magnitude::Deci => "d",
            Magnitude::Centi => "c",
            Magnitude::Milli => "m",
            Magnitude::Micro => "µ",
            Magnitude::Nano => "n",
            Magnitude::Pico => "p",
            Magnitude::Femto => "f",
            Magnitude::Atto => "a",
            Magnitude::Zepto => "z",
            Magnitude::Yocto => "y",
            Magnitude::Ronto => "r",
            Magnitude::Quecto => "q",
        }
    }

    /// Lowercase prefix name (`"kilo"`, `"micro"`, …). [`Magnitude::Unity`] is named `""`.
    pub const fn name(self) -> &'static str {
        match self {
            Magnitude::Quetta => "quetta",
            Magnitude::Ronna => "ronna",
            Magnitude::Yotta => "yotta",
            Magnitude::Zetta => "zetta",
            Magnitude::Exa => "exa",
            Magnitude::Peta => "peta",
            Magnitude::Tera => "tera",
            Magnitude::Giga => "giga",
            Magnitude::Mega => "mega",
            Magnitude::Kilo => "kilo",
            Magnitude::Hecto => "hecto",
            Magnitude::Deca => "deca",
            Magnitude::Unity => "",
            Magnitude::Deci => "deci",
            Magnitude::Centi => "centi",
            Magnitude::Milli => "milli",
            Magnitude::Micro => "micro",
            Magnitude::Nano => "nano",
            Magnitude::Pico => "pico",
            Magnitude::Femto => "femto",
            Magnitude::Atto => "atto",
            Magnitude::Zepto => "zepto",
            Magnitude::Yocto => "yocto",
            Magnitude::Ronto => "ronto",
            Magnitude::Quecto => "quecto",
        }
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.coefficient() + self.constant()).total_cmp(&(other.coefficient() + other.constant()))
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Magnitude {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Magnitude::ALL
            .into_iter()
            .find(|magnitude| magnitude.name() == s)
            .ok_or_else(|| MeasureError::UnknownMagnitude(s.to_string()))
    }
}
