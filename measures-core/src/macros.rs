//! Macros for defining unit tables.

/// Declares a family of metric units on a quantity-kind newtype.
///
/// Each entry expands to an associated constant built with
/// [`UnitDescriptor::from_magnitude`](crate::UnitDescriptor::from_magnitude), scaling the family's
/// unprefixed coefficient by the magnitude.
///
/// ```rust,ignore
/// metric_units! {
///     Length, 1.0;
///     /// Kilometres.
///     KILOMETRE = Kilo, "km";
///     /// Millimetres.
///     MILLIMETRE = Milli, "mm";
/// }
/// ```
#[macro_export]
macro_rules! metric_units {
    ($kind:ident, $coefficient:expr; $($(#[$meta:meta])* $name:ident = $magnitude:ident, $symbol:literal;)+) => {
        impl $kind {
            $(
                $(#[$meta])*
                pub const $name: Self = Self($crate::UnitDescriptor::from_magnitude(
                    $crate::Magnitude::$magnitude,
                    $coefficient,
                    $symbol,
                ));
            )+
        }

    };
}
