//! Strongly typed measured values with safe arithmetic, comparison and conversion.
//!
//! `measures` is the user-facing crate in this workspace. It re-exports the full API from `measures-core` plus the
//! predefined quantity kinds (time, length, mass, temperature, volume, frequency, speed).
//!
//! The core idea is: a value is always a `Measure<U>`, where `U` is the quantity kind and the unit is a runtime value
//! of that kind. The kind keeps incompatible quantities apart at compile time; the unit carries the affine map to the
//! kind's base unit, so any two units of one kind can be mixed freely.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible kinds (you can't add metres to seconds).
//! - Makes unit conversion explicit (`to(unit)` / `convert(unit)`), including offset scales like °C and °F.
//! - Rejects negative amounts at construction, on arithmetic and on conversion.
//! - Provides the full SI prefix table (`Magnitude`) to derive prefixed units.
//!
//! # What this crate does not try to solve
//!
//! - Arbitrary symbolic unit algebra (e.g. `m^2 * s^-1`); derived kinds are declared explicitly.
//! - Exact arithmetic: measures are backed by `f64`.
//!
//! # Quick start
//!
//! Convert a speed:
//!
//! ```rust
//! use measures::{Measure, Speed};
//!
//! let v = Measure::new(5, Speed::KILOMETRES_PER_HOUR).unwrap();
//! let v = v.to(Speed::METRES_PER_SECOND).unwrap();
//! assert_eq!(v.to_string(), "1.3888888888888888 m/s");
//! ```
//!
//! Compare amounts in different units:
//!
//! ```rust
//! use measures::{Measure, Time};
//!
//! let four_seconds = Measure::new(4, Time::SECOND).unwrap();
//! let one_minute = Measure::new(1, Time::MINUTE).unwrap();
//! assert!(four_seconds.is_less_than(&one_minute));
//! ```
//!
//! Measures print as `"<value> <symbol>"` with Rust's shortest float formatting, so whole values have no
//! fractional part (`4 s`, `5 km/h`). Pass a precision to get a fixed number of decimals:
//!
//! ```rust
//! use measures::{Measure, Speed};
//!
//! let v = Measure::new(5, Speed::KILOMETRES_PER_HOUR).unwrap();
//! assert_eq!(v.to_string(), "5 km/h");
//! assert_eq!(format!("{:.1}", v), "5.0 km/h");
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use measures::{Length, Measure, Time};
//!
//! let d = Measure::new(1, Length::METRE).unwrap();
//! let t = Measure::new(1, Time::SECOND).unwrap();
//! let _ = d + t; // cannot add different quantity kinds
//! ```
//!
//! # Modules
//!
//! Quantity kinds are grouped under modules (also re-exported at the crate root for convenience):
//!
//! - `measures::time` (seconds, minutes, hours, days, SI-prefixed seconds)
//! - `measures::length` (metres and their prefixes, inch, foot, yard, mile, nautical mile)
//! - `measures::mass` (kilograms, grams and their prefixes, tonne, pound, ounce)
//! - `measures::temperature` (kelvin and their prefixes, Celsius, Fahrenheit, Rankine)
//! - `measures::volume` (cubic metres, litres and their prefixes)
//! - `measures::frequency` (hertz and their prefixes, rpm)
//! - `measures::speed` (`length / time` units)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `measures-core`.
//! - `serde` (default): serializes `Measure<U>` as `{ "value": …, "unit": { "coefficient": …, "constant": …,
//!   "symbol": … } }`.
//! - `json` (default): `Measure::to_json` / `Measure::from_json`.
//!
//! Disable default features for `no_std` (an allocator is still required):
//!
//! ```toml
//! [dependencies]
//! measures = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Fallible operations return `Result<_, MeasureError>`. The arithmetic operators panic if the result would be
//! negative; the `checked_*` methods report it as an error instead.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use measures_core::*;

/// Derive macro used by `measures-core` to define quantity kinds.
///
/// This macro expands in terms of `crate::Unit` and `crate::UnitDescriptor`, so it is intended for use inside
/// `measures-core` (or crates exposing the same crate-root API). Downstream crates implement [`Unit`] by hand.
pub use measures_derive::Unit;

pub use measures_core::units::frequency;
pub use measures_core::units::length;
pub use measures_core::units::mass;
pub use measures_core::units::speed;
pub use measures_core::units::temperature;
pub use measures_core::units::time;
pub use measures_core::units::volume;

pub use measures_core::units::frequency::*;
pub use measures_core::units::length::*;
pub use measures_core::units::mass::*;
pub use measures_core::units::speed::*;
pub use measures_core::units::temperature::*;
pub use measures_core::units::time::*;
pub use measures_core::units::volume::*;
