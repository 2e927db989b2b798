//! Core types for measured values tagged with units.
//!
//! `measures-core` provides a small units model:
//!
//! - A *quantity kind* (time, length, temperature, …) is a type implementing [`Unit`]. Its values are the units of
//!   that kind, each described at runtime by a [`UnitDescriptor`] (coefficient, constant, symbol).
//! - A value tagged with a unit is a [`Measure<U>`], backed by a non-negative `f64`.
//! - Conversion is the affine map `base = value * coefficient + constant` and its inverse, so offset scales such as
//!   degrees Celsius are first-class units.
//! - Prefixed units are built from a [`Magnitude`] (the SI prefix table, quetta through quecto).
//!
//! Most users should depend on `measures` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of quantity kinds: a `Measure<Time>` cannot be added to a `Measure<Length>`.
//! - Mixed-unit arithmetic and comparison within one kind, always routed through the base unit.
//! - Validation: a measure is never negative, a unit coefficient is always positive and finite.
//! - A stable serialized form `{ value, unit: { coefficient, constant, symbol } }`.
//!
//! # What this crate does not try to solve
//!
//! - Dimensional analysis across kinds at runtime (multiplying a length by a length does not give an area).
//! - Parsing of human-written unit expressions (`"km/h"`).
//! - Signed quantities: differences that would go below zero are errors.
//!
//! # Quick start
//!
//! ```rust
//! use measures_core::Measure;
//! use measures_core::speed::Speed;
//!
//! let mut v = Measure::new(5, Speed::KILOMETRES_PER_HOUR).unwrap();
//! v.convert(Speed::METRES_PER_SECOND).unwrap();
//! assert_eq!(v.to_string(), "1.3888888888888888 m/s");
//! ```
//!
//! Mixed-unit arithmetic keeps the unit of the left operand:
//!
//! ```rust
//! use measures_core::Measure;
//! use measures_core::time::Time;
//!
//! let a = Measure::new(1, Time::MINUTE).unwrap();
//! let b = Measure::new(30, Time::SECOND).unwrap();
//! assert_eq!((a + b).to_string(), "1.5 min");
//! ```
//!
//! # Formatting
//!
//! `Display` for [`Measure<U>`] writes `"<value> <symbol>"` with Rust's shortest round-trip float formatting, so a
//! whole value prints as `4 s` rather than `4.0 s`. A precision in the format string fixes the decimals:
//!
//! ```rust
//! use measures_core::Measure;
//! use measures_core::time::Time;
//!
//! let t = Measure::new(4, Time::SECOND).unwrap();
//! assert_eq!(t.to_string(), "4 s");
//! assert_eq!(format!("{:.1}", t), "4.0 s");
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `measures-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! measures-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! An allocator is still required (unit symbols are owned strings when built at runtime). When `std` is disabled,
//! floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde` (default): `Serialize`/`Deserialize` for [`Measure<U>`], [`UnitDescriptor`] and the record types.
//!   Decoding validates exactly like construction.
//! - `json` (default): [`Measure::to_json`] and [`Measure::from_json`] via `serde_json`. Reading failures are
//!   [`MeasureError::Decode`], writing failures [`MeasureError::Encode`].
//!
//! # Panics and errors
//!
//! Fallible operations return [`Result`] with a [`MeasureError`]. A result that is zero up to floating-point
//! rounding is stored as exactly `0` rather than rejected. The `+`, `-`, `+=` and `-=` operators panic when the
//! result would be negative; use [`Measure::checked_add`], [`Measure::checked_sub`] or [`Measure::subtract`] to
//! handle that case instead. Unit constants built with [`UnitDescriptor::from_static`] are checked at compile time.
//!
//! # Logging
//!
//! Rejections are reported through the `log` facade at `debug` level and conversions at `trace` level. Nothing is
//! logged unless the application installs a logger.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod macros;

mod codec;
mod descriptor;
mod error;
mod magnitude;
mod measure;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use codec::{MeasureRecord, UnitRecord};
pub use descriptor::UnitDescriptor;
pub use error::{MeasureError, Result};
pub use magnitude::Magnitude;
pub use measure::Measure;
pub use unit::{convert, from_base, to_base, Unit};

// ─────────────────────────────────────────────────────────────────────────────
// Predefined quantity kinds
// ─────────────────────────────────────────────────────────────────────────────

pub mod units;

pub use units::frequency;
pub use units::length;
pub use units::mass;
pub use units::speed;
pub use units::temperature;
pub use units::time;
pub use units::volume;
