//! Predefined quantity kinds and their unit tables.
//!
//! Each kind is a newtype over [`UnitDescriptor`](crate::UnitDescriptor) whose associated constants are the units
//! of that kind. They live in `measures-core` so the `Unit` derive (which expands in terms of `crate::Unit`) can be
//! used on them.
//!
//! ## Modules
//!
//! - [`time`]: time units (second is the base unit).
//! - [`length`]: length units (metre is the base unit), metric and imperial.
//! - [`mass`]: mass units (kilogram is the base unit; the metric family is built on the gram).
//! - [`temperature`]: thermodynamic temperature (kelvin is the base unit) plus affine Celsius/Fahrenheit.
//! - [`volume`]: volume units (cubic metre is the base unit) and the litre family.
//! - [`frequency`]: frequency units (hertz is the base unit).
//! - [`speed`]: speed units, composed as length per time.

pub mod frequency;
pub mod length;
pub mod mass;
pub mod speed;
pub mod temperature;
pub mod time;
pub mod volume;
