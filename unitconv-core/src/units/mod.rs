//! Predefined unit modules grouped by dimension.
//!
//! `unitconv-core` ships the unit tables so that conversions, formatting and the dynamic registry work out of the
//! box without downstream crates having to fight Rust's orphan rules.
//!
//! ## Modules
//!
//! - [`storage`]: bytes and bits with binary prefixes (byte is canonical).
//! - [`length`]: metric, imperial and astronomical lengths (micrometre is canonical).
//! - [`mass`]: metric masses (milligram is canonical).
//! - [`time`]: microseconds through 365.242-day years (microsecond is canonical).
//! - [`velocity`]: per-second speeds (metre per second is canonical).

pub mod length;
pub mod mass;
pub mod storage;
pub mod time;
pub mod velocity;
