//! Mathematical utilities and physical constants for the hydrogeo library.
//!
//! It contains the fixed conversion factors shared by the unit-conversion
//! functions, the Euler–Mascheroni constant, and the numerical core of the
//! crate: the Theis well function evaluator. Everything here operates on bare
//! `f64` values and is free of I/O and shared state.

/// Conversion factors and mathematical constants used throughout the library.
///
/// This module defines the exact factors for the supported unit families and
/// the high-precision Euler–Mascheroni constant consumed by the well function
/// series. Values are literal constants, not derived at runtime, so results
/// are bit-for-bit reproducible.
pub mod constants;

/// The Theis well function W(u) = −Ei(−u).
///
/// This module implements the dual-regime evaluation used in transient
/// pumping-test analysis: a convergent power series for small arguments and
/// an optimally truncated asymptotic expansion for large ones.
pub mod well_function;
