//! Fixed conversion factors and mathematical constants for the hydrogeo library.
//!
//! These constants follow the standard SI/US customary definitions used in
//! environmental and groundwater practice. They are the single source of
//! truth for the unit-conversion functions; formulas never re-derive them.

/// Conversion factor from feet to metres.
///
/// The international foot is defined as exactly 0.3048 m. Used by the length
/// conversion family in both directions (multiply ft→m, divide m→ft).
pub const FT_TO_M: f64 = 0.3048;

/// Conversion factor from US gallons per minute to litres per second.
///
/// One US gallon per minute is 0.0630901964 L/s. Used by the flow-rate
/// conversion family in both directions.
pub const GPM_TO_L_PER_S: f64 = 0.0630901964;

/// Conversion factor from metres per second to metres per day.
///
/// There are 86400 seconds in a day, so 1 m/s = 86400 m/day. Used by the
/// hydraulic conductivity conversion family in both directions.
pub const M_PER_S_TO_M_PER_DAY: f64 = 86400.0;

/// The Euler–Mascheroni constant γ.
///
/// Appears as the leading constant of the small-argument series for the well
/// function, W(u) = −γ − ln(u) + u − …. Carried to well beyond double
/// precision so the literal itself introduces no rounding error.
pub const EULER_MASCHERONI: f64 = 0.577_215_664_901_532_860_606_512_090_082_402_4;
