use thiserror::Error;

/// The primary error type for all fallible operations in the `hydrogeo` library.
///
/// Every calculation validates its inputs synchronously, before any arithmetic
/// is performed, and reports violations through this enum. Errors carry a
/// single descriptive message naming the offending constraint; they are never
/// retried or recovered internally and propagate directly to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HydroGeoError {
    /// A unit string does not belong to its conversion family's vocabulary.
    ///
    /// Each conversion family (length, flow rate, hydraulic conductivity)
    /// accepts exactly two unit spellings after normalization. The message
    /// cites the family and the allowed set so CLI users can correct the
    /// input without consulting documentation.
    #[error("invalid {family} unit '{unit}': expected one of {allowed}")]
    InvalidUnit {
        /// The conversion family the unit was parsed for.
        family: &'static str,
        /// The rejected unit string, as supplied by the caller.
        unit: String,
        /// Human-readable list of accepted spellings.
        allowed: &'static str,
    },

    /// A numeric input violates a domain precondition.
    ///
    /// This covers non-positive values where strict positivity is required
    /// (pumping rates, times, radii) and ordering constraints such as a
    /// screen length that must exceed the well radius. The message names the
    /// constraint that failed.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A divisor compared exactly equal to zero.
    ///
    /// Raised by the hydraulic gradient when the flow-path distance is zero.
    /// The comparison is exact, not epsilon-based; arbitrarily small nonzero
    /// distances are accepted and produce correspondingly large gradients.
    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),
}
