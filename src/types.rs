//! Core result types for the hydrogeo library.

/// The result of a Theis drawdown calculation.
///
/// Both the drawdown and the dimensionless argument it was evaluated at are
/// returned: `u` locates the calculation on the well function curve (small
/// `u` is the late-time regime where the Cooper–Jacob approximation also
/// holds) and is exposed unchanged for diagnostic use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TheisDrawdown {
    /// Drawdown s at the requested radius and time, in the length unit
    /// implied by the inputs (metres when Q, T are in SI).
    pub drawdown: f64,
    /// The dimensionless well function argument u = r²S / (4Tt).
    pub u: f64,
}
