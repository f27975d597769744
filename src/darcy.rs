//! Darcy's Law and hydraulic gradient calculators.

use crate::error::HydroGeoError;

/// Computes volumetric discharge from Darcy's Law, Q = K·I·A.
///
/// Units of Q match the product of the inputs; use a consistent system
/// (K in m/s with A in m² gives Q in m³/s). No validation is performed:
/// a negative gradient simply reverses the flow direction, which is
/// physically meaningful.
///
/// # Arguments
///
/// * `k` - Hydraulic conductivity (e.g. m/s or m/day).
/// * `i` - Hydraulic gradient, dimensionless (Δh/ΔL).
/// * `a` - Cross-sectional area perpendicular to flow (e.g. m²).
pub fn darcy_flow(k: f64, i: f64, a: f64) -> f64 {
    k * i * a
}

/// Computes the hydraulic gradient I = Δh / ΔL.
///
/// `dh` and `dl` must be in the same length unit; the gradient is
/// dimensionless. The sign of the result follows the sign of the inputs.
///
/// # Errors
///
/// Returns [`HydroGeoError::DivisionByZero`] when `dl` is exactly zero.
pub fn hydraulic_gradient(dh: f64, dl: f64) -> Result<f64, HydroGeoError> {
    if dl == 0.0 {
        return Err(HydroGeoError::DivisionByZero(
            "flow-path distance dL must be non-zero",
        ));
    }
    Ok(dh / dl)
}
