//! Slug test analysis for hydraulic conductivity estimation.
//!
//! Slug tests displace the water level in a well instantaneously and time
//! the head recovery. Both methods here use t37, the time for the head to
//! recover to 37% (1/e) of the initial displacement.
//!
//! References:
//!   Hvorslev, M.J. (1951). Time lag and soil permeability in groundwater
//!   observations. U.S. Army Corps of Engineers Waterways Experiment
//!   Station, Bulletin 36.
//!   Bouwer, H., and Rice, R.C. (1976). A slug test for determining
//!   hydraulic conductivity of unconfined aquifers with completely or
//!   partially penetrating wells. Water Resources Research, 12(3), 423-428.

use crate::error::HydroGeoError;

/// Estimates hydraulic conductivity with the Hvorslev method,
/// K = r²·ln(L/r) / (2·L·t37).
///
/// `r` is the well radius, `l` the screened interval length, and `t37` the
/// time to 37% recovery. K comes out in L/T with the same time dimension as
/// 1/t37.
///
/// # Errors
///
/// Returns [`HydroGeoError::InvalidParameter`] if any input is non-positive,
/// or if `l <= r` (the shape factor ln(L/r) requires L > r).
pub fn hvorslev_k(r: f64, l: f64, t37: f64) -> Result<f64, HydroGeoError> {
    if r <= 0.0 || l <= 0.0 || t37 <= 0.0 {
        return Err(HydroGeoError::InvalidParameter(
            "r, L, and t37 must be positive".to_string(),
        ));
    }
    if l <= r {
        return Err(HydroGeoError::InvalidParameter(
            "L must be greater than r for ln(L/r) to be positive".to_string(),
        ));
    }
    Ok((r * r * (l / r).ln()) / (2.0 * l * t37))
}

/// Estimates hydraulic conductivity with the Bouwer–Rice method,
/// K = rw²·ln(re/rw) / (2·L·t37).
///
/// `rw` is the well radius, `re` the effective radius of influence
/// accounting for partial penetration and unconfined geometry, `l` the
/// screen length, and `t37` the time to 37% recovery.
///
/// # Errors
///
/// Returns [`HydroGeoError::InvalidParameter`] if any input is non-positive,
/// or if `re <= rw` (the shape factor ln(re/rw) requires re > rw).
pub fn bouwer_rice_k(rw: f64, re: f64, l: f64, t37: f64) -> Result<f64, HydroGeoError> {
    if rw <= 0.0 || re <= 0.0 || l <= 0.0 || t37 <= 0.0 {
        return Err(HydroGeoError::InvalidParameter(
            "rw, re, L, and t37 must be positive".to_string(),
        ));
    }
    if re <= rw {
        return Err(HydroGeoError::InvalidParameter(
            "re must be greater than rw for ln(re/rw) to be positive".to_string(),
        ));
    }
    Ok((rw * rw * (re / rw).ln()) / (2.0 * l * t37))
}
