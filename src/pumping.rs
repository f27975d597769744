//! Pumping test analysis: the Cooper–Jacob straight-line method and the
//! Theis transient drawdown solution.
//!
//! The Cooper–Jacob method assumes confined conditions and sufficient
//! elapsed time that drawdown vs. log10(time) is approximately linear; it
//! yields preliminary estimates of transmissivity and storativity from the
//! fitted straight line. The Theis solution evaluates drawdown directly
//! through the well function, with no large-time restriction.
//!
//! References:
//!   Cooper, H.H. Jr., and Jacob, C.E. (1946). A generalized graphical
//!   method for evaluating formation constants and summarizing well-field
//!   history. Transactions, American Geophysical Union, 27(4), 526-534.
//!   Theis, C.V. (1935). The relation between the lowering of the
//!   piezometric surface and the rate and duration of discharge of a well
//!   using ground-water storage. Transactions, American Geophysical Union,
//!   16(2), 519-524.

use std::f64::consts::PI;

use crate::error::HydroGeoError;
use crate::math::well_function::well_function;
use crate::types::TheisDrawdown;

/// Computes transmissivity from the Cooper–Jacob straight-line slope,
/// T = 2.3·Q / (4π·Δs).
///
/// `q` is the pumping rate (L³/T) and `delta_s` the drawdown per log cycle
/// of time read off the fitted line. The result carries the same time
/// dimension as `q`.
///
/// # Errors
///
/// Returns [`HydroGeoError::InvalidParameter`] unless `q > 0` and
/// `delta_s > 0`.
pub fn cooper_jacob_transmissivity(q: f64, delta_s: f64) -> Result<f64, HydroGeoError> {
    if q <= 0.0 || delta_s <= 0.0 {
        return Err(HydroGeoError::InvalidParameter(
            "Q and delta_s must be positive".to_string(),
        ));
    }
    Ok((2.3 * q) / (4.0 * PI * delta_s))
}

/// Computes storativity from the Cooper–Jacob zero-drawdown time intercept,
/// S = 2.25·T·t0 / r².
///
/// `t` is the transmissivity, `t0` the time where the straight line
/// extrapolates to zero drawdown, and `r` the radial distance to the
/// observation well. The result is dimensionless.
///
/// # Errors
///
/// Returns [`HydroGeoError::InvalidParameter`] unless `t`, `t0` and `r` are
/// all positive.
pub fn cooper_jacob_storativity(t: f64, t0: f64, r: f64) -> Result<f64, HydroGeoError> {
    if t <= 0.0 || t0 <= 0.0 || r <= 0.0 {
        return Err(HydroGeoError::InvalidParameter(
            "T, t0, and r must be positive".to_string(),
        ));
    }
    Ok((2.25 * t * t0) / (r * r))
}

/// Computes transient drawdown from the Theis solution,
/// s = (Q / 4πT) · W(u) with u = r²S / (4Tt).
///
/// `q` is the pumping rate, `t` the transmissivity, `s` the storativity,
/// `r` the radial distance from the pumping well, and `time` the elapsed
/// pumping time, all in a consistent unit system. The returned
/// [`TheisDrawdown`] carries both the drawdown and the dimensionless
/// argument `u` it was evaluated at.
///
/// Small `r` or large `time` drive `u` toward zero, where the well function
/// (and hence the predicted drawdown at the idealized point-source well)
/// grows without bound; that is correct model behavior, not a failure.
///
/// # Errors
///
/// Returns [`HydroGeoError::InvalidParameter`] unless all five inputs are
/// strictly positive.
pub fn theis_drawdown(
    q: f64,
    t: f64,
    s: f64,
    r: f64,
    time: f64,
) -> Result<TheisDrawdown, HydroGeoError> {
    if q <= 0.0 || t <= 0.0 || s <= 0.0 || r <= 0.0 || time <= 0.0 {
        return Err(HydroGeoError::InvalidParameter(
            "Q, T, S, r, and t must all be positive".to_string(),
        ));
    }
    let u = (r * r * s) / (4.0 * t * time);
    let w = well_function(u)?;
    let drawdown = (q / (4.0 * PI * t)) * w;
    Ok(TheisDrawdown { drawdown, u })
}
