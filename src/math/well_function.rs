use super::constants::EULER_MASCHERONI;
use crate::error::HydroGeoError;

/// Arguments at or below this value use the convergent series; above it, the
/// asymptotic expansion. A numerical crossover, not a physical one.
const REGIME_CROSSOVER: f64 = 2.0;

const SERIES_MAX_TERMS: u32 = 80;
const ASYMPTOTIC_MAX_TERMS: u32 = 30;

/// Stop accumulating once a term is this small relative to the running sum.
const RELATIVE_TOLERANCE: f64 = 1e-15;

/// Evaluates the Theis well function W(u) = −Ei(−u) for `u > 0`.
///
/// Two regimes are used: for `u ≤ 2` the convergent series
///
/// ```text
/// W(u) = −γ − ln(u) + u − u²/(2·2!) + u³/(3·3!) − …
/// ```
///
/// and for `u > 2` the asymptotic expansion
///
/// ```text
/// W(u) ≈ (e⁻ᵘ/u) · (1 − 1!/u + 2!/u² − 3!/u³ + …)
/// ```
///
/// summed only while its terms shrink. The asymptotic series is divergent,
/// so it is truncated at the smallest term; its relative error is largest
/// just above the crossover and falls rapidly with increasing `u`.
///
/// W(u) grows without bound as `u → 0+` (the −ln(u) term dominates). That is
/// the correct behavior of the idealized Theis solution at the well itself,
/// not an error condition.
///
/// # Errors
///
/// Returns [`HydroGeoError::InvalidParameter`] when `u <= 0`.
pub fn well_function(u: f64) -> Result<f64, HydroGeoError> {
    if u <= 0.0 {
        return Err(HydroGeoError::InvalidParameter(
            "well function argument u must be positive".to_string(),
        ));
    }
    if u <= REGIME_CROSSOVER {
        Ok(series_small_u(u))
    } else {
        Ok(asymptotic_large_u(u))
    }
}

#[inline]
fn series_small_u(u: f64) -> f64 {
    // -γ - ln(u) plus the k = 1 term, which is just u.
    let mut sum = -EULER_MASCHERONI - u.ln() + u;
    let mut power = u;
    let mut factorial = 1.0;
    let mut sign = -1.0;
    for k in 2..=SERIES_MAX_TERMS {
        power *= u;
        factorial *= k as f64;
        let term = sign * power / (k as f64 * factorial);
        sum += term;
        if term.abs() <= RELATIVE_TOLERANCE * sum.abs() {
            break;
        }
        sign = -sign;
    }
    sum
}

#[inline]
fn asymptotic_large_u(u: f64) -> f64 {
    let factor = (-u).exp() / u;
    let inv_u = 1.0 / u;
    let mut w = 1.0;
    let mut factorial = 1.0;
    let mut power = 1.0;
    let mut sign = -1.0;
    // Magnitude of the previous term, starting from the n = 0 term.
    let mut previous = 1.0;
    for n in 1..=ASYMPTOTIC_MAX_TERMS {
        factorial *= n as f64;
        power *= inv_u;
        let magnitude = factorial * power;
        // Past the smallest term the series diverges; the growing term is
        // discarded, not added.
        if magnitude > previous {
            break;
        }
        w += sign * magnitude;
        if magnitude <= RELATIVE_TOLERANCE * w.abs() {
            break;
        }
        previous = magnitude;
        sign = -sign;
    }
    factor * w
}
