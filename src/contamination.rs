//! Contaminant concentration conversions for water quality work.
//!
//! Supports mg/L ↔ µg/L and mol/L ↔ mg/L (the latter via molecular weight
//! in g/mol).

use crate::error::HydroGeoError;

/// Converts a concentration from mg/L to µg/L.
pub fn mg_per_l_to_ug_per_l(value: f64) -> f64 {
    value * 1000.0
}

/// Converts a concentration from µg/L to mg/L.
pub fn ug_per_l_to_mg_per_l(value: f64) -> f64 {
    value / 1000.0
}

/// Converts a molar concentration (mol/L) to mg/L.
///
/// `mw` is the molecular weight in g/mol: mg/L = mol/L · MW · 1000.
pub fn mol_per_l_to_mg_per_l(value: f64, mw: f64) -> f64 {
    value * mw * 1000.0
}

/// Converts a mass concentration (mg/L) to mol/L.
///
/// `mw` is the molecular weight in g/mol: mol/L = (mg/L) / (MW · 1000).
///
/// # Errors
///
/// Returns [`HydroGeoError::InvalidParameter`] when `mw <= 0`.
pub fn mg_per_l_to_mol_per_l(value: f64, mw: f64) -> Result<f64, HydroGeoError> {
    if mw <= 0.0 {
        return Err(HydroGeoError::InvalidParameter(
            "molecular weight must be positive".to_string(),
        ));
    }
    Ok(value / (mw * 1000.0))
}
