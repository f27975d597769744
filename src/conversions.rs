//! Unit conversions for hydrogeology: length, flow rate, hydraulic conductivity.
//!
//! Each family accepts exactly two unit spellings. Unit strings are
//! normalized before matching (lower-cased and trimmed; the flow and
//! conductivity families also drop internal spaces so `"L / s"` parses the
//! same as `"l/s"`). Converting a value to its own unit returns it untouched,
//! with no arithmetic performed.

use crate::error::HydroGeoError;
use crate::math::constants::{FT_TO_M, GPM_TO_L_PER_S, M_PER_S_TO_M_PER_DAY};

/// Length units supported by [`convert_length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    /// International feet.
    Feet,
    /// Metres.
    Metres,
}

impl LengthUnit {
    const ALLOWED: &'static str = r#""ft", "m""#;

    fn parse(unit: &str) -> Result<Self, HydroGeoError> {
        match unit.trim().to_lowercase().as_str() {
            "ft" => Ok(Self::Feet),
            "m" => Ok(Self::Metres),
            _ => Err(HydroGeoError::InvalidUnit {
                family: "length",
                unit: unit.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// Volumetric flow rate units supported by [`convert_flow_rate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRateUnit {
    /// US gallons per minute.
    GallonsPerMinute,
    /// Litres per second. Accepts the spellings `"l/s"` and `"ls"`.
    LitresPerSecond,
}

impl FlowRateUnit {
    const ALLOWED: &'static str = r#""gpm", "L/s""#;

    fn parse(unit: &str) -> Result<Self, HydroGeoError> {
        match unit.trim().to_lowercase().replace(' ', "").as_str() {
            "gpm" => Ok(Self::GallonsPerMinute),
            "l/s" | "ls" => Ok(Self::LitresPerSecond),
            _ => Err(HydroGeoError::InvalidUnit {
                family: "flow rate",
                unit: unit.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// Hydraulic conductivity units supported by [`convert_conductivity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConductivityUnit {
    /// Metres per second.
    MetresPerSecond,
    /// Metres per day.
    MetresPerDay,
}

impl ConductivityUnit {
    const ALLOWED: &'static str = r#""m/s", "m/day""#;

    fn parse(unit: &str) -> Result<Self, HydroGeoError> {
        match unit.trim().to_lowercase().replace(' ', "").as_str() {
            "m/s" => Ok(Self::MetresPerSecond),
            "m/day" => Ok(Self::MetresPerDay),
            _ => Err(HydroGeoError::InvalidUnit {
                family: "conductivity",
                unit: unit.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// Converts a length between feet and metres.
///
/// # Errors
///
/// Returns [`HydroGeoError::InvalidUnit`] if either unit string is not
/// `"ft"` or `"m"` after normalization.
pub fn convert_length(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, HydroGeoError> {
    let from = LengthUnit::parse(from_unit)?;
    let to = LengthUnit::parse(to_unit)?;
    if from == to {
        return Ok(value);
    }
    Ok(match from {
        LengthUnit::Feet => value * FT_TO_M,
        LengthUnit::Metres => value / FT_TO_M,
    })
}

/// Converts a volumetric flow rate between US gpm and L/s.
///
/// # Errors
///
/// Returns [`HydroGeoError::InvalidUnit`] if either unit string is not
/// `"gpm"` or `"L/s"` after normalization.
pub fn convert_flow_rate(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, HydroGeoError> {
    let from = FlowRateUnit::parse(from_unit)?;
    let to = FlowRateUnit::parse(to_unit)?;
    if from == to {
        return Ok(value);
    }
    Ok(match from {
        FlowRateUnit::GallonsPerMinute => value * GPM_TO_L_PER_S,
        FlowRateUnit::LitresPerSecond => value / GPM_TO_L_PER_S,
    })
}

/// Converts a hydraulic conductivity between m/s and m/day.
///
/// # Errors
///
/// Returns [`HydroGeoError::InvalidUnit`] if either unit string is not
/// `"m/s"` or `"m/day"` after normalization.
pub fn convert_conductivity(
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, HydroGeoError> {
    let from = ConductivityUnit::parse(from_unit)?;
    let to = ConductivityUnit::parse(to_unit)?;
    if from == to {
        return Ok(value);
    }
    Ok(match from {
        ConductivityUnit::MetresPerSecond => value * M_PER_S_TO_M_PER_DAY,
        ConductivityUnit::MetresPerDay => value / M_PER_S_TO_M_PER_DAY,
    })
}
