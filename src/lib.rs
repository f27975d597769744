//! Calculators and unit conversions for groundwater and environmental science.
//!
//! This crate provides the analytical toolbox used in field and consulting
//! hydrogeology: unit conversions (length, flow rate, hydraulic conductivity),
//! Darcy's Law and hydraulic gradient, contaminant concentration conversions,
//! pumping test analysis (Cooper–Jacob straight-line method and the Theis
//! transient solution), and slug test analysis (Hvorslev and Bouwer–Rice).
//!
//! All operations are pure functions over `f64` values: no shared state, no
//! I/O, no blocking. Inputs are validated up front and violations are reported
//! through [`HydroGeoError`]; no partial results are ever returned. Units are
//! a caller convention: values carry no unit tags, and each formula documents
//! the consistent-unit assumption it relies on.
//!
//! The numerical heart of the crate is [`math::well_function`], a dual-regime
//! evaluator for the Theis well function W(u) = −Ei(−u).

pub mod contamination;
pub mod conversions;
pub mod darcy;
pub mod error;
pub mod math;
pub mod pumping;
pub mod slug;
pub mod types;

pub use contamination::{
    mg_per_l_to_mol_per_l, mg_per_l_to_ug_per_l, mol_per_l_to_mg_per_l, ug_per_l_to_mg_per_l,
};
pub use conversions::{convert_conductivity, convert_flow_rate, convert_length};
pub use darcy::{darcy_flow, hydraulic_gradient};
pub use error::HydroGeoError;
pub use math::well_function::well_function;
pub use pumping::{cooper_jacob_storativity, cooper_jacob_transmissivity, theis_drawdown};
pub use slug::{bouwer_rice_k, hvorslev_k};
pub use types::TheisDrawdown;
