#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Errors originating from the core hydrogeo library calculations.
    #[error("Calculation error: {0}")]
    Calculation(#[from] hydrogeo::HydroGeoError),

    /// Command-line usage errors that clap cannot express declaratively,
    /// such as an argument required only by some operations.
    #[error("Usage error: {0}")]
    Usage(&'static str),
}
