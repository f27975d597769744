use clap::{Args, Parser, Subcommand, ValueEnum};

const ABOUT: &str =
    "HydroGeo Toolkit - conversions and calculators for groundwater and environmental science.";

#[derive(Parser)]
#[command(name = "hydrogeo", version, about = ABOUT)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Unit conversions (length, flow, conductivity)
    Convert {
        /// Type of conversion
        #[arg(value_enum)]
        conversion_type: ConversionType,

        #[command(flatten)]
        args: ConvertArgs,
    },

    /// Darcy's Law: Q = K * I * A
    Darcy(DarcyArgs),

    /// Hydraulic gradient: I = dh / dL
    Gradient(GradientArgs),

    /// Contaminant concentration conversions
    Contam {
        /// Conversion to perform
        #[arg(value_enum)]
        op: ContamOp,

        #[command(flatten)]
        args: ContamArgs,
    },

    /// Pumping test analysis (Cooper-Jacob, Theis)
    Pumping {
        #[command(subcommand)]
        method: PumpingMethod,
    },

    /// Slug test analysis (Hvorslev, Bouwer-Rice)
    Slug {
        #[command(subcommand)]
        method: SlugMethod,
    },
}

/// The conversion family for the `convert` subcommand.
#[derive(Clone, Copy, ValueEnum)]
pub enum ConversionType {
    /// Length: ft <-> m
    Length,
    /// Volumetric flow rate: gpm <-> L/s
    Flow,
    /// Hydraulic conductivity: m/s <-> m/day
    Conductivity,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Source unit (e.g. ft, m, gpm, m/s)
    #[arg(long = "from", value_name = "UNIT")]
    pub from_unit: String,

    /// Target unit (e.g. m, ft, L/s, m/day)
    #[arg(long = "to", value_name = "UNIT")]
    pub to_unit: String,

    /// Numeric value to convert
    #[arg(long)]
    pub value: f64,
}

#[derive(Args)]
pub struct DarcyArgs {
    /// Hydraulic conductivity (e.g. m/s)
    #[arg(long)]
    pub k: f64,

    /// Hydraulic gradient (dimensionless)
    #[arg(long)]
    pub i: f64,

    /// Cross-sectional area (e.g. m^2)
    #[arg(long)]
    pub a: f64,
}

#[derive(Args)]
pub struct GradientArgs {
    /// Head difference (e.g. m)
    #[arg(long)]
    pub dh: f64,

    /// Distance along the flow path (same units as --dh)
    #[arg(long)]
    pub dl: f64,
}

/// Concentration conversion for the `contam` subcommand.
#[derive(Clone, Copy, ValueEnum)]
pub enum ContamOp {
    /// mg/L -> ug/L
    Mg2ug,
    /// ug/L -> mg/L
    Ug2mg,
    /// mol/L -> mg/L (requires --mw)
    Mol2mg,
    /// mg/L -> mol/L (requires --mw)
    Mg2mol,
}

#[derive(Args)]
pub struct ContamArgs {
    /// Concentration value
    #[arg(long)]
    pub value: f64,

    /// Molecular weight (g/mol); required for mol2mg and mg2mol
    #[arg(long)]
    pub mw: Option<f64>,
}

#[derive(Subcommand)]
pub enum PumpingMethod {
    /// Cooper-Jacob straight-line analysis
    CooperJacob {
        #[command(subcommand)]
        op: CooperJacobOp,
    },

    /// Theis transient solution
    Theis {
        #[command(subcommand)]
        op: TheisOp,
    },
}

#[derive(Subcommand)]
pub enum CooperJacobOp {
    /// Transmissivity from the straight-line slope: T = 2.3*Q / (4*pi*ds)
    Transmissivity(TransmissivityArgs),

    /// Storativity from the time intercept: S = 2.25*T*t0 / r^2
    Storativity(StorativityArgs),
}

#[derive(Args)]
pub struct TransmissivityArgs {
    /// Pumping rate (e.g. m^3/s)
    #[arg(long)]
    pub q: f64,

    /// Drawdown per log cycle of time (e.g. m)
    #[arg(long)]
    pub ds: f64,
}

#[derive(Args)]
pub struct StorativityArgs {
    /// Transmissivity (e.g. m^2/s)
    #[arg(long)]
    pub t: f64,

    /// Time intercept at zero drawdown (e.g. s)
    #[arg(long)]
    pub t0: f64,

    /// Radial distance to the observation well (e.g. m)
    #[arg(long)]
    pub r: f64,
}

#[derive(Subcommand)]
pub enum TheisOp {
    /// Drawdown at radius r and time t: s = (Q / 4*pi*T) * W(u)
    Drawdown(TheisDrawdownArgs),
}

#[derive(Args)]
pub struct TheisDrawdownArgs {
    /// Pumping rate (e.g. m^3/s)
    #[arg(long)]
    pub q: f64,

    /// Transmissivity (e.g. m^2/s)
    #[arg(long)]
    pub t: f64,

    /// Storativity (dimensionless)
    #[arg(long)]
    pub s: f64,

    /// Radial distance from the pumping well (e.g. m)
    #[arg(long)]
    pub r: f64,

    /// Elapsed pumping time (e.g. s)
    #[arg(long)]
    pub time: f64,
}

#[derive(Subcommand)]
pub enum SlugMethod {
    /// Hvorslev method: K = r^2 * ln(L/r) / (2*L*t37)
    Hvorslev(HvorslevArgs),

    /// Bouwer-Rice method: K = rw^2 * ln(re/rw) / (2*L*t37)
    BouwerRice(BouwerRiceArgs),
}

#[derive(Args)]
pub struct HvorslevArgs {
    /// Well radius (e.g. m)
    #[arg(long)]
    pub r: f64,

    /// Screened interval length (e.g. m); must exceed the radius
    #[arg(long)]
    pub l: f64,

    /// Time to 37% recovery (e.g. s)
    #[arg(long)]
    pub t37: f64,
}

#[derive(Args)]
pub struct BouwerRiceArgs {
    /// Well radius (e.g. m)
    #[arg(long)]
    pub rw: f64,

    /// Effective radius of influence (e.g. m); must exceed the well radius
    #[arg(long)]
    pub re: f64,

    /// Screen length (e.g. m)
    #[arg(long)]
    pub l: f64,

    /// Time to 37% recovery (e.g. s)
    #[arg(long)]
    pub t37: f64,
}
