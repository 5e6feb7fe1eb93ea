use clap::{Args, Parser, Subcommand, ValueEnum};
use heisler::workflows::sweep::SweepAxis;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "heisler - transient heat conduction in plates, cylinders and spheres using the three-term Heisler series.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used by sweeps.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate temperature and transferred heat at one time and position.
    Solve(SolveArgs),
    /// Evaluate a series of points along the time or distance axis and write them as CSV.
    Sweep(SweepArgs),
}

/// Request file and per-field overrides shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct RequestArgs {
    /// Path to the request file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Override the geometry (plate, slab, cylinder or sphere).
    #[arg(short, long, value_name = "NAME")]
    pub geometry: Option<String>,

    /// Override the number of eigenvalue iterations.
    #[arg(short = 'n', long, value_name = "INT")]
    pub iterations: Option<usize>,

    /// Use this Biot number instead of deriving it from h, Lc and k.
    #[arg(long, value_name = "FLOAT")]
    pub biot: Option<f64>,

    /// Override the evaluation time.
    #[arg(short, long, value_name = "FLOAT")]
    pub time: Option<f64>,

    /// Override the distance from the center.
    #[arg(short, long, value_name = "FLOAT")]
    pub distance: Option<f64>,

    /// Stop refining an eigenvalue once successive updates differ by less than this.
    #[arg(long, value_name = "FLOAT")]
    pub early_exit_tolerance: Option<f64>,

    /// Set a request value, overriding the request file.
    /// Can be used multiple times. Example: -S convection_coefficient=250
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Toml,
}

/// Arguments for the `solve` subcommand.
#[derive(Args, Debug)]
pub struct SolveArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Write the report to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report format.
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<ReportFormat>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisArg {
    Time,
    Distance,
}

impl From<AxisArg> for SweepAxis {
    fn from(axis: AxisArg) -> Self {
        match axis {
            AxisArg::Time => SweepAxis::Time,
            AxisArg::Distance => SweepAxis::Distance,
        }
    }
}

/// Arguments for the `sweep` subcommand.
#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Axis to sweep.
    #[arg(short, long, value_enum, value_name = "AXIS")]
    pub axis: AxisArg,

    /// First value of the swept axis.
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub start: f64,

    /// Last value of the swept axis.
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub end: f64,

    /// Number of evenly spaced points, endpoints included.
    #[arg(long, value_name = "INT")]
    pub steps: usize,

    /// Path for the CSV table.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}
