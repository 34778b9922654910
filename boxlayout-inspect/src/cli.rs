//! Command line arguments.

use std::path::PathBuf;

use boxlayout::Axis;
use clap::{Parser, ValueEnum};

/// Lay out a scene of boxed children and print where each one lands
#[derive(Parser, Debug)]
#[command(name = "boxlayout-inspect", version, about)]
pub struct Args {
    /// Scene description (JSON)
    pub scene: PathBuf,

    /// Theme file (JSON) supplying the default padding
    #[arg(long, value_name = "FILE")]
    pub theme: Option<PathBuf>,

    /// Override the scene's axis
    #[arg(long, value_enum)]
    pub axis: Option<AxisArg>,

    /// Override the scene's padding with a fixed amount
    #[arg(long)]
    pub padding: Option<f32>,

    /// Override the container width
    #[arg(long)]
    pub width: Option<f32>,

    /// Override the container height
    #[arg(long)]
    pub height: Option<f32>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AxisArg {
    Horizontal,
    Vertical,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Horizontal => Axis::Horizontal,
            AxisArg::Vertical => Axis::Vertical,
        }
    }
}
