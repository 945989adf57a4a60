use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;
mod input;
mod provenance;

use input::InputFormat;

#[derive(Parser)]
#[command(name = "rectfit")]
#[command(about = "Recover rectangles from points sampled on their perimeter")]
struct Cmd {
    /// Log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Recover every case of a batch and print one area per case
    Solve {
        /// Batch file, or `-` for stdin
        #[arg(long, default_value = "-")]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = InputFormat::Text)]
        format: InputFormat,
        /// Write answers here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Emit JSON records (area, corners, path) instead of plain areas
        #[arg(long)]
        json: bool,
        #[arg(long, default_value_t = rectfit::FitCfg::default().eps_rel)]
        eps_rel: f64,
        #[arg(long, default_value_t = rectfit::FitCfg::default().eps_slope)]
        eps_slope: f64,
        /// Decimals printed per area
        #[arg(long, default_value_t = 9)]
        precision: usize,
    },
    /// Generate a batch of random rectangles in the text format
    Sample {
        #[arg(long, default_value_t = 10)]
        cases: u64,
        #[arg(long, default_value_t = 100)]
        points: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        axis_aligned: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Solve {
            input,
            format,
            out,
            json,
            eps_rel,
            eps_slope,
            precision,
        } => {
            let cfg = rectfit::FitCfg {
                eps_rel,
                eps_slope,
                ..rectfit::FitCfg::default()
            };
            commands::solve(commands::SolveOpts {
                input,
                format,
                out,
                json,
                cfg,
                precision,
            })
        }
        Action::Sample {
            cases,
            points,
            seed,
            axis_aligned,
            out,
        } => commands::sample(cases, points, seed, axis_aligned, out),
        Action::Report => commands::report(),
    }
}
