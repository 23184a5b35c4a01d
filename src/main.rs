//! helmholtz-designer: CLI for Helmholtz coil pair design

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use coil_design::{
    characterize, misalignment_field_error, render_field_plots, run_sweep, BiotSavartEngine,
    DesignCase, DesignConfig, LitzWire, Winding, WindingMode,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "helmholtz-designer")]
#[command(about = "Design and characterize Helmholtz coil pairs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the design report for one coil configuration
    Report {
        #[command(flatten)]
        coil: CoilArgs,

        /// Emit the summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Generate a Python plotting script for the field profile
    Script {
        #[command(flatten)]
        coil: CoilArgs,

        /// Output Python file
        #[arg(short, long, default_value = "field_plots.py")]
        output: PathBuf,

        /// Print the generated script to stdout instead of a file
        #[arg(long)]
        stdout: bool,
    },

    /// Estimate the field error caused by coil misalignment
    Tolerance {
        /// Max rotation of one coil in degrees
        #[arg(long, default_value = "1.0")]
        rotation: f64,

        /// Max lateral displacement of one coil in mm
        #[arg(long, default_value = "1.0")]
        displacement: f64,
    },

    /// Evaluate a batch of design cases in parallel
    Sweep {
        /// Input JSON file with design cases
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fractional field tolerance for the homogeneous region
        #[arg(long, default_value = "0.01")]
        tol: f64,
    },
}

#[derive(ClapArgs, Debug)]
struct CoilArgs {
    /// Coil radius in mm
    #[arg(long, default_value = "130")]
    radius: f64,

    /// Drive current in A
    #[arg(long, default_value = "2")]
    current: f64,

    /// Wires per layer
    #[arg(long, default_value = "6")]
    wires: u32,

    /// Stacked layers
    #[arg(long, default_value = "8")]
    layers: u32,

    /// Wire preset (single, litz75, litz150)
    #[arg(long, default_value = "litz75")]
    wire: String,

    /// Custom bundle outer diameter in mm (overrides the preset)
    #[arg(long)]
    wire_outer: Option<f64>,

    /// Custom strand diameter in mm (overrides the preset)
    #[arg(long)]
    wire_strand: Option<f64>,

    /// Custom strand count (overrides the preset)
    #[arg(long)]
    strands: Option<u32>,

    /// Fractional field tolerance for the homogeneous region
    #[arg(long, default_value = "0.01")]
    tol: f64,

    /// Samples along the axial profile
    #[arg(long, default_value = "100")]
    grid_points: usize,

    /// Trace the exact spiral winding path instead of closed loops
    #[arg(long)]
    spiral: bool,
}

impl CoilArgs {
    fn resolve(&self) -> Result<(LitzWire, Winding, DesignConfig)> {
        let mut wire = parse_wire(&self.wire)?;
        if let Some(d_outer) = self.wire_outer {
            wire.d_outer = d_outer;
        }
        if let Some(d_strand) = self.wire_strand {
            wire.d_strand = d_strand;
        }
        if let Some(strands) = self.strands {
            wire.strands = strands;
        }

        let winding = Winding {
            radius: self.radius,
            current: self.current,
            wires_per_layer: self.wires,
            layers: self.layers,
        };

        let config = DesignConfig {
            mode: if self.spiral {
                WindingMode::Spiral
            } else {
                WindingMode::Loops
            },
            grid_points: self.grid_points,
            tolerance: self.tol,
            ..DesignConfig::default()
        };

        Ok((wire, winding, config))
    }
}

fn parse_wire(s: &str) -> Result<LitzWire> {
    match s.to_lowercase().as_str() {
        "single" => Ok(LitzWire::single()),
        "litz75" | "litz-75" => Ok(LitzWire::litz_75()),
        "litz150" | "litz-150" => Ok(LitzWire::litz_150()),
        _ => anyhow::bail!("Unknown wire preset: {}. Use: single, litz75, or litz150", s),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Report { coil, json } => {
            let (wire, winding, config) = coil.resolve()?;
            let summary =
                characterize(&wire, &winding, &config).context("Design evaluation failed")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", summary);
            }
        }

        Command::Script {
            coil,
            output,
            stdout,
        } => {
            let (wire, winding, config) = coil.resolve()?;
            let engine = BiotSavartEngine {
                loop_segments: config.loop_segments,
            };
            let script = render_field_plots(&wire, &winding, &engine, &config)
                .context("Plot script generation failed")?;
            if stdout {
                println!("{}", script);
            } else {
                fs::write(&output, &script)
                    .with_context(|| format!("Failed to write output file: {:?}", output))?;
                eprintln!("Generated plot script: {:?}", output);
            }
        }

        Command::Tolerance {
            rotation,
            displacement,
        } => {
            let error = misalignment_field_error(rotation, displacement)
                .context("Tolerance estimation failed")?;
            println!(
                "Field error for {} deg rotation and {} mm displacement: {:.4} %",
                rotation,
                displacement,
                error * 100.0
            );
        }

        Command::Sweep { input, output, tol } => {
            let json = fs::read_to_string(&input)
                .with_context(|| format!("Failed to read case file: {:?}", input))?;
            let cases: Vec<DesignCase> =
                serde_json::from_str(&json).context("Failed to parse case file")?;

            let config = DesignConfig {
                tolerance: tol,
                ..DesignConfig::default()
            };
            let outcomes = run_sweep(&cases, &config);

            let rendered = serde_json::to_string_pretty(&outcomes)?;
            match output {
                Some(path) => {
                    fs::write(&path, rendered)
                        .with_context(|| format!("Failed to write output file: {:?}", path))?;
                    eprintln!("Wrote {} outcomes: {:?}", outcomes.len(), path);
                }
                None => println!("{}", rendered),
            }
        }
    }

    Ok(())
}
