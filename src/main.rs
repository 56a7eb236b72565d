// main.rs
//
// Command line front end: build a pair of meshing gears (or the cutter sweep
// of one of them) and write it as DXF or SVG.

use anyhow::{Context, Result, bail};
use clap::Parser;
use gearshaper::float_types::Real;
use gearshaper::gear::demo::cutout_demo;
use gearshaper::gear::{DEFAULT_PRESSURE_ANGLE, DEFAULT_RACK_TEETH, Gear, GearSpec, QualityPreset};
use gearshaper::gearset::{GearPair, ShowOption};
use gearshaper::io::OutputFormat;
use std::io::Write;
use std::path::PathBuf;

/// Involute gear pair generator.
///
/// A positive tooth count gives an external gear, a negative one an internal
/// (ring) gear and zero a rack.
#[derive(Parser, Debug)]
#[command(name = "gearshaper")]
#[command(about = "Generate meshing involute gears, ring gears and racks", long_about = None)]
#[command(version, allow_negative_numbers = true)]
struct Cli {
    /// Rack tooth count, rounded up to an odd number
    #[arg(long, default_value_t = DEFAULT_RACK_TEETH)]
    rack_teeth: usize,

    /// Distance between neighbouring teeth along the pitch circle
    #[arg(long, default_value_t = 8.0, conflicts_with = "diametral_pitch")]
    circular_pitch: Real,

    /// Teeth per unit of pitch diameter
    #[arg(long)]
    diametral_pitch: Option<Real>,

    /// Pressure angle in degrees
    #[arg(long, default_value_t = DEFAULT_PRESSURE_ANGLE)]
    pressure_angle: Real,

    /// Minimal distance between a tooth tip and the other gear's root
    #[arg(long, default_value_t = 0.05)]
    clearance: Real,

    /// Minimal distance between meshing flanks
    #[arg(long, default_value_t = 0.05)]
    backlash: Real,

    /// Profile shift, applied as -s to wheel 1 and +s to wheel 2
    #[arg(long, default_value_t = 0.0)]
    profile_shift: Real,

    #[arg(long, default_value_t = 30)]
    wheel1_tooth_count: i32,

    #[arg(long, default_value_t = 4.0)]
    wheel1_center_hole_diameter: Real,

    #[arg(long, default_value_t = 8)]
    wheel2_tooth_count: i32,

    #[arg(long, default_value_t = 4.0)]
    wheel2_center_hole_diameter: Real,

    /// 1 = wheel 1, 2 = wheel 2, 3 = both
    #[arg(long, default_value_t = 3)]
    show: u8,

    /// 0 = draft, 1 = normal, 2 = high
    #[arg(long, default_value_t = 0)]
    quality: u8,

    /// Output file; standard output when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format; guessed from the output extension when omitted
    #[arg(long, value_parser = ["dxf", "svg"])]
    format: Option<String>,

    /// Draw the cutter sweep of wheel 1 or 2 instead of the pair
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    demo: Option<u8>,
}

impl Cli {
    fn wheel_spec(&self, tooth_count: i32, hole: Real, profile_shift: Real) -> Result<GearSpec> {
        let quality = QualityPreset::from_option(self.quality)?.settings();
        let builder = GearSpec::builder()
            .tooth_count(tooth_count)
            .pressure_angle(self.pressure_angle)
            .clearance(self.clearance)
            .backlash(self.backlash)
            .profile_shift(profile_shift)
            .center_hole_diameter(hole)
            .quality(quality)
            .rack_teeth(self.rack_teeth);
        let builder = match self.diametral_pitch {
            Some(diametral_pitch) => builder.diametral_pitch(diametral_pitch),
            None => builder.circular_pitch(self.circular_pitch),
        };
        Ok(builder.build()?)
    }

    fn output_format(&self) -> Result<OutputFormat> {
        if let Some(format) = &self.format {
            return OutputFormat::from_extension(format)
                .with_context(|| format!("unknown output format {format}"));
        }
        match self.output.as_ref().and_then(|p| p.extension()).and_then(|e| e.to_str()) {
            Some(extension) => OutputFormat::from_extension(extension)
                .with_context(|| format!("cannot guess the output format from .{extension}, use --format")),
            None => Ok(OutputFormat::Dxf),
        }
    }
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let wheel1 = Gear::new(cli.wheel_spec(
        cli.wheel1_tooth_count,
        cli.wheel1_center_hole_diameter,
        -cli.profile_shift,
    )?)
    .context("invalid wheel 1")?;
    let wheel2 = Gear::new(cli.wheel_spec(
        cli.wheel2_tooth_count,
        cli.wheel2_center_hole_diameter,
        cli.profile_shift,
    )?)
    .context("invalid wheel 2")?;
    let format = cli.output_format()?;

    let shape = match cli.demo {
        Some(1) => cutout_demo(&wheel1).context("cutout demo of wheel 1")?,
        Some(2) => cutout_demo(&wheel2).context("cutout demo of wheel 2")?,
        Some(other) => bail!("--demo must be 1 or 2, got {other}"),
        None => {
            let show = ShowOption::from_mask(cli.show)?;
            let layout = GearPair::new(wheel1, wheel2)
                .layout(show)
                .context("building the gear pair")?;
            eprintln!("info = {}", layout.diagnostics);
            layout.shape
        },
    };

    let bytes = shape.to_format(format)?;
    match &cli.output {
        Some(path) => std::fs::write(path, &bytes)
            .with_context(|| format!("writing {}", path.display()))?,
        None => std::io::stdout()
            .write_all(&bytes)
            .context("writing to standard output")?,
    }
    Ok(())
}
