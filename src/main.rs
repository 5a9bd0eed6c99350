//! Generate a residue chain and write an SVG snapshot of it.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use chainview::engine::{ChainEngine, ViewCommand};
use chainview::options::Options;
use chainview::renderer::svg::SvgSurface;
use chainview::ChainViewError;
use clap::Parser;
use glam::DVec2;

#[derive(Parser, Debug)]
#[command(name = "chainview", about = "Render a random residue chain to SVG")]
struct Args {
    /// Number of residues (defaults to the options file, then 20).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=1000))]
    count: Option<u32>,

    /// Angle resolution (floored, minimum 4).
    #[arg(long, value_parser = clap::value_parser!(u32).range(4..=300))]
    resolution: Option<u32>,

    /// Seed for reproducible chains.
    #[arg(long)]
    seed: Option<u64>,

    /// Drag-rotation in pixels, horizontal then vertical.
    #[arg(
        long,
        num_args = 2,
        value_names = ["DX", "DY"],
        allow_negative_numbers = true
    )]
    rotate: Option<Vec<f64>>,

    /// Wheel notches; negative zooms in.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    zoom: i32,

    /// TOML options file.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Write the default options as TOML to this path and exit.
    #[arg(long)]
    dump_options: Option<PathBuf>,

    /// Output SVG path; stdout when omitted.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn run(args: Args) -> Result<(), ChainViewError> {
    if let Some(path) = &args.dump_options {
        return Options::default().save(path);
    }

    let mut options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if let Some(count) = args.count {
        options.chain.residue_count = count as usize;
    }
    if let Some(resolution) = args.resolution {
        options.chain.angle_resolution = resolution;
    }

    let viewport = options.viewport;
    let mut engine = match args.seed {
        Some(seed) => ChainEngine::with_seed(options, seed),
        None => ChainEngine::new(options),
    };
    log::info!(
        "chain: {} residues, angle resolution {}",
        engine.chain().residue_count(),
        engine.chain().angle_resolution()
    );

    if let Some([dx, dy]) = args.rotate.as_deref() {
        let _ = engine.execute(ViewCommand::Rotate {
            delta: DVec2::new(*dx, *dy),
        });
    }
    for _ in 0..args.zoom.unsigned_abs() {
        let _ = engine.execute(ViewCommand::Zoom {
            delta: f64::from(args.zoom.signum()),
        });
    }

    let mut svg = SvgSurface::new(viewport.width, viewport.height);
    engine.render(&mut svg);

    match &args.output {
        Some(path) => svg.save(path),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(svg.to_document().as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
