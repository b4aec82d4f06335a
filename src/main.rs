use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pathsynth::predictor::Predictor;
use pathsynth::{GeneratorConfig, Point, TrajectoryGenerator};

/// Generate a human-like pointer trajectory between two points.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Start point as x,y (random when omitted)
    #[arg(long)]
    start: Option<Point>,

    /// End point as x,y (random when omitted)
    #[arg(long)]
    end: Option<Point>,

    /// Jitter amplitude added to the model input coordinates
    #[arg(long, default_value_t = 1.5, value_parser = parse_randomness)]
    randomness: f64,

    /// Interpolated points per control point segment
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    density: u32,

    /// Path of the ONNX model
    #[arg(long, default_value = "model.onnx")]
    model: PathBuf,

    /// Seed for the jitter, random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Directory the rendered png is written to
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Skip rendering
    #[arg(long)]
    no_render: bool,
}

fn parse_randomness(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err("must be a finite number >= 0".to_owned())
    }
}

/// Random point on a 1920x1080 screen.
fn random_point<R: Rng>(rng: &mut R) -> Point {
    Point::new(rng.gen_range(0..1920), rng.gen_range(0..1080))
}

#[cfg(feature = "onnx")]
fn load_predictor(model: &std::path::Path) -> Box<dyn Predictor> {
    match pathsynth::OnnxPredictor::load(model) {
        Ok(predictor) => Box::new(predictor),
        Err(e) => Box::new(pathsynth::predictor::Unavailable::new(e.to_string())),
    }
}

#[cfg(not(feature = "onnx"))]
fn load_predictor(model: &std::path::Path) -> Box<dyn Predictor> {
    Box::new(pathsynth::predictor::Unavailable::new(format!(
        "cannot load '{}': built without the `onnx` feature",
        model.display()
    )))
}

#[cfg(feature = "render")]
fn render(path: &[Point], output_dir: &std::path::Path) -> Result<()> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    let file = output_dir.join(format!(
        "output-{}.png",
        chrono::Local::now().format("%H-%M-%S")
    ));
    pathsynth::render_path(path, &file, &pathsynth::RenderConfig::default())?;
    println!("Image saved to {}", file.display());
    Ok(())
}

#[cfg(not(feature = "render"))]
fn render(_path: &[Point], _output_dir: &std::path::Path) -> Result<()> {
    log::warn!("built without the `render` feature, skipping image");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let start = args.start.unwrap_or_else(|| {
        let p = random_point(&mut rng);
        info!("no start point given, using {p}");
        p
    });
    let end = args.end.unwrap_or_else(|| {
        let p = random_point(&mut rng);
        info!("no end point given, using {p}");
        p
    });

    let config = GeneratorConfig {
        randomness: args.randomness,
        points_per_segment: args.density as usize,
        ..GeneratorConfig::default()
    };
    let generator = TrajectoryGenerator::new(&config)?;

    let mut predictor = load_predictor(&args.model);
    let trajectory = generator
        .generate(start, end, predictor.as_mut(), &mut rng)
        .with_context(|| format!("generating trajectory {start} -> {end}"))?;

    println!("Trajectory:");
    println!("{}", trajectory.path.to_json()?);

    if !args.no_render {
        if let Err(e) = render(&trajectory.path, &args.output_dir) {
            error!("{e:#}");
        }
    }

    Ok(())
}
