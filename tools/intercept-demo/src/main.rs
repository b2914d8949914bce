//! intercept-demo: run the headless interception simulation or a one-off prediction.
//!
//! Usage:
//!   intercept-demo run --ticks 1800 --seed 7 --iterations 5
//!   intercept-demo run --config tools/intercept-demo/sim.json --json
//!   intercept-demo predict --shooter 0,0 --speed 1 --target 0,10 --heading 180 --target-speed 0.5

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use intercept_predictor::{
    aim_heading, solve_intercept, Heading, Iterations, MovingActor, Point2D, Predictor,
    PredictorConfig,
};
use intercept_sim::{SimConfig, SimulationEngine};

#[derive(Parser, Debug)]
#[command(about = "Predictive interception demo")]
struct Arguments {
    #[command(subcommand)]
    cmd: SubCommand,
}

#[derive(Subcommand, Debug)]
enum SubCommand {
    /// Run the cannon-versus-missile simulation.
    Run {
        /// Number of ticks to simulate.
        #[arg(short = 'n', long, default_value_t = 1800)]
        ticks: u64,
        /// JSON file with a SimConfig; command-line flags override it.
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        seed: Option<u64>,
        /// Refinement passes per prediction.
        #[arg(short, long, allow_negative_numbers = true)]
        iterations: Option<i64>,
        /// Print every snapshot as a JSON line.
        #[arg(long)]
        json: bool,
    },
    /// Predict a single aim point.
    Predict {
        /// Shooter position as x,y.
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        shooter: Point2D,
        /// Shot speed.
        #[arg(long)]
        speed: f64,
        /// Target position as x,y.
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        target: Point2D,
        /// Target heading in degrees (0 = +y, 90 = -x).
        #[arg(long, allow_negative_numbers = true)]
        heading: f64,
        #[arg(long)]
        target_speed: f64,
        #[arg(short, long, default_value_t = 3, allow_negative_numbers = true)]
        iterations: i64,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Arguments::parse();
    match args.cmd {
        SubCommand::Run {
            ticks,
            config,
            seed,
            iterations,
            json,
        } => cmd_run(ticks, config, seed, iterations, json),
        SubCommand::Predict {
            shooter,
            speed,
            target,
            heading,
            target_speed,
            iterations,
        } => {
            let target = MovingActor::new(target, Heading::from_degrees(heading), target_speed);
            cmd_predict(shooter, speed, target, iterations)
        }
    }
}

fn cmd_run(
    ticks: u64,
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    iterations: Option<i64>,
    json: bool,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => load_config(&path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    if let Some(iterations) = iterations {
        config.predictor.iterations = Iterations::try_from(iterations)?;
    }

    info!(
        "running {ticks} ticks, seed {}, {} passes, shot speed {}",
        config.seed,
        config.predictor.iterations.get(),
        config.shot_speed
    );

    let mut engine = SimulationEngine::new(config);
    for _ in 0..ticks {
        let snapshot = engine.tick();
        if json {
            println!("{}", serde_json::to_string(&snapshot)?);
        }
    }

    let score = engine.score();
    let accuracy = if score.shots_fired > 0 {
        100.0 * f64::from(score.hits) / f64::from(score.shots_fired)
    } else {
        0.0
    };
    eprintln!(
        "{:.1}s simulated: {} shots, {} hits, {} misses, {} escapes ({accuracy:.1}% accuracy)",
        engine.time().elapsed_secs,
        score.shots_fired,
        score.hits,
        score.misses,
        score.escapes
    );
    Ok(())
}

fn cmd_predict(shooter: Point2D, speed: f64, target: MovingActor, iterations: i64) -> Result<()> {
    let config = PredictorConfig {
        iterations: Iterations::try_from(iterations)?,
        tolerance: None,
    };
    let result = Predictor::new(config).predict(shooter, speed, &target)?;
    let heading = aim_heading(shooter, result.aim_point);

    println!(
        "aim point: ({:.4}, {:.4})",
        result.aim_point.x, result.aim_point.y
    );
    println!("aim heading: {:.2} deg", heading.degrees());
    println!(
        "time to intercept: {:.4}s after {} passes (residual {:.6})",
        result.time_to_intercept, result.iterations_run, result.residual
    );
    match solve_intercept(shooter, speed, &target) {
        Some(exact) => println!(
            "exact intercept: ({:.4}, {:.4}) at {:.4}s, error {:.6}",
            exact.point.x,
            exact.point.y,
            exact.time,
            exact.point.distance(&result.aim_point)
        ),
        None => println!("exact intercept: none, target outruns the shot"),
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: SimConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    if !config.shot_speed.is_finite() || config.shot_speed < 0.0 {
        bail!("shot_speed must be finite and non-negative");
    }
    Ok(config)
}

fn parse_point(s: &str) -> Result<Point2D, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {s:?}"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point2D::new(x, y))
}
