use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};
use jigsaw_piece_estimator::{
    Estimator, EstimatorConfig, RecommendationReport, DEFAULT_PENALTY, DEFAULT_THRESHOLD,
};
use log::info;

/// Guesses how many pieces a jigsaw puzzle of a given picture size really has.
#[derive(Debug, Parser)]
#[command(name = "jigsaw_pieces", version, about)]
pub struct Cli {
    /// Width of the picture, in any unit
    pub width: f64,
    /// Height of the picture, in the same unit as the width
    pub height: f64,
    /// Piece count printed on the box
    pub pieces: u64,
    /// Print the badness score of every candidate
    #[arg(long)]
    pub debug: bool,
    /// Fraction of the piece count searched above and below it
    #[arg(long, env = "JIGSAW_THRESHOLD", default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,
    /// Extra badness per piece away from the piece count
    #[arg(long, env = "JIGSAW_PENALTY", default_value_t = DEFAULT_PENALTY)]
    pub penalty: f64,
}

impl Cli {
    pub fn config(&self) -> EstimatorConfig {
        EstimatorConfig::default()
            .threshold(self.threshold)
            .penalty(self.penalty)
    }
}

/// Installs the logger. `RUST_LOG` wins over the level picked from `debug`.
pub fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .init();
}

pub fn run(cli: &Cli) -> Result<RecommendationReport> {
    info!(
        "estimating {} pieces for a {} by {} picture",
        cli.pieces, cli.width, cli.height
    );
    Estimator::new(cli.config())
        .compute(cli.width, cli.height, cli.pieces, cli.debug)
        .with_context(|| {
            format!(
                "Failed to estimate {} pieces for {} by {}",
                cli.pieces, cli.width, cli.height
            )
        })
}
