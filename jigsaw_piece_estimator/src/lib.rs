//! The Jigsaw Piece Estimator library works out how many pieces a jigsaw puzzle really has. Box
//! labels promise round numbers like 1000, but the pieces of a real puzzle form a rectangular
//! grid that has to fit the picture, so the actual count is usually a little off. It provides
//! two entry points:
//!
//! - [`compute`] searches around a target piece count with the default tuning and returns a
//!     [`RecommendationReport`]. This is the function you normally want to use
//! - [`Estimator`] does the same with an explicit [`EstimatorConfig`]
//!
//! The report renders as a transcript of the search through its `Display` implementation.

mod config;
mod error;
mod grid;
mod report;
mod search;

use log::info;

pub use config::{EstimatorConfig, DEFAULT_PENALTY, DEFAULT_THRESHOLD};
pub use error::{EstimateError, Result};
pub use grid::{
    badness, best_split, grid_splits, low_factors, picture_ratio, piece_ratio, round, GridSplit,
};
pub use report::{RecommendationReport, TraceEvent};
pub use search::{Candidate, CandidateRange, Direction, DirectionOutcome};

/// Searches the piece counts around `target_pieces` for the grid that best fits a `width` by
/// `height` picture, using [`EstimatorConfig::default`].
///
/// `debug` only changes how the report renders: badness scores are printed next to every
/// candidate.
pub fn compute(
    width: f64,
    height: f64,
    target_pieces: u64,
    debug: bool,
) -> Result<RecommendationReport> {
    Estimator::default().compute(width, height, target_pieces, debug)
}

/// A piece count estimator
///
/// Holds the tuning used by every search. The `threshold` decides how far from the target piece
/// count alternatives are looked for, the `penalty` how quickly those alternatives lose out
/// against counts closer to the target.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Estimator {
    config: EstimatorConfig,
}

impl Estimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Estimator { config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Runs the search for one picture.
    ///
    /// Both sides of the target are scanned independently. All inputs are checked before any
    /// work is done; a side without any candidate is reported as `None` rather than an error.
    pub fn compute(
        &self,
        width: f64,
        height: f64,
        target_pieces: u64,
        debug: bool,
    ) -> Result<RecommendationReport> {
        self.config.validate()?;
        let ratio = picture_ratio(width, height)?;
        if target_pieces == 0 {
            return Err(EstimateError::InvalidTarget);
        }
        info!(
            "start estimating {} pieces for {}x{} (ratio {})",
            target_pieces, width, height, ratio
        );

        let range = CandidateRange::new(target_pieces, self.config.threshold_value());
        let mut trace = vec![TraceEvent::PictureRatio {
            width,
            height,
            ratio,
        }];

        let [upper, lower] = [Direction::Upper, Direction::Lower].map(|direction| {
            search::search_direction(
                direction,
                range.sequence(direction),
                ratio,
                target_pieces,
                self.config.penalty_value(),
                &mut trace,
            )
        });
        for (direction, outcome) in [(Direction::Upper, &upper), (Direction::Lower, &lower)] {
            match outcome.best {
                Some(best) => info!(
                    "best {} candidate is {} pieces in {}x{} with badness {}",
                    direction, best.num_pieces, best.sides.side1, best.sides.side2, best.badness
                ),
                None => info!("no {} candidates for {} pieces", direction, target_pieces),
            }
        }

        Ok(RecommendationReport {
            width,
            height,
            ratio,
            target_pieces,
            config: self.config,
            debug,
            upper: upper.best,
            lower: lower.best,
            trace,
        })
    }
}
