//! The outcome of a search and its human-readable transcript.

use std::fmt;

use crate::config::EstimatorConfig;
use crate::grid::round;
use crate::search::{Candidate, Direction};

/// Something the search announced while it ran, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    PictureRatio {
        width: f64,
        height: f64,
        ratio: f64,
    },
    DirectionStarted {
        direction: Direction,
        target: u64,
    },
    /// A count whose best grid matched the picture strictly better than every earlier count in
    /// the same direction
    CandidateImproved {
        direction: Direction,
        candidate: Candidate,
    },
    DirectionFinished {
        direction: Direction,
        target: u64,
        last_improvement: Option<Candidate>,
    },
}

/// Everything [`crate::compute`] found for one picture and target.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationReport {
    pub width: f64,
    pub height: f64,
    pub ratio: f64,
    pub target_pieces: u64,
    pub config: EstimatorConfig,
    /// Include badness scores when rendering
    pub debug: bool,
    /// Lowest badness at or above the target
    pub upper: Option<Candidate>,
    /// Lowest badness below the target
    pub lower: Option<Candidate>,
    pub trace: Vec<TraceEvent>,
}

impl RecommendationReport {
    /// The recommended piece count, taken from the at-or-above side
    pub fn guess(&self) -> Option<u64> {
        self.upper.map(|candidate| candidate.num_pieces)
    }

    /// Returns the below-target candidate if it beats the recommendation
    pub fn better_below(&self) -> Option<&Candidate> {
        let lower = self.lower.as_ref()?;
        match &self.upper {
            Some(upper) if lower.badness >= upper.badness => None,
            _ => Some(lower),
        }
    }

    pub fn best(&self, direction: Direction) -> Option<&Candidate> {
        match direction {
            Direction::Upper => self.upper.as_ref(),
            Direction::Lower => self.lower.as_ref(),
        }
    }

    fn write_event(&self, f: &mut fmt::Formatter<'_>, event: &TraceEvent) -> fmt::Result {
        match event {
            TraceEvent::PictureRatio {
                width,
                height,
                ratio,
            } => writeln!(
                f,
                "{} by {} is picture ratio {}\n",
                width,
                height,
                round(*ratio, 4)
            ),
            TraceEvent::DirectionStarted {
                direction: Direction::Upper,
                target,
            } => writeln!(f, "Looking for >= {} solutions:\n", target),
            TraceEvent::DirectionStarted {
                direction: Direction::Lower,
                ..
            } => writeln!(f, "\nJust out of interest, here are smaller options:\n"),
            TraceEvent::CandidateImproved { candidate, .. } => {
                writeln!(
                    f,
                    "{} pieces in {} (grid ratio {}) needs piece ratio {}",
                    candidate.num_pieces,
                    candidate.sides,
                    round(candidate.ratio, 4),
                    round(candidate.piece_ratio, 4)
                )?;
                if self.debug {
                    writeln!(f, "[badness = {}]", round(candidate.badness, 5))?;
                }
                Ok(())
            }
            TraceEvent::DirectionFinished {
                target,
                last_improvement: Some(candidate),
                ..
            } => writeln!(
                f,
                "for {} the best is {} pieces with size {}",
                target, candidate.num_pieces, candidate.sides
            ),
            TraceEvent::DirectionFinished {
                target,
                last_improvement: None,
                ..
            } => writeln!(f, "for {} there are no candidates on this side", target),
        }
    }
}

impl fmt::Display for RecommendationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.trace {
            self.write_event(f, event)?;
        }
        match self.guess() {
            Some(pieces) => writeln!(f, "\nIf I had to guess: I think it's {} pieces.", pieces)?,
            None => writeln!(f, "\nThere is no guess at or above {} pieces.", self.target_pieces)?,
        }
        if let Some(lower) = self.better_below() {
            writeln!(
                f,
                "\nBUT, fun fact, {} would be even better.",
                lower.num_pieces
            )?;
        }
        Ok(())
    }
}
