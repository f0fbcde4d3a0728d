//! The tolerance band around the target and the per-direction scan over it.

use log::debug;
use std::fmt;
use std::ops::RangeInclusive;

use crate::grid::{badness, best_split, piece_ratio, GridSplit};
use crate::report::TraceEvent;

/// Which side of the target piece count a candidate lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Counts at or above the target
    Upper,
    /// Counts below the target
    Lower,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Upper => write!(f, "upper"),
            Direction::Lower => write!(f, "lower"),
        }
    }
}

/// A piece count together with its best grid and how well that grid fits the picture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub num_pieces: u64,
    pub sides: GridSplit,
    /// Ratio of the grid, long side over short side
    pub ratio: f64,
    /// How much the pieces must be stretched to fill the picture, 1 is a perfect fit
    pub piece_ratio: f64,
    pub badness: f64,
}

/// The band of piece counts searched around a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRange {
    upper: RangeInclusive<u64>,
    lower: Option<RangeInclusive<u64>>,
}

impl CandidateRange {
    /// Builds the band `[(1 - threshold) * target, (1 + threshold) * target]`, both ends
    /// truncated. The lower end never drops below one piece.
    pub fn new(target: u64, threshold: f64) -> Self {
        let max_cap = ((1.0 + threshold) * target as f64) as u64;
        let min_cap = (((1.0 - threshold) * target as f64) as u64).max(1);
        CandidateRange {
            upper: target..=max_cap.max(target),
            lower: (target > min_cap).then(|| min_cap..=target - 1),
        }
    }

    /// Counts at or above the target, ascending
    pub fn upper(&self) -> impl Iterator<Item = u64> {
        self.upper.clone()
    }

    /// Counts below the target, closest to the target first
    pub fn lower(&self) -> impl Iterator<Item = u64> {
        self.lower.clone().into_iter().flat_map(|range| range.rev())
    }

    pub fn sequence(&self, direction: Direction) -> Box<dyn Iterator<Item = u64>> {
        match direction {
            Direction::Upper => Box::new(self.upper()),
            Direction::Lower => Box::new(self.lower()),
        }
    }
}

/// What a scan over one direction found.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionOutcome {
    /// Lowest badness among the ratio-improving candidates
    pub best: Option<Candidate>,
    /// The last candidate that improved the ratio match, which is not necessarily `best`
    pub last_improvement: Option<Candidate>,
}

/// Scans the counts of one direction.
///
/// A count is only scored once its best grid matches the picture ratio strictly better than the
/// previous ratio-improving count. Among those, the lowest badness is kept. Every improvement and
/// the final summary are appended to `trace`.
pub(crate) fn search_direction(
    direction: Direction,
    counts: impl Iterator<Item = u64>,
    picture_ratio: f64,
    target: u64,
    penalty: f64,
    trace: &mut Vec<TraceEvent>,
) -> DirectionOutcome {
    trace.push(TraceEvent::DirectionStarted { direction, target });

    let mut anchor: Option<Candidate> = None;
    let mut best: Option<Candidate> = None;

    for pieces in counts {
        let Some(sides) = best_split(pieces, picture_ratio) else {
            continue;
        };
        let split_ratio = sides.ratio();
        let error = sides.ratio_error(picture_ratio);

        let improves = match &anchor {
            None => true,
            Some(current) => error < current.sides.ratio_error(picture_ratio),
        };
        if !improves {
            continue;
        }

        let piece_ratio = piece_ratio(picture_ratio, split_ratio);
        let candidate = Candidate {
            num_pieces: pieces,
            sides,
            ratio: split_ratio,
            piece_ratio,
            badness: badness(piece_ratio, pieces, target, penalty),
        };
        debug!(
            "{} search: {} pieces in {}x{} has badness {}",
            direction, pieces, sides.side1, sides.side2, candidate.badness
        );

        if best.map_or(true, |b| candidate.badness < b.badness) {
            best = Some(candidate);
        }
        anchor = Some(candidate);
        trace.push(TraceEvent::CandidateImproved {
            direction,
            candidate,
        });
    }

    trace.push(TraceEvent::DirectionFinished {
        direction,
        target,
        last_improvement: anchor,
    });

    DirectionOutcome {
        best,
        last_improvement: anchor,
    }
}
