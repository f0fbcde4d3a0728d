//! Grid arithmetic: picture ratio, divisor pairs and the scoring of a single piece count.

use std::fmt;

use crate::error::{EstimateError, Result};

/// One way of laying out `pieces` as a rectangular grid. `side1` is always the short side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSplit {
    pub side1: u64,
    pub side2: u64,
}

impl GridSplit {
    pub fn pieces(&self) -> u64 {
        self.side1 * self.side2
    }

    /// Long side over short side, never below 1.
    pub fn ratio(&self) -> f64 {
        self.side2 as f64 / self.side1 as f64
    }

    /// Relative error of this grid's ratio against the picture ratio
    pub fn ratio_error(&self, picture_ratio: f64) -> f64 {
        (self.ratio() / picture_ratio - 1.0).abs()
    }
}

impl fmt::Display for GridSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.side1, self.side2)
    }
}

/// Returns the ratio of the longer picture side to the shorter one, so the result is at least
/// 1 regardless of orientation.
pub fn picture_ratio(width: f64, height: f64) -> Result<f64> {
    let valid = |side: f64| side.is_finite() && side > 0.0;
    if !valid(width) || !valid(height) {
        return Err(EstimateError::InvalidDimensions { width, height });
    }
    Ok(width.max(height) / width.min(height))
}

/// Returns the lower half of every divisor pair of `num` in ascending order
pub fn low_factors(num: u64) -> Vec<u64> {
    let mut i = 1;
    let mut factors = vec![];
    loop {
        if i * i > num {
            break;
        } else if num % i == 0 {
            factors.push(i);
        }
        i += 1;
    }
    factors
}

/// Returns every grid split of `num`, each pair once with the short side first. The first entry
/// is always the `1 x num` strip.
pub fn grid_splits(num: u64) -> Vec<GridSplit> {
    low_factors(num)
        .into_iter()
        .map(|side1| GridSplit {
            side1,
            side2: num / side1,
        })
        .collect()
}

/// Picks the split of `pieces` whose ratio is relatively closest to `picture_ratio`. On a tie the
/// split with the shorter `side1` is kept. Returns `None` only for zero pieces.
pub fn best_split(pieces: u64, picture_ratio: f64) -> Option<GridSplit> {
    let mut best: Option<GridSplit> = None;
    for split in grid_splits(pieces) {
        match best {
            Some(current)
                if split.ratio_error(picture_ratio) >= current.ratio_error(picture_ratio) => {}
            _ => best = Some(split),
        }
    }
    best
}

/// Mismatch factor between the picture and a grid ratio. It is symmetric and equals 1 only for
/// a perfect match.
pub fn piece_ratio(picture_ratio: f64, split_ratio: f64) -> f64 {
    picture_ratio.max(split_ratio) / picture_ratio.min(split_ratio)
}

/// Combines the ratio mismatch with an exponential penalty for every piece away from the target.
pub fn badness(piece_ratio: f64, pieces: u64, target: u64, penalty: f64) -> f64 {
    let distance = pieces.abs_diff(target);
    penalty.powf(distance as f64) * piece_ratio
}

/// Rounds a given number to `places` decimal places
pub fn round(x: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (x * scale).round() / scale
}
