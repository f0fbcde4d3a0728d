/// Errors returned before a search is started.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    #[error("picture dimensions must be positive and finite, got {width} by {height}")]
    InvalidDimensions { width: f64, height: f64 },
    #[error("target piece count must be at least 1")]
    InvalidTarget,
    #[error("threshold must be finite and within [0, 1), got {0}")]
    InvalidThreshold(f64),
    #[error("penalty must be finite and greater than 1, got {0}")]
    InvalidPenalty(f64),
}

pub type Result<T> = std::result::Result<T, EstimateError>;
