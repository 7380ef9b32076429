mod feed;
mod replay;
mod source;

use crate::domain::Coordinate;
use thiserror::Error;

pub use feed::{LatestSample, pump};
pub use replay::{TrackError, TrackReplay};
pub use source::PositionSource;

/// The position source reported that no position could be determined.
#[derive(Error, Clone, PartialEq, Debug)]
#[error("{reason}")]
pub struct PositionUnavailableError {
    pub reason: String,
}

impl PositionUnavailableError {
    pub fn new(reason: impl Into<String>) -> Self {
        PositionUnavailableError { reason: reason.into() }
    }
}

pub type PositionSample = Result<Coordinate, PositionUnavailableError>;
