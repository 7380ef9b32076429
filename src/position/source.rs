use crate::position::PositionSample;
use async_trait::async_trait;
use std::fmt::Debug;

/// A push feed of player positions, such as a device location watch.
#[async_trait]
pub trait PositionSource: Debug + Send {
    fn id(&self) -> &'static str;

    /// Waits for the next sample. Returns `None` once the source is exhausted.
    async fn next_sample(&mut self) -> Option<PositionSample>;
}
