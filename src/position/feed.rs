use crate::position::{PositionSample, PositionSource};
use tokio::sync::watch::Sender;
use tracing::{debug, info, instrument};

/// Holds the most recent sample, `None` before the first one arrives.
pub type LatestSample = Option<PositionSample>;

/// Publishes samples from `source` until it is exhausted or nobody listens anymore.
///
/// Only the latest sample is kept, samples arriving faster than they are processed replace each other.
#[instrument(skip_all, fields(source = source.id()))]
pub async fn pump<P>(mut source: P, tx: Sender<LatestSample>)
where
    P: PositionSource,
{
    info!("📡 Subscribing to position source...");
    while let Some(sample) = source.next_sample().await {
        debug!(sample = ?sample, "📡 Received position sample");
        if tx.send(Some(sample)).is_err() {
            info!("📡 No listeners left, unsubscribing from position source");
            return;
        }
    }
    info!("📡 Position source exhausted");
}
