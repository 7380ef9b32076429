use crate::domain::Coordinate;
use crate::position::{PositionSample, PositionSource, PositionUnavailableError};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tokio::fs;
use tokio::time::sleep;
use tracing::{info, instrument};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SerializedTrackEntry {
    Fix {
        lat: f64,
        lng: f64,
        #[serde(default, with = "humantime_serde")]
        after: Duration,
    },
    Unavailable {
        unavailable: String,
        #[serde(default, with = "humantime_serde")]
        after: Duration,
    },
}

#[derive(Debug)]
struct TrackEntry {
    after: Duration,
    sample: PositionSample,
}

/// Replays a recorded track, waiting the recorded delay before each sample.
#[derive(Debug)]
pub struct TrackReplay {
    entries: VecDeque<TrackEntry>,
}

impl TrackReplay {
    pub fn from_json(json: &str) -> Result<Self, TrackError> {
        let serialized = serde_json::from_str::<Vec<SerializedTrackEntry>>(json)?;

        let entries = serialized
            .into_iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                SerializedTrackEntry::Fix { lat, lng, after } => {
                    let coordinate = Coordinate::new(lat, lng);
                    if !coordinate.is_valid() {
                        return Err(TrackError::InvalidCoordinate { index, coordinate });
                    }
                    Ok(TrackEntry { after, sample: Ok(coordinate) })
                }
                SerializedTrackEntry::Unavailable { unavailable, after } => Ok(TrackEntry {
                    after,
                    sample: Err(PositionUnavailableError::new(unavailable)),
                }),
            })
            .collect::<Result<VecDeque<_>, _>>()?;

        Ok(TrackReplay { entries })
    }

    #[instrument(fields(path = %path.as_ref().display()), skip_all)]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, TrackError> {
        let path = path.as_ref();
        info!("📁 Loading track...");
        let content = fs::read_to_string(path).await.map_err(|e| TrackError::Io {
            source: e,
            path: path.to_path_buf(),
        })?;

        let replay = Self::from_json(&content)?;
        info!("📁 Loading track... OK, {} sample(s)", replay.len());
        Ok(replay)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl PositionSource for TrackReplay {
    fn id(&self) -> &'static str {
        "track_replay"
    }

    async fn next_sample(&mut self) -> Option<PositionSample> {
        let entry = self.entries.pop_front()?;
        if !entry.after.is_zero() {
            sleep(entry.after).await;
        }
        Some(entry.sample)
    }
}

#[derive(Error, Debug)]
pub enum TrackError {
    #[error("failed to read track '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error("json deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
    #[error("invalid coordinate {coordinate} at track entry {index}")]
    InvalidCoordinate { index: usize, coordinate: Coordinate },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test(tokio::test)]
    async fn replays_samples_in_order() {
        let mut replay = TrackReplay::from_json(
            r#"[
                { "lat": 38.78, "lng": 0.16 },
                { "unavailable": "signal lost", "after": "1ms" },
                { "lat": 38.79, "lng": 0.17, "after": "2ms" }
            ]"#,
        )
        .unwrap();
        assert_eq!(replay.len(), 3);

        assert_eq!(replay.next_sample().await, Some(Ok(Coordinate::new(38.78, 0.16))));
        assert_eq!(replay.next_sample().await, Some(Err(PositionUnavailableError::new("signal lost"))));
        assert_eq!(replay.next_sample().await, Some(Ok(Coordinate::new(38.79, 0.17))));
        assert_eq!(replay.next_sample().await, None);
        assert!(replay.is_empty());
    }

    #[test]
    fn parses_humantime_delays() {
        let replay = TrackReplay::from_json(r#"[{ "lat": 1.0, "lng": 1.0, "after": "1m 30s" }]"#).unwrap();
        assert_eq!(replay.entries[0].after, Duration::from_secs(90));
    }

    #[test]
    fn rejects_invalid_coordinates() {
        let result = TrackReplay::from_json(r#"[{ "lat": 1.0, "lng": 1.0 }, { "lat": 100.0, "lng": 1.0 }]"#);
        assert!(matches!(result, Err(TrackError::InvalidCoordinate { index: 1, .. })));
    }

    #[test]
    fn rejects_unknown_entries() {
        let result = TrackReplay::from_json(r#"[{ "latitude": 1.0 }]"#);
        assert!(matches!(result, Err(TrackError::Deserialization(_))));
    }

    #[test(tokio::test)]
    async fn loads_a_track_file() -> Result<(), TrackError> {
        let path = PathBuf::from(format!("{}/tests/resources/tracks/walk.json", env!("CARGO_MANIFEST_DIR")));

        let replay = TrackReplay::load(&path).await?;

        assert_eq!(replay.len(), 4);
        Ok(())
    }
}
