use config::{Config, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    game: Game,
    feed: Feed,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("GEOQUIZ").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    command_buffer_size: usize,
}

impl Core {
    pub fn command_buffer_size(&self) -> usize {
        self.command_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct Game {
    points_file: String,
    proximity_threshold_km: f64,
    shuffle_seed: Option<u64>,
}

impl Game {
    pub fn points_file(&self) -> &Path {
        Path::new(&self.points_file)
    }

    pub fn proximity_threshold_km(&self) -> f64 {
        self.proximity_threshold_km
    }

    /// A fixed seed makes the answer order reproducible between runs.
    pub fn shuffle_seed(&self) -> Option<u64> {
        self.shuffle_seed
    }
}

#[derive(Debug, Deserialize)]
pub struct Feed {
    track_file: String,
    #[serde(with = "humantime_serde")]
    idle_notice: Duration,
}

impl Feed {
    pub fn track_file(&self) -> &Path {
        Path::new(&self.track_file)
    }

    pub fn idle_notice(&self) -> Duration {
        self.idle_notice
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core { command_buffer_size: 4 },
                game: Game {
                    points_file: format!("{}/tests/resources/points/old_town.json", env!("CARGO_MANIFEST_DIR")),
                    proximity_threshold_km: 0.03,
                    shuffle_seed: Some(7),
                },
                feed: Feed {
                    track_file: format!("{}/tests/resources/tracks/walk.json", env!("CARGO_MANIFEST_DIR")),
                    idle_notice: Duration::from_secs(30),
                },
            },
        }
    }

    pub fn idle_notice(mut self, idle_notice: Duration) -> Self {
        self.config.feed.idle_notice = idle_notice;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
