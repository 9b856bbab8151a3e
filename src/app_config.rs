use crate::domain::{Anchor, GeoCoordinate};
use crate::placement::PlacementPolicy;
use crate::position::PositionOptions;
use config::{Config, ConfigError};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    position: Position,
    placement: Placement,
    #[serde(default)]
    anchors: Vec<Anchor>,
    recorder: Recorder,
}

impl AppConfig {
    /// Reads `config.toml`, then the optional `config_local.toml`, then `GEOANCHOR__SECTION__KEY` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("GEOANCHOR").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    watch_buffer_size: usize,
}

impl Core {
    pub fn watch_buffer_size(&self) -> usize {
        self.watch_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct Position {
    #[serde(with = "humantime_serde")]
    interval: Duration,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
    #[serde(with = "humantime_serde")]
    maximum_age: Duration,
    source: SourceConfig,
}

impl Position {
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn options(&self) -> PositionOptions {
        PositionOptions {
            timeout: self.timeout,
            maximum_age: self.maximum_age,
        }
    }

    pub fn source(&self) -> &SourceConfig {
        &self.source
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    Fixed { location: GeoCoordinate, accuracy_m: f64 },
    Track {
        file: PathBuf,
        #[serde(default)]
        repeat: bool,
    },
}

#[derive(Debug, Deserialize)]
pub struct Placement {
    policy: PlacementPolicy,
    visibility_radius_m: Option<f64>,
}

impl Placement {
    pub fn policy(&self) -> PlacementPolicy {
        self.policy
    }

    pub fn visibility_radius_m(&self) -> Option<f64> {
        self.visibility_radius_m
    }
}

#[derive(Debug, Deserialize)]
pub struct Recorder {
    enabled: bool,
    url: String,
    #[serde(default)]
    accept_invalid_certs: bool,
    request_timeout_ms: u64,
    retry_ms: u64,
    retry_max_delay_ms: u64,
    max_attempts: usize,
}

impl Recorder {
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn retry_ms(&self) -> u64 {
        self.retry_ms
    }

    pub fn retry_max_delay(&self) -> Duration {
        Duration::from_millis(self.retry_max_delay_ms)
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
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
                core: Core { watch_buffer_size: 1 },
                position: Position {
                    interval: Duration::from_millis(10),
                    timeout: Duration::from_millis(500),
                    maximum_age: Duration::ZERO,
                    source: SourceConfig::Fixed {
                        location: GeoCoordinate {
                            latitude: 47.4979,
                            longitude: 19.0402,
                        },
                        accuracy_m: 10.0,
                    },
                },
                placement: Placement {
                    policy: PlacementPolicy::Once,
                    visibility_radius_m: None,
                },
                anchors: vec![],
                recorder: Recorder {
                    enabled: true,
                    url: "https://recorder.url".to_string(),
                    accept_invalid_certs: false,
                    request_timeout_ms: 2_000,
                    retry_ms: 10,
                    retry_max_delay_ms: 50,
                    max_attempts: 1,
                },
            },
        }
    }

    pub fn recorder_url(mut self, url: String) -> Self {
        self.config.recorder.url = url;
        self
    }

    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.config.recorder.max_attempts = max_attempts;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use pretty_assertions::assert_eq;

    fn from_toml(toml: &str) -> Result<AppConfig, ConfigError> {
        Config::builder().add_source(config::File::from_str(toml, FileFormat::Toml)).build()?.try_deserialize()
    }

    #[test]
    fn loads_the_bundled_configuration() -> Result<(), ConfigError> {
        let config = from_toml(include_str!("../config.toml"))?;

        assert_eq!(config.position().options(), PositionOptions::default());
        assert_eq!(config.placement().policy(), PlacementPolicy::Once);
        assert_eq!(config.anchors().len(), 2);
        assert_eq!(config.anchors()[0].location, GeoCoordinate { latitude: 47.4979, longitude: 19.0402 });
        assert!(!config.recorder().enabled());
        Ok(())
    }

    #[test]
    fn parses_a_track_source_and_durations() -> Result<(), ConfigError> {
        let config = from_toml(
            r#"
            [core]
            watch_buffer_size = 4

            [position]
            interval = "250ms"
            timeout = "2s"
            maximum_age = "1m"
            source = { kind = "track", file = "tracks/walk.json", repeat = true }

            [placement]
            policy = "continuous"
            visibility_radius_m = 300.0

            [recorder]
            enabled = true
            url = "https://192.168.1.20:5173"
            accept_invalid_certs = true
            request_timeout_ms = 3000
            retry_ms = 100
            retry_max_delay_ms = 1000
            max_attempts = 3
            "#,
        )?;

        assert_eq!(config.core().watch_buffer_size(), 4);
        assert_eq!(config.position().interval(), Duration::from_millis(250));
        assert_eq!(
            config.position().options(),
            PositionOptions {
                timeout: Duration::from_secs(2),
                maximum_age: Duration::from_secs(60),
            }
        );
        assert_eq!(
            config.position().source(),
            &SourceConfig::Track {
                file: PathBuf::from("tracks/walk.json"),
                repeat: true,
            }
        );
        assert_eq!(config.placement().visibility_radius_m(), Some(300.0));
        assert!(config.anchors().is_empty());
        assert!(config.recorder().accept_invalid_certs());
        Ok(())
    }

    #[test]
    fn rejects_an_anchor_outside_the_valid_range() {
        let result = from_toml(
            r#"
            [core]
            watch_buffer_size = 4

            [position]
            interval = "1s"
            timeout = "5s"
            maximum_age = "0s"
            source = { kind = "fixed", location = { latitude = 47.0, longitude = 19.0 }, accuracy_m = 5.0 }

            [placement]
            policy = "once"

            [[anchors]]
            name = "nowhere"
            model = "scene.gltf"
            location = { latitude = 47.0, longitude = 200.0 }

            [recorder]
            enabled = false
            url = "https://localhost:5173"
            request_timeout_ms = 3000
            retry_ms = 100
            retry_max_delay_ms = 1000
            max_attempts = 3
            "#,
        );

        let msg = result.expect_err("expected an error but got Ok").to_string();
        assert!(msg.contains("invalid longitude"), "unexpected error message '{msg}'");
    }
}
