use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub feed: FeedConfig,
    pub geocoder: GeocoderConfig,
    pub storage: StorageConfig,
    pub engine: EngineConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedConfig {
    /// Remote feed endpoint; the built-in catalogue is served when unset.
    pub url: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocoderConfig {
    pub url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub saved_offers_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    #[serde(default = "default_radius_km")]
    pub default_radius_km: f64,
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_radius_km() -> f64 {
    50.0
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file; optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file; not checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of PERKS)
            // Eg.. `PERKS__SERVER__PORT=8081` would set the server port
            .add_source(config::Environment::with_prefix("PERKS").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_defaults_apply_to_empty_section() {
        let engine: EngineConfig = config::Config::builder()
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("empty engine section deserializes");
        assert_eq!(engine.default_radius_km, 50.0);
    }
}
