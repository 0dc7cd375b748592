use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/plantillas";

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,

    #[serde(default)]
    pub log_json: bool,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_seconds: None,
            log_json: false,
        }
    }
}

impl Config {
    /// Reads `PLANTILLAS_*` variables, after loading `.env` when one exists.
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::prefixed("PLANTILLAS_")
            .from_env::<Self>()
            .map_err(|e| anyhow!("Invalid environmental variable: {}", e))?;
        Ok(config)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}
