use serde::Deserialize;
use scorepulse_core::error::{Result, ScorePulseError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub exporter: ExporterSection,
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ScorePulseError::UnsupportedVersion);
        }
        self.exporter.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for ExporterSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl ExporterSection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.parse::<std::net::SocketAddr>().is_err() {
            return Err(ScorePulseError::BadRequest(
                "exporter.listen must be a valid socket address".into(),
            ));
        }
        // Exposition is O(metric count) and always fast; anything below 5s
        // only hides collector-side problems.
        if !(5000..=120000).contains(&self.request_timeout_ms) {
            return Err(ScorePulseError::BadRequest(
                "exporter.request_timeout_ms must be between 5000 and 120000".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8001".into()
}
fn default_request_timeout_ms() -> u64 {
    5000
}
