use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ApiError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport options applied to the underlying client. None of them touch the
/// base URL, the default headers or credential forwarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportSettings {
    pub timeout: Duration,
    pub connect_timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: None,
            user_agent: None,
        }
    }
}

/// On-disk shape of `client.toml`. Durations are humantime strings (`"10s"`, `"1m 30s"`).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    timeout: Option<String>,
    connect_timeout: Option<String>,
    user_agent: Option<String>,
}

impl TransportSettings {
    /// `<config_dir>/apiclient/client.toml`, or `None` when the platform has no config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("apiclient").join("client.toml"))
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ApiError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ApiError::Io(e)),
        };
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ApiError> {
        let file: SettingsFile =
            toml::from_str(content).map_err(|e| ApiError::Config(e.to_string()))?;

        let mut settings = Self::default();
        if let Some(timeout) = file.timeout {
            settings.timeout = parse_duration("timeout", &timeout)?;
        }
        if let Some(connect) = file.connect_timeout {
            settings.connect_timeout = Some(parse_duration("connect_timeout", &connect)?);
        }
        settings.user_agent = file.user_agent.filter(|ua| !ua.is_empty());
        Ok(settings)
    }
}

fn parse_duration(field: &str, value: &str) -> Result<Duration, ApiError> {
    humantime::parse_duration(value)
        .map_err(|e| ApiError::Config(format!("{field} = {value:?}: {e}")))
}
