//! Client configuration: where the API lives and how requests to it are dressed.

pub mod resolver;
pub mod settings;

use crate::config::resolver::{API_PATH_SUFFIX, os_lookup, resolve_host};
pub use crate::config::settings::TransportSettings;

/// Everything needed to build the shared client. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfiguration {
    /// Resolved host followed by `/api`. Never empty.
    pub base_url: String,
    /// Headers attached to every request. Always exactly `Content-Type: application/json`.
    pub default_headers: Vec<(String, String)>,
    /// Whether cookies received from the API are sent back on later requests.
    pub with_credentials: bool,
    pub settings: TransportSettings,
}

impl ClientConfiguration {
    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(os_lookup)
    }

    /// Resolve with a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = resolve_host(lookup);
        Self {
            base_url: format!("{host}{API_PATH_SUFFIX}"),
            default_headers: vec![(
                "Content-Type".to_string(),
                mime::APPLICATION_JSON.essence_str().to_string(),
            )],
            with_credentials: true,
            settings: TransportSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: TransportSettings) -> Self {
        self.settings = settings;
        self
    }
}
