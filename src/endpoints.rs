//! Typed calls for the routes the API server publishes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::http::executor::get_json;

pub const HEALTH_PATH: &str = "health/";
pub const ROOT_PATH: &str = "/";

/// Body of `GET /api/health/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Body of `GET /api/`: a greeting plus a name → path index of the routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiRoot {
    pub message: String,
    #[serde(default)]
    pub endpoints: BTreeMap<String, String>,
}

pub async fn health_check(client: &ApiClient) -> Result<HealthStatus, ApiError> {
    get_json(client, HEALTH_PATH).await
}

pub async fn api_root(client: &ApiClient) -> Result<ApiRoot, ApiError> {
    get_json(client, ROOT_PATH).await
}
