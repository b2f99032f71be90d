//! API catalog entry model.

use apiflow_core::catalog::ApiCategory;
use apiflow_core::types::DbId;
use serde::{Deserialize, Serialize};

/// A catalogued third-party API. Immutable after the store is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDescriptor {
    pub id: DbId,
    pub name: String,
    pub category: ApiCategory,
    pub description: String,
    /// 0–100.
    pub popularity: i32,
    pub auth_type: String,
    pub response_type: String,
    pub base_url: String,
    /// Sample endpoint paths offered by the tester.
    #[serde(default)]
    pub endpoints: Vec<String>,
}

/// Query parameters for `GET /api/v1/apis`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
}

/// Body of `POST /api/v1/apis/{id}/test`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCallRequest {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "empty_params")]
    pub params: serde_json::Value,
}

impl Default for TestCallRequest {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            method: default_method(),
            params: empty_params(),
        }
    }
}

fn default_endpoint() -> String {
    "/test".to_string()
}

fn default_method() -> String {
    "GET".to_string()
}

fn empty_params() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}
