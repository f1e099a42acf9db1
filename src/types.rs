//! Core wire types for maquette

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Runtime environment, decides whether error responses carry diagnostics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Role attached to every issued user profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Agent,
}

/// User profile returned by the auth endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Asset record returned by the asset endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub size: u64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_serializes_with_camel_case_and_type_rename() {
        let asset = Asset {
            id: "1700000000000".to_string(),
            name: "untitled".to_string(),
            url: "https://cdn.example.com/assets/1700000000000".to_string(),
            content_type: "application/octet-stream".to_string(),
            size: 0,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&asset).unwrap();
        assert_eq!(value["type"], "application/octet-stream");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("content_type").is_none());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Role::Agent).unwrap(), "agent");
    }
}
