//! Server Configuration
//!
//! Connection settings for a LibreChat server instance.

use serde::{Deserialize, Serialize};

/// A LibreChat server the shell connects to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    pub name: String,
    pub base_url: String,
    pub is_secure: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        // LibreChat's default local port
        Self {
            name: "Local LibreChat".to_string(),
            base_url: "http://localhost:3080".to_string(),
            is_secure: false,
        }
    }
}

impl ServerConfig {
    /// Short label for status displays
    pub fn label(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_server() {
        let config = ServerConfig::default();
        assert_eq!(config.base_url, "http://localhost:3080");
        assert!(!config.is_secure);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = ServerConfig {
            name: "Staging".to_string(),
            base_url: "https://chat.example.com".to_string(),
            is_secure: true,
        };
        let json = serde_json::to_string(&config).expect("serialize");
        assert!(json.contains("\"baseUrl\""));
        let back: ServerConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }
}
