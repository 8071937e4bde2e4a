//! Configuration module for handling environment variables and .env files

use crate::client::{InstagramClient, USER_AGENT};
use dotenv::dotenv;
use log::info;
use std::env;

/// Application configuration derived from environment variables and .env file
#[derive(Debug, Clone)]
pub struct AppConfig {
    // Session credentials (obtained outside this crate)
    pub session_id: Option<String>,
    pub csrf_token: Option<String>,
    pub device_uuid: Option<String>,

    // API settings
    pub user_agent: String,
    pub api_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_id: None,
            csrf_token: None,
            device_uuid: None,
            user_agent: USER_AGENT.to_string(),
            api_url: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn load() -> Self {
        // Try to load .env file, but continue even if it doesn't exist
        match dotenv() {
            Ok(_) => info!("Loaded environment from .env file"),
            Err(_) => info!("No .env file found, using system environment variables only"),
        }

        let mut config = Self::default();

        if let Ok(session_id) = env::var("INSTAGRAM_SESSION_ID") {
            config.session_id = Some(session_id);
        }

        if let Ok(csrf_token) = env::var("INSTAGRAM_CSRF_TOKEN") {
            config.csrf_token = Some(csrf_token);
        }

        if let Ok(device_uuid) = env::var("INSTAGRAM_DEVICE_UUID") {
            config.device_uuid = Some(device_uuid);
        }

        // User agent - use environment variable if available, otherwise use default
        if let Ok(user_agent) = env::var("INSTAGRAM_USER_AGENT") {
            config.user_agent = user_agent;
        }

        // API base URL override, mainly for pointing at a test server
        if let Ok(api_url) = env::var("INSTAGRAM_API_URL") {
            config.api_url = Some(api_url);
        }

        config
    }

    /// Create an InstagramClient from this configuration
    pub fn create_client(&self) -> InstagramClient {
        InstagramClient::from_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_mobile_user_agent() {
        let config = AppConfig::default();
        assert_eq!(config.user_agent, USER_AGENT);
        assert!(config.session_id.is_none());
        assert!(config.api_url.is_none());
    }
}
