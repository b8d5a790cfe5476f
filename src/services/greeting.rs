//! Greeting Capability
//!
//! The `get_greeting` call the home page upgrades its greeting with. The
//! message carries a heartbeat timestamp so a stale window is visible at a
//! glance.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Error, Result};

/// Fetch the backend greeting
pub async fn get_greeting() -> Result<String> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|err| Error::HostCall {
            message: err.to_string(),
        })?
        .as_secs();
    Ok(format!(
        "Welcome back! LibreChat Desktop is online (heartbeat: {now})."
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_greeting_carries_heartbeat() {
        let message = get_greeting().await.expect("greeting");
        assert!(message.starts_with("Welcome back! LibreChat Desktop is online (heartbeat: "));
        assert!(message.ends_with(")."));
    }

    #[tokio::test]
    async fn test_greeting_is_displayable() {
        let message = get_greeting().await.expect("greeting");
        assert!(!message.trim().is_empty());
    }
}
