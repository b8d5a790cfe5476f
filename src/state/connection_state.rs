//! ConnectionState - Backend Reachability

/// Connection targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionTarget {
    /// The configured LibreChat server
    Server,
}

impl ConnectionTarget {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionTarget::Server => "LibreChat Server",
        }
    }
}

/// State for the server connection indicator
#[derive(Debug, Clone, Default)]
pub struct ConnectionState {
    server_connected: bool,
    server_detail: Option<String>,
}

impl ConnectionState {
    /// Set status for a connection target
    pub fn set_status(&mut self, target: ConnectionTarget, connected: bool, detail: Option<String>) {
        match target {
            ConnectionTarget::Server => {
                self.server_connected = connected;
                self.server_detail = detail;
            }
        }
    }

    /// Check if a target is connected
    pub fn is_connected(&self, target: ConnectionTarget) -> bool {
        match target {
            ConnectionTarget::Server => self.server_connected,
        }
    }

    /// Detail string for a target (address, error summary)
    pub fn detail(&self, target: ConnectionTarget) -> Option<&str> {
        match target {
            ConnectionTarget::Server => self.server_detail.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_disconnected() {
        let state = ConnectionState::default();
        assert!(!state.is_connected(ConnectionTarget::Server));
        assert!(state.detail(ConnectionTarget::Server).is_none());
    }

    #[test]
    fn test_set_status() {
        let mut state = ConnectionState::default();
        state.set_status(
            ConnectionTarget::Server,
            true,
            Some("http://localhost:3080".to_string()),
        );
        assert!(state.is_connected(ConnectionTarget::Server));
        assert_eq!(state.detail(ConnectionTarget::Server), Some("http://localhost:3080"));
    }
}
