//! ServiceHub - Backend Command Loop
//!
//! Owns the background thread the shell's async work runs on. UI code sends
//! `ServiceCommand`s; results come back as `AppEvent`s on the event channel
//! drained by the workspace event pump. Failures never cross this boundary
//! as errors; they are reduced to warning log events here.

use gpui::Global;

use crate::domain::server::ServerConfig;
use crate::error::Result;
use crate::eventing::app_event::AppEvent;
use crate::services::api::LibreChatApi;
use crate::services::greeting;
use crate::state::connection_state::ConnectionTarget;

/// Commands that can be sent to the service layer
#[derive(Debug, Clone)]
pub enum ServiceCommand {
    /// Fetch the backend greeting for the home page
    FetchGreeting,
    /// Probe the configured LibreChat server
    CheckServer(ServerConfig),
}

/// ServiceHub dispatches commands to the background service thread
pub struct ServiceHub {
    event_tx: flume::Sender<AppEvent>,
    command_tx: flume::Sender<ServiceCommand>,
}

impl Global for ServiceHub {}

impl ServiceHub {
    /// Create a new service hub and start its command loop
    pub fn new(event_tx: flume::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = flume::unbounded::<ServiceCommand>();

        Self::start_command_loop(command_rx, event_tx.clone());

        let hub = Self {
            event_tx,
            command_tx,
        };
        hub.log(AppEvent::info("Service hub initialized"));
        hub
    }

    /// Spawn the background thread running the tokio command loop
    fn start_command_loop(
        command_rx: flume::Receiver<ServiceCommand>,
        event_tx: flume::Sender<AppEvent>,
    ) {
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime");

            rt.block_on(async move {
                tracing::info!("Service command loop started");
                while let Ok(cmd) = command_rx.recv_async().await {
                    tracing::debug!("Handling service command: {:?}", cmd);
                    handle_command(cmd, &event_tx).await;
                }
                tracing::info!("Service command loop stopped");
            });
        });
    }

    /// Send a command to the service layer
    pub fn send(&self, cmd: ServiceCommand) {
        let _ = self.command_tx.send(cmd);
    }

    /// Request the backend greeting
    pub fn fetch_greeting(&self) {
        self.send(ServiceCommand::FetchGreeting);
    }

    /// Probe the configured server
    pub fn check_server(&self, config: ServerConfig) {
        self.send(ServiceCommand::CheckServer(config));
    }

    /// Send a log event directly to the UI
    pub fn log(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}

/// Handle a single service command
async fn handle_command(cmd: ServiceCommand, event_tx: &flume::Sender<AppEvent>) {
    match cmd {
        ServiceCommand::FetchGreeting => {
            let result = greeting::get_greeting().await;
            let _ = event_tx.send(greeting_event(result));
        }
        ServiceCommand::CheckServer(config) => {
            let result = probe_server(&config).await;
            for event in server_events(&config, result) {
                let _ = event_tx.send(event);
            }
        }
    }
}

async fn probe_server(config: &ServerConfig) -> Result<String> {
    let api = LibreChatApi::new(&config.base_url)?;
    api.health().await
}

/// Reduce a greeting fetch result to a single UI event.
///
/// Success becomes `GreetingLoaded`; any failure keeps the default greeting
/// and leaves a warning in the diagnostic log.
fn greeting_event(result: Result<String>) -> AppEvent {
    match result {
        Ok(message) => AppEvent::GreetingLoaded { message },
        Err(err) => AppEvent::warn(format!("Failed to load greeting from backend: {err}")),
    }
}

/// Reduce a server probe result to connection + log events
fn server_events(config: &ServerConfig, result: Result<String>) -> Vec<AppEvent> {
    match result {
        Ok(_) => vec![
            AppEvent::ConnectionChanged {
                target: ConnectionTarget::Server,
                connected: true,
                detail: Some(config.base_url.clone()),
            },
            AppEvent::info(format!("Connected to {}", config.label())),
        ],
        Err(err) => vec![
            AppEvent::ConnectionChanged {
                target: ConnectionTarget::Server,
                connected: false,
                detail: None,
            },
            AppEvent::warn(format!("Server {} unreachable: {err}", config.label())),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::state::log_state::LogLevel;
    use std::time::Duration;

    #[test]
    fn test_greeting_event_success() {
        let event = greeting_event(Ok("Welcome back".to_string()));
        match event {
            AppEvent::GreetingLoaded { message } => assert_eq!(message, "Welcome back"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_greeting_event_failure_is_single_warning() {
        let event = greeting_event(Err(Error::HostCall {
            message: "capability unavailable".to_string(),
        }));
        match event {
            AppEvent::Log { level, message, .. } => {
                assert_eq!(level, LogLevel::Warn);
                assert!(message.contains("Failed to load greeting from backend"));
                assert!(message.contains("capability unavailable"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_server_events_failure_disconnects() {
        let config = ServerConfig::default();
        let events = server_events(
            &config,
            Err(Error::Invalid {
                message: "boom".to_string(),
            }),
        );
        assert_eq!(events.len(), 2);
        match &events[0] {
            AppEvent::ConnectionChanged { connected, detail, .. } => {
                assert!(!connected);
                assert!(detail.is_none());
            }
            other => panic!("unexpected event: {other:?}"),
        }
        match &events[1] {
            AppEvent::Log { level, .. } => assert_eq!(*level, LogLevel::Warn),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_fetch_greeting_end_to_end() {
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();
        let hub = ServiceHub::new(event_tx);
        hub.fetch_greeting();

        // First event is the hub's own startup log; wait for the greeting.
        let deadline = Duration::from_secs(5);
        loop {
            match event_rx.recv_timeout(deadline).expect("event") {
                AppEvent::GreetingLoaded { message } => {
                    assert!(message.starts_with("Welcome back!"));
                    break;
                }
                AppEvent::Log { .. } => continue,
                other => panic!("unexpected event: {other:?}"),
            }
        }
    }
}
