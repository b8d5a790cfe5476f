//! GreetingState - Home Page Greeting
//!
//! Owns the greeting string shown on the home page. The value starts as a
//! constant default so first render never waits on the backend, and is
//! replaced at most once when the backend greeting arrives.

use gpui::SharedString;

/// Default greeting shown until the backend replies
pub const DEFAULT_GREETING: &str = "Hello from LibreChat Desktop";

/// State for the home page greeting
#[derive(Debug, Clone)]
pub struct GreetingState {
    greeting: SharedString,
    loaded: bool,
}

impl Default for GreetingState {
    fn default() -> Self {
        Self {
            greeting: SharedString::from(DEFAULT_GREETING),
            loaded: false,
        }
    }
}

impl GreetingState {
    /// Currently displayed greeting; always a non-empty string
    pub fn greeting(&self) -> &SharedString {
        &self.greeting
    }

    /// Whether a backend greeting has been applied
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Apply a greeting received from the backend.
    ///
    /// Empty or whitespace-only messages are rejected so the displayed value
    /// stays non-empty, and only the first replacement is accepted. Returns
    /// whether the message was applied.
    pub fn apply(&mut self, message: &str) -> bool {
        let trimmed = message.trim();
        if self.loaded || trimmed.is_empty() {
            return false;
        }
        self.greeting = SharedString::from(trimmed.to_string());
        self.loaded = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_non_empty() {
        let state = GreetingState::default();
        assert_eq!(state.greeting().as_ref(), DEFAULT_GREETING);
        assert!(!state.is_loaded());
    }

    #[test]
    fn test_apply_replaces_default() {
        let mut state = GreetingState::default();
        assert!(state.apply("Welcome back"));
        assert_eq!(state.greeting().as_ref(), "Welcome back");
        assert!(state.is_loaded());
    }

    #[test]
    fn test_apply_rejects_empty_message() {
        let mut state = GreetingState::default();
        assert!(!state.apply("   "));
        assert_eq!(state.greeting().as_ref(), DEFAULT_GREETING);
        assert!(!state.is_loaded());
    }

    #[test]
    fn test_apply_accepts_only_first_replacement() {
        let mut state = GreetingState::default();
        assert!(state.apply("first"));
        assert!(!state.apply("second"));
        assert_eq!(state.greeting().as_ref(), "first");
    }
}
