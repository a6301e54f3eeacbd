//! Loading/ready/error view state shared by every data-bearing screen.

use serde::{Deserialize, Serialize};

/// What a screen currently shows.
///
/// `Error` carries a user-facing message. The underlying error is logged,
/// never shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Error(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            Self::Loading => LoadState::Loading,
            Self::Ready(value) => LoadState::Ready(f(value)),
            Self::Error(message) => LoadState::Error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        let state: LoadState<u32> = LoadState::default();
        assert!(state.is_loading());
        assert!(state.ready().is_none());
    }

    #[test]
    fn test_map_keeps_error() {
        let state: LoadState<u32> = LoadState::Error("kapot".to_string());
        let mapped = state.map(|n| n * 2);
        assert_eq!(mapped.error_message(), Some("kapot"));

        let ready = LoadState::Ready(21).map(|n| n * 2);
        assert_eq!(ready.ready(), Some(&42));
    }
}
