//! Infrastructure layer: filesystem paths, atomic TOML storage, the
//! persisted session-id store and configuration loading.

pub mod client_state;
pub mod config_service;
pub mod paths;
pub mod storage;

pub use client_state::{ClientState, MemorySessionIdStore, TomlSessionIdStore};
pub use config_service::{ClientConfig, ConfigService};
pub use paths::SpicePaths;
