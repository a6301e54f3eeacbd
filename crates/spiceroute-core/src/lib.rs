//! Domain layer of the SpiceRoute recipe client.
//!
//! Holds the models returned by the recipe backend, the URL-backed filter
//! codec, page arithmetic, and the traits the outer layers implement
//! ([`RecipeApi`] for the HTTP client, [`SessionIdStore`] for persisted
//! client state).

pub mod api;
pub mod category;
pub mod chat;
pub mod error;
pub mod filter;
pub mod ingredient;
pub mod pagination;
pub mod recipe;
pub mod view;

pub use api::RecipeApi;
pub use chat::SessionIdStore;
pub use error::{Result, SpiceError};
pub use view::LoadState;
