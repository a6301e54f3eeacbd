//! HTTP implementation of the recipe backend API.

pub mod error;
pub mod http_api_client;

pub use http_api_client::HttpRecipeApi;
