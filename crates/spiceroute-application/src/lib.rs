//! Application layer: the controllers behind each screen of the client.
//!
//! Controllers own their view state and talk to the backend through
//! [`RecipeApi`](spiceroute_core::RecipeApi). Fetch failures never escape a
//! controller; they end up as [`LoadState::Error`](spiceroute_core::LoadState)
//! with a fixed user-facing message.

pub mod address_bar;
pub mod category_browser;
pub mod chat_session_controller;
pub mod generation;
pub mod home_feed;
pub mod ingredient_index;
pub mod messages;
pub mod recipe_detail_loader;
pub mod recipe_list_controller;

pub use address_bar::{AddressBar, Location};
pub use category_browser::CategoryBrowser;
pub use chat_session_controller::{ChatSessionController, SendOutcome};
pub use home_feed::HomeFeed;
pub use ingredient_index::IngredientIndex;
pub use recipe_detail_loader::RecipeDetailLoader;
pub use recipe_list_controller::{FetchTicket, ListSnapshot, RecipeListController};
