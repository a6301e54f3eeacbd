//! Chat session models and the session-id store trait.

pub mod model;
pub mod session_store;

pub use model::{ChatMessage, ChatReply, ChatRequest, ChatSession, Sender, generate_session_id};
pub use session_store::SessionIdStore;
