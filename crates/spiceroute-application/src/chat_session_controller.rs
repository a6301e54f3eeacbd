//! The chat widget: session identifier lifecycle and transcript.
//!
//! The session identifier is read from the store on activation (or
//! generated and stored when absent) and only replaced by [`reset`].
//! At most one message per session is in flight at a time; a reset starts a
//! session that can send right away.
//!
//! [`reset`]: ChatSessionController::reset

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use spiceroute_core::chat::{ChatMessage, ChatRequest, ChatSession, Sender, generate_session_id};
use spiceroute_core::{RecipeApi, SessionIdStore};
use tokio::sync::RwLock;

use crate::generation::Generation;
use crate::messages;

/// What happened to a [`ChatSessionController::send`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input, or another message was still in flight.
    Ignored,
    /// The assistant's reply was appended.
    Replied,
    /// The request failed and the apology entry was appended.
    Failed,
    /// The chat was reset while the request was in flight; the reply was dropped.
    Superseded,
}

/// Marks a session busy while its request is in flight.
///
/// The flag holds the session generation of the outstanding request, `0`
/// when idle. Dropping the guard only clears the flag if it still belongs to
/// the same session.
struct BusyGuard<'a> {
    flag: &'a AtomicU64,
    session: u64,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicU64, session: u64) -> Option<Self> {
        flag.compare_exchange(0, session, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag, session })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let _ = self
            .flag
            .compare_exchange(self.session, 0, Ordering::AcqRel, Ordering::Acquire);
    }
}

pub struct ChatSessionController {
    api: Arc<dyn RecipeApi>,
    store: Arc<dyn SessionIdStore>,
    session: RwLock<ChatSession>,
    /// Advanced on every reset. Guarded by the `session` write lock.
    generation: Generation,
    busy: AtomicU64,
}

impl ChatSessionController {
    /// Resumes the stored session or starts a new one, and seeds the
    /// transcript with the welcome entry.
    ///
    /// Store failures are logged; the chat still works with an unsaved id.
    pub async fn activate(api: Arc<dyn RecipeApi>, store: Arc<dyn SessionIdStore>) -> Self {
        let session_id = match store.load().await {
            Ok(Some(id)) if !id.trim().is_empty() => {
                tracing::info!("Resuming chat session");
                id
            }
            Ok(_) => Self::start_session(store.as_ref()).await,
            Err(e) => {
                tracing::warn!("Reading chat session id failed: {}", e);
                Self::start_session(store.as_ref()).await
            }
        };

        let welcome = ChatMessage::with_id(
            messages::CHAT_WELCOME_ID,
            Sender::Assistant,
            messages::CHAT_WELCOME,
        );

        let generation = Generation::new();
        generation.advance();

        Self {
            api,
            store,
            session: RwLock::new(ChatSession {
                session_id,
                transcript: vec![welcome],
            }),
            generation,
            busy: AtomicU64::new(0),
        }
    }

    async fn start_session(store: &dyn SessionIdStore) -> String {
        let session_id = generate_session_id();
        if let Err(e) = store.save(&session_id).await {
            tracing::warn!("Persisting chat session id failed: {}", e);
        }
        tracing::info!("Started new chat session");
        session_id
    }

    /// Sends `text` to the assistant.
    ///
    /// The user entry is appended before the request goes out; the reply (or
    /// the apology entry on failure) follows when it returns.
    pub async fn send(&self, text: &str) -> SendOutcome {
        if text.trim().is_empty() {
            return SendOutcome::Ignored;
        }

        let (_busy, generation, session_id) = {
            let mut session = self.session.write().await;
            let generation = self.generation.current();
            let Some(busy) = BusyGuard::acquire(&self.busy, generation) else {
                tracing::debug!("Ignoring chat message while a request is in flight");
                return SendOutcome::Ignored;
            };
            session.transcript.push(ChatMessage::user(text));
            (busy, generation, session.session_id.clone())
        };

        let request = ChatRequest {
            message: text.to_string(),
            session_id,
        };
        let result = self.api.send_chat(&request).await;

        let mut session = self.session.write().await;
        if !self.generation.is_current(generation) {
            tracing::debug!("Dropping chat reply for a session that was reset");
            return SendOutcome::Superseded;
        }

        match result {
            Ok(reply) => {
                session.transcript.push(ChatMessage::assistant(reply.response));
                SendOutcome::Replied
            }
            Err(e) => {
                tracing::warn!("Chat request failed: {}", e);
                session
                    .transcript
                    .push(ChatMessage::assistant(messages::CHAT_ERROR));
                SendOutcome::Failed
            }
        }
    }

    /// Starts over with a new identifier and a single acknowledgement entry.
    /// Returns the new identifier.
    pub async fn reset(&self) -> String {
        let mut session = self.session.write().await;

        let mut session_id = generate_session_id();
        while session_id == session.session_id {
            session_id = generate_session_id();
        }
        if let Err(e) = self.store.save(&session_id).await {
            tracing::warn!("Persisting chat session id failed: {}", e);
        }

        self.generation.advance();
        self.busy.store(0, Ordering::Release);
        session.session_id = session_id.clone();
        session.transcript = vec![ChatMessage::with_id(
            messages::CHAT_RESET_ID,
            Sender::Assistant,
            messages::CHAT_RESET,
        )];
        tracing::info!("Chat session reset");
        session_id
    }

    pub async fn session(&self) -> ChatSession {
        self.session.read().await.clone()
    }

    pub async fn session_id(&self) -> String {
        self.session.read().await.session_id.clone()
    }

    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.session.read().await.transcript.clone()
    }

    /// Whether the current session has a request in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire) != 0
    }
}
