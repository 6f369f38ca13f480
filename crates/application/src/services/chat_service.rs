//! Chat service - remote conversational replies with fixed fallbacks

use std::{fmt, sync::Arc, time::Instant};

use tracing::{debug, instrument, warn};

use crate::ports::ChatPort;

/// Service answering free-form chat messages
///
/// Never fails: every problem is turned into a fallback sentence that
/// echoes the user's message.
pub struct ChatService {
    chat: Option<Arc<dyn ChatPort>>,
}

impl fmt::Debug for ChatService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatService")
            .field("configured", &self.chat.is_some())
            .finish()
    }
}

impl ChatService {
    /// Create a chat service backed by a conversational model
    pub fn new(chat: Arc<dyn ChatPort>) -> Self {
        Self { chat: Some(chat) }
    }

    /// Create a chat service without a backend (demo replies only)
    pub const fn unconfigured() -> Self {
        Self { chat: None }
    }

    /// Reply to a message
    #[instrument(skip(self, message), fields(message_len = message.len()))]
    pub async fn reply(&self, message: &str) -> String {
        let Some(chat) = &self.chat else {
            return format!(
                "I understand your question about '{message}'. This is a demo response because the inference API token is not configured."
            );
        };

        let start = Instant::now();
        match chat.reply(message).await {
            Ok(Some(reply)) => {
                debug!(
                    latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
                    "Chat reply generated"
                );
                reply
            },
            Ok(None) => {
                warn!("Chat backend returned an unexpected response shape");
                format!(
                    "I received your message about '{message}'. This is a fallback response because the API return format was unexpected."
                )
            },
            Err(e) => {
                warn!(error = %e, "Chat backend failed");
                format!(
                    "I received your question about '{message}'. However, I encountered a technical issue. Please try again later."
                )
            },
        }
    }
}
