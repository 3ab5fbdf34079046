//! Conversation with the scripted assistant.
//!
//! There is a single conversation per process. It opens with a greeting and grows by one
//! user message and one assistant reply per accepted send.

use crate::constants::CHAT_GREETING;
use crate::responder::KeywordResponder;
use crate::store::MemoryStore;
use crate::DashboardResult;
use api_shared::{ChatMessage, SendMessageRes, Sender};
use caredesk_types::NonEmptyText;
use chrono::Utc;
use uuid::Uuid;

fn message(text: impl Into<String>, sender: Sender) -> ChatMessage {
    ChatMessage {
        id: Uuid::new_v4().simple().to_string(),
        text: text.into(),
        sender,
        timestamp: Utc::now(),
    }
}

#[derive(Clone, Debug)]
pub struct ChatSession {
    responder: KeywordResponder,
    messages: MemoryStore<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(KeywordResponder::default())
    }
}

impl ChatSession {
    pub fn new(responder: KeywordResponder) -> Self {
        Self {
            responder,
            messages: MemoryStore::new("chat", vec![message(CHAT_GREETING, Sender::Ai)]),
        }
    }

    pub fn history(&self) -> DashboardResult<Vec<ChatMessage>> {
        self.messages.read(|messages| messages.to_vec())
    }

    /// Record the user's message and the assistant's reply to it.
    ///
    /// # Errors
    ///
    /// `EmptyText` when `text` is blank; the conversation is left unchanged.
    /// Otherwise the message is stored as typed.
    pub fn send(&self, text: &str) -> DashboardResult<SendMessageRes> {
        NonEmptyText::new(text)?;
        let reply_text = self.responder.reply(text);

        let user_message = message(text, Sender::User);
        let reply = message(reply_text, Sender::Ai);

        self.messages.write(|messages| {
            messages.push(user_message.clone());
            messages.push(reply.clone());
        })?;

        tracing::debug!(message_id = %user_message.id, "assistant replied");
        Ok(SendMessageRes {
            user_message,
            reply,
        })
    }
}
