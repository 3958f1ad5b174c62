//! # Assistant Boundary
//!
//! The AI chat collaborator, treated as an opaque request/response
//! service: send a message with conversation context, receive incremental
//! text chunks, detect completion or error. Transport, prompting and
//! model choice all live behind [`AssistantClient`].
//!
//! A client failure never propagates: it becomes a synthetic
//! assistant-role message appended to the visible conversation.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Incremental delivery from the assistant.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatEvent {
    /// A chunk of response text.
    Chunk(String),
    /// The response is complete.
    Done,
}

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Assistant request failed: {0}")]
    Request(String),
}

/// Opaque chat collaborator.
pub trait AssistantClient {
    /// Send `message` with `history` as context, delivering the response
    /// incrementally through `on_event` (ending with [`ChatEvent::Done`]).
    fn send(
        &mut self,
        history: &[ChatMessage],
        message: &str,
        on_event: &mut dyn FnMut(ChatEvent),
    ) -> Result<(), AssistantError>;
}

/// The visible conversation transcript.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Send `text` through `client` and append both sides of the exchange
    /// to the transcript. A client error is converted into a synthetic
    /// assistant message; this method itself never fails.
    pub fn send(&mut self, client: &mut dyn AssistantClient, text: &str) {
        let history = self.messages.clone();
        self.messages.push(ChatMessage::user(text));

        let mut reply = String::new();
        let result = client.send(&history, text, &mut |event| {
            if let ChatEvent::Chunk(chunk) = event {
                reply.push_str(&chunk);
            }
        });

        match result {
            Ok(()) => self.messages.push(ChatMessage::assistant(reply)),
            Err(err) => {
                warn!(%err, "assistant request failed");
                self.messages.push(ChatMessage::assistant(format!(
                    "Sorry, something went wrong: {err}"
                )));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedClient {
        chunks: Vec<&'static str>,
        fail: bool,
    }

    impl AssistantClient for ScriptedClient {
        fn send(
            &mut self,
            _history: &[ChatMessage],
            _message: &str,
            on_event: &mut dyn FnMut(ChatEvent),
        ) -> Result<(), AssistantError> {
            if self.fail {
                return Err(AssistantError::Request("timeout".to_string()));
            }
            for chunk in &self.chunks {
                on_event(ChatEvent::Chunk(chunk.to_string()));
            }
            on_event(ChatEvent::Done);
            Ok(())
        }
    }

    #[test]
    fn test_chat_message_round_trips_with_lowercase_role() {
        let message = ChatMessage::assistant("done");
        let json = serde_json::to_string(&message).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"done"}"#);

        let back: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, message);
    }

    #[test]
    fn test_streamed_chunks_accumulate_into_one_reply() {
        let mut client = ScriptedClient {
            chunks: vec!["Hello", ", ", "world"],
            fail: false,
        };
        let mut conversation = Conversation::new();

        conversation.send(&mut client, "hi");

        let messages = conversation.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ChatRole::User);
        assert_eq!(messages[1].role, ChatRole::Assistant);
        assert_eq!(messages[1].content, "Hello, world");
    }

    #[test]
    fn test_client_error_becomes_assistant_message() {
        let mut client = ScriptedClient {
            chunks: vec![],
            fail: true,
        };
        let mut conversation = Conversation::new();

        conversation.send(&mut client, "hi");

        let messages = conversation.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, ChatRole::Assistant);
        assert!(messages[1].content.contains("timeout"));
    }
}
