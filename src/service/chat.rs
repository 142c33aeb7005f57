//! Conversation orchestration for the chat-completion path.
//!
//! Both the `/ask` command and the passive message trigger flow through
//! `ChatService::reply`: record the input as a user turn, send the fixed
//! system instruction plus the stored context, record the reply as an
//! assistant turn, hand the text back. Output truncation to Discord's
//! message limit is the caller's job.

use std::sync::Arc;

use serenity::all::UserId;

use crate::data::conversation::ConversationStore;
use crate::error::CompletionError;
use crate::model::Turn;
use crate::service::completion::CompletionClient;

/// Fixed system instruction sent ahead of the stored context.
pub const SYSTEM_PROMPT: &str =
    "You are a friendly, smart Discord AI assistant with short, clear answers.";

pub struct ChatService {
    store: Arc<ConversationStore>,
    client: CompletionClient,
}

impl ChatService {
    pub fn new(store: Arc<ConversationStore>, client: CompletionClient) -> Self {
        Self { store, client }
    }

    /// Produces a reply for the given user input.
    ///
    /// There is no mutual exclusion across the completion await: two
    /// quick messages from the same user both see a context snapshot taken
    /// before either reply lands, and their turns interleave in arrival
    /// order. Accepted consistency gap, documented on `ConversationStore`.
    ///
    /// # Arguments
    /// - `user` - The user the dialogue belongs to
    /// - `input` - New input text to answer
    ///
    /// # Returns
    /// - `Ok(String)` - Reply text, untruncated
    /// - `Err(CompletionError)` - The single completion attempt failed; the
    ///   user turn stays recorded
    pub async fn reply(&self, user: UserId, input: &str) -> Result<String, CompletionError> {
        self.store.record(user, Turn::user(input)).await;
        let context = self.store.context(user).await;

        let mut messages = Vec::with_capacity(context.len() + 1);
        messages.push(Turn::system(SYSTEM_PROMPT));
        messages.extend(context);

        let reply = self.client.complete(&messages).await?;
        self.store.record(user, Turn::assistant(&reply)).await;

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat_against(server: &mockito::Server) -> (ChatService, Arc<ConversationStore>) {
        let store = Arc::new(ConversationStore::new());
        let client = CompletionClient::new(
            server.url(),
            "test-key".to_string(),
            "test-model".to_string(),
        )
        .unwrap();
        (ChatService::new(store.clone(), client), store)
    }

    /// Tests that a successful exchange records both sides of the dialogue.
    ///
    /// Expected: Ok with user turn then assistant turn in the store
    #[tokio::test]
    async fn records_user_and_assistant_turns() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/v1/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"content":"hi!"}}]}"#)
            .create_async()
            .await;

        let (chat, store) = chat_against(&server);
        let user = UserId::new(7);

        let reply = chat.reply(user, "hello").await.unwrap();
        assert_eq!(reply, "hi!");

        let context = store.context(user).await;
        assert_eq!(context.len(), 2);
        assert_eq!(context[0], Turn::user("hello"));
        assert_eq!(context[1], Turn::assistant("hi!"));
    }

    /// Tests that a failed completion leaves the user turn in place and no
    /// assistant turn.
    ///
    /// Expected: Err, store holds only the user turn
    #[tokio::test]
    async fn failed_completion_keeps_user_turn() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/v1/chat/completions")
            .with_status(500)
            .create_async()
            .await;

        let (chat, store) = chat_against(&server);
        let user = UserId::new(7);

        let result = chat.reply(user, "hello").await;
        assert!(result.is_err());

        let context = store.context(user).await;
        assert_eq!(context.len(), 1);
        assert_eq!(context[0], Turn::user("hello"));
    }
}
