//! Bounded per-user conversation buffers.
//!
//! Each user gets an ordered log of the most recent dialogue turns, used as
//! short-term context for completion requests. Buffers are created lazily on
//! first record, capped at a fixed number of turns with FIFO eviction, and
//! live for the life of the process. Nothing is persisted; losing the buffers
//! on restart is an accepted property of the design, not a defect.

use std::collections::{HashMap, VecDeque};

use serenity::all::UserId;
use tokio::sync::Mutex;

use crate::model::Turn;

/// Maximum number of turns retained per user.
pub const CONTEXT_CAP: usize = 10;

/// Per-user bounded ordered log of chat turns.
///
/// The lock is held only across in-memory mutation, never across an await on
/// I/O. There is deliberately no per-user serialization around the completion
/// round-trip: two in-flight requests from the same user both snapshot the
/// buffer before either reply is appended, and their appends interleave in
/// arrival order. Last write wins at the buffer level.
pub struct ConversationStore {
    buffers: Mutex<HashMap<UserId, VecDeque<Turn>>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self {
            buffers: Mutex::new(HashMap::new()),
        }
    }

    /// Appends a turn to the user's buffer, evicting the oldest turns until
    /// the buffer is back under the cap.
    ///
    /// Creates the buffer on first use. Pure in-memory mutation; always
    /// succeeds.
    ///
    /// # Arguments
    /// - `user` - The user the turn belongs to
    /// - `turn` - The turn to append
    pub async fn record(&self, user: UserId, turn: Turn) {
        let mut buffers = self.buffers.lock().await;
        let buffer = buffers.entry(user).or_default();
        buffer.push_back(turn);
        while buffer.len() > CONTEXT_CAP {
            buffer.pop_front();
        }
    }

    /// Returns a snapshot of the user's current turn sequence, oldest first.
    ///
    /// Returns an empty sequence if the user has no buffer yet. The snapshot
    /// is an owned copy; later records do not affect it.
    pub async fn context(&self, user: UserId) -> Vec<Turn> {
        let buffers = self.buffers.lock().await;
        buffers
            .get(&user)
            .map(|buffer| buffer.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}
