//! Business logic orchestration between the command layer and external APIs.
//!
//! Services wrap the outbound HTTP exchanges (chat completion, image
//! generation) and the Discord moderation calls, exposing small typed
//! interfaces to the command handlers. All remote calls are single-attempt:
//! a failed exchange surfaces a domain error for the handler to turn into a
//! user-visible reply, never a retry and never a crash.

pub mod chat;
pub mod completion;
pub mod image;
pub mod moderation;
