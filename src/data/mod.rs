//! Storage layer for process-local and file-backed state.
//!
//! This module contains the two shared mutable resources in the application:
//! the in-memory per-user conversation buffers that give the completion
//! endpoint short-term context, and the flat-file warning ledger. Both are
//! constructed once in `main` and handed to the command handlers through
//! `AppState` rather than living in hidden globals.

pub mod conversation;
pub mod warning;

#[cfg(test)]
mod test;
