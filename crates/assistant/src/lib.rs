//! Conversation launcher for the video-avatar training assistant.
//!
//! A thin wrapper over the third-party conversation API: one POST that
//! creates a session and returns the URL to open. The API credential is
//! read from the environment, never embedded.

#![warn(missing_docs)]

mod client;

pub use client::{CallProperties, ConversationClient, ConversationSettings, API_KEY_ENV};
