//! vitalwatch-chat
//!
//! The chat responder: remote LLM providers tried in order behind a single
//! trait, plus a local intent matcher that answers from the latest
//! evaluation when no provider is configured or every provider fails.

pub mod chain;
pub mod config;
pub mod context;
pub mod error;
pub mod gemini;
pub mod holder;
pub mod intent;
pub mod openai;
pub mod prompt;
pub mod provider;
pub mod responder;
