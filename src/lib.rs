//! Memrelay - a chat-completion relay that routes LLM requests through the
//! Supermemory memory-augmentation proxy.

pub mod config;
pub mod handlers;
pub mod relay;
pub mod server;
