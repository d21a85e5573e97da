//! V1 API handlers.

mod chat;

pub use chat::chat;
