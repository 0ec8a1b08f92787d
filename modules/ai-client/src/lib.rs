//! Minimal OpenAI chat-completions client.
//!
//! Exposes just enough surface for prompt-in, text-out calls; structured
//! output, tool calling, and streaming are out of scope here.

pub mod client;
pub mod types;

pub use client::OpenAiClient;
pub use types::{ChatMessage, ChatRequest, ChatResponse};
