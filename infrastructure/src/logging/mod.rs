//! Logging infrastructure: structured conversation logging.
//!
//! [`JsonlConversationLogger`] is an append-only JSONL sink implementing
//! the [`ConversationLogger`](commons_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
