//! Completion domain
//!
//! Messages and options exchanged with the text-completion provider, and
//! the parser for what comes back.

pub mod message;
pub mod parsing;

pub use message::{ChatMessage, CompletionOptions, RawCompletion, Role};
pub use parsing::{ParsedCompletion, parse_completion};
