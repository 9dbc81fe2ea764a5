//! Message-shape heuristics for low-confidence selection
//!
//! Short messages rarely hit enough keywords to score confidently. These
//! checks look at the shape of the message instead of its vocabulary.

use crate::core::string::contains_word;

const INTERROGATIVE_WORDS: &[&str] = &["what", "how", "why", "when", "where", "who", "explain"];
const INTERROGATIVE_PHRASES: &[&str] = &["tell me about"];
const MODAL_OBLIGATIONS: &[&str] = &["should", "must", "need to", "have to", "ought to"];

/// Does the (lower-cased) message open like a question?
///
/// True when the first word is one of what/how/why/when/where/who/explain,
/// or the message starts with "tell me about".
pub fn is_interrogative(lowered: &str) -> bool {
    let trimmed = lowered.trim_start();

    if INTERROGATIVE_PHRASES.iter().any(|p| trimmed.starts_with(p)) {
        return true;
    }

    let first_word: String = trimmed
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '\'')
        .collect();
    let first_word = first_word.split('\'').next().unwrap_or_default();

    INTERROGATIVE_WORDS.contains(&first_word)
}

/// Does the (lower-cased) message contain modal-obligation language?
pub fn has_modal_obligation(lowered: &str) -> bool {
    MODAL_OBLIGATIONS
        .iter()
        .any(|modal| contains_word(lowered, modal))
}
