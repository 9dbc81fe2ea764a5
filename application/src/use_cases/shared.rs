//! Shared utilities for use cases.
//!
//! Bounded provider calls used by every use case that talks to the
//! completion provider.

use crate::ports::completion_provider::{CompletionProvider, ProviderError};
use commons_domain::{ChatMessage, CompletionOptions, ParsedCompletion, parse_completion};
use std::time::{Duration, Instant};
use tracing::debug;

/// Call the provider and parse its reply, giving up after `timeout`.
///
/// Expiry maps to [`ProviderError::Timeout`]; the pending call is dropped.
pub(crate) async fn complete_with_timeout(
    provider: &dyn CompletionProvider,
    messages: &[ChatMessage],
    options: &CompletionOptions,
    timeout: Duration,
) -> Result<ParsedCompletion, ProviderError> {
    let started = Instant::now();

    let raw = match tokio::time::timeout(timeout, provider.complete(messages, options)).await {
        Ok(result) => result?,
        Err(_) => return Err(ProviderError::Timeout),
    };

    debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        chars = raw.content.len(),
        "Provider call completed"
    );

    Ok(parse_completion(&raw))
}
