//! Random source abstraction
//!
//! Fallback text and follow-up participants are picked at random. The
//! domain only needs "an index below `len`", so the source is injected and
//! tests can script exact outcomes.

/// Source of uniformly distributed indices.
///
/// Implementations live in the infrastructure layer (thread RNG, seeded RNG).
pub trait RandomSource: Send + Sync {
    /// Return an index in `0..len`.
    ///
    /// Callers never pass `len == 0`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Choose one element of a slice using the given source.
///
/// Returns `None` for an empty slice.
pub fn choose<'a, T>(items: &'a [T], random: &dyn RandomSource) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = random.pick_index(items.len()).min(items.len() - 1);
    items.get(idx)
}
