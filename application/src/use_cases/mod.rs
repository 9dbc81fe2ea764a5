//! Use cases
//!
//! - [`generate_response`]: a participant's primary reply
//! - [`follow_up`]: a short complementary reply from another participant
//! - [`moderate_content`], [`analyze_story`], [`recommend_resources`] and
//!   [`community_sentiment`]: structured-output callers
//! - [`council`]: the facade that wires them together for callers

pub mod analyze_story;
pub mod community_sentiment;
pub mod council;
pub mod follow_up;
pub mod generate_response;
pub mod moderate_content;
pub mod recommend_resources;
pub(crate) mod shared;
