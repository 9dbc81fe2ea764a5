//! Structured-output value objects
//!
//! Results of content moderation, story analysis, resource recommendations
//! and community sentiment. All are read from provider JSON and tolerate
//! loosely shaped replies.

pub mod community;
pub mod recommendation;
pub mod story;
pub mod verdict;

pub use community::{
    COMMENT_SAMPLE_LIMIT, CommonTheme, CommunitySentiment, OverallSentiment, STORY_SAMPLE_LIMIT,
};
pub use recommendation::{Recommendation, UserProfile};
pub use story::{ModerationFlags, Sentiment, StoryAnalysis};
pub use verdict::{ModerationVerdict, PERMISSIVE_SUGGESTION, Severity};
