//! Prompt templates for participant responses

use crate::conversation::{ConversationContext, ConversationHistory, HISTORY_WINDOW};
use crate::participant::Participant;

/// Rendered in place of key points when the context carries none.
pub const DEFAULT_KEY_POINTS: &str = "general economic justice discussion";

/// Rendered when the context names no topic.
pub const DEFAULT_TOPIC: &str = "open discussion";

/// Rendered when neither the caller nor the topic catalog supplied a description.
pub const DEFAULT_DESCRIPTION: &str = "No description provided";

/// Builds the instruction text sent to the provider for a participant.
pub struct PromptAssembler;

impl PromptAssembler {
    /// System prompt for a primary response, using the last
    /// [`HISTORY_WINDOW`] history entries.
    pub fn build(
        participant: &Participant,
        context: &ConversationContext,
        history: &ConversationHistory,
    ) -> String {
        Self::build_with_window(participant, context, history, HISTORY_WINDOW)
    }

    pub fn build_with_window(
        participant: &Participant,
        context: &ConversationContext,
        history: &ConversationHistory,
        window: usize,
    ) -> String {
        let name = participant.name();
        let topic = context.topic().unwrap_or(DEFAULT_TOPIC);
        let description = context
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION);
        let key_points = if context.key_points.is_empty() {
            DEFAULT_KEY_POINTS.to_string()
        } else {
            context.key_points.join(", ")
        };

        format!(
            r#"You are {name}, an {role} specializing in {specialty}.

PERSONALITY TRAITS:
{persona}

EXPERTISE AREAS:
{expertise}

RESPONSE STYLES:
{styles}

CURRENT DISCUSSION CONTEXT:
Topic: {topic}
Description: {description}
Key Points: {key_points}
Mode: {mode}

RECENT CONVERSATION:
{transcript}

RESPONSE GUIDELINES:
1. Respond in character as {name} with your unique personality
2. Reference your expertise areas when relevant
3. Use your response styles to shape your communication
4. Be helpful, knowledgeable, and focused on economic justice solutions
5. Reference real examples and data when relevant
6. Keep responses conversational but informative (2-4 sentences typically)
7. Occasionally ask follow-up questions to engage the user
8. Build on previous messages in the conversation when appropriate"#,
            role = participant.role(),
            specialty = participant.specialty(),
            persona = participant.persona(),
            expertise = participant.expertise().join(", "),
            styles = participant.response_styles().join(", "),
            mode = context.mode(),
            transcript = history.transcript(window),
        )
    }

    /// System prompt asking `participant` for a short complementary take on
    /// an exchange that already happened.
    ///
    /// `focus` is one of the participant's response styles, chosen by the caller.
    pub fn follow_up(
        participant: &Participant,
        original_message: &str,
        first_response: &str,
        context: &ConversationContext,
        focus: &str,
    ) -> String {
        let topic_line = context
            .topic()
            .map(|t| format!("\nThe discussion topic is: {}\n", t))
            .unwrap_or_default();

        format!(
            r#"You are {name}, providing a follow-up comment in The Commons economic justice forum.
{topic_line}
The user said: "{original_message}"
Another participant responded: "{first_response}"

Provide a brief follow-up or different perspective that adds value to the discussion.
Keep it short (1-2 sentences) and in character as a {role} with expertise in {specialty}.
Focus on: {focus}"#,
            name = participant.name(),
            role = participant.role(),
            specialty = participant.specialty(),
        )
    }

    /// User turn that accompanies [`PromptAssembler::follow_up`].
    pub fn follow_up_request() -> &'static str {
        "Share your follow-up perspective."
    }
}
