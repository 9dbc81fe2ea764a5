//! Prompt templates for structured-output callers

use crate::moderation::{COMMENT_SAMPLE_LIMIT, STORY_SAMPLE_LIMIT, UserProfile};

/// Templates for the callers that ask the provider for a JSON object.
pub struct StructuredPrompt;

impl StructuredPrompt {
    /// System prompt for content moderation
    pub fn moderation_system(content_type: &str) -> String {
        format!(
            r#"You are a content moderator for an economic justice discussion platform.

Review this {content_type} for:
- Hate speech or harassment
- Spam or irrelevant content
- Misinformation about economic topics
- Personal attacks
- Content that doesn't contribute to constructive dialogue

Respond with a JSON object containing:
{{
  "approved": boolean,
  "reasons": [array of specific issues found],
  "severity": "low|medium|high",
  "suggestions": "how to improve the content if needed"
}}"#
        )
    }

    /// User prompt for content moderation
    pub fn moderation_request(content: &str) -> String {
        format!(r#"Please moderate this content: "{}""#, content)
    }

    /// System prompt for story analysis
    pub fn story_analysis_system() -> &'static str {
        "You are an AI assistant specialized in economic justice analysis. \
Provide thoughtful, nuanced analysis of personal stories related to economic \
challenges and community support."
    }

    /// User prompt for story analysis
    pub fn story_analysis_request(story: &str) -> String {
        format!(
            r#"Analyze this economic justice story and provide structured insights:

STORY CONTENT:
{story}

Please analyze for:
1. Key economic justice themes present
2. Emotional tone and sentiment
3. Potential community connections
4. Resource recommendations
5. Content moderation flags

Return JSON response with this structure:
{{
  "themes": ["theme1", "theme2"],
  "sentiment": {{"primary": "positive/negative/neutral", "confidence": 0.95}},
  "community_tags": ["tag1", "tag2"],
  "recommended_resources": ["resource_type1", "resource_type2"],
  "moderation_flags": {{
    "needs_review": boolean,
    "reasons": [],
    "confidence": 0.0
  }}
}}"#
        )
    }

    /// System prompt for resource recommendations
    pub fn recommendations_system() -> &'static str {
        "You are a resource recommendation engine for economic justice. \
Provide actionable, relevant resources based on user needs and context."
    }

    /// User prompt for resource recommendations
    pub fn recommendations_request(profile: &UserProfile, story_context: &str) -> String {
        let profile = serde_json::to_string_pretty(profile).unwrap_or_else(|_| "{}".to_string());
        format!(
            r##"Based on this user profile and story context, generate personalized resource recommendations:

USER PROFILE:
{profile}

STORY CONTEXT:
{story_context}

Recommend resources in these categories:
- Educational materials
- Community organizations
- Advocacy opportunities
- Support services
- Further learning paths

Return JSON response with this structure:
{{
  "recommendations": [
    {{
      "type": "education|community|advocacy|support|learning",
      "title": "Resource Title",
      "description": "Brief description",
      "why_relevant": "Why this is relevant to the user",
      "action_url": "#"
    }}
  ]
}}"##
        )
    }

    /// System prompt for community sentiment analysis
    pub fn community_sentiment_system() -> &'static str {
        "You are a community sentiment analyst. Provide nuanced insights about \
community dynamics, emotional tones, and collective needs."
    }

    /// User prompt for community sentiment analysis.
    ///
    /// Only the first [`STORY_SAMPLE_LIMIT`] stories and
    /// [`COMMENT_SAMPLE_LIMIT`] comments are included.
    pub fn community_sentiment_request(stories: &[String], comments: &[String]) -> String {
        let stories = stories
            .iter()
            .take(STORY_SAMPLE_LIMIT)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n\n---\n\n");
        let comments = comments
            .iter()
            .take(COMMENT_SAMPLE_LIMIT)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            r#"Analyze community sentiment from this sample of stories and comments:

SAMPLE CONTENT:
{stories}

COMMENTS:

{comments}

Provide insights on:
- Overall emotional tone of the community
- Common themes and concerns
- Emerging issues or patterns
- Community strengths and support networks
- Areas needing attention or resources

Return JSON response with this structure:
{{
  "overall_sentiment": {{
    "primary_tone": "positive|negative|neutral|mixed",
    "confidence": 0.95,
    "dominant_emotions": ["emotion1", "emotion2"]
  }},
  "common_themes": [
    {{
      "theme": "Theme name",
      "prevalence": "high|medium|low",
      "examples": ["example1", "example2"]
    }}
  ],
  "emerging_issues": ["issue1", "issue2"],
  "community_strengths": ["strength1", "strength2"],
  "recommended_actions": ["action1", "action2"]
}}"#
        )
    }
}
