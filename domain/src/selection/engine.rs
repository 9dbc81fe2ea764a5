//! Selection engine
//!
//! Picks the participant best suited to answer a message.
//!
//! # Algorithm
//!
//! 1. Score every participant with its [`ScoreTable`] against the
//!    lower-cased message.
//! 2. Multiply by the topic multiplier for `context.topic` (default 1.0).
//! 3. Take the strictly highest score; ties go to the participant that
//!    comes first in the declared priority order.
//! 4. Below [`MIN_CONFIDENCE`], fall back to message-shape heuristics:
//!
//! | Step | Condition | Preferred participant |
//! |------|-----------|-----------------------|
//! | a | starts with what/how/why/when/where/who/explain/"tell me about" | educator |
//! | b | contains should/must/need to/have to/ought to | activist, else policy |
//! | c | topic is exactly "legal" or "policy" | that participant |
//! | d | otherwise | economist |
//!
//! A preferred participant that is not registered is skipped. If even the
//! economist is missing, the highest-priority registered participant wins.
//!
//! Selection is a pure function of its inputs: no randomness, no state.

use super::heuristics::{has_modal_obligation, is_interrogative};
use super::score_table::{ScoreTable, ScoringConfig};
use crate::conversation::ConversationContext;
use crate::core::error::DomainError;
use crate::participant::roster::{ACTIVIST, ECONOMIST, EDUCATOR, LEGAL, POLICY};
use crate::participant::{ParticipantId, ParticipantRegistry};
use serde::Serialize;

/// Scores below this fall through to the heuristic chain.
pub const MIN_CONFIDENCE: f64 = 1.0;

/// Why a participant was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionReason {
    KeywordMatch,
    Interrogative,
    ModalObligation,
    TopicOverride,
    Default,
}

impl std::fmt::Display for SelectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SelectionReason::KeywordMatch => "keyword match",
            SelectionReason::Interrogative => "interrogative",
            SelectionReason::ModalObligation => "modal obligation",
            SelectionReason::TopicOverride => "topic override",
            SelectionReason::Default => "default",
        };
        write!(f, "{}", s)
    }
}

/// Final score of one participant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantScore {
    pub participant_id: ParticipantId,
    pub score: f64,
}

/// Outcome of a selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionResult {
    pub participant_id: ParticipantId,
    pub score: f64,
    pub reason: SelectionReason,
    /// All scores, in tie-break priority order.
    pub scores: Vec<ParticipantScore>,
}

/// Deterministic keyword-based participant selector.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    config: ScoringConfig,
    /// Registered participants in tie-break order.
    ranking: Vec<ParticipantId>,
}

impl SelectionEngine {
    /// Build an engine for the given registry.
    ///
    /// Every id referenced by `config` must be registered. Registered
    /// participants missing from `config.priority` rank after the declared
    /// ones, in registry order.
    pub fn new(registry: &ParticipantRegistry, config: ScoringConfig) -> Result<Self, DomainError> {
        if registry.is_empty() {
            return Err(DomainError::EmptyRegistry);
        }
        if let Some(unknown) = config.referenced_ids().find(|id| !registry.contains(id.as_str())) {
            return Err(DomainError::UnknownScoreTableParticipant(unknown.to_string()));
        }

        let mut ranking: Vec<ParticipantId> = Vec::with_capacity(registry.len());
        for id in config.priority.iter().chain(registry.ids()) {
            if !ranking.contains(id) {
                ranking.push(id.clone());
            }
        }

        Ok(Self { config, ranking })
    }

    /// Engine over the built-in roster and scoring data.
    pub fn builtin(registry: &ParticipantRegistry) -> Result<Self, DomainError> {
        Self::new(registry, ScoringConfig::builtin())
    }

    pub fn ranking(&self) -> &[ParticipantId] {
        &self.ranking
    }

    pub fn select(&self, message: &str, context: &ConversationContext) -> SelectionResult {
        let lowered = message.to_lowercase();
        let topic = context.topic();

        let scores: Vec<ParticipantScore> = self
            .ranking
            .iter()
            .map(|id| {
                let raw = self.table(id).map_or(0.0, |t| t.score(&lowered));
                ParticipantScore {
                    participant_id: id.clone(),
                    score: raw * self.config.multiplier(topic, id),
                }
            })
            .collect();

        // Strictly greater keeps the earlier (higher priority) entry on ties
        let best = scores
            .iter()
            .fold(None::<&ParticipantScore>, |best, s| match best {
                Some(b) if s.score <= b.score => Some(b),
                _ => Some(s),
            });

        if let Some(best) = best
            && best.score >= MIN_CONFIDENCE
        {
            return SelectionResult {
                participant_id: best.participant_id.clone(),
                score: best.score,
                reason: SelectionReason::KeywordMatch,
                scores,
            };
        }

        let (participant_id, reason) = self.fallback(&lowered, topic);
        let score = scores
            .iter()
            .find(|s| s.participant_id == participant_id)
            .map_or(0.0, |s| s.score);

        SelectionResult {
            participant_id,
            score,
            reason,
            scores,
        }
    }

    fn table(&self, id: &ParticipantId) -> Option<&ScoreTable> {
        self.config.tables.iter().find(|t| t.participant() == id)
    }

    fn registered(&self, id: &str) -> Option<ParticipantId> {
        self.ranking.iter().find(|r| *r == id).cloned()
    }

    fn fallback(&self, lowered: &str, topic: Option<&str>) -> (ParticipantId, SelectionReason) {
        if is_interrogative(lowered)
            && let Some(id) = self.registered(EDUCATOR)
        {
            return (id, SelectionReason::Interrogative);
        }

        if has_modal_obligation(lowered)
            && let Some(id) = self.registered(ACTIVIST).or_else(|| self.registered(POLICY))
        {
            return (id, SelectionReason::ModalObligation);
        }

        if let Some(topic @ (LEGAL | POLICY)) = topic
            && let Some(id) = self.registered(topic)
        {
            return (id, SelectionReason::TopicOverride);
        }

        let id = self
            .registered(ECONOMIST)
            .unwrap_or_else(|| self.ranking[0].clone());
        (id, SelectionReason::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participant::entities::testing::spec;
    use crate::participant::roster::{CURRENCY, HISTORIAN};

    fn engine() -> SelectionEngine {
        let registry = ParticipantRegistry::builtin().unwrap();
        SelectionEngine::builtin(&registry).unwrap()
    }

    fn score_of(result: &SelectionResult, id: &str) -> f64 {
        result
            .scores
            .iter()
            .find(|s| s.participant_id == id)
            .unwrap()
            .score
    }

    #[test]
    fn test_policy_question_selects_policy() {
        let result = engine().select(
            "What policy changes would help with this legislation?",
            &ConversationContext::new(),
        );
        assert_eq!(result.participant_id, POLICY);
        assert_eq!(result.reason, SelectionReason::KeywordMatch);
        assert!(result.score >= 3.0);
        assert_eq!(score_of(&result, ECONOMIST), 0.0);
    }

    #[test]
    fn test_history_question_selects_historian() {
        let result = engine().select(
            "Tell me about the history of cooperatives",
            &ConversationContext::new(),
        );
        assert_eq!(result.participant_id, HISTORIAN);
        assert!(result.score >= 1.0);
    }

    #[test]
    fn test_no_keywords_defaults_to_economist() {
        let result = engine().select("hi", &ConversationContext::new());
        assert_eq!(result.participant_id, ECONOMIST);
        assert_eq!(result.reason, SelectionReason::Default);
        assert!(result.scores.iter().all(|s| s.score == 0.0));
    }

    #[test]
    fn test_topic_multiplier_applied_before_ranking() {
        let message = "Should the bank and the market follow the new legislation bill and regulation?";

        let plain = engine().select(message, &ConversationContext::new());
        assert_eq!(plain.participant_id, POLICY);
        assert_eq!(score_of(&plain, ECONOMIST), 3.0);
        assert_eq!(score_of(&plain, POLICY), 4.5);

        let ctx = ConversationContext::new().with_topic("monetary-reform");
        let boosted = engine().select(message, &ctx);
        assert_eq!(boosted.participant_id, ECONOMIST);
        assert_eq!(boosted.score, 6.0);
    }

    #[test]
    fn test_tie_breaks_by_priority() {
        // bank (economist 1.5) vs token (currency 1.5)
        let result = engine().select("bank token", &ConversationContext::new());
        assert_eq!(score_of(&result, ECONOMIST), score_of(&result, CURRENCY));
        assert_eq!(result.participant_id, ECONOMIST);

        // policy (1.5) vs rights (legal 1.5): policy ranks above legal
        let result = engine().select("policy rights", &ConversationContext::new());
        assert_eq!(result.participant_id, POLICY);
    }

    #[test]
    fn test_interrogative_fallback_prefers_educator() {
        let result = engine().select("Why though?", &ConversationContext::new());
        assert_eq!(result.participant_id, EDUCATOR);
        assert_eq!(result.reason, SelectionReason::Interrogative);
    }

    #[test]
    fn test_modal_fallback_prefers_activist() {
        let result = engine().select("We must do something", &ConversationContext::new());
        assert_eq!(result.participant_id, ACTIVIST);
        assert_eq!(result.reason, SelectionReason::ModalObligation);
    }

    #[test]
    fn test_modal_fallback_uses_policy_without_activist() {
        let registry = ParticipantRegistry::from_specs(vec![
            spec(ECONOMIST, "x"),
            spec(POLICY, "x"),
        ])
        .unwrap();
        let engine = SelectionEngine::new(&registry, ScoringConfig::default()).unwrap();
        let result = engine.select("you have to see this", &ConversationContext::new());
        assert_eq!(result.participant_id, POLICY);
    }

    #[test]
    fn test_topic_override_fallback() {
        let ctx = ConversationContext::new().with_topic("legal");
        let result = engine().select("ok", &ctx);
        assert_eq!(result.participant_id, LEGAL);
        assert_eq!(result.reason, SelectionReason::TopicOverride);
    }

    #[test]
    fn test_low_score_still_uses_heuristics() {
        // "past" inside "pasta" earns no word bonus
        let result = engine().select("pasta", &ConversationContext::new());
        assert_eq!(score_of(&result, HISTORIAN), 0.5);
        assert_eq!(result.participant_id, ECONOMIST);
    }

    #[test]
    fn test_default_without_economist_uses_first_ranked() {
        let registry =
            ParticipantRegistry::from_specs(vec![spec("zeta", "x"), spec("alpha", "x")]).unwrap();
        let engine = SelectionEngine::new(&registry, ScoringConfig::default()).unwrap();
        let result = engine.select("hello", &ConversationContext::new());
        assert_eq!(result.participant_id, "zeta");
    }

    #[test]
    fn test_unknown_table_participant_rejected() {
        let registry = ParticipantRegistry::from_specs(vec![spec(ECONOMIST, "x")]).unwrap();
        let err = SelectionEngine::new(&registry, ScoringConfig::builtin()).unwrap_err();
        assert!(matches!(err, DomainError::UnknownScoreTableParticipant(_)));
    }

    #[test]
    fn test_select_is_deterministic() {
        let engine = engine();
        let ctx = ConversationContext::new().with_topic("housing-justice");
        let message = "How should tenants organize against rent increases?";
        let first = engine.select(message, &ctx);
        for _ in 0..20 {
            assert_eq!(engine.select(message, &ctx), first);
        }
    }

    #[test]
    fn test_scores_in_priority_order() {
        let result = engine().select("anything", &ConversationContext::new());
        let ids: Vec<&str> = result.scores.iter().map(|s| s.participant_id.as_str()).collect();
        assert_eq!(
            ids,
            vec![ECONOMIST, POLICY, LEGAL, ACTIVIST, HISTORIAN, EDUCATOR, CURRENCY]
        );
    }
}
