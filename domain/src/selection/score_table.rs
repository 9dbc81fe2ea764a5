//! Keyword score tables and topic multipliers
//!
//! Read-only data defined alongside the participant roster. Every id
//! referenced here must exist in the registry; [`SelectionEngine::new`]
//! checks that once at startup.
//!
//! [`SelectionEngine::new`]: super::engine::SelectionEngine::new

use crate::core::string::contains_word;
use crate::participant::ParticipantId;
use crate::participant::roster::{
    ACTIVIST, CURRENCY, ECONOMIST, EDUCATOR, HISTORIAN, LEGAL, POLICY,
};
use std::collections::BTreeMap;

/// Extra weight when a keyword also matches on word boundaries.
pub const WORD_BOUNDARY_BONUS: f64 = 0.5;

/// Weighted keywords for one participant.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    participant: ParticipantId,
    keywords: Vec<(String, f64)>,
}

impl ScoreTable {
    /// Keywords are stored lower-cased.
    pub fn new<I, S>(participant: impl Into<ParticipantId>, keywords: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        Self {
            participant: participant.into(),
            keywords: keywords
                .into_iter()
                .map(|(k, w)| (k.as_ref().to_lowercase(), w))
                .collect(),
        }
    }

    pub fn participant(&self) -> &ParticipantId {
        &self.participant
    }

    pub fn keywords(&self) -> &[(String, f64)] {
        &self.keywords
    }

    /// Raw score of an already lower-cased message.
    ///
    /// Each keyword contributes at most once: its weight when it appears as a
    /// substring, plus [`WORD_BOUNDARY_BONUS`] when it also appears as a
    /// whole word.
    pub fn score(&self, lowered_message: &str) -> f64 {
        self.keywords
            .iter()
            .filter(|(keyword, _)| lowered_message.contains(keyword.as_str()))
            .map(|(keyword, weight)| {
                if contains_word(lowered_message, keyword) {
                    weight + WORD_BOUNDARY_BONUS
                } else {
                    *weight
                }
            })
            .sum()
    }
}

/// Complete scoring configuration for the selection engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringConfig {
    pub tables: Vec<ScoreTable>,
    /// topic id -> participant id -> multiplier (absent means 1.0)
    pub topic_multipliers: BTreeMap<String, BTreeMap<ParticipantId, f64>>,
    /// Tie-break order, highest priority first.
    pub priority: Vec<ParticipantId>,
}

impl ScoringConfig {
    pub fn with_table(mut self, table: ScoreTable) -> Self {
        self.tables.push(table);
        self
    }

    pub fn with_multiplier(
        mut self,
        topic: impl Into<String>,
        participant: impl Into<ParticipantId>,
        multiplier: f64,
    ) -> Self {
        self.topic_multipliers
            .entry(topic.into())
            .or_default()
            .insert(participant.into(), multiplier);
        self
    }

    pub fn with_priority<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ParticipantId>,
    {
        self.priority = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn multiplier(&self, topic: Option<&str>, participant: &ParticipantId) -> f64 {
        topic
            .and_then(|t| self.topic_multipliers.get(t))
            .and_then(|m| m.get(participant))
            .copied()
            .unwrap_or(1.0)
    }

    /// Every participant id referenced anywhere in this config.
    pub fn referenced_ids(&self) -> impl Iterator<Item = &ParticipantId> {
        self.tables
            .iter()
            .map(ScoreTable::participant)
            .chain(self.topic_multipliers.values().flat_map(|m| m.keys()))
            .chain(self.priority.iter())
    }

    /// Scoring data for the built-in roster.
    pub fn builtin() -> Self {
        let mut config = Self::default()
            .with_table(ScoreTable::new(
                ECONOMIST,
                [
                    ("economic", 1.0),
                    ("economy", 1.0),
                    ("financial", 1.0),
                    ("bank", 1.0),
                    ("inflation", 1.0),
                    ("market", 1.0),
                    ("monetary", 1.0),
                    ("interest rate", 1.0),
                ],
            ))
            .with_table(ScoreTable::new(
                ACTIVIST,
                [
                    ("action", 1.0),
                    ("organize", 1.0),
                    ("organizing", 1.0),
                    ("fight", 1.0),
                    ("protest", 1.0),
                    ("campaign", 1.0),
                    ("mobilize", 1.0),
                    ("strike", 1.0),
                ],
            ))
            .with_table(ScoreTable::new(
                HISTORIAN,
                [
                    ("history", 1.0),
                    ("historical", 1.0),
                    ("past", 0.5),
                    ("before", 0.5),
                    ("precedent", 0.5),
                    ("example", 0.5),
                ],
            ))
            .with_table(ScoreTable::new(
                POLICY,
                [
                    ("policy", 1.0),
                    ("legislation", 1.0),
                    ("law", 0.5),
                    ("bill", 1.0),
                    ("congress", 1.0),
                    ("government", 0.5),
                    ("regulation", 1.0),
                ],
            ))
            .with_table(ScoreTable::new(
                LEGAL,
                [
                    ("legal", 1.0),
                    ("rights", 1.0),
                    ("court", 1.0),
                    ("constitutional", 1.0),
                    ("lawsuit", 1.0),
                    ("precedent", 0.5),
                ],
            ))
            .with_table(ScoreTable::new(
                EDUCATOR,
                [
                    ("learn", 1.0),
                    ("understand", 1.0),
                    ("teach", 1.0),
                    ("clarify", 1.0),
                    ("help", 0.5),
                ],
            ))
            .with_table(ScoreTable::new(
                CURRENCY,
                [
                    ("tally", 1.0),
                    ("currency", 1.0),
                    ("token", 1.0),
                    ("metric", 1.0),
                    ("crypto", 1.0),
                    ("money", 0.5),
                    ("value", 0.5),
                ],
            ))
            .with_multiplier("monetary-reform", ECONOMIST, 2.0)
            .with_multiplier("monetary-reform", CURRENCY, 1.25)
            .with_priority([ECONOMIST, POLICY, LEGAL, ACTIVIST, HISTORIAN, EDUCATOR, CURRENCY]);

        for topic in ["community-currencies", "tally-system"] {
            config = config
                .with_multiplier(topic, CURRENCY, 2.0)
                .with_multiplier(topic, ECONOMIST, 1.25);
        }
        for topic in ["worker-ownership", "cooperative-economics"] {
            config = config
                .with_multiplier(topic, ACTIVIST, 1.5)
                .with_multiplier(topic, HISTORIAN, 1.25);
        }
        for topic in ["housing-justice", "debt-abolition"] {
            config = config
                .with_multiplier(topic, ACTIVIST, 1.5)
                .with_multiplier(topic, POLICY, 1.25)
                .with_multiplier(topic, LEGAL, 1.25);
        }
        config
            .with_multiplier("universal-basic-income", POLICY, 1.5)
            .with_multiplier("universal-basic-income", ECONOMIST, 1.5)
    }
}
