//! Participant registry
//!
//! Read-only roster populated once at startup. Lookups are total: an unknown
//! id yields [`DomainError::ParticipantNotFound`].

use super::entities::{Participant, ParticipantId, ParticipantSpec, ParticipantSummary};
use super::roster;
use crate::core::error::DomainError;
use crate::core::random::{RandomSource, choose};
use std::collections::HashSet;

/// Ordered, immutable set of participants.
#[derive(Debug, Clone)]
pub struct ParticipantRegistry {
    participants: Vec<Participant>,
}

impl ParticipantRegistry {
    /// Build a registry from raw specs, validating every entry.
    ///
    /// Fails on an empty roster, a duplicate id, or any malformed spec.
    pub fn from_specs(specs: Vec<ParticipantSpec>) -> Result<Self, DomainError> {
        if specs.is_empty() {
            return Err(DomainError::EmptyRegistry);
        }

        let mut seen = HashSet::new();
        let mut participants = Vec::with_capacity(specs.len());
        for spec in specs {
            let participant = Participant::from_spec(spec)?;
            if !seen.insert(participant.id().clone()) {
                return Err(DomainError::DuplicateParticipant(
                    participant.id().to_string(),
                ));
            }
            participants.push(participant);
        }

        Ok(Self { participants })
    }

    /// The built-in seven-participant roster.
    pub fn builtin() -> Result<Self, DomainError> {
        Self::from_specs(roster::builtin_specs())
    }

    pub fn get(&self, id: &str) -> Result<&Participant, DomainError> {
        self.participants
            .iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| DomainError::ParticipantNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.participants.iter().any(|p| p.id() == id)
    }

    /// Public summaries in declaration order.
    pub fn all(&self) -> Vec<ParticipantSummary> {
        self.participants.iter().map(Participant::summary).collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ParticipantId> {
        self.participants.iter().map(Participant::id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Pick uniformly among every participant except `exclude_id`.
    ///
    /// With a single participant that equals `exclude_id`, the exclusion
    /// cannot be satisfied and that sole participant is returned. Returns
    /// `None` only for an empty registry.
    pub fn random_other_than(
        &self,
        exclude_id: Option<&str>,
        random: &dyn RandomSource,
    ) -> Option<&Participant> {
        let eligible: Vec<&Participant> = self
            .participants
            .iter()
            .filter(|p| exclude_id.is_none_or(|ex| p.id() != ex))
            .collect();

        if eligible.is_empty() {
            return self.participants.first();
        }

        choose(&eligible, random).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::testing::{CyclingRandom, FixedRandom};
    use crate::participant::entities::testing::spec;

    fn registry(ids: &[&str]) -> ParticipantRegistry {
        ParticipantRegistry::from_specs(ids.iter().map(|id| spec(id, "Calm")).collect()).unwrap()
    }

    #[test]
    fn test_builtin_registry() {
        let reg = ParticipantRegistry::builtin().unwrap();
        assert_eq!(reg.len(), 7);
        assert_eq!(reg.get("policy").unwrap().name(), "PolicyPro");
    }

    #[test]
    fn test_get_unknown_is_not_found() {
        let reg = registry(&["a"]);
        let err = reg.get("zzz").unwrap_err();
        assert_eq!(err, DomainError::ParticipantNotFound("zzz".into()));
    }

    #[test]
    fn test_empty_registry_rejected() {
        assert_eq!(
            ParticipantRegistry::from_specs(vec![]).unwrap_err(),
            DomainError::EmptyRegistry
        );
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = ParticipantRegistry::from_specs(vec![spec("a", "x"), spec("a", "y")]).unwrap_err();
        assert_eq!(err, DomainError::DuplicateParticipant("a".into()));
    }

    #[test]
    fn test_all_is_ordered_and_idempotent() {
        let reg = ParticipantRegistry::builtin().unwrap();
        let first = reg.all();
        let second = reg.all();
        assert_eq!(first, second);
        assert_eq!(first[0].id.as_str(), "economist");
        assert_eq!(first[6].id.as_str(), "currency");
        assert_eq!(first[5].avatar, "G");
    }

    #[test]
    fn test_random_other_than_never_returns_excluded() {
        let reg = registry(&["a", "b", "c"]);
        let random = CyclingRandom::default();
        for _ in 0..100 {
            let picked = reg.random_other_than(Some("b"), &random).unwrap();
            assert_ne!(picked.id().as_str(), "b");
        }
    }

    #[test]
    fn test_random_other_than_covers_all_eligible() {
        let reg = registry(&["a", "b", "c"]);
        let random = CyclingRandom::default();
        let picks: HashSet<String> = (0..10)
            .map(|_| reg.random_other_than(Some("a"), &random).unwrap().id().to_string())
            .collect();
        assert_eq!(picks, HashSet::from(["b".to_string(), "c".to_string()]));
    }

    #[test]
    fn test_random_other_than_sole_participant() {
        let reg = registry(&["only"]);
        let picked = reg.random_other_than(Some("only"), &FixedRandom(0)).unwrap();
        assert_eq!(picked.id().as_str(), "only");
    }

    #[test]
    fn test_random_other_than_without_exclusion() {
        let reg = registry(&["a", "b"]);
        let picked = reg.random_other_than(None, &FixedRandom(1)).unwrap();
        assert_eq!(picked.id().as_str(), "b");
    }
}
