//! Participant entities
//!
//! A [`Participant`] is built from a loosely-shaped [`ParticipantSpec`]
//! exactly once, at registry construction. Validation happens there so a
//! malformed roster is rejected at startup instead of on first use.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Identifier of a participant (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ParticipantId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for ParticipantId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ParticipantId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Raw participant definition as declared in the roster table.
///
/// Every field is optional or possibly empty; [`Participant::from_spec`]
/// enforces the required shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticipantSpec {
    pub id: String,
    pub name: String,
    pub role: String,
    pub specialty: String,
    pub avatar: Option<String>,
    pub persona: String,
    pub expertise: Vec<String>,
    pub response_styles: Vec<String>,
    pub fallback_catalog: Vec<String>,
    pub follow_up_fallbacks: Vec<String>,
}

/// A specialist persona (Entity)
///
/// Immutable after construction. Conversation history is never stored here;
/// it is owned by the caller and passed per request.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    id: ParticipantId,
    name: String,
    role: String,
    specialty: String,
    avatar: String,
    persona: String,
    expertise: Vec<String>,
    response_styles: Vec<String>,
    fallback_catalog: Vec<String>,
    follow_up_fallbacks: Vec<String>,
}

impl Participant {
    /// Validate a spec and build the participant.
    pub fn from_spec(spec: ParticipantSpec) -> Result<Self, DomainError> {
        let id = spec.id.trim().to_string();
        let invalid = |reason: &str| DomainError::InvalidParticipant {
            id: if id.is_empty() { "<missing>".to_string() } else { id.clone() },
            reason: reason.to_string(),
        };

        if id.is_empty() {
            return Err(invalid("id is required"));
        }
        for (field, value) in [
            ("name", &spec.name),
            ("role", &spec.role),
            ("specialty", &spec.specialty),
            ("persona", &spec.persona),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(&format!("{} is required", field)));
            }
        }
        for (field, list) in [
            ("expertise", &spec.expertise),
            ("responseStyles", &spec.response_styles),
            ("fallbackCatalog", &spec.fallback_catalog),
            ("followUpFallbacks", &spec.follow_up_fallbacks),
        ] {
            if list.is_empty() {
                return Err(invalid(&format!("{} must not be empty", field)));
            }
            if list.iter().any(|entry| entry.trim().is_empty()) {
                return Err(invalid(&format!("{} contains a blank entry", field)));
            }
        }

        let avatar = spec
            .avatar
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| spec.name.chars().take(1).collect());

        Ok(Self {
            id: ParticipantId::new(id),
            name: spec.name,
            role: spec.role,
            specialty: spec.specialty,
            avatar,
            persona: spec.persona,
            expertise: spec.expertise,
            response_styles: spec.response_styles,
            fallback_catalog: spec.fallback_catalog,
            follow_up_fallbacks: spec.follow_up_fallbacks,
        })
    }

    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    pub fn persona(&self) -> &str {
        &self.persona
    }

    pub fn expertise(&self) -> &[String] {
        &self.expertise
    }

    pub fn response_styles(&self) -> &[String] {
        &self.response_styles
    }

    /// Canned replies used when a primary response cannot be generated.
    pub fn fallback_catalog(&self) -> &[String] {
        &self.fallback_catalog
    }

    /// Canned replies used when a follow-up cannot be generated.
    pub fn follow_up_fallbacks(&self) -> &[String] {
        &self.follow_up_fallbacks
    }

    /// Sampling temperature derived from the persona text.
    ///
    /// | Persona mentions | Temperature |
    /// |------------------|-------------|
    /// | creative / innovative | 0.8 |
    /// | analytical / data-driven | 0.5 |
    /// | anything else | 0.7 |
    ///
    /// Matching is case-sensitive and checked in that order, so a persona
    /// opening with "Innovative" stays at the balanced default.
    pub fn temperature(&self) -> f32 {
        let persona = self.persona.as_str();
        if persona.contains("creative") || persona.contains("innovative") {
            0.8
        } else if persona.contains("analytical") || persona.contains("data-driven") {
            0.5
        } else {
            0.7
        }
    }

    /// Public view of this participant.
    pub fn summary(&self) -> ParticipantSummary {
        ParticipantSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
            specialty: self.specialty.clone(),
            avatar: self.avatar.clone(),
            persona: self.persona.clone(),
        }
    }
}

/// Public participant summary (what `listParticipants` exposes)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSummary {
    pub id: ParticipantId,
    pub name: String,
    pub role: String,
    pub specialty: String,
    pub avatar: String,
    pub persona: String,
}
