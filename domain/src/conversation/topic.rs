//! Topic catalog
//!
//! The discussion topics of The Commons forum with their descriptions and
//! key points. Used to fill in context the caller did not supply and to
//! serve the topic listing.

use serde::Serialize;

/// A known discussion topic (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: &'static str,
    pub description: &'static str,
    pub key_points: &'static [&'static str],
}

const TOPICS: &[Topic] = &[
    Topic {
        id: "monetary-reform",
        description: "Discussion about sovereign money creation, inspired by The King's Reckoning parable about tally sticks and monetary control",
        key_points: &[
            "sovereign money systems",
            "Federal Reserve critique",
            "public banking",
            "monetary democracy",
        ],
    },
    Topic {
        id: "worker-ownership",
        description: "Exploring cooperative economics and worker control of enterprises",
        key_points: &[
            "worker cooperatives",
            "profit sharing",
            "democratic workplaces",
            "Mondragon model",
        ],
    },
    Topic {
        id: "universal-basic-income",
        description: "Examining universal basic income as economic justice tool",
        key_points: &[
            "UBI pilots",
            "automation response",
            "poverty elimination",
            "economic security",
        ],
    },
    Topic {
        id: "community-currencies",
        description: "Local currency systems that keep wealth in communities",
        key_points: &[
            "BerkShares",
            "time banks",
            "local exchange systems",
            "community resilience",
        ],
    },
    Topic {
        id: "cooperative-economics",
        description: "Economic systems based on cooperation rather than competition",
        key_points: &[
            "cooperative principles",
            "solidarity economy",
            "mutual aid networks",
            "commons management",
        ],
    },
    Topic {
        id: "debt-abolition",
        description: "Strategies for eliminating exploitative debt systems",
        key_points: &[
            "debt strikes",
            "medical debt relief",
            "student loan forgiveness",
            "predatory lending",
        ],
    },
    Topic {
        id: "housing-justice",
        description: "Housing as a human right, not commodity",
        key_points: &[
            "social housing",
            "rent control",
            "community land trusts",
            "tenant organizing",
        ],
    },
    Topic {
        id: "tally-system",
        description: "Designing and protecting the Tally system as a unique community metric and potential currency",
        key_points: &[
            "resource accounting",
            "contribution tracking",
            "community valuation",
            "anti-exploitation measures",
            "decentralized governance",
        ],
    },
];

/// Lookup table over the built-in topics.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopicCatalog;

impl TopicCatalog {
    pub fn get(&self, id: &str) -> Option<&'static Topic> {
        TOPICS.iter().find(|t| t.id == id)
    }

    pub fn all(&self) -> &'static [Topic] {
        TOPICS
    }
}
