use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scored unit of knowledge.
///
/// Facts are immutable per-request value objects. The engine never
/// mutates them; it only reads text, embedding, timestamps, and the
/// outgoing citation references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    /// Unique, stable identifier within a project.
    pub id: String,

    /// Content used for lexical scoring. May be empty.
    #[serde(default)]
    pub text: String,

    /// Optional fixed-length embedding vector.
    ///
    /// Absence is valid: the semantic sub-score for this fact is then 0.
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,

    /// IDs of other facts this fact cites (outgoing citation edges).
    ///
    /// References to facts outside a scoring request's candidate set
    /// are ignored by the authority scorer.
    #[serde(default)]
    pub references: Vec<String>,
}

impl Fact {
    /// Create a fact with no embedding and no citations.
    ///
    /// `created_at` and `updated_at` both take `timestamp`.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            embedding: None,
            created_at: timestamp,
            updated_at: timestamp,
            references: Vec::new(),
        }
    }

    /// The effective age anchor: the more recent of `created_at` and
    /// `updated_at`. Recency decay is measured from this instant.
    #[must_use]
    pub fn effective_timestamp(&self) -> DateTime<Utc> {
        self.created_at.max(self.updated_at)
    }
}
