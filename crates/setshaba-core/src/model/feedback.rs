use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use super::normalize;
use crate::error::ParseEnumError;

/// Review states for citizen feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackStatus {
    InReview,
    Reviewed,
    Actioned,
}

impl FeedbackStatus {
    const fn as_str(self) -> &'static str {
        match self {
            Self::InReview => "in-review",
            Self::Reviewed => "reviewed",
            Self::Actioned => "actioned",
        }
    }

    /// Human-facing label as rendered by the pages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InReview => "In Review",
            Self::Reviewed => "Reviewed",
            Self::Actioned => "Actioned",
        }
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedbackStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        match normalized.as_str() {
            "in-review" | "in review" | "inreview" => Ok(Self::InReview),
            "reviewed" => Ok(Self::Reviewed),
            "actioned" => Ok(Self::Actioned),
            _ => Err(ParseEnumError {
                expected: "feedback status",
                got: s.to_string(),
            }),
        }
    }
}

/// A citizen feedback entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Uuid,
    pub name: String,
    pub message: String,
    pub status: FeedbackStatus,
    pub submitted_at: DateTime<Utc>,
}

impl Feedback {
    /// Create a new entry awaiting review.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        message: impl Into<String>,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            message: message.into(),
            status: FeedbackStatus::InReview,
            submitted_at,
        }
    }
}
