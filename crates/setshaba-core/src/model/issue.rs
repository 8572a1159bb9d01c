use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use super::normalize;
use crate::error::ParseEnumError;

/// The five service categories an issue can be reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Water,
    Electricity,
    Roads,
    Waste,
    Other,
}

impl Category {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Electricity => "electricity",
            Self::Roads => "roads",
            Self::Waste => "waste",
            Self::Other => "other",
        }
    }

    /// Human-facing label as rendered by the pages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Water => "Water",
            Self::Electricity => "Electricity",
            Self::Roads => "Roads",
            Self::Waste => "Waste",
            Self::Other => "Other",
        }
    }

    /// All categories in the order the filter bar presents them.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Water,
            Self::Electricity,
            Self::Roads,
            Self::Waste,
            Self::Other,
        ]
    }
}

/// The three lifecycle states of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Reported,
    InProgress,
    Resolved,
}

impl Status {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Reported => "reported",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }

    /// Human-facing label as rendered by the pages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reported => "Reported",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }

    /// All statuses in workflow order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Reported, Self::InProgress, Self::Resolved]
    }

    /// Validate whether a transition from self to `target` follows the
    /// forward-only workflow.
    ///
    /// Valid transitions:
    /// - `reported -> in-progress`
    /// - `reported -> resolved`
    /// - `in-progress -> resolved`
    ///
    /// This is advisory: the store accepts any replacement record, so a
    /// caller that wants the workflow enforced checks here first.
    pub fn can_transition_to(&self, target: Status) -> Result<(), InvalidTransition> {
        if *self == target {
            return Err(InvalidTransition {
                from: *self,
                to: target,
                reason: "no-op transition is not allowed",
            });
        }

        let allowed = matches!(
            (*self, target),
            (Self::Reported, Status::InProgress)
                | (Self::Reported, Status::Resolved)
                | (Self::InProgress, Status::Resolved)
        );

        if allowed {
            Ok(())
        } else {
            Err(InvalidTransition {
                from: *self,
                to: target,
                reason: "workflow is forward-only",
            })
        }
    }
}

/// A citizen-reported municipal problem.
///
/// `id` and `reported_at` are fixed at creation; everything else is updated
/// by replacing the whole record through the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: Category,
    pub status: Status,
    /// Resolution progress percentage, always within `0..=100`.
    pub progress: u8,
    /// Citizen-facing urgency flag, independent of status.
    pub is_urgent: bool,
    pub reported_at: DateTime<Utc>,
}

impl Issue {
    /// Create a freshly reported issue: status `reported`, progress 0.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        category: Category,
        is_urgent: bool,
        reported_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            location: location.into(),
            category,
            status: Status::Reported,
            progress: 0,
            is_urgent,
            reported_at,
        }
    }

    /// Set progress, clamping to 100.
    pub fn set_progress(&mut self, pct: u8) {
        self.progress = pct.min(100);
    }
}

/// Error returned when a status transition breaks the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTransition {
    pub from: Status,
    pub to: Status,
    pub reason: &'static str,
}

impl fmt::Display for InvalidTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot move {} -> {}: {}", self.from, self.to, self.reason)
    }
}

impl std::error::Error for InvalidTransition {}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        match normalized.as_str() {
            "water" => Ok(Self::Water),
            "electricity" => Ok(Self::Electricity),
            "roads" => Ok(Self::Roads),
            "waste" => Ok(Self::Waste),
            "other" => Ok(Self::Other),
            _ => Err(ParseEnumError {
                expected: "category",
                got: s.to_string(),
            }),
        }
    }
}

impl FromStr for Status {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        match normalized.as_str() {
            "reported" => Ok(Self::Reported),
            "in-progress" | "in progress" | "inprogress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            _ => Err(ParseEnumError {
                expected: "status",
                got: s.to_string(),
            }),
        }
    }
}
