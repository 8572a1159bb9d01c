use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// The four record collections owned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Issues,
    Feedback,
    Events,
    Announcements,
}

impl Collection {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Issues => "issues",
            Self::Feedback => "feedback",
            Self::Events => "events",
            Self::Announcements => "announcements",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by store mutations.
///
/// No variant is fatal: the store stays fully usable after a rejected
/// mutation, and rejected mutations notify no subscribers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A replace-by-id targeted an id the collection does not contain.
    #[error("no {collection} record with id {id}")]
    RecordNotFound { collection: Collection, id: Uuid },
}

/// Error returned when parsing an enum value from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid {expected}: '{got}'")]
pub struct ParseEnumError {
    pub expected: &'static str,
    pub got: String,
}
