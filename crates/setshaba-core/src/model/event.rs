use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A community event (meeting, cleanup, clinic day).
///
/// Whether an event is "upcoming" is computed against an injected clock,
/// never stored: the answer changes as wall-clock time advances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityEvent {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: DateTime<Utc>,
}

impl CommunityEvent {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            location: location.into(),
            date,
        }
    }

    /// True iff the event lies strictly in the future of `now`.
    #[must_use]
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date > now
    }
}
