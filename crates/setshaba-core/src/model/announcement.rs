use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A municipal announcement published to all citizens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub is_urgent: bool,
    pub published_at: DateTime<Utc>,
}

impl Announcement {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        is_urgent: bool,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            is_urgent,
            published_at,
        }
    }
}
