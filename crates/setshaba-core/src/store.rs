//! The shared application state store.
//!
//! [`AppState`] owns the four record collections and the admin-mode flag,
//! and is the single source of truth every page reads from. Views hold no
//! mutable aliases: all writes go through the mutation methods here, and
//! every successful mutation synchronously notifies subscribers before the
//! call returns, so a change made by one view is visible to all others
//! without explicit propagation.
//!
//! Collections are kept newest-first: creation prepends, and the
//! `recent`-style page sections take a prefix. The store itself never
//! re-sorts; callers wanting another order sort explicitly.
//!
//! Single-threaded by design. A multi-threaded port must wrap
//! mutation-and-notify in one mutual-exclusion boundary to keep the
//! read-your-writes guarantee.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{Collection, StoreError};
use crate::model::{Announcement, CommunityEvent, Feedback, Issue, Status};

/// A change to the store, delivered to subscribers synchronously after the
/// mutation completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    IssueAdded(Uuid),
    IssueUpdated(Uuid),
    FeedbackAdded(Uuid),
    FeedbackUpdated(Uuid),
    EventAdded(Uuid),
    EventUpdated(Uuid),
    AnnouncementAdded(Uuid),
    AnnouncementUpdated(Uuid),
    AdminModeChanged(bool),
}

/// Handle returned by [`AppState::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn Fn(&StoreChange)>;

/// The single mutable application state shared by every view.
pub struct AppState {
    issues: Vec<Issue>,
    feedback: Vec<Feedback>,
    events: Vec<CommunityEvent>,
    announcements: Vec<Announcement>,
    admin_mode: bool,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// An empty store in citizen mode.
    #[must_use]
    pub fn new() -> Self {
        Self {
            issues: Vec::new(),
            feedback: Vec::new(),
            events: Vec::new(),
            announcements: Vec::new(),
            admin_mode: false,
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    // -- read accessors -----------------------------------------------------

    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    #[must_use]
    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    #[must_use]
    pub fn events(&self) -> &[CommunityEvent] {
        &self.events
    }

    #[must_use]
    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    /// Look up a single issue by id.
    #[must_use]
    pub fn issue(&self, id: Uuid) -> Option<&Issue> {
        self.issues.iter().find(|issue| issue.id == id)
    }

    /// Whether the session is in admin view mode. This is a UI toggle, not
    /// an access-control gate.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.admin_mode
    }

    // -- mutations ----------------------------------------------------------

    /// Record a newly reported issue (prepended, newest-first) and return
    /// its id.
    pub fn report_issue(&mut self, mut issue: Issue) -> Uuid {
        enforce_progress_rule(&mut issue);
        let id = issue.id;
        self.issues.insert(0, issue);
        debug!(%id, "issue reported");
        self.notify(&StoreChange::IssueAdded(id));
        id
    }

    /// Replace the issue with the same id as `updated`.
    ///
    /// A `resolved` replacement has its progress auto-corrected to 100, and
    /// progress is clamped to 100 on every write path. Targeting an absent
    /// id returns [`StoreError::RecordNotFound`] and leaves the collection
    /// untouched.
    pub fn update_issue(&mut self, mut updated: Issue) -> Result<(), StoreError> {
        enforce_progress_rule(&mut updated);
        let id = updated.id;
        replace_by_id(&mut self.issues, |i| i.id, updated, Collection::Issues)?;
        debug!(%id, "issue updated");
        self.notify(&StoreChange::IssueUpdated(id));
        Ok(())
    }

    /// Record a new feedback entry (prepended) and return its id.
    pub fn submit_feedback(&mut self, entry: Feedback) -> Uuid {
        let id = entry.id;
        self.feedback.insert(0, entry);
        debug!(%id, "feedback submitted");
        self.notify(&StoreChange::FeedbackAdded(id));
        id
    }

    /// Replace the feedback entry with the same id as `updated`.
    pub fn update_feedback(&mut self, updated: Feedback) -> Result<(), StoreError> {
        let id = updated.id;
        replace_by_id(&mut self.feedback, |f| f.id, updated, Collection::Feedback)?;
        debug!(%id, "feedback updated");
        self.notify(&StoreChange::FeedbackUpdated(id));
        Ok(())
    }

    /// Record a new event (prepended) and return its id.
    pub fn schedule_event(&mut self, event: CommunityEvent) -> Uuid {
        let id = event.id;
        self.events.insert(0, event);
        debug!(%id, "event scheduled");
        self.notify(&StoreChange::EventAdded(id));
        id
    }

    /// Replace the event with the same id as `updated`.
    pub fn update_event(&mut self, updated: CommunityEvent) -> Result<(), StoreError> {
        let id = updated.id;
        replace_by_id(&mut self.events, |e| e.id, updated, Collection::Events)?;
        debug!(%id, "event updated");
        self.notify(&StoreChange::EventUpdated(id));
        Ok(())
    }

    /// Record a new announcement (prepended) and return its id.
    pub fn publish_announcement(&mut self, announcement: Announcement) -> Uuid {
        let id = announcement.id;
        self.announcements.insert(0, announcement);
        debug!(%id, "announcement published");
        self.notify(&StoreChange::AnnouncementAdded(id));
        id
    }

    /// Replace the announcement with the same id as `updated`.
    pub fn update_announcement(&mut self, updated: Announcement) -> Result<(), StoreError> {
        let id = updated.id;
        replace_by_id(
            &mut self.announcements,
            |a| a.id,
            updated,
            Collection::Announcements,
        )?;
        debug!(%id, "announcement updated");
        self.notify(&StoreChange::AnnouncementUpdated(id));
        Ok(())
    }

    /// Toggle admin view mode. Never touches domain data.
    pub fn set_admin_mode(&mut self, flag: bool) {
        self.admin_mode = flag;
        debug!(admin = flag, "view mode changed");
        self.notify(&StoreChange::AdminModeChanged(flag));
    }

    // -- subscriptions ------------------------------------------------------

    /// Register a callback invoked synchronously after every successful
    /// mutation. Rejected mutations notify nobody.
    pub fn subscribe(&mut self, callback: Subscriber) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, callback));
        id
    }

    /// Remove a previously registered subscriber. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    fn notify(&self, change: &StoreChange) {
        for (_, callback) in &self.subscribers {
            callback(change);
        }
    }
}

/// Resolved issues always read 100% complete; other progress writes clamp
/// into `0..=100`.
fn enforce_progress_rule(issue: &mut Issue) {
    if issue.status == Status::Resolved {
        issue.progress = 100;
    } else {
        issue.progress = issue.progress.min(100);
    }
}

fn replace_by_id<T>(
    records: &mut [T],
    id_of: impl Fn(&T) -> Uuid,
    updated: T,
    collection: Collection,
) -> Result<(), StoreError> {
    let id = id_of(&updated);
    match records.iter().position(|record| id_of(record) == id) {
        Some(index) => {
            records[index] = updated;
            Ok(())
        }
        None => {
            warn!(%collection, %id, "replace targeted an absent record");
            Err(StoreError::RecordNotFound { collection, id })
        }
    }
}
