//! Cross-cutting pure derivations: the two urgency rules, the upcoming
//! predicate, and the aggregate counters behind the home and dashboard
//! pages.
//!
//! The citizen and admin urgency rules are deliberately two separate named
//! predicates. They answer different questions for different audiences and
//! must never be unified behind one parameterized function.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Category, CommunityEvent, Feedback, FeedbackStatus, Issue, Status};

/// Citizen rule: the reporter flagged the issue as urgent.
#[must_use]
pub const fn citizen_urgent(issue: &Issue) -> bool {
    issue.is_urgent
}

/// Admin rule: still unresolved, and either a water issue or a title
/// mentioning "burst" (case-insensitive).
#[must_use]
pub fn admin_urgent(issue: &Issue) -> bool {
    issue.status != Status::Resolved
        && (issue.category == Category::Water || issue.title.to_lowercase().contains("burst"))
}

/// Issues the citizen home page surfaces as urgent, in input order.
#[must_use]
pub fn citizen_urgent_issues(issues: &[Issue]) -> Vec<Issue> {
    issues.iter().filter(|i| citizen_urgent(i)).cloned().collect()
}

/// Issues the admin dashboard surfaces as urgent, in input order.
#[must_use]
pub fn admin_urgent_issues(issues: &[Issue]) -> Vec<Issue> {
    issues.iter().filter(|i| admin_urgent(i)).cloned().collect()
}

/// Events strictly after `now`, in input order.
///
/// Volatile: the answer changes as the clock advances, so this is
/// recomputed from the injected `now` on every call and never cached.
#[must_use]
pub fn upcoming_events(events: &[CommunityEvent], now: DateTime<Utc>) -> Vec<CommunityEvent> {
    events
        .iter()
        .filter(|e| e.is_upcoming(now))
        .cloned()
        .collect()
}

/// The first `n` records of a newest-first collection.
#[must_use]
pub fn recent<T>(records: &[T], n: usize) -> &[T] {
    &records[..n.min(records.len())]
}

/// Aggregate counters for the admin dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_issues: usize,
    /// Issues still pending resolution.
    pub active_issues: usize,
    pub resolved_issues: usize,
    /// Feedback entries awaiting review.
    pub pending_feedback: usize,
    pub upcoming_events: usize,
}

impl DashboardStats {
    #[must_use]
    pub fn compute(
        issues: &[Issue],
        feedback: &[Feedback],
        events: &[CommunityEvent],
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            total_issues: issues.len(),
            active_issues: issues.iter().filter(|i| i.status != Status::Resolved).count(),
            resolved_issues: issues.iter().filter(|i| i.status == Status::Resolved).count(),
            pending_feedback: feedback
                .iter()
                .filter(|f| f.status == FeedbackStatus::InReview)
                .count(),
            upcoming_events: events.iter().filter(|e| e.is_upcoming(now)).count(),
        }
    }
}

/// Aggregate counters for the citizen home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeStats {
    pub total: usize,
    /// Citizen-urgent issues (explicit flag).
    pub urgent: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl HomeStats {
    #[must_use]
    pub fn compute(issues: &[Issue]) -> Self {
        Self {
            total: issues.len(),
            urgent: issues.iter().filter(|i| citizen_urgent(i)).count(),
            in_progress: issues
                .iter()
                .filter(|i| i.status == Status::InProgress)
                .count(),
            resolved: issues.iter().filter(|i| i.status == Status::Resolved).count(),
        }
    }
}
