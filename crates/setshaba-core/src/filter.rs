//! Pure issue filtering and the status counters layered on top.
//!
//! [`filter_issues`] is a pure function: same inputs, same ordered output.
//! The result is always an order-preserving subsequence of the input, and
//! search is literal case-insensitive substring matching: a `.` in the
//! term matches only a literal period, never "any character".

use serde::{Deserialize, Serialize};

use crate::model::{Category, Issue, Status};

/// The active filter tuple: free-text search plus optional category and
/// status, where `None` means "all". All three predicates must hold.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IssueFilter {
    pub search: String,
    pub category: Option<Category>,
    pub status: Option<Status>,
}

impl IssueFilter {
    /// The identity filter: matches everything.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a filter from raw selector tokens.
    ///
    /// `"all"`, empty, and unrecognized category/status tokens all mean
    /// "no filter" rather than an error, so stale selector state degrades
    /// to showing everything instead of failing the page.
    #[must_use]
    pub fn from_tokens(search: &str, category: &str, status: &str) -> Self {
        Self {
            search: search.to_string(),
            category: parse_token(category),
            status: parse_token(status),
        }
    }

    /// True iff no predicate is active.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.category.is_none() && self.status.is_none()
    }

    /// Whether a single issue passes all three predicates.
    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        let matches_search = self.search.is_empty()
            || contains_ignore_case(&issue.title, &self.search)
            || contains_ignore_case(&issue.description, &self.search)
            || contains_ignore_case(&issue.location, &self.search);

        let matches_category = self.category.is_none_or(|c| issue.category == c);
        let matches_status = self.status.is_none_or(|s| issue.status == s);

        matches_search && matches_category && matches_status
    }
}

fn parse_token<T: std::str::FromStr>(token: &str) -> Option<T> {
    let trimmed = token.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        return None;
    }
    trimmed.parse().ok()
}

/// Case-insensitive literal substring match. Lowercasing both sides keeps
/// the semantics of `String.includes` on lowercased text: no pattern
/// language, metacharacters match themselves.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Return the ordered subsequence of `issues` matching `filter`.
#[must_use]
pub fn filter_issues(issues: &[Issue], filter: &IssueFilter) -> Vec<Issue> {
    issues
        .iter()
        .filter(|issue| filter.matches(issue))
        .cloned()
        .collect()
}

/// Per-status counts for the badge row.
///
/// Computed over the *already filtered* result, so the badges track the
/// active filter rather than the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    pub reported: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl StatusCounts {
    #[must_use]
    pub fn of(issues: &[Issue]) -> Self {
        let mut counts = Self::default();
        for issue in issues {
            match issue.status {
                Status::Reported => counts.reported += 1,
                Status::InProgress => counts.in_progress += 1,
                Status::Resolved => counts.resolved += 1,
            }
        }
        counts
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.reported + self.in_progress + self.resolved
    }
}
