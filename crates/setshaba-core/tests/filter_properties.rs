//! Property tests for the pure filter engine.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use setshaba_core::filter::{IssueFilter, StatusCounts, filter_issues};
use setshaba_core::model::{Category, Issue, Status};
use uuid::Uuid;

fn arb_category() -> impl Strategy<Value = Category> + Clone {
    prop_oneof![
        Just(Category::Water),
        Just(Category::Electricity),
        Just(Category::Roads),
        Just(Category::Waste),
        Just(Category::Other),
    ]
}

fn arb_status() -> impl Strategy<Value = Status> + Clone {
    prop_oneof![
        Just(Status::Reported),
        Just(Status::InProgress),
        Just(Status::Resolved),
    ]
}

// Text alphabet deliberately includes regex metacharacters and mixed case:
// search must treat them as literal characters.
fn arb_text() -> impl Strategy<Value = String> + Clone {
    "[A-Za-z .*+?()\\[\\]|^$0-9]{0,16}"
}

fn arb_issue() -> impl Strategy<Value = Issue> {
    (
        arb_text(),
        arb_text(),
        arb_text(),
        arb_category(),
        arb_status(),
        0u8..=100,
        any::<bool>(),
        0i64..2_000_000_000,
    )
        .prop_map(
            |(title, description, location, category, status, progress, is_urgent, secs)| Issue {
                id: Uuid::new_v4(),
                title,
                description,
                location,
                category,
                status,
                progress,
                is_urgent,
                reported_at: Utc.timestamp_opt(secs, 0).unwrap(),
            },
        )
}

fn arb_issues() -> impl Strategy<Value = Vec<Issue>> {
    prop::collection::vec(arb_issue(), 0..24)
}

fn arb_filter() -> impl Strategy<Value = IssueFilter> {
    (
        "[A-Za-z .*]{0,6}",
        prop::option::of(arb_category()),
        prop::option::of(arb_status()),
    )
        .prop_map(|(search, category, status)| IssueFilter {
            search,
            category,
            status,
        })
}

/// `b` is an order-preserving subsequence of `a`, compared by id.
fn is_subsequence(a: &[Issue], b: &[Issue]) -> bool {
    let mut remaining = a.iter();
    b.iter()
        .all(|needle| remaining.any(|candidate| candidate.id == needle.id))
}

proptest! {
    #[test]
    fn filtering_is_idempotent(issues in arb_issues(), filter in arb_filter()) {
        let once = filter_issues(&issues, &filter);
        let twice = filter_issues(&once, &filter);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn empty_filter_is_identity(issues in arb_issues()) {
        let filtered = filter_issues(&issues, &IssueFilter::all());
        prop_assert_eq!(filtered, issues);
    }

    #[test]
    fn result_is_an_ordered_subsequence(issues in arb_issues(), filter in arb_filter()) {
        let filtered = filter_issues(&issues, &filter);
        prop_assert!(filtered.len() <= issues.len());
        prop_assert!(is_subsequence(&issues, &filtered));
    }

    #[test]
    fn search_case_does_not_matter(issues in arb_issues(), search in "[A-Za-z .]{0,8}") {
        let upper = IssueFilter { search: search.to_uppercase(), ..IssueFilter::all() };
        let lower = IssueFilter { search: search.to_lowercase(), ..IssueFilter::all() };
        prop_assert_eq!(filter_issues(&issues, &upper), filter_issues(&issues, &lower));
    }

    #[test]
    fn every_result_actually_contains_the_term(issues in arb_issues(), search in "[A-Za-z .*]{1,6}") {
        let filter = IssueFilter { search: search.clone(), ..IssueFilter::all() };
        let needle = search.to_lowercase();
        for issue in filter_issues(&issues, &filter) {
            // Literal containment, metacharacters included.
            prop_assert!(
                issue.title.to_lowercase().contains(&needle)
                    || issue.description.to_lowercase().contains(&needle)
                    || issue.location.to_lowercase().contains(&needle)
            );
        }
    }

    #[test]
    fn badge_counts_sum_to_the_filtered_size(issues in arb_issues(), category in arb_category()) {
        let filter = IssueFilter { category: Some(category), ..IssueFilter::all() };
        let filtered = filter_issues(&issues, &filter);
        let counts = StatusCounts::of(&filtered);
        prop_assert_eq!(counts.total(), filtered.len());
    }
}
