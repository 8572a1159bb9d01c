//! Fixed session seed data.
//!
//! Collections are populated once at session start from this dataset and
//! then mutated only through store operations. Timestamps are offsets from
//! the injected `now`, and records are fed oldest-first so the store's
//! prepend-on-create leaves every collection newest-first, which the
//! "recent" page sections rely on.

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use crate::model::{
    Announcement, Category, CommunityEvent, Feedback, FeedbackStatus, Issue, Status,
};
use crate::store::AppState;

/// Build a store populated with the fixed demo dataset.
#[must_use]
pub fn seed_state(now: DateTime<Utc>) -> AppState {
    let mut state = AppState::new();

    for issue in seed_issues(now) {
        state.report_issue(issue);
    }
    for entry in seed_feedback(now) {
        state.submit_feedback(entry);
    }
    for event in seed_events(now) {
        state.schedule_event(event);
    }
    for announcement in seed_announcements(now) {
        state.publish_announcement(announcement);
    }

    info!(
        issues = state.issues().len(),
        feedback = state.feedback().len(),
        events = state.events().len(),
        announcements = state.announcements().len(),
        "session state seeded"
    );
    state
}

// Oldest-first; the store prepends.
fn seed_issues(now: DateTime<Utc>) -> Vec<Issue> {
    let mut refuse = Issue::new(
        "Missed refuse collection in Ward 7",
        "Bins on Protea Crescent were skipped two weeks in a row.",
        "Protea Crescent, Ward 7",
        Category::Waste,
        false,
        now - Duration::days(9),
    );
    refuse.status = Status::Resolved;
    refuse.progress = 100;

    let mut dumping = Issue::new(
        "Illegal dumping near the park",
        "Building rubble dumped at the park entrance over the weekend.",
        "Freedom Park entrance",
        Category::Other,
        false,
        now - Duration::days(6),
    );
    dumping.status = Status::InProgress;
    dumping.progress = 60;

    let mut burst = Issue::new(
        "Burst water pipe on Church Street",
        "A main pipe burst is flooding the intersection and cutting supply to nearby houses.",
        "Church Street & 4th Avenue",
        Category::Water,
        false,
        now - Duration::days(3),
    );
    burst.status = Status::InProgress;
    burst.progress = 45;

    let pothole = Issue::new(
        "Deep pothole on the N1 off-ramp",
        "Pothole is damaging tyres; several cars have pulled over this week.",
        "N1 off-ramp, Zone 4",
        Category::Roads,
        false,
        now - Duration::days(2),
    );

    let streetlight = Issue::new(
        "Streetlight out on Main Road",
        "The whole block is dark at night and residents feel unsafe.",
        "Main Road, between 1st and 3rd Ave",
        Category::Electricity,
        true,
        now - Duration::hours(8),
    );

    vec![refuse, dumping, burst, pothole, streetlight]
}

fn seed_feedback(now: DateTime<Utc>) -> Vec<Feedback> {
    let mut praised = Feedback::new(
        "Thandi Mokoena",
        "Thank you for fixing the leak on our street so quickly.",
        now - Duration::days(5),
    );
    praised.status = FeedbackStatus::Reviewed;

    let clinic = Feedback::new(
        "Sipho Dlamini",
        "The clinic queue management has improved a lot this month.",
        now - Duration::days(2),
    );

    let lights = Feedback::new(
        "Lerato Nkosi",
        "Please consider brighter streetlights near the taxi rank.",
        now - Duration::hours(20),
    );

    vec![praised, clinic, lights]
}

fn seed_events(now: DateTime<Utc>) -> Vec<CommunityEvent> {
    vec![
        CommunityEvent::new(
            "River cleanup day",
            "Volunteers cleared invasive plants and litter along the riverbank.",
            "Riverside Park",
            now - Duration::days(12),
        ),
        CommunityEvent::new(
            "Ward 7 community meeting",
            "Monthly meeting with the ward councillor. All residents welcome.",
            "Ward 7 Community Hall",
            now + Duration::days(4),
        ),
        CommunityEvent::new(
            "Mobile clinic visit",
            "Free health screenings and vaccinations.",
            "Freedom Park",
            now + Duration::days(11),
        ),
    ]
}

fn seed_announcements(now: DateTime<Utc>) -> Vec<Announcement> {
    vec![
        Announcement::new(
            "New library hours",
            "The municipal library now opens until 19:00 on weekdays.",
            false,
            now - Duration::days(4),
        ),
        Announcement::new(
            "Planned water interruption on Thursday",
            "Supply to Zones 3 and 4 will be interrupted 09:00-15:00 for pipe repairs.",
            true,
            now - Duration::hours(12),
        ),
    ]
}
