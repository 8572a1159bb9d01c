//! Record shapes for the four portal collections and their closed
//! enumerations.
//!
//! Every enumeration is a real sum type with exhaustive matching at the
//! consumption sites, so adding a category or status is a compile-checked
//! change rather than a string hunt.

mod announcement;
mod event;
mod feedback;
mod issue;

pub use announcement::Announcement;
pub use event::CommunityEvent;
pub use feedback::{Feedback, FeedbackStatus};
pub use issue::{Category, InvalidTransition, Issue, Status};

pub(crate) fn normalize(input: &str) -> String {
    input.trim().to_ascii_lowercase()
}
