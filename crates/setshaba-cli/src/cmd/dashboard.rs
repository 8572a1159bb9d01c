use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use setshaba_core::AppState;
use setshaba_core::derive::{DashboardStats, admin_urgent_issues, recent};
use setshaba_core::model::{Feedback, Issue};

use crate::output::{OutputMode, render};

#[derive(Debug, Serialize)]
struct DashboardView {
    stats: DashboardStats,
    urgent: Vec<Issue>,
    recent_issues: Vec<Issue>,
    recent_feedback: Vec<Feedback>,
}

/// The administrator overview: aggregate stats, the admin-rule urgent
/// list, and the latest issues and feedback.
pub fn run(state: &mut AppState, mode: OutputMode, now: DateTime<Utc>) -> Result<()> {
    // Viewing the dashboard flips the session into admin mode. A UI
    // toggle only; it grants nothing.
    state.set_admin_mode(true);

    let view = DashboardView {
        stats: DashboardStats::compute(state.issues(), state.feedback(), state.events(), now),
        urgent: admin_urgent_issues(state.issues()),
        recent_issues: recent(state.issues(), 5).to_vec(),
        recent_feedback: recent(state.feedback(), 5).to_vec(),
    };

    render(mode, &view, |view, w| {
        writeln!(w, "Dashboard")?;
        writeln!(
            w,
            "{} total | {} active | {} resolved | {} feedback pending | {} upcoming events",
            view.stats.total_issues,
            view.stats.active_issues,
            view.stats.resolved_issues,
            view.stats.pending_feedback,
            view.stats.upcoming_events,
        )?;

        if !view.urgent.is_empty() {
            writeln!(w)?;
            writeln!(w, "Urgent issues requiring attention:")?;
            for issue in &view.urgent {
                writeln!(
                    w,
                    "  ! [{}] {} ({})",
                    issue.status.label(),
                    issue.title,
                    issue.location
                )?;
            }
        }

        writeln!(w)?;
        writeln!(w, "Recent issues:")?;
        for issue in &view.recent_issues {
            writeln!(w, "  [{}] {}", issue.status.label(), issue.title)?;
        }

        writeln!(w)?;
        writeln!(w, "Recent feedback:")?;
        for entry in &view.recent_feedback {
            writeln!(w, "  {} [{}]: {}", entry.name, entry.status.label(), entry.message)?;
        }
        Ok(())
    })
}
