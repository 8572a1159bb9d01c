use anyhow::Result;
use serde::Serialize;
use setshaba_core::AppState;
use setshaba_core::derive::{HomeStats, citizen_urgent_issues, recent};
use setshaba_core::model::{Announcement, Issue};

use crate::output::{OutputMode, render};

#[derive(Debug, Serialize)]
struct HomeView {
    stats: HomeStats,
    urgent: Vec<Issue>,
    recent_issues: Vec<Issue>,
    recent_announcements: Vec<Announcement>,
}

/// The citizen landing view: quick stats, the flagged-urgent issues, and
/// the newest issues and announcements.
pub fn run(state: &AppState, mode: OutputMode) -> Result<()> {
    let view = HomeView {
        stats: HomeStats::compute(state.issues()),
        urgent: citizen_urgent_issues(state.issues()),
        recent_issues: recent(state.issues(), 2).to_vec(),
        recent_announcements: recent(state.announcements(), 1).to_vec(),
    };

    render(mode, &view, |view, w| {
        writeln!(w, "Welcome to Setshaba Connect")?;
        writeln!(
            w,
            "{} issues | {} urgent | {} in progress | {} resolved",
            view.stats.total, view.stats.urgent, view.stats.in_progress, view.stats.resolved
        )?;

        if !view.urgent.is_empty() {
            writeln!(w)?;
            writeln!(w, "Urgent issues ({} active):", view.urgent.len())?;
            for issue in &view.urgent {
                writeln!(w, "  ! {} ({})", issue.title, issue.location)?;
            }
        }

        if !view.recent_announcements.is_empty() {
            writeln!(w)?;
            writeln!(w, "Latest updates:")?;
            for announcement in &view.recent_announcements {
                writeln!(
                    w,
                    "  {} [{}]",
                    announcement.title,
                    if announcement.is_urgent { "urgent" } else { "info" },
                )?;
            }
        }

        writeln!(w)?;
        writeln!(w, "Recent issues:")?;
        for issue in &view.recent_issues {
            writeln!(w, "  [{}] {}", issue.status.label(), issue.title)?;
        }
        Ok(())
    })
}
