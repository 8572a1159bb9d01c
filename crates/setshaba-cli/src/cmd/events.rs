use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use setshaba_core::AppState;
use setshaba_core::model::CommunityEvent;

use crate::output::{OutputMode, render};

#[derive(Debug, Serialize)]
struct EventRow {
    #[serde(flatten)]
    event: CommunityEvent,
    /// Evaluated against the clock at command start; never stored.
    upcoming: bool,
}

pub fn run(state: &AppState, mode: OutputMode, now: DateTime<Utc>) -> Result<()> {
    let rows: Vec<EventRow> = state
        .events()
        .iter()
        .cloned()
        .map(|event| EventRow {
            upcoming: event.is_upcoming(now),
            event,
        })
        .collect();

    render(mode, &rows, |rows, w| {
        if rows.is_empty() {
            writeln!(w, "No events scheduled. Check back soon.")?;
            return Ok(());
        }
        for row in rows {
            writeln!(
                w,
                "[{}] {}",
                if row.upcoming { "Upcoming" } else { "Past" },
                row.event.title,
            )?;
            writeln!(
                w,
                "    {} | {}",
                row.event.date.format("%A, %e %B %Y"),
                row.event.location
            )?;
            writeln!(w, "    {}", row.event.description)?;
        }
        Ok(())
    })
}
