use anyhow::Result;
use setshaba_core::AppState;

use crate::output::{OutputMode, render};

pub fn run(state: &AppState, mode: OutputMode) -> Result<()> {
    let announcements = state.announcements().to_vec();
    render(mode, &announcements, |announcements, w| {
        for announcement in announcements {
            writeln!(
                w,
                "{} [{}]",
                announcement.title,
                if announcement.is_urgent { "URGENT" } else { "info" },
            )?;
            writeln!(w, "    {}", announcement.description)?;
            writeln!(
                w,
                "    published {}",
                announcement.published_at.format("%Y-%m-%d")
            )?;
        }
        Ok(())
    })
}
