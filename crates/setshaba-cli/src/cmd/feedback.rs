use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use setshaba_core::AppState;
use setshaba_core::model::Feedback;

use crate::output::{OutputMode, render};

#[derive(Args, Debug)]
pub struct FeedbackArgs {
    /// Your name, when submitting feedback.
    #[arg(long, requires = "message")]
    pub name: Option<String>,

    /// The feedback message to submit.
    #[arg(long, requires = "name")]
    pub message: Option<String>,
}

pub fn run(
    state: &mut AppState,
    args: FeedbackArgs,
    mode: OutputMode,
    now: DateTime<Utc>,
) -> Result<()> {
    if let (Some(name), Some(message)) = (args.name, args.message) {
        state.submit_feedback(Feedback::new(name, message, now));
    }

    let entries = state.feedback().to_vec();
    render(mode, &entries, |entries, w| {
        for entry in entries {
            writeln!(w, "{} [{}]", entry.name, entry.status.label())?;
            writeln!(w, "    {}", entry.message)?;
        }
        Ok(())
    })
}
