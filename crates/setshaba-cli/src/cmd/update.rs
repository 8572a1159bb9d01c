use anyhow::Result;
use clap::Args;
use setshaba_core::error::{Collection, StoreError};
use setshaba_core::model::Status;
use setshaba_core::AppState;
use uuid::Uuid;

use crate::output::{OutputMode, kv, render};

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Id of the issue to update.
    pub id: String,

    /// New status: reported, in-progress, or resolved.
    #[arg(long)]
    pub status: Option<String>,

    /// New progress percentage (clamped to 100; resolved issues always
    /// read 100).
    #[arg(long)]
    pub progress: Option<u8>,
}

pub fn run(state: &mut AppState, args: &UpdateArgs, mode: OutputMode) -> Result<()> {
    let id = Uuid::parse_str(&args.id)?;

    let Some(mut updated) = state.issue(id).cloned() else {
        return Err(StoreError::RecordNotFound {
            collection: Collection::Issues,
            id,
        }
        .into());
    };

    if let Some(token) = &args.status {
        let status: Status = token.parse()?;
        // The store accepts any replacement; the CLI holds the line on the
        // forward-only workflow.
        updated.status.can_transition_to(status)?;
        updated.status = status;
    }
    if let Some(pct) = args.progress {
        updated.set_progress(pct);
    }

    state.update_issue(updated)?;

    let issue = state.issue(id).cloned().ok_or(StoreError::RecordNotFound {
        collection: Collection::Issues,
        id,
    })?;
    render(mode, &issue, |issue, w| {
        writeln!(w, "Issue updated")?;
        kv(w, "id", issue.id.to_string())?;
        kv(w, "title", &issue.title)?;
        kv(w, "status", issue.status.label())?;
        kv(w, "progress", format!("{}%", issue.progress))?;
        Ok(())
    })
}
