use anyhow::Result;
use clap::Args;
use serde::Serialize;
use setshaba_core::AppState;
use setshaba_core::filter::{IssueFilter, StatusCounts, filter_issues};
use setshaba_core::model::Issue;

use crate::output::{OutputMode, render};

#[derive(Args, Debug)]
pub struct IssuesArgs {
    /// Match issues whose title, description, or location contains this
    /// text (case-insensitive, literal).
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Category selector; "all" or an unknown token shows every category.
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Status selector; "all" or an unknown token shows every status.
    #[arg(long, default_value = "all")]
    pub status: String,
}

#[derive(Debug, Serialize)]
struct IssueListing {
    total: usize,
    shown: usize,
    counts: StatusCounts,
    issues: Vec<Issue>,
}

pub fn run(state: &AppState, args: &IssuesArgs, mode: OutputMode) -> Result<()> {
    let filter = IssueFilter::from_tokens(&args.search, &args.category, &args.status);
    let issues = filter_issues(state.issues(), &filter);
    // Badge counts come from the filtered subset, not the whole collection.
    let counts = StatusCounts::of(&issues);

    let listing = IssueListing {
        total: state.issues().len(),
        shown: issues.len(),
        counts,
        issues,
    };

    render(mode, &listing, |listing, w| {
        writeln!(w, "Showing {} of {} issues", listing.shown, listing.total)?;
        writeln!(
            w,
            "{} Reported / {} In Progress / {} Resolved",
            listing.counts.reported, listing.counts.in_progress, listing.counts.resolved
        )?;
        writeln!(w)?;
        for issue in &listing.issues {
            writeln!(
                w,
                "[{}] {} ({}) {}%{}",
                issue.status.label(),
                issue.title,
                issue.category.label(),
                issue.progress,
                if issue.is_urgent { "  URGENT" } else { "" },
            )?;
            writeln!(w, "    {} | id {}", issue.location, issue.id)?;
        }
        if listing.issues.is_empty() {
            writeln!(w, "No issues found. Try adjusting your search or filters.")?;
        }
        Ok(())
    })
}
