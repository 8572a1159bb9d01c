use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use setshaba_core::AppState;
use setshaba_core::model::{Category, Issue};

use crate::output::{OutputMode, kv, render};

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Short summary of the problem.
    #[arg(short, long)]
    pub title: String,

    /// What is wrong and since when.
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Street address or landmark.
    #[arg(short, long)]
    pub location: String,

    /// One of: water, electricity, roads, waste, other.
    #[arg(short, long)]
    pub category: String,

    /// Flag the issue as urgent.
    #[arg(short, long)]
    pub urgent: bool,
}

pub fn run(state: &mut AppState, args: ReportArgs, mode: OutputMode, now: DateTime<Utc>) -> Result<()> {
    // Creation is strict about the category: a typo here is a user error,
    // not a selector to degrade.
    let category: Category = args.category.parse()?;

    let issue = Issue::new(
        args.title,
        args.description,
        args.location,
        category,
        args.urgent,
        now,
    );
    let reported = issue.clone();
    state.report_issue(issue);

    render(mode, &reported, |issue, w| {
        writeln!(w, "Issue reported")?;
        kv(w, "id", issue.id.to_string())?;
        kv(w, "title", &issue.title)?;
        kv(w, "category", issue.category.label())?;
        kv(w, "status", issue.status.label())?;
        kv(w, "location", &issue.location)?;
        Ok(())
    })
}
