//! setshaba-core library.
//!
//! The shared application core of the Setshaba Connect community portal:
//! the domain model (issues, feedback, events, announcements), the single
//! mutable [`store::AppState`] every view reads from, and the pure
//! derivations (filtering, urgency rules, dashboard stats) layered on top.
//!
//! # Conventions
//!
//! - **Errors**: fallible store operations return typed [`error::StoreError`]
//!   values; binaries wrap them in `anyhow::Result` at their boundary.
//! - **Logging**: use `tracing` macros (`info!`, `warn!`, `debug!`, `trace!`).
//! - **Time**: derivations that depend on the clock take an explicit
//!   `DateTime<Utc>` argument, never read an ambient clock.

pub mod derive;
pub mod error;
pub mod filter;
pub mod model;
pub mod seed;
pub mod store;

pub use error::{Collection, ParseEnumError, StoreError};
pub use model::{Announcement, Category, CommunityEvent, Feedback, FeedbackStatus, Issue, Status};
pub use store::{AppState, StoreChange, SubscriberId};
