//! Command handlers. Each handler reads from (or mutates) the shared
//! [`setshaba_core::AppState`] and renders through the output layer.

pub mod announcements;
pub mod dashboard;
pub mod events;
pub mod feedback;
pub mod home;
pub mod issues;
pub mod report;
pub mod update;
