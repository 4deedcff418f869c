//! # Timetable Core
//!
//! Domain types and scheduling rules for the hospital timetable service.
//! Persistence and remote collaborators are reached only through the traits in
//! [`collaborators`], so the rules here can run against fakes in tests.

pub mod collaborators;
pub mod errors;
pub mod mock;
pub mod models;
pub mod scheduler;
pub mod validation;
