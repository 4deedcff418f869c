//! # Collaborators
//!
//! Everything the scheduler needs from the outside world: the relational store
//! for timetables and appointments, the account service that vouches for
//! bearer tokens, and the hospital directory used for existence checks.
//!
//! Production implementations live in `timetable-db` and `timetable-clients`;
//! mocks for tests live in [`crate::mock`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::Result;

use crate::{
    errors::ScheduleResult,
    models::{
        appointment::{Appointment, NewAppointment},
        auth::Caller,
        timetable::{Timetable, TimetableRequest},
    },
};

#[async_trait]
pub trait TimetableRepository: Send + Sync {
    async fn create(&self, request: TimetableRequest) -> Result<Timetable>;

    async fn get(&self, id: i64) -> Result<Option<Timetable>>;

    /// Replaces every field of the entry. `None` when no entry has this id.
    async fn update(&self, id: i64, request: TimetableRequest) -> Result<Option<Timetable>>;

    /// Returns whether an entry was removed.
    async fn delete(&self, id: i64) -> Result<bool>;

    async fn find_in_window(
        &self,
        hospital_id: i64,
        from_time: DateTime<Utc>,
        to_time: DateTime<Utc>,
    ) -> Result<Vec<Timetable>>;
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn create(&self, appointment: NewAppointment) -> Result<Appointment>;

    async fn list_for_timetable(&self, timetable_id: i64) -> Result<Vec<Appointment>>;
}

#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Resolves a bearer token into the caller it belongs to.
    async fn validate(&self, token: &str) -> ScheduleResult<Caller>;
}

/// Outcome of asking the hospital directory about a hospital
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HospitalLookup {
    Exists,
    /// The directory answered with anything other than 200.
    Missing,
    /// The directory could not be reached or did not answer in time.
    Unreachable,
}

#[async_trait]
pub trait HospitalDirectory: Send + Sync {
    async fn lookup(&self, hospital_id: i64, token: &str) -> HospitalLookup;
}
