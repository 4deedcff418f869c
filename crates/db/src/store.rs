//! Postgres-backed implementations of the scheduler's repository traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::Result;
use timetable_core::{
    collaborators::{AppointmentRepository, TimetableRepository},
    models::{
        appointment::{Appointment, NewAppointment},
        timetable::{Timetable, TimetableRequest},
    },
};

use crate::{
    repositories::{appointment, timetable},
    DbPool,
};

/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl TimetableRepository for PgStore {
    async fn create(&self, request: TimetableRequest) -> Result<Timetable> {
        Ok(timetable::create_timetable(&self.pool, &request).await?.into())
    }

    async fn get(&self, id: i64) -> Result<Option<Timetable>> {
        Ok(timetable::get_timetable_by_id(&self.pool, id)
            .await?
            .map(Into::into))
    }

    async fn update(&self, id: i64, request: TimetableRequest) -> Result<Option<Timetable>> {
        Ok(timetable::update_timetable(&self.pool, id, &request)
            .await?
            .map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        timetable::delete_timetable(&self.pool, id).await
    }

    async fn find_in_window(
        &self,
        hospital_id: i64,
        from_time: DateTime<Utc>,
        to_time: DateTime<Utc>,
    ) -> Result<Vec<Timetable>> {
        let rows =
            timetable::get_timetables_in_window(&self.pool, hospital_id, from_time, to_time)
                .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl AppointmentRepository for PgStore {
    async fn create(&self, new: NewAppointment) -> Result<Appointment> {
        Ok(appointment::create_appointment(&self.pool, &new).await?.into())
    }

    async fn list_for_timetable(&self, timetable_id: i64) -> Result<Vec<Appointment>> {
        let rows = appointment::get_appointments_by_timetable_id(&self.pool, timetable_id).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
