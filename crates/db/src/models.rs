use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use timetable_core::models::{appointment::Appointment, timetable::Timetable};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimetable {
    pub id: i64,
    pub hospital_id: i64,
    pub doctor_id: i64,
    pub room: String,
    pub from_time: DateTime<Utc>,
    pub to_time: DateTime<Utc>,
}

impl From<DbTimetable> for Timetable {
    fn from(row: DbTimetable) -> Self {
        Timetable {
            id: row.id,
            hospital_id: row.hospital_id,
            doctor_id: row.doctor_id,
            room: row.room,
            from_time: row.from_time,
            to_time: row.to_time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: i64,
    pub timetable_id: i64,
    pub patient_id: i64,
    pub time: DateTime<Utc>,
}

impl From<DbAppointment> for Appointment {
    fn from(row: DbAppointment) -> Self {
        Appointment {
            id: row.id,
            timetable_id: row.timetable_id,
            patient_id: row.patient_id,
            time: row.time,
        }
    }
}
