use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub timetable_id: i64,
    pub patient_id: i64,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub time: DateTime<Utc>,
}

/// An appointment ready to be stored, with the patient taken from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub timetable_id: i64,
    pub patient_id: i64,
    pub time: DateTime<Utc>,
}
