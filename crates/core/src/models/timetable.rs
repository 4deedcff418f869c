use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    pub id: i64,
    pub hospital_id: i64,
    pub doctor_id: i64,
    pub room: String,
    pub from_time: DateTime<Utc>,
    pub to_time: DateTime<Utc>,
}

/// Body of both create and update; an update replaces every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableRequest {
    pub hospital_id: i64,
    pub doctor_id: i64,
    pub room: String,
    #[serde(alias = "from")]
    pub from_time: DateTime<Utc>,
    #[serde(alias = "to")]
    pub to_time: DateTime<Utc>,
}

impl TimetableRequest {
    pub fn into_timetable(self, id: i64) -> Timetable {
        Timetable {
            id,
            hospital_id: self.hospital_id,
            doctor_id: self.doctor_id,
            room: self.room,
            from_time: self.from_time,
            to_time: self.to_time,
        }
    }
}

/// Window for the per-hospital listing. Only entries lying entirely inside
/// `[from_time, to_time]` are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableWindow {
    #[serde(alias = "from")]
    pub from_time: DateTime<Utc>,
    #[serde(alias = "to")]
    pub to_time: DateTime<Utc>,
}

impl TimetableWindow {
    pub fn contains(&self, timetable: &Timetable) -> bool {
        timetable.from_time >= self.from_time && timetable.to_time <= self.to_time
    }
}
