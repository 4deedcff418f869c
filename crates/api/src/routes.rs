pub mod appointment;
pub mod health;
pub mod timetable;
