//! # Scheduler
//!
//! Request-scoped operations on timetables and appointments. Each write runs
//! its checks in a fixed order and touches the store only after all of them
//! pass:
//!
//! 1. the caller's role
//! 2. the slot rules from [`crate::validation`]
//! 3. for updates, that the entry exists
//! 4. that the referenced hospital exists in the directory
//!
//! A directory that cannot be reached is reported the same way as a hospital
//! that does not exist.

use tracing::{debug, info, warn};

use crate::{
    collaborators::{
        AppointmentRepository, HospitalDirectory, HospitalLookup, TimetableRepository,
    },
    errors::{ScheduleError, ScheduleResult},
    models::{
        appointment::{Appointment, AppointmentRequest, NewAppointment},
        auth::Caller,
        timetable::{Timetable, TimetableRequest, TimetableWindow},
    },
    validation::validate_slot,
};

pub async fn create_timetable(
    timetables: &dyn TimetableRepository,
    hospitals: &dyn HospitalDirectory,
    caller: &Caller,
    request: TimetableRequest,
) -> ScheduleResult<Timetable> {
    caller.require_timetable_manager()?;
    validate_slot(request.from_time, request.to_time)?;
    ensure_hospital_exists(hospitals, request.hospital_id, &caller.token).await?;

    let timetable = timetables.create(request).await?;
    info!(
        "Created timetable {} for hospital {}, doctor {}, room {}",
        timetable.id, timetable.hospital_id, timetable.doctor_id, timetable.room
    );

    Ok(timetable)
}

pub async fn update_timetable(
    timetables: &dyn TimetableRepository,
    hospitals: &dyn HospitalDirectory,
    caller: &Caller,
    id: i64,
    request: TimetableRequest,
) -> ScheduleResult<Timetable> {
    caller.require_timetable_manager()?;
    validate_slot(request.from_time, request.to_time)?;

    if timetables.get(id).await?.is_none() {
        return Err(timetable_not_found(id));
    }

    ensure_hospital_exists(hospitals, request.hospital_id, &caller.token).await?;

    // The entry can disappear between the lookup and the write.
    let timetable = timetables
        .update(id, request)
        .await?
        .ok_or_else(|| timetable_not_found(id))?;
    info!("Replaced timetable {}", id);

    Ok(timetable)
}

pub async fn delete_timetable(
    timetables: &dyn TimetableRepository,
    caller: &Caller,
    id: i64,
) -> ScheduleResult<()> {
    caller.require_timetable_manager()?;

    if !timetables.delete(id).await? {
        return Err(timetable_not_found(id));
    }
    info!("Deleted timetable {}", id);

    Ok(())
}

/// Entries of one hospital lying entirely inside the window. Not paginated.
pub async fn find_timetables(
    timetables: &dyn TimetableRepository,
    hospital_id: i64,
    window: TimetableWindow,
) -> ScheduleResult<Vec<Timetable>> {
    let found: Vec<Timetable> = timetables
        .find_in_window(hospital_id, window.from_time, window.to_time)
        .await?
        .into_iter()
        .filter(|timetable| window.contains(timetable))
        .collect();
    debug!(
        "Found {} timetables for hospital {} between {} and {}",
        found.len(),
        hospital_id,
        window.from_time,
        window.to_time
    );

    Ok(found)
}

/// Books the caller into a timetable.
///
/// The appointment time is not checked against the timetable's slot and
/// several patients may hold the same time.
pub async fn book_appointment(
    timetables: &dyn TimetableRepository,
    appointments: &dyn AppointmentRepository,
    caller: &Caller,
    timetable_id: i64,
    request: AppointmentRequest,
) -> ScheduleResult<Appointment> {
    if timetables.get(timetable_id).await?.is_none() {
        return Err(timetable_not_found(timetable_id));
    }

    let appointment = appointments
        .create(NewAppointment {
            timetable_id,
            patient_id: caller.user_id,
            time: request.time,
        })
        .await?;
    info!(
        "Booked appointment {} for patient {} on timetable {}",
        appointment.id, appointment.patient_id, timetable_id
    );

    Ok(appointment)
}

pub async fn list_appointments(
    timetables: &dyn TimetableRepository,
    appointments: &dyn AppointmentRepository,
    timetable_id: i64,
) -> ScheduleResult<Vec<Appointment>> {
    if timetables.get(timetable_id).await?.is_none() {
        return Err(timetable_not_found(timetable_id));
    }

    Ok(appointments.list_for_timetable(timetable_id).await?)
}

async fn ensure_hospital_exists(
    hospitals: &dyn HospitalDirectory,
    hospital_id: i64,
    token: &str,
) -> ScheduleResult<()> {
    match hospitals.lookup(hospital_id, token).await {
        HospitalLookup::Exists => Ok(()),
        HospitalLookup::Missing => {
            warn!("Hospital {} not found in directory", hospital_id);
            Err(hospital_not_found())
        }
        HospitalLookup::Unreachable => {
            warn!(
                "Hospital directory unreachable while checking hospital {}",
                hospital_id
            );
            Err(hospital_not_found())
        }
    }
}

fn hospital_not_found() -> ScheduleError {
    ScheduleError::NotFound("Hospital not found".to_string())
}

fn timetable_not_found(id: i64) -> ScheduleError {
    ScheduleError::NotFound(format!("Timetable with ID {} not found", id))
}
