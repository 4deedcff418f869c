use crate::models::DbAppointment;
use eyre::Result;
use sqlx::{Pool, Postgres};
use timetable_core::models::appointment::NewAppointment;

pub async fn create_appointment(
    pool: &Pool<Postgres>,
    appointment: &NewAppointment,
) -> Result<DbAppointment> {
    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments (timetable_id, patient_id, "time")
        VALUES ($1, $2, $3)
        RETURNING id, timetable_id, patient_id, "time"
        "#,
    )
    .bind(appointment.timetable_id)
    .bind(appointment.patient_id)
    .bind(appointment.time)
    .fetch_one(pool)
    .await?;

    tracing::debug!(
        "Appointment created: id={}, timetable_id={}",
        appointment.id, appointment.timetable_id
    );
    Ok(appointment)
}

pub async fn get_appointments_by_timetable_id(
    pool: &Pool<Postgres>,
    timetable_id: i64,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, timetable_id, patient_id, "time"
        FROM appointments
        WHERE timetable_id = $1
        ORDER BY "time" ASC, id ASC
        "#,
    )
    .bind(timetable_id)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}
