use crate::models::DbTimetable;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use timetable_core::models::timetable::TimetableRequest;

pub async fn create_timetable(
    pool: &Pool<Postgres>,
    request: &TimetableRequest,
) -> Result<DbTimetable> {
    tracing::debug!(
        "Creating timetable: hospital_id={}, doctor_id={}, room={}, from={}, to={}",
        request.hospital_id, request.doctor_id, request.room, request.from_time, request.to_time
    );

    let timetable = sqlx::query_as::<_, DbTimetable>(
        r#"
        INSERT INTO timetables (hospital_id, doctor_id, room, from_time, to_time)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, hospital_id, doctor_id, room, from_time, to_time
        "#,
    )
    .bind(request.hospital_id)
    .bind(request.doctor_id)
    .bind(request.room.as_str())
    .bind(request.from_time)
    .bind(request.to_time)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Timetable created successfully: id={}", timetable.id);
    Ok(timetable)
}

pub async fn get_timetable_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<DbTimetable>> {
    tracing::debug!("Getting timetable by id: {}", id);

    let timetable = sqlx::query_as::<_, DbTimetable>(
        r#"
        SELECT id, hospital_id, doctor_id, room, from_time, to_time
        FROM timetables
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(timetable)
}

pub async fn update_timetable(
    pool: &Pool<Postgres>,
    id: i64,
    request: &TimetableRequest,
) -> Result<Option<DbTimetable>> {
    tracing::debug!("Replacing timetable: id={}", id);

    let timetable = sqlx::query_as::<_, DbTimetable>(
        r#"
        UPDATE timetables
        SET hospital_id = $2, doctor_id = $3, room = $4, from_time = $5, to_time = $6
        WHERE id = $1
        RETURNING id, hospital_id, doctor_id, room, from_time, to_time
        "#,
    )
    .bind(id)
    .bind(request.hospital_id)
    .bind(request.doctor_id)
    .bind(request.room.as_str())
    .bind(request.from_time)
    .bind(request.to_time)
    .fetch_optional(pool)
    .await?;

    Ok(timetable)
}

pub async fn delete_timetable(pool: &Pool<Postgres>, id: i64) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM timetables
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn get_timetables_in_window(
    pool: &Pool<Postgres>,
    hospital_id: i64,
    from_time: DateTime<Utc>,
    to_time: DateTime<Utc>,
) -> Result<Vec<DbTimetable>> {
    let timetables = sqlx::query_as::<_, DbTimetable>(
        r#"
        SELECT id, hospital_id, doctor_id, room, from_time, to_time
        FROM timetables
        WHERE hospital_id = $1 AND from_time >= $2 AND to_time <= $3
        ORDER BY from_time ASC, id ASC
        "#,
    )
    .bind(hospital_id)
    .bind(from_time)
    .bind(to_time)
    .fetch_all(pool)
    .await?;

    Ok(timetables)
}
