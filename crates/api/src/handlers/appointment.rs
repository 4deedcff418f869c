use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use timetable_core::{
    models::appointment::{Appointment, AppointmentRequest},
    scheduler,
};

use crate::{
    middleware::{auth::Authenticated, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler(state = Arc<ApiState>)]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
    Authenticated(_caller): Authenticated,
    Path(timetable_id): Path<i64>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let appointments = scheduler::list_appointments(
        state.timetables.as_ref(),
        state.appointments.as_ref(),
        timetable_id,
    )
    .await?;

    Ok(Json(appointments))
}

/// Books the calling user into the timetable.
#[axum::debug_handler(state = Arc<ApiState>)]
pub async fn book_appointment(
    State(state): State<Arc<ApiState>>,
    Authenticated(caller): Authenticated,
    Path(timetable_id): Path<i64>,
    Json(payload): Json<AppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let appointment = scheduler::book_appointment(
        state.timetables.as_ref(),
        state.appointments.as_ref(),
        &caller,
        timetable_id,
        payload,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}
