use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use timetable_core::{
    models::timetable::{Timetable, TimetableRequest, TimetableWindow},
    scheduler,
};

use crate::{
    middleware::{auth::Authenticated, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler(state = Arc<ApiState>)]
pub async fn create_timetable(
    State(state): State<Arc<ApiState>>,
    Authenticated(caller): Authenticated,
    Json(payload): Json<TimetableRequest>,
) -> Result<(StatusCode, Json<Timetable>), AppError> {
    let timetable = scheduler::create_timetable(
        state.timetables.as_ref(),
        state.hospitals.as_ref(),
        &caller,
        payload,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(timetable)))
}

#[axum::debug_handler(state = Arc<ApiState>)]
pub async fn update_timetable(
    State(state): State<Arc<ApiState>>,
    Authenticated(caller): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<TimetableRequest>,
) -> Result<Json<Timetable>, AppError> {
    let timetable = scheduler::update_timetable(
        state.timetables.as_ref(),
        state.hospitals.as_ref(),
        &caller,
        id,
        payload,
    )
    .await?;

    Ok(Json(timetable))
}

#[axum::debug_handler(state = Arc<ApiState>)]
pub async fn delete_timetable(
    State(state): State<Arc<ApiState>>,
    Authenticated(caller): Authenticated,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    scheduler::delete_timetable(state.timetables.as_ref(), &caller, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Lists a hospital's timetable entries lying entirely inside the requested
/// window. Unlike the hospital listing, this is not paginated.
#[axum::debug_handler(state = Arc<ApiState>)]
pub async fn get_hospital_timetables(
    State(state): State<Arc<ApiState>>,
    Authenticated(_caller): Authenticated,
    Path(hospital_id): Path<i64>,
    Query(window): Query<TimetableWindow>,
) -> Result<Json<Vec<Timetable>>, AppError> {
    let timetables =
        scheduler::find_timetables(state.timetables.as_ref(), hospital_id, window).await?;

    Ok(Json(timetables))
}
