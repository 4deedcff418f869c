use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/Timetable", post(handlers::timetable::create_timetable))
        .route(
            "/api/Timetable/:id",
            put(handlers::timetable::update_timetable)
                .delete(handlers::timetable::delete_timetable),
        )
        .route(
            "/api/Timetable/Hospital/:id",
            get(handlers::timetable::get_hospital_timetables),
        )
}
