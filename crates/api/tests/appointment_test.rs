mod test_utils;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use timetable_core::models::appointment::Appointment;

use test_utils::{at, bearer, timetable_request, TestContext};

#[tokio::test]
async fn test_book_appointment_for_caller() {
    let mut ctx = TestContext::new();
    ctx.timetables
        .expect_get()
        .withf(|id| *id == 5)
        .returning(|id| Ok(Some(timetable_request(at(9, 0), at(12, 0)).into_timetable(id))));
    ctx.appointments
        .expect_create()
        .withf(|new| new.timetable_id == 5 && new.patient_id == 4 && new.time == at(10, 30))
        .times(1)
        .returning(|new| {
            Ok(Appointment {
                id: 40,
                timetable_id: new.timetable_id,
                patient_id: new.patient_id,
                time: new.time,
            })
        });
    let server = ctx.into_server();
    let (name, value) = bearer("user-token");

    let response = server
        .post("/api/Timetable/5/Appointments")
        .add_header(name, value)
        .json(&json!({ "time": "2024-05-13T10:30:00Z" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(
        response.json::<Appointment>(),
        Appointment {
            id: 40,
            timetable_id: 5,
            patient_id: 4,
            time: at(10, 30),
        }
    );
}

#[tokio::test]
async fn test_book_appointment_on_missing_timetable() {
    let mut ctx = TestContext::new();
    ctx.timetables.expect_get().returning(|_| Ok(None));
    ctx.appointments.expect_create().never();
    let server = ctx.into_server();
    let (name, value) = bearer("user-token");

    let response = server
        .post("/api/Timetable/5/Appointments")
        .add_header(name, value)
        .json(&json!({ "time": "2024-05-13T10:30:00Z" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_book_appointment_requires_token() {
    let mut ctx = TestContext::new();
    ctx.appointments.expect_create().never();
    let server = ctx.into_server();

    let response = server
        .post("/api/Timetable/5/Appointments")
        .json(&json!({ "time": "2024-05-13T10:30:00Z" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_appointments() {
    let mut ctx = TestContext::new();
    ctx.timetables
        .expect_get()
        .returning(|id| Ok(Some(timetable_request(at(9, 0), at(12, 0)).into_timetable(id))));
    ctx.appointments
        .expect_list_for_timetable()
        .withf(|timetable_id| *timetable_id == 5)
        .times(1)
        .returning(|timetable_id| {
            Ok(vec![
                Appointment {
                    id: 1,
                    timetable_id,
                    patient_id: 4,
                    time: at(9, 30),
                },
                Appointment {
                    id: 2,
                    timetable_id,
                    patient_id: 6,
                    time: at(9, 30),
                },
            ])
        });
    let server = ctx.into_server();
    let (name, value) = bearer("doctor-token");

    let response = server
        .get("/api/Timetable/5/Appointments")
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let appointments = response.json::<Vec<Appointment>>();
    assert_eq!(appointments.len(), 2);
    assert!(appointments.iter().all(|a| a.time == at(9, 30)));
}
