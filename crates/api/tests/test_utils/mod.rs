#![allow(dead_code)]

use std::sync::Arc;

use axum::http::{header::AUTHORIZATION, HeaderName, HeaderValue};
use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use timetable_api::{build_router, ApiState};
use timetable_core::{
    mock::{MockAppointmentRepo, MockHospitals, MockTimetableRepo, MockTokens},
    models::{
        auth::{invalid_token, Caller, Role},
        timetable::TimetableRequest,
    },
};

pub struct TestContext {
    pub timetables: MockTimetableRepo,
    pub appointments: MockAppointmentRepo,
    pub tokens: MockTokens,
    pub hospitals: MockHospitals,
}

impl TestContext {
    /// Mocks with a token validator that knows one token per role.
    pub fn new() -> Self {
        let mut tokens = MockTokens::new();
        tokens.expect_validate().returning(|token| {
            let (user_id, role) = match token {
                "admin-token" => (1, Role::Admin),
                "manager-token" => (2, Role::Manager),
                "doctor-token" => (3, Role::Doctor),
                "user-token" => (4, Role::User),
                "patient-token" => (5, Role::Other),
                _ => return Err(invalid_token()),
            };
            Ok(Caller {
                user_id,
                role: Some(role),
                token: token.to_string(),
            })
        });

        Self {
            timetables: MockTimetableRepo::new(),
            appointments: MockAppointmentRepo::new(),
            tokens,
            hospitals: MockHospitals::new(),
        }
    }

    pub fn build_state(self) -> Arc<ApiState> {
        Arc::new(ApiState {
            timetables: Arc::new(self.timetables),
            appointments: Arc::new(self.appointments),
            tokens: Arc::new(self.tokens),
            hospitals: Arc::new(self.hospitals),
        })
    }

    pub fn into_server(self) -> TestServer {
        TestServer::new(build_router(self.build_state())).expect("Failed to start test server")
    }
}

pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    let value = HeaderValue::from_str(&format!("Bearer {}", token)).expect("Invalid test token");
    (AUTHORIZATION, value)
}

pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 13, hour, minute, 0).unwrap()
}

pub fn timetable_request(from: DateTime<Utc>, to: DateTime<Utc>) -> TimetableRequest {
    TimetableRequest {
        hospital_id: 3,
        doctor_id: 8,
        room: "204".to_string(),
        from_time: from,
        to_time: to,
    }
}
