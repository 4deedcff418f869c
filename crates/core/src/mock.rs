use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;

use crate::{
    collaborators::{
        AppointmentRepository, HospitalDirectory, HospitalLookup, TimetableRepository,
        TokenValidator,
    },
    errors::ScheduleResult,
    models::{
        appointment::{Appointment, NewAppointment},
        auth::Caller,
        timetable::{Timetable, TimetableRequest},
    },
};

// Mock collaborators for testing
mock! {
    pub TimetableRepo {}

    #[async_trait]
    impl TimetableRepository for TimetableRepo {
        async fn create(&self, request: TimetableRequest) -> eyre::Result<Timetable>;

        async fn get(&self, id: i64) -> eyre::Result<Option<Timetable>>;

        async fn update(
            &self,
            id: i64,
            request: TimetableRequest,
        ) -> eyre::Result<Option<Timetable>>;

        async fn delete(&self, id: i64) -> eyre::Result<bool>;

        async fn find_in_window(
            &self,
            hospital_id: i64,
            from_time: DateTime<Utc>,
            to_time: DateTime<Utc>,
        ) -> eyre::Result<Vec<Timetable>>;
    }
}

mock! {
    pub AppointmentRepo {}

    #[async_trait]
    impl AppointmentRepository for AppointmentRepo {
        async fn create(&self, appointment: NewAppointment) -> eyre::Result<Appointment>;

        async fn list_for_timetable(&self, timetable_id: i64) -> eyre::Result<Vec<Appointment>>;
    }
}

mock! {
    pub Tokens {}

    #[async_trait]
    impl TokenValidator for Tokens {
        async fn validate(&self, token: &str) -> ScheduleResult<Caller>;
    }
}

mock! {
    pub Hospitals {}

    #[async_trait]
    impl HospitalDirectory for Hospitals {
        async fn lookup(&self, hospital_id: i64, token: &str) -> HospitalLookup;
    }
}
