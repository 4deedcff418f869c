use std::error::Error;
use timetable_core::{
    errors::{ScheduleError, ScheduleResult},
    validation::SlotViolation,
};

#[test]
fn test_schedule_error_display() {
    let not_found = ScheduleError::NotFound("Hospital not found".to_string());
    let validation = ScheduleError::Validation(SlotViolation::Ordering);
    let authentication = ScheduleError::Authentication("Invalid token".to_string());
    let authorization = ScheduleError::Authorization("Only admins or managers allowed".to_string());
    let upstream = ScheduleError::Upstream("connection refused".to_string());
    let database = ScheduleError::Database(eyre::eyre!("Database connection failed"));

    assert_eq!(not_found.to_string(), "Resource not found: Hospital not found");
    assert_eq!(
        validation.to_string(),
        "Validation error: 'to' must be after 'from'"
    );
    assert_eq!(authentication.to_string(), "Authentication error: Invalid token");
    assert_eq!(
        authorization.to_string(),
        "Authorization error: Only admins or managers allowed"
    );
    assert_eq!(upstream.to_string(), "Upstream service error: connection refused");
    assert!(database.to_string().contains("Database error:"));
}

#[test]
fn test_slot_violation_converts_with_source() {
    let error: ScheduleError = SlotViolation::Misaligned.into();

    assert!(matches!(error, ScheduleError::Validation(SlotViolation::Misaligned)));
    assert!(error.source().is_some());
}

#[test]
fn test_eyre_report_converts_to_database_error() {
    fn failing() -> ScheduleResult<()> {
        Err::<(), _>(eyre::eyre!("pool timed out"))?;
        Ok(())
    }

    let error = failing().unwrap_err();
    assert!(matches!(error, ScheduleError::Database(_)));
    assert!(error.to_string().contains("pool timed out"));
}
