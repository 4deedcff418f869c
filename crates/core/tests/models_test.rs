use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::{from_str, json, to_value};
use timetable_core::{
    errors::ScheduleError,
    models::{
        auth::{Caller, Role, TokenClaims},
        timetable::{Timetable, TimetableRequest, TimetableWindow},
    },
};

#[test]
fn test_timetable_request_accepts_short_time_names() {
    let request: TimetableRequest = from_str(
        r#"{
            "hospital_id": 3,
            "doctor_id": 8,
            "room": "204",
            "from": "2024-05-13T09:00:00Z",
            "to": "2024-05-13T12:30:00Z"
        }"#,
    )
    .expect("Failed to deserialize timetable request");

    assert_eq!(request.from_time, Utc.with_ymd_and_hms(2024, 5, 13, 9, 0, 0).unwrap());
    assert_eq!(request.to_time, Utc.with_ymd_and_hms(2024, 5, 13, 12, 30, 0).unwrap());
}

#[test]
fn test_timetable_serializes_long_time_names() {
    let timetable = Timetable {
        id: 1,
        hospital_id: 3,
        doctor_id: 8,
        room: "204".to_string(),
        from_time: Utc.with_ymd_and_hms(2024, 5, 13, 9, 0, 0).unwrap(),
        to_time: Utc.with_ymd_and_hms(2024, 5, 13, 10, 0, 0).unwrap(),
    };

    let value = to_value(&timetable).expect("Failed to serialize timetable");

    assert_eq!(
        value,
        json!({
            "id": 1,
            "hospital_id": 3,
            "doctor_id": 8,
            "room": "204",
            "from_time": "2024-05-13T09:00:00Z",
            "to_time": "2024-05-13T10:00:00Z"
        })
    );
}

#[test]
fn test_window_contains_only_fully_enclosed_entries() {
    let window = TimetableWindow {
        from_time: Utc.with_ymd_and_hms(2024, 5, 13, 8, 0, 0).unwrap(),
        to_time: Utc.with_ymd_and_hms(2024, 5, 13, 18, 0, 0).unwrap(),
    };
    let entry = |from: u32, to: u32| Timetable {
        id: 1,
        hospital_id: 1,
        doctor_id: 1,
        room: "A".to_string(),
        from_time: Utc.with_ymd_and_hms(2024, 5, 13, from, 0, 0).unwrap(),
        to_time: Utc.with_ymd_and_hms(2024, 5, 13, to, 0, 0).unwrap(),
    };

    assert!(window.contains(&entry(8, 18)));
    assert!(window.contains(&entry(9, 10)));
    assert!(!window.contains(&entry(7, 9)));
    assert!(!window.contains(&entry(17, 19)));
}

#[test]
fn test_role_wire_names() {
    for (role, name) in [
        (Role::Admin, "admin"),
        (Role::Manager, "manager"),
        (Role::Doctor, "doctor"),
        (Role::User, "user"),
    ] {
        assert_eq!(to_value(role).unwrap(), json!(name));
    }

    assert_eq!(from_str::<Role>(r#""patient""#).unwrap(), Role::Other);
    assert_eq!(from_str::<Role>(r#""superuser""#).unwrap(), Role::Other);
}

#[test]
fn test_only_admins_and_managers_manage_timetables() {
    let caller = |role| Caller {
        user_id: 1,
        role,
        token: "token".to_string(),
    };

    assert!(caller(Some(Role::Admin)).require_timetable_manager().is_ok());
    assert!(caller(Some(Role::Manager)).require_timetable_manager().is_ok());

    for role in [Some(Role::Doctor), Some(Role::User), Some(Role::Other), None] {
        assert!(matches!(
            caller(role).require_timetable_manager(),
            Err(ScheduleError::Authorization(_))
        ));
    }
}

#[test]
fn test_token_claims_into_caller() {
    let claims: TokenClaims =
        from_str(r#"{"valid": true, "user_id": 42, "role": "manager"}"#).unwrap();

    let caller = claims.into_caller("abc").expect("Valid claims should yield a caller");

    assert_eq!(
        caller,
        Caller {
            user_id: 42,
            role: Some(Role::Manager),
            token: "abc".to_string(),
        }
    );
}

#[test]
fn test_token_claims_without_role() {
    let claims: TokenClaims = from_str(r#"{"valid": true, "user_id": 7}"#).unwrap();

    let caller = claims.into_caller("abc").unwrap();

    assert_eq!(caller.role, None);
}

#[test]
fn test_rejected_token_claims() {
    let invalid = TokenClaims {
        valid: false,
        user_id: Some(1),
        role: Some(Role::Admin),
    };
    let anonymous = TokenClaims {
        valid: true,
        user_id: None,
        role: None,
    };

    assert!(matches!(
        invalid.into_caller("abc"),
        Err(ScheduleError::Authentication(_))
    ));
    assert!(matches!(
        anonymous.into_caller("abc"),
        Err(ScheduleError::Authentication(_))
    ));
}
