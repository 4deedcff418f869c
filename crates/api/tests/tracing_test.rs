use timetable_api::init_tracing;
use tracing::Level;

#[test]
fn test_tracing_installs_once() {
    assert!(init_tracing(Level::DEBUG).is_ok());
    assert!(init_tracing(Level::INFO).is_err());
}
