use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS timetables (
        id BIGSERIAL PRIMARY KEY,
        hospital_id BIGINT NOT NULL,
        doctor_id BIGINT NOT NULL,
        room VARCHAR(255) NOT NULL,
        from_time TIMESTAMP WITH TIME ZONE NOT NULL,
        to_time TIMESTAMP WITH TIME ZONE NOT NULL,
        CONSTRAINT valid_time_range CHECK (to_time > from_time)
    )
    "#,
    // No foreign key on timetable_id: bookings only carry the id.
    r#"
    CREATE TABLE IF NOT EXISTS appointments (
        id BIGSERIAL PRIMARY KEY,
        timetable_id BIGINT NOT NULL,
        patient_id BIGINT NOT NULL,
        "time" TIMESTAMP WITH TIME ZONE NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_timetables_hospital_from ON timetables(hospital_id, from_time)",
    "CREATE INDEX IF NOT EXISTS idx_appointments_timetable_id ON appointments(timetable_id)",
];

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
