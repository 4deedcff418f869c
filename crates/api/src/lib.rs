//! # Timetable API
//!
//! The web server of the hospital timetable service. It lets hospital staff
//! publish doctor/room slots, lets any authenticated user browse a hospital's
//! slots and book appointments, and delegates identity and hospital checks to
//! the account and hospital services.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Extract requests and call into `timetable_core::scheduler`
//! - **Middleware**: Authentication and error mapping
//! - **Config**: Environment-driven settings
//!
//! The API uses Axum as the web framework, SQLx for storage and reqwest for
//! collaborator calls.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for authentication and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::{body::Body, error_handling::HandleErrorLayer, http::Request, Router};
use eyre::Result;
use timetable_clients::{build_http_client, HttpHospitalDirectory, HttpTokenValidator};
use timetable_core::collaborators::{
    AppointmentRepository, HospitalDirectory, TimetableRepository, TokenValidator,
};
use timetable_db::{store::PgStore, DbPool};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use uuid::Uuid;

/// Shared application state that is accessible to all request handlers
///
/// Each collaborator sits behind a trait object so tests can swap in mocks.
/// In production both repositories are the same [`PgStore`], sharing one
/// connection pool.
#[derive(Clone)]
pub struct ApiState {
    pub timetables: Arc<dyn TimetableRepository>,
    pub appointments: Arc<dyn AppointmentRepository>,
    pub tokens: Arc<dyn TokenValidator>,
    pub hospitals: Arc<dyn HospitalDirectory>,
}

impl ApiState {
    /// Wires the production collaborators from configuration.
    pub fn from_config(config: &config::ApiConfig, db_pool: DbPool) -> Result<Self> {
        let store = Arc::new(PgStore::new(db_pool));
        let client = build_http_client(config.collaborator_timeout())?;

        Ok(Self {
            timetables: store.clone(),
            appointments: store,
            tokens: Arc::new(HttpTokenValidator::new(
                client.clone(),
                config.auth_service_url.clone(),
            )),
            hospitals: Arc::new(HttpHospitalDirectory::new(
                client,
                config.hospital_service_url.clone(),
            )),
        })
    }
}

/// Builds the application router with all routes attached to `state`.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Timetable management endpoints
        .merge(routes::timetable::routes())
        // Appointment booking endpoints
        .merge(routes::appointment::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Installs the global log subscriber at the configured level.
///
/// Must run before the pool is created for pool and schema logs to appear.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

/// Starts the API server with the provided configuration and database connection
///
/// This function wires collaborators, configures routes and
/// middleware, and serves until the listener fails.
///
/// # Example
///
/// ```ignore
/// let config = ApiConfig::from_env()?;
/// init_tracing(config.log_level)?;
/// let db_pool = timetable_db::create_pool(&config.database_url, 5).await?;
/// start_server(config, db_pool).await?;
/// ```
pub async fn start_server(config: config::ApiConfig, db_pool: DbPool) -> Result<()> {
    let state = Arc::new(ApiState::from_config(&config, db_pool)?);
    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins.clone())
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Request tracing and timeout
    let app = app.layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        id = %Uuid::new_v4(),
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                }),
            )
            .layer(HandleErrorLayer::new(
                middleware::error_handling::handle_layer_error,
            ))
            .timeout(config.request_timeout()),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
