//! # API REST
//!
//! REST API implementation for CareDesk.
//!
//! Handles:
//! - HTTP endpoints with axum, grouped by dashboard role (`admin`, `patient`, `doctor`)
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON error bodies, CORS, request tracing)
//!
//! Uses `api-shared` for wire types and `caredesk-core` for all data operations.

#![warn(rust_2018_idioms)]

pub mod admin;
pub mod doctor;
pub mod error;
pub mod patient;

use api_shared::{HealthRes, HealthService, NavigationRes, Role};
use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post, put},
    Router,
};
use caredesk_core::Dashboard;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::ApiError;

/// Application state for the REST API server
///
/// Holds the dashboard services; clones share the same in-memory data.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Dashboard,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        navigation,
        admin::list_users,
        admin::create_user,
        admin::update_user,
        admin::toggle_user_status,
        admin::get_analytics,
        admin::update_analytics_preferences,
        patient::list_doctors,
        patient::book_appointment,
        patient::list_records,
        patient::get_record,
        patient::chat_history,
        patient::send_message,
        doctor::list_appointments,
        doctor::update_appointment_status,
        doctor::list_patients,
    ),
    components(schemas(
        api_shared::HealthRes,
        api_shared::ErrorRes,
        api_shared::MessageRes,
        api_shared::Role,
        api_shared::UserStatus,
        api_shared::User,
        api_shared::ListUsersRes,
        api_shared::CreateUserReq,
        api_shared::UpdateUserReq,
        api_shared::TimeRange,
        api_shared::Growth,
        api_shared::Summary,
        api_shared::MonthlyCount,
        api_shared::UserActivity,
        api_shared::DepartmentStats,
        api_shared::AnalyticsRes,
        api_shared::Doctor,
        api_shared::ListDoctorsRes,
        api_shared::AppointmentStatus,
        api_shared::Appointment,
        api_shared::ListAppointmentsRes,
        api_shared::BookAppointmentReq,
        api_shared::UpdateAppointmentStatusReq,
        api_shared::MedicalRecord,
        api_shared::ListRecordsRes,
        api_shared::PatientStatus,
        api_shared::Patient,
        api_shared::ListPatientsRes,
        api_shared::Sender,
        api_shared::ChatMessage,
        api_shared::ChatHistoryRes,
        api_shared::SendMessageReq,
        api_shared::SendMessageRes,
        api_shared::NavLink,
        api_shared::NavigationRes,
    ))
)]
pub struct ApiDoc;

/// Build the full REST router: API routes, Swagger UI, CORS and request tracing.
pub fn router(dashboard: Dashboard) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/navigation/:role", get(navigation))
        .route(
            "/api/admin/users",
            get(admin::list_users)
                .post(admin::create_user)
                .put(admin::update_user),
        )
        .route(
            "/api/admin/users/:id/toggle-status",
            post(admin::toggle_user_status),
        )
        .route(
            "/api/admin/analytics",
            get(admin::get_analytics).post(admin::update_analytics_preferences),
        )
        .route("/api/patient/doctors", get(patient::list_doctors))
        .route("/api/patient/appointments", post(patient::book_appointment))
        .route("/api/patient/records", get(patient::list_records))
        .route("/api/patient/records/:id", get(patient::get_record))
        .route(
            "/api/patient/chat",
            get(patient::chat_history).post(patient::send_message),
        )
        .route("/api/doctor/appointments", get(doctor::list_appointments))
        .route(
            "/api/doctor/appointments/:id/status",
            put(doctor::update_appointment_status),
        )
        .route("/api/doctor/patients", get(doctor::list_patients))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { dashboard })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/navigation/{role}",
    params(("role" = String, Path, description = "patient, doctor or admin")),
    responses(
        (status = 200, description = "Sidebar links for the role", body = NavigationRes),
        (status = 404, description = "Unknown role", body = api_shared::ErrorRes)
    )
)]
/// Sidebar title and links of a role's dashboard
#[axum::debug_handler]
async fn navigation(
    State(_state): State<AppState>,
    Path(role): Path<String>,
) -> Result<Json<NavigationRes>, ApiError> {
    let role: Role = role
        .parse()
        .map_err(|_| ApiError::not_found("Unknown role"))?;
    Ok(Json(caredesk_core::navigation(role)))
}
