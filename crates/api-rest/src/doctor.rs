//! Doctor dashboard endpoints: the appointment table and the patient list.

use crate::{error::ApiError, AppState};
use api_shared::{
    Appointment, ListAppointmentsRes, ListPatientsRes, PatientSearchQuery,
    UpdateAppointmentStatusReq,
};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::Json,
};
use caredesk_types::SearchTerm;

#[utoipa::path(
    get,
    path = "/api/doctor/appointments",
    responses(
        (status = 200, description = "Appointments", body = ListAppointmentsRes),
        (status = 500, description = "Internal server error", body = api_shared::ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<ListAppointmentsRes>, ApiError> {
    match state.dashboard.appointments.list() {
        Ok(appointments) => Ok(Json(ListAppointmentsRes { appointments })),
        Err(e) => Err(ApiError::internal(
            "List appointments error",
            e,
            "Failed to fetch appointments",
        )),
    }
}

#[utoipa::path(
    put,
    path = "/api/doctor/appointments/{id}/status",
    params(("id" = String, Path, description = "Appointment id")),
    request_body = UpdateAppointmentStatusReq,
    responses(
        (status = 200, description = "Status changed", body = Appointment),
        (status = 404, description = "Appointment not found", body = api_shared::ErrorRes),
        (status = 500, description = "Internal server error", body = api_shared::ErrorRes)
    )
)]
/// Change an appointment's status (Scheduled, In Progress, Completed, Cancelled)
///
/// Any status may follow any other.
#[axum::debug_handler]
pub async fn update_appointment_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateAppointmentStatusReq>, JsonRejection>,
) -> Result<Json<Appointment>, ApiError> {
    let Json(req) = payload.map_err(|e| {
        ApiError::internal(
            "Appointment status body rejected",
            e,
            "Failed to update appointment",
        )
    })?;

    match state.dashboard.appointments.set_status(&id, req.status) {
        Ok(appointment) => Ok(Json(appointment)),
        Err(e) if e.is_not_found() => Err(ApiError::not_found("Appointment not found")),
        Err(e) => Err(ApiError::internal(
            "Update appointment status error",
            e,
            "Failed to update appointment",
        )),
    }
}

#[utoipa::path(
    get,
    path = "/api/doctor/patients",
    params(PatientSearchQuery),
    responses(
        (status = 200, description = "Patients matching the search", body = ListPatientsRes)
    )
)]
#[axum::debug_handler]
pub async fn list_patients(
    State(state): State<AppState>,
    Query(query): Query<PatientSearchQuery>,
) -> Json<ListPatientsRes> {
    let term = SearchTerm::from_optional(query.search.as_deref());
    Json(ListPatientsRes {
        patients: state.dashboard.patients.search(&term),
    })
}
