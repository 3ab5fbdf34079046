//! Patient dashboard endpoints: booking, medical records and the chat assistant.

use crate::{error::ApiError, AppState};
use api_shared::{
    Appointment, BookAppointmentReq, ChatHistoryRes, ListDoctorsRes, ListRecordsRes,
    MedicalRecord, SendMessageReq, SendMessageRes,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;

#[utoipa::path(
    get,
    path = "/api/patient/doctors",
    responses(
        (status = 200, description = "Doctors and their available slots", body = ListDoctorsRes)
    )
)]
#[axum::debug_handler]
pub async fn list_doctors(State(state): State<AppState>) -> Json<ListDoctorsRes> {
    Json(ListDoctorsRes {
        doctors: state.dashboard.appointments.doctors(),
    })
}

#[utoipa::path(
    post,
    path = "/api/patient/appointments",
    request_body = BookAppointmentReq,
    responses(
        (status = 201, description = "Appointment booked", body = Appointment),
        (status = 400, description = "Invalid booking request", body = api_shared::ErrorRes),
        (status = 404, description = "Doctor not found", body = api_shared::ErrorRes),
        (status = 500, description = "Internal server error", body = api_shared::ErrorRes)
    )
)]
/// Book an appointment with one of the listed doctors
///
/// The slot must be one the doctor offers and the date must not be in the past. Slots are not
/// reserved, so two patients can book the same one.
///
/// # Errors
/// Returns `400 Bad Request` for a blank patient name, a past date or an unknown slot,
/// `404 Not Found` for an unknown doctor, and `500 Internal Server Error` otherwise.
#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<AppState>,
    payload: Result<Json<BookAppointmentReq>, JsonRejection>,
) -> Result<(StatusCode, Json<Appointment>), ApiError> {
    let Json(req) = payload.map_err(|e| {
        ApiError::internal("Book appointment body rejected", e, "Failed to book appointment")
    })?;

    let today = Utc::now().date_naive();
    match state.dashboard.appointments.book(req, today) {
        Ok(appointment) => Ok((StatusCode::CREATED, Json(appointment))),
        Err(e) if e.is_not_found() => Err(ApiError::not_found("Doctor not found")),
        Err(e) if e.is_client_error() => {
            tracing::info!("Rejected booking: {}", e);
            Err(ApiError::bad_request("Invalid booking request"))
        }
        Err(e) => Err(ApiError::internal(
            "Book appointment error",
            e,
            "Failed to book appointment",
        )),
    }
}

#[utoipa::path(
    get,
    path = "/api/patient/records",
    responses(
        (status = 200, description = "Medical records", body = ListRecordsRes)
    )
)]
#[axum::debug_handler]
pub async fn list_records(State(state): State<AppState>) -> Json<ListRecordsRes> {
    Json(ListRecordsRes {
        records: state.dashboard.records.list(),
    })
}

#[utoipa::path(
    get,
    path = "/api/patient/records/{id}",
    params(("id" = String, Path, description = "Record id")),
    responses(
        (status = 200, description = "Record details", body = MedicalRecord),
        (status = 404, description = "Record not found", body = api_shared::ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MedicalRecord>, ApiError> {
    state
        .dashboard
        .records
        .get(&id)
        .map(Json)
        .map_err(|_| ApiError::not_found("Record not found"))
}

#[utoipa::path(
    get,
    path = "/api/patient/chat",
    responses(
        (status = 200, description = "Conversation so far, oldest first", body = ChatHistoryRes),
        (status = 500, description = "Internal server error", body = api_shared::ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn chat_history(
    State(state): State<AppState>,
) -> Result<Json<ChatHistoryRes>, ApiError> {
    match state.dashboard.chat.history() {
        Ok(messages) => Ok(Json(ChatHistoryRes { messages })),
        Err(e) => Err(ApiError::internal(
            "Chat history error",
            e,
            "Failed to fetch messages",
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/patient/chat",
    request_body = SendMessageReq,
    responses(
        (status = 201, description = "Message recorded and answered", body = SendMessageRes),
        (status = 400, description = "Message text cannot be empty", body = api_shared::ErrorRes),
        (status = 500, description = "Internal server error", body = api_shared::ErrorRes)
    )
)]
/// Send a message to the healthcare assistant
///
/// The reply is chosen from canned answers by keyword (emergency, hospital, appointment,
/// symptoms, prescription), falling back to a general prompt.
#[axum::debug_handler]
pub async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<SendMessageReq>, JsonRejection>,
) -> Result<(StatusCode, Json<SendMessageRes>), ApiError> {
    let Json(req) = payload
        .map_err(|e| ApiError::internal("Chat body rejected", e, "Failed to send message"))?;

    match state.dashboard.chat.send(&req.text) {
        Ok(exchange) => Ok((StatusCode::CREATED, Json(exchange))),
        Err(e) if e.is_client_error() => Err(ApiError::bad_request("Message text cannot be empty")),
        Err(e) => Err(ApiError::internal(
            "Chat send error",
            e,
            "Failed to send message",
        )),
    }
}
