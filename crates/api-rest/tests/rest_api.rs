use api_rest::router;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use caredesk_core::responder::{EMERGENCY_REPLIES, GENERAL_REPLIES};
use caredesk_core::Dashboard;
use chrono::{Days, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    router(Dashboard::with_demo_data())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(&app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_list_users_returns_seeded_users() {
    let (status, body) = get(&app(), "/api/admin/users").await;

    assert_eq!(status, StatusCode::OK);
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["name"], "John Doe");
    assert_eq!(users[0]["joinDate"], "2024-01-15");
    assert_eq!(users[1]["role"], "doctor");
}

#[tokio::test]
async fn test_create_user_assigns_next_id_and_todays_date() {
    let app = app();

    let (status, user) = send(
        &app,
        Method::POST,
        "/api/admin/users",
        Some(json!({
            "name": "Mike Wilson",
            "email": "mike.wilson@example.com",
            "role": "patient",
            "status": "inactive"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["id"], "3");
    assert_eq!(user["status"], "inactive");
    let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
    assert_eq!(user["joinDate"], today);

    let (_, body) = get(&app, "/api/admin/users").await;
    assert_eq!(body["users"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_create_user_with_unreadable_body_is_generic_500() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/api/admin/users",
        Some(json!({ "name": "No role" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to create user" }));
}

#[tokio::test]
async fn test_update_user_merges_fields() {
    let (status, user) = send(
        &app(),
        Method::PUT,
        "/api/admin/users",
        Some(json!({ "id": "1", "name": "Johnathan Doe" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["name"], "Johnathan Doe");
    assert_eq!(user["email"], "john.doe@example.com");
}

#[tokio::test]
async fn test_update_missing_user_is_404() {
    let (status, body) = send(
        &app(),
        Method::PUT,
        "/api/admin/users",
        Some(json!({ "id": "404", "status": "inactive" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found" }));
}

#[tokio::test]
async fn test_toggle_status_twice_restores_original() {
    let app = app();

    let (status, once) = send(&app, Method::POST, "/api/admin/users/2/toggle-status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(once["status"], "inactive");

    let (_, twice) = send(&app, Method::POST, "/api/admin/users/2/toggle-status", None).await;
    assert_eq!(twice["status"], "active");

    let (status, _) = send(&app, Method::POST, "/api/admin/users/9/toggle-status", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_filter_users_by_role_and_search() {
    let app = app();

    let (status, body) = get(&app, "/api/admin/users?role=doctor").await;
    assert_eq!(status, StatusCode::OK);
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert!(users.iter().all(|u| u["role"] == "doctor"));

    let (_, body) = get(&app, "/api/admin/users?search=JOHN.DOE&role=all").await;
    assert_eq!(body["users"].as_array().unwrap().len(), 1);

    let (status, body) = get(&app, "/api/admin/users?role=nurse").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown role filter");
}

#[tokio::test]
async fn test_analytics_snapshot_and_preferences() {
    let app = app();

    let (status, body) = get(&app, "/api/admin/analytics?timeRange=1y").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["totalPatients"], 1250);
    assert_eq!(body["summary"]["growth"]["chats"], -3);
    assert_eq!(body["departmentStats"][0]["waitTime"], "15 mins");
    assert_eq!(body["userActivity"].as_array().unwrap().len(), 4);

    let (status, _) = get(&app, "/api/admin/analytics?timeRange=bogus").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/admin/analytics",
        Some(json!({ "favouriteMetrics": ["appointments"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Preferences updated successfully");
}

#[tokio::test]
async fn test_chat_round_trip() {
    let app = app();

    let (status, body) = get(&app, "/api/patient/chat").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["messages"].as_array().unwrap().len(), 1);
    assert_eq!(body["messages"][0]["sender"], "ai");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/patient/chat",
        Some(json!({ "text": "This is an EMERGENCY" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["userMessage"]["sender"], "user");
    let reply = body["reply"]["text"].as_str().unwrap();
    assert!(EMERGENCY_REPLIES.contains(&reply));

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/patient/chat",
        Some(json!({ "text": "good morning" })),
    )
    .await;
    let reply = body["reply"]["text"].as_str().unwrap();
    assert!(GENERAL_REPLIES.contains(&reply));

    let (_, body) = get(&app, "/api/patient/chat").await;
    assert_eq!(body["messages"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_blank_chat_message_is_rejected() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/patient/chat",
        Some(json!({ "text": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Message text cannot be empty");

    let (_, body) = get(&app, "/api/patient/chat").await;
    assert_eq!(body["messages"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_chat_message_is_stored_as_typed() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/patient/chat",
        Some(json!({ "text": "  my prescription  " })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["userMessage"]["text"], "  my prescription  ");

    let (_, body) = get(&app, "/api/patient/chat").await;
    assert_eq!(body["messages"][1]["text"], "  my prescription  ");
}

#[tokio::test]
async fn test_booking_flow() {
    let app = app();
    let tomorrow = Utc::now()
        .date_naive()
        .checked_add_days(Days::new(1))
        .unwrap()
        .format("%Y-%m-%d")
        .to_string();

    let (status, body) = get(&app, "/api/patient/doctors").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["doctors"][0]["availableSlots"][0], "09:00");

    let booking = json!({
        "doctorId": "1",
        "patientName": "John Doe",
        "date": tomorrow,
        "time": "15:00",
        "reason": "Palpitations"
    });
    let (status, appointment) =
        send(&app, Method::POST, "/api/patient/appointments", Some(booking.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(appointment["time"], "03:00 PM");
    assert_eq!(appointment["status"], "Scheduled");
    assert_eq!(appointment["doctorId"], "1");

    let (status, _) = send(&app, Method::POST, "/api/patient/appointments", Some(booking)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = get(&app, "/api/doctor/appointments").await;
    assert_eq!(body["appointments"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_invalid_bookings() {
    let app = app();
    let today = Utc::now().date_naive();
    let yesterday = today.checked_sub_days(Days::new(1)).unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/patient/appointments",
        Some(json!({
            "doctorId": "1",
            "patientName": "John Doe",
            "date": yesterday.format("%Y-%m-%d").to_string(),
            "time": "09:00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid booking request");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/patient/appointments",
        Some(json!({
            "doctorId": "2",
            "patientName": "John Doe",
            "date": today.format("%Y-%m-%d").to_string(),
            "time": "09:00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/patient/appointments",
        Some(json!({
            "doctorId": "7",
            "patientName": "John Doe",
            "date": today.format("%Y-%m-%d").to_string(),
            "time": "09:00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Doctor not found");
}

#[tokio::test]
async fn test_doctor_updates_appointment_status() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/doctor/appointments/1/status",
        Some(json!({ "status": "In Progress" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "In Progress");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/doctor/appointments/99/status",
        Some(json!({ "status": "Cancelled" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Appointment not found");
}

#[tokio::test]
async fn test_records_and_patients() {
    let app = app();

    let (status, body) = get(&app, "/api/patient/records").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["records"].as_array().unwrap().len(), 2);

    let (status, record) = get(&app, "/api/patient/records/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["doctorName"], "Dr. John Smith");
    assert_eq!(record["documents"][0], "blood_test.pdf");

    let (status, body) = get(&app, "/api/patient/records/9").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Record not found");

    let (status, body) = get(&app, "/api/doctor/patients?search=hyper").await;
    assert_eq!(status, StatusCode::OK);
    let patients = body["patients"].as_array().unwrap();
    assert_eq!(patients.len(), 1);
    assert_eq!(patients[0]["name"], "John Doe");
    assert_eq!(patients[0]["lastVisit"], "2024-03-15");

    let (_, body) = get(&app, "/api/doctor/patients?search=doe%20").await;
    assert!(body["patients"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_navigation_per_role() {
    let app = app();

    let (status, body) = get(&app, "/api/navigation/admin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Admin Dashboard");
    assert_eq!(body["links"][0]["href"], "/dashboard/admin/users");

    let (status, body) = get(&app, "/api/navigation/nurse").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Unknown role");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, body) = get(&app(), "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/admin/users").is_some());
}
