//! Admin dashboard endpoints: user management and analytics.

use crate::{error::ApiError, AppState};
use api_shared::{
    AnalyticsQuery, AnalyticsRes, CreateUserReq, ListUsersQuery, ListUsersRes, MessageRes,
    RoleFilter, UpdateUserReq, User,
};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use caredesk_core::resolve_time_range;
use caredesk_types::SearchTerm;
use chrono::Utc;

#[utoipa::path(
    get,
    path = "/api/admin/users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "Users matching the filters", body = ListUsersRes),
        (status = 400, description = "Unknown role filter", body = api_shared::ErrorRes),
        (status = 500, description = "Internal server error", body = api_shared::ErrorRes)
    )
)]
/// List users, optionally filtered like the admin user table
///
/// Without query parameters every user is returned in creation order.
///
/// # Errors
/// Returns `400 Bad Request` for a role other than `patient`, `doctor`, `admin` or `all`,
/// and `500 Internal Server Error` if the user store cannot be read.
#[axum::debug_handler]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<ListUsersRes>, ApiError> {
    let role = match query.role.as_deref().map(str::parse::<RoleFilter>).transpose() {
        Ok(role) => role.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Rejected user filter: {}", e);
            return Err(ApiError::bad_request("Unknown role filter"));
        }
    };
    let search = SearchTerm::from_optional(query.search.as_deref());

    match state.dashboard.users.filter(&search, role) {
        Ok(users) => Ok(Json(ListUsersRes { users })),
        Err(e) => Err(ApiError::internal(
            "List users error",
            e,
            "Failed to fetch users",
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/users",
    request_body = CreateUserReq,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 500, description = "Internal server error", body = api_shared::ErrorRes)
    )
)]
/// Create a user
///
/// The id is the current number of users plus one and the join date is today (UTC).
///
/// # Errors
/// Returns `500 Internal Server Error` if the body cannot be read or the user cannot be stored.
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserReq>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(req) = payload
        .map_err(|e| ApiError::internal("Create user body rejected", e, "Failed to create user"))?;

    let today = Utc::now().date_naive();
    match state.dashboard.users.create(req, today) {
        Ok(user) => Ok((StatusCode::CREATED, Json(user))),
        Err(e) => Err(ApiError::internal(
            "Create user error",
            e,
            "Failed to create user",
        )),
    }
}

#[utoipa::path(
    put,
    path = "/api/admin/users",
    request_body = UpdateUserReq,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found", body = api_shared::ErrorRes),
        (status = 500, description = "Internal server error", body = api_shared::ErrorRes)
    )
)]
/// Update a user
///
/// The body carries the user's id plus the fields to change; omitted fields keep their value.
///
/// # Errors
/// Returns `404 Not Found` if no user has the given id, and `500 Internal Server Error` if the
/// body cannot be read or the update fails.
#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    payload: Result<Json<UpdateUserReq>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Json(req) = payload
        .map_err(|e| ApiError::internal("Update user body rejected", e, "Failed to update user"))?;

    match state.dashboard.users.update(req) {
        Ok(user) => Ok(Json(user)),
        Err(e) if e.is_not_found() => Err(ApiError::not_found("User not found")),
        Err(e) => Err(ApiError::internal(
            "Update user error",
            e,
            "Failed to update user",
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/users/{id}/toggle-status",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Status switched between active and inactive", body = User),
        (status = 404, description = "User not found", body = api_shared::ErrorRes),
        (status = 500, description = "Internal server error", body = api_shared::ErrorRes)
    )
)]
#[axum::debug_handler]
pub async fn toggle_user_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    match state.dashboard.users.toggle_status(&id) {
        Ok(user) => Ok(Json(user)),
        Err(e) if e.is_not_found() => Err(ApiError::not_found("User not found")),
        Err(e) => Err(ApiError::internal(
            "Toggle user status error",
            e,
            "Failed to update user",
        )),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/analytics",
    params(AnalyticsQuery),
    responses(
        (status = 200, description = "Analytics snapshot", body = AnalyticsRes),
        (status = 500, description = "Internal server error", body = api_shared::ErrorRes)
    )
)]
/// Dashboard analytics
///
/// `timeRange` is accepted for compatibility with the analytics page but does not filter the
/// figures yet; unknown values are treated as `6m`.
#[axum::debug_handler]
pub async fn get_analytics(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> Json<AnalyticsRes> {
    let range = resolve_time_range(query.time_range.as_deref());
    Json(state.dashboard.analytics.snapshot(range))
}

#[utoipa::path(
    post,
    path = "/api/admin/analytics",
    request_body = Object,
    responses(
        (status = 200, description = "Preferences acknowledged", body = MessageRes),
        (status = 500, description = "Internal server error", body = api_shared::ErrorRes)
    )
)]
/// Save analytics preferences (layout, favourite metrics)
///
/// Any JSON body is acknowledged; nothing is stored.
#[axum::debug_handler]
pub async fn update_analytics_preferences(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<MessageRes>, ApiError> {
    let Json(preferences) = payload.map_err(|e| {
        ApiError::internal(
            "Analytics preferences body rejected",
            e,
            "Failed to update preferences",
        )
    })?;

    Ok(Json(
        state.dashboard.analytics.update_preferences(&preferences),
    ))
}
