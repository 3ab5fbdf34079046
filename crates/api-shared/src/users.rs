//! User accounts as seen by the admin dashboard.

use crate::UnknownVariant;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::{IntoParams, ToSchema};

/// Dashboard role; each role gets its own set of pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Patient, Role::Doctor, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "patient" => Ok(Role::Patient),
            "doctor" => Ok(Role::Doctor),
            "admin" => Ok(Role::Admin),
            _ => Err(UnknownVariant::new("role", s)),
        }
    }
}

/// Role selector of the user table; `all` disables the role filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Only(Role),
}

impl RoleFilter {
    pub fn admits(&self, role: Role) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Only(wanted) => *wanted == role,
        }
    }
}

impl FromStr for RoleFilter {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(RoleFilter::All);
        }
        trimmed.parse().map(RoleFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    /// The status the "Activate"/"Deactivate" button switches to.
    pub fn toggled(self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    #[schema(value_type = String, format = Date, example = "2024-01-15")]
    pub join_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListUsersRes {
    pub users: Vec<User>,
}

/// Body of `POST /api/admin/users`. The id and join date are assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserReq {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub status: Option<UserStatus>,
}

/// Body of `PUT /api/admin/users`: the id plus whichever fields should change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserReq {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date)]
    pub join_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Case-insensitive match on name or email
    pub search: Option<String>,
    /// `patient`, `doctor`, `admin` or `all`
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_with_camel_case_fields() {
        let user = User {
            id: "1".into(),
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            role: Role::Patient,
            status: UserStatus::Active,
            join_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["joinDate"], "2024-01-15");
        assert_eq!(json["role"], "patient");
        assert_eq!(json["status"], "active");
    }

    #[test]
    fn test_role_filter_parses_all_and_roles() {
        assert_eq!("all".parse::<RoleFilter>().unwrap(), RoleFilter::All);
        assert_eq!("".parse::<RoleFilter>().unwrap(), RoleFilter::All);
        assert_eq!(
            "Doctor".parse::<RoleFilter>().unwrap(),
            RoleFilter::Only(Role::Doctor)
        );
        assert!("nurse".parse::<RoleFilter>().is_err());
    }

    #[test]
    fn test_update_request_accepts_partial_body() {
        let req: UpdateUserReq =
            serde_json::from_str(r#"{"id":"2","status":"inactive"}"#).unwrap();
        assert_eq!(req.id, "2");
        assert_eq!(req.status, Some(UserStatus::Inactive));
        assert!(req.name.is_none());
    }

    #[test]
    fn test_status_toggle_is_an_involution() {
        assert_eq!(UserStatus::Active.toggled(), UserStatus::Inactive);
        assert_eq!(UserStatus::Active.toggled().toggled(), UserStatus::Active);
    }
}
