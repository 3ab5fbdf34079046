use crate::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

/// Sidebar of a role's dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NavigationRes {
    pub role: Role,
    pub title: String,
    pub links: Vec<NavLink>,
}
