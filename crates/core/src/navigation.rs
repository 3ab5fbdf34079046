//! Sidebar links of each role's dashboard.

use api_shared::{NavLink, NavigationRes, Role};

fn pages(role: Role) -> &'static [(&'static str, &'static str)] {
    match role {
        Role::Patient => &[
            ("appointments", "Appointments"),
            ("records", "Medical Records"),
            ("chat", "Chat Assistant"),
        ],
        Role::Doctor => &[
            ("appointments", "Manage Appointments"),
            ("patients", "Patients"),
        ],
        Role::Admin => &[("users", "Users"), ("analytics", "Analytics")],
    }
}

fn title(role: Role) -> &'static str {
    match role {
        Role::Patient => "Patient Dashboard",
        Role::Doctor => "Doctor Dashboard",
        Role::Admin => "Admin Dashboard",
    }
}

pub fn navigation(role: Role) -> NavigationRes {
    NavigationRes {
        role,
        title: title(role).into(),
        links: pages(role)
            .iter()
            .map(|(page, label)| NavLink {
                href: format!("/dashboard/{role}/{page}"),
                label: (*label).into(),
            })
            .collect(),
    }
}
