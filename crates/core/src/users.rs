//! User management for the admin dashboard.
//!
//! Users live in a process-local list. New users get the id `len + 1`; there is no
//! deletion, so ids stay unique for the life of the process.

use crate::store::MemoryStore;
use crate::{DashboardError, DashboardResult};
use api_shared::{CreateUserReq, RoleFilter, UpdateUserReq, User, UserStatus};
use caredesk_types::SearchTerm;
use chrono::NaiveDate;

#[derive(Clone, Debug)]
pub struct UserDirectory {
    users: MemoryStore<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: MemoryStore::new("users", users),
        }
    }

    /// All users in insertion order.
    pub fn list(&self) -> DashboardResult<Vec<User>> {
        self.users.read(|users| users.to_vec())
    }

    /// Users whose name or email contains `search` and whose role passes `role`.
    pub fn filter(&self, search: &SearchTerm, role: RoleFilter) -> DashboardResult<Vec<User>> {
        self.users.read(|users| {
            users
                .iter()
                .filter(|user| {
                    role.admits(user.role)
                        && search.matches_any([user.name.as_str(), user.email.as_str()])
                })
                .cloned()
                .collect()
        })
    }

    /// Add a user. The id is the current user count plus one and the join date is `today`.
    pub fn create(&self, req: CreateUserReq, today: NaiveDate) -> DashboardResult<User> {
        let user = self.users.write(|users| {
            let user = User {
                id: (users.len() + 1).to_string(),
                name: req.name,
                email: req.email,
                role: req.role,
                status: req.status.unwrap_or(UserStatus::Active),
                join_date: today,
            };
            users.push(user.clone());
            user
        })?;

        tracing::info!(user_id = %user.id, role = %user.role, "created user");
        Ok(user)
    }

    /// Merge the fields present in `req` into the user with `req.id`.
    pub fn update(&self, req: UpdateUserReq) -> DashboardResult<User> {
        let UpdateUserReq {
            id,
            name,
            email,
            role,
            status,
            join_date,
        } = req;

        let updated = self.users.write(|users| {
            let user = users.iter_mut().find(|user| user.id == id)?;
            if let Some(name) = name {
                user.name = name;
            }
            if let Some(email) = email {
                user.email = email;
            }
            if let Some(role) = role {
                user.role = role;
            }
            if let Some(status) = status {
                user.status = status;
            }
            if let Some(join_date) = join_date {
                user.join_date = join_date;
            }
            Some(user.clone())
        })?;

        match updated {
            Some(user) => {
                tracing::info!(user_id = %user.id, "updated user");
                Ok(user)
            }
            None => Err(DashboardError::not_found("user", id)),
        }
    }

    /// Flip a user between active and inactive.
    pub fn toggle_status(&self, id: &str) -> DashboardResult<User> {
        let toggled = self.users.write(|users| {
            let user = users.iter_mut().find(|user| user.id == id)?;
            user.status = user.status.toggled();
            Some(user.clone())
        })?;

        let user = toggled.ok_or_else(|| DashboardError::not_found("user", id))?;
        tracing::info!(user_id = %user.id, status = ?user.status, "toggled user status");
        Ok(user)
    }
}
