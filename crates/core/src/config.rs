//! Core runtime configuration.
//!
//! Resolved once at process startup and passed into the dashboard services, so request
//! handling never reads process-wide environment variables.

use crate::constants::DEFAULT_REST_ADDR;
use crate::{DashboardError, DashboardResult};
use std::net::SocketAddr;

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    rest_addr: SocketAddr,
    seed_demo_data: bool,
}

impl CoreConfig {
    pub fn new(rest_addr: SocketAddr, seed_demo_data: bool) -> Self {
        Self {
            rest_addr,
            seed_demo_data,
        }
    }

    /// Build a configuration from raw environment values.
    ///
    /// `rest_addr` maps to `CAREDESK_REST_ADDR` and `seed_demo_data` to
    /// `CAREDESK_SEED_DEMO_DATA`; `None` or blank values fall back to the defaults.
    pub fn from_env_values(
        rest_addr: Option<String>,
        seed_demo_data: Option<String>,
    ) -> DashboardResult<Self> {
        Ok(Self::new(
            rest_addr_from_env_value(rest_addr)?,
            seed_demo_data_from_env_value(seed_demo_data)?,
        ))
    }

    pub fn rest_addr(&self) -> SocketAddr {
        self.rest_addr
    }

    /// Whether the stores start with the sample users, appointments and records.
    pub fn seed_demo_data(&self) -> bool {
        self.seed_demo_data
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([0, 0, 0, 0], 3000)), true)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the REST listen address, defaulting to `0.0.0.0:3000`.
pub fn rest_addr_from_env_value(value: Option<String>) -> DashboardResult<SocketAddr> {
    let value = non_blank(value).unwrap_or_else(|| DEFAULT_REST_ADDR.to_string());
    value.parse().map_err(|_| {
        DashboardError::InvalidConfig(format!("CAREDESK_REST_ADDR is not a socket address: {value}"))
    })
}

/// Parse the demo-data switch. Missing or blank means enabled.
pub fn seed_demo_data_from_env_value(value: Option<String>) -> DashboardResult<bool> {
    let Some(value) = non_blank(value) else {
        return Ok(true);
    };

    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(DashboardError::InvalidConfig(format!(
            "CAREDESK_SEED_DEMO_DATA must be a boolean, got: {value}"
        ))),
    }
}
