//! # CareDesk Core
//!
//! Business logic for the CareDesk healthcare dashboard.
//!
//! This crate contains the in-memory data operations behind every dashboard page:
//! - User management for admins (`users`)
//! - Booking and the doctor's appointment table (`appointments`)
//! - Medical records and the doctor's patient roster (`records`, `patients`)
//! - The scripted chat assistant (`responder`, `chat`)
//! - Analytics snapshot and per-role navigation (`analytics`, `navigation`)
//!
//! All state is mock data held in process memory and reset on restart.
//!
//! **No API concerns**: HTTP servers, routing and status codes belong in `api-rest`.

pub mod analytics;
pub mod appointments;
pub mod chat;
pub mod config;
pub mod constants;
pub mod error;
pub mod navigation;
pub mod patients;
pub mod records;
pub mod responder;
pub mod seed;
pub mod users;

mod store;

pub use analytics::{resolve_time_range, AnalyticsBoard};
pub use appointments::AppointmentBook;
pub use chat::ChatSession;
pub use config::CoreConfig;
pub use error::{DashboardError, DashboardResult};
pub use navigation::navigation;
pub use patients::PatientRoster;
pub use records::RecordArchive;
pub use responder::KeywordResponder;
pub use users::UserDirectory;

/// Every dashboard service, sharing state between clones.
///
/// Cloning is cheap; clones see the same users, appointments and chat history.
#[derive(Clone, Debug)]
pub struct Dashboard {
    pub users: UserDirectory,
    pub appointments: AppointmentBook,
    pub records: RecordArchive,
    pub patients: PatientRoster,
    pub analytics: AnalyticsBoard,
    pub chat: ChatSession,
}

impl Dashboard {
    /// Build the services for the given configuration.
    ///
    /// With demo data disabled every collection starts empty; the doctors, the analytics
    /// snapshot and the chat greeting are always present.
    pub fn new(cfg: &CoreConfig) -> Self {
        if cfg.seed_demo_data() {
            Self::with_demo_data()
        } else {
            tracing::info!("starting without demo data");
            Self {
                users: UserDirectory::new(Vec::new()),
                appointments: AppointmentBook::new(seed::doctors(), Vec::new()),
                records: RecordArchive::new(Vec::new()),
                patients: PatientRoster::new(Vec::new()),
                analytics: AnalyticsBoard::new(seed::analytics()),
                chat: ChatSession::default(),
            }
        }
    }

    /// Services populated with the sample users, appointments, records and patients.
    pub fn with_demo_data() -> Self {
        Self {
            users: UserDirectory::new(seed::users()),
            appointments: AppointmentBook::new(seed::doctors(), seed::appointments()),
            records: RecordArchive::new(seed::medical_records()),
            patients: PatientRoster::new(seed::patients()),
            analytics: AnalyticsBoard::new(seed::analytics()),
            chat: ChatSession::default(),
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::with_demo_data()
    }
}
