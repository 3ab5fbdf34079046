//! Constants used throughout the CareDesk core crate.

/// First message of every chat conversation.
pub const CHAT_GREETING: &str = "Hello! I'm your healthcare assistant. How can I help you today?";

/// Default REST listen address when `CAREDESK_REST_ADDR` is unset.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Acknowledgement returned by the analytics preferences endpoint.
pub const PREFERENCES_UPDATED: &str = "Preferences updated successfully";

/// Reason recorded on bookings submitted without one.
pub const DEFAULT_BOOKING_REASON: &str = "General consultation";

/// Input format of doctor slots and the display format of appointment times.
pub const SLOT_INPUT_FORMAT: &str = "%H:%M";
pub const APPOINTMENT_TIME_FORMAT: &str = "%I:%M %p";
