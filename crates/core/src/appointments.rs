//! Appointment booking and the doctor's appointment table.
//!
//! Booking only checks that the request is well formed: a known doctor, a date that is not
//! in the past and one of the doctor's advertised slots. Slots are not reserved, so the same
//! slot can be booked any number of times.

use crate::constants::{APPOINTMENT_TIME_FORMAT, DEFAULT_BOOKING_REASON, SLOT_INPUT_FORMAT};
use crate::store::MemoryStore;
use crate::{DashboardError, DashboardResult};
use api_shared::{Appointment, AppointmentStatus, BookAppointmentReq, Doctor};
use caredesk_types::NonEmptyText;
use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppointmentBook {
    doctors: Arc<Vec<Doctor>>,
    appointments: MemoryStore<Appointment>,
}

impl AppointmentBook {
    pub fn new(doctors: Vec<Doctor>, appointments: Vec<Appointment>) -> Self {
        Self {
            doctors: Arc::new(doctors),
            appointments: MemoryStore::new("appointments", appointments),
        }
    }

    pub fn doctors(&self) -> Vec<Doctor> {
        self.doctors.as_ref().clone()
    }

    pub fn doctor(&self, id: &str) -> DashboardResult<&Doctor> {
        self.doctors
            .iter()
            .find(|doctor| doctor.id == id)
            .ok_or_else(|| DashboardError::not_found("doctor", id))
    }

    pub fn list(&self) -> DashboardResult<Vec<Appointment>> {
        self.appointments.read(|appointments| appointments.to_vec())
    }

    /// Record a booking made from the patient booking form.
    ///
    /// # Errors
    ///
    /// - `NotFound` if `req.doctor_id` names no doctor
    /// - `InvalidInput` for a blank patient name, a past date or a slot the doctor does not offer
    pub fn book(&self, req: BookAppointmentReq, today: NaiveDate) -> DashboardResult<Appointment> {
        let doctor = self.doctor(&req.doctor_id)?;

        let patient_name = NonEmptyText::new(&req.patient_name)
            .map_err(|_| DashboardError::InvalidInput("patientName cannot be empty".into()))?;

        if req.date < today {
            return Err(DashboardError::InvalidInput(format!(
                "appointment date {} is in the past",
                req.date
            )));
        }

        let slot = req.time.trim();
        if !doctor.available_slots.iter().any(|s| s == slot) {
            return Err(DashboardError::InvalidInput(format!(
                "{slot} is not an available slot for {}",
                doctor.name
            )));
        }
        let time = display_time(slot)?;

        let reason = req
            .reason
            .as_deref()
            .and_then(|r| NonEmptyText::new(r).ok())
            .map(NonEmptyText::into_inner)
            .unwrap_or_else(|| DEFAULT_BOOKING_REASON.to_string());

        let doctor_id = doctor.id.clone();
        let appointment = self.appointments.write(|appointments| {
            let appointment = Appointment {
                id: (appointments.len() + 1).to_string(),
                patient_name: patient_name.into_inner(),
                time,
                reason,
                status: AppointmentStatus::Scheduled,
                doctor_id: Some(doctor_id),
                date: Some(req.date),
            };
            appointments.push(appointment.clone());
            appointment
        })?;

        tracing::info!(
            appointment_id = %appointment.id,
            doctor_id = %req.doctor_id,
            date = %req.date,
            time = %appointment.time,
            "booked appointment"
        );
        Ok(appointment)
    }

    /// Change the status shown on the doctor's table.
    pub fn set_status(&self, id: &str, status: AppointmentStatus) -> DashboardResult<Appointment> {
        let updated = self.appointments.write(|appointments| {
            let appointment = appointments.iter_mut().find(|a| a.id == id)?;
            appointment.status = status;
            Some(appointment.clone())
        })?;

        let appointment = updated.ok_or_else(|| DashboardError::not_found("appointment", id))?;
        tracing::info!(appointment_id = %id, status = %status, "appointment status changed");
        Ok(appointment)
    }
}

/// `14:30` -> `02:30 PM`
fn display_time(slot: &str) -> DashboardResult<String> {
    let time = NaiveTime::parse_from_str(slot, SLOT_INPUT_FORMAT)
        .map_err(|_| DashboardError::InvalidInput(format!("malformed slot time: {slot}")))?;
    Ok(time.format(APPOINTMENT_TIME_FORMAT).to_string())
}
