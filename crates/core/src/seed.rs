//! Mock data the dashboard starts with.
//!
//! Every collection is rebuilt from these functions on process start; nothing is saved.

use api_shared::{
    AnalyticsRes, Appointment, AppointmentStatus, DepartmentStats, Doctor, Growth,
    MedicalRecord, MonthlyCount, Patient, PatientStatus, Role, Summary, User, UserActivity,
    UserStatus,
};
use chrono::NaiveDate;

// All call sites pass literal calendar dates.
fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            role: Role::Patient,
            status: UserStatus::Active,
            join_date: day(2024, 1, 15),
        },
        User {
            id: "2".into(),
            name: "Dr. Sarah Johnson".into(),
            email: "sarah.johnson@example.com".into(),
            role: Role::Doctor,
            status: UserStatus::Active,
            join_date: day(2024, 1, 10),
        },
    ]
}

pub fn doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: "1".into(),
            name: "Dr. John Smith".into(),
            specialization: "Cardiologist".into(),
            available_slots: strings(&["09:00", "10:00", "11:00", "14:00", "15:00"]),
        },
        Doctor {
            id: "2".into(),
            name: "Dr. Sarah Johnson".into(),
            specialization: "Dermatologist".into(),
            available_slots: strings(&["09:30", "10:30", "11:30", "14:30", "15:30"]),
        },
    ]
}

pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "1".into(),
            patient_name: "John Doe".into(),
            time: "09:00 AM".into(),
            reason: "Follow-up checkup".into(),
            status: AppointmentStatus::Scheduled,
            doctor_id: None,
            date: None,
        },
        Appointment {
            id: "2".into(),
            patient_name: "Jane Smith".into(),
            time: "10:30 AM".into(),
            reason: "Blood pressure monitoring".into(),
            status: AppointmentStatus::Completed,
            doctor_id: None,
            date: None,
        },
    ]
}

pub fn medical_records() -> Vec<MedicalRecord> {
    vec![
        MedicalRecord {
            id: "1".into(),
            date: day(2024, 3, 15),
            doctor_name: "Dr. John Smith".into(),
            diagnosis: "Common Cold".into(),
            prescription:
                "Paracetamol 500mg - 1 tablet thrice daily\nVitamin C 500mg - 1 tablet daily"
                    .into(),
            documents: strings(&["blood_test.pdf", "prescription.pdf"]),
        },
        MedicalRecord {
            id: "2".into(),
            date: day(2024, 2, 28),
            doctor_name: "Dr. Sarah Johnson".into(),
            diagnosis: "Skin Allergy".into(),
            prescription:
                "Antihistamine 10mg - 1 tablet daily\nHydrocortisone cream - Apply twice daily"
                    .into(),
            documents: strings(&["allergy_test.pdf", "skin_analysis.pdf"]),
        },
    ]
}

pub fn patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "1".into(),
            name: "John Doe".into(),
            age: 45,
            gender: "Male".into(),
            last_visit: day(2024, 3, 15),
            condition: "Hypertension".into(),
            status: PatientStatus::Active,
        },
        Patient {
            id: "2".into(),
            name: "Jane Smith".into(),
            age: 32,
            gender: "Female".into(),
            last_visit: day(2024, 3, 10),
            condition: "Diabetes Type 2".into(),
            status: PatientStatus::Active,
        },
    ]
}

fn monthly(month: &str, count: u32) -> MonthlyCount {
    MonthlyCount {
        month: month.into(),
        count,
    }
}

fn activity(date: &str, patients: u32, doctors: u32) -> UserActivity {
    UserActivity {
        date: date.into(),
        patients,
        doctors,
    }
}

fn department(name: &str, appointments: u32, satisfaction: f32, wait_time: &str) -> DepartmentStats {
    DepartmentStats {
        name: name.into(),
        appointments,
        satisfaction,
        wait_time: wait_time.into(),
    }
}

pub fn analytics() -> AnalyticsRes {
    AnalyticsRes {
        summary: Summary {
            total_patients: 1250,
            total_doctors: 45,
            total_appointments: 3200,
            active_chats: 28,
            growth: Growth {
                patients: 12,
                doctors: 5,
                appointments: 8,
                chats: -3,
            },
        },
        appointments: vec![
            monthly("Jan", 280),
            monthly("Feb", 320),
            monthly("Mar", 350),
            monthly("Apr", 410),
            monthly("May", 380),
            monthly("Jun", 450),
        ],
        user_activity: vec![
            activity("2024-01", 850, 40),
            activity("2024-02", 950, 42),
            activity("2024-03", 1100, 43),
            activity("2024-04", 1250, 45),
        ],
        department_stats: vec![
            department("Cardiology", 850, 4.8, "15 mins"),
            department("Neurology", 620, 4.6, "20 mins"),
            department("Pediatrics", 780, 4.9, "10 mins"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_dates_are_real_calendar_dates() {
        for user in users() {
            assert_ne!(user.join_date, NaiveDate::MIN);
        }
        for record in medical_records() {
            assert_ne!(record.date, NaiveDate::MIN);
        }
        for patient in patients() {
            assert_ne!(patient.last_visit, NaiveDate::MIN);
        }
    }

    #[test]
    fn test_seed_ids_are_sequential() {
        let ids: Vec<String> = users().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
