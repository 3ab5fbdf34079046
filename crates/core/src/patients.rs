//! The doctor's patient roster.

use api_shared::Patient;
use caredesk_types::SearchTerm;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct PatientRoster {
    patients: Arc<Vec<Patient>>,
}

impl PatientRoster {
    pub fn new(patients: Vec<Patient>) -> Self {
        Self {
            patients: Arc::new(patients),
        }
    }

    /// Patients whose name or condition contains `term`; an empty term returns everyone.
    pub fn search(&self, term: &SearchTerm) -> Vec<Patient> {
        self.patients
            .iter()
            .filter(|p| term.matches_any([p.name.as_str(), p.condition.as_str()]))
            .cloned()
            .collect()
    }
}
