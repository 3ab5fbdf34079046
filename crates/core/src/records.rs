//! Read-only medical record archive shown on the patient dashboard.

use crate::{DashboardError, DashboardResult};
use api_shared::MedicalRecord;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct RecordArchive {
    records: Arc<Vec<MedicalRecord>>,
}

impl RecordArchive {
    pub fn new(records: Vec<MedicalRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    pub fn list(&self) -> Vec<MedicalRecord> {
        self.records.as_ref().clone()
    }

    pub fn get(&self, id: &str) -> DashboardResult<MedicalRecord> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| DashboardError::not_found("record", id))
    }
}
