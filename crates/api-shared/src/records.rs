//! Patient-facing medical records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: String,
    #[schema(value_type = String, format = Date, example = "2024-03-15")]
    pub date: NaiveDate,
    pub doctor_name: String,
    pub diagnosis: String,
    /// One medication per line
    pub prescription: String,
    /// Attached document file names
    pub documents: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListRecordsRes {
    pub records: Vec<MedicalRecord>,
}
