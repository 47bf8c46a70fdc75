use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::common::UserRef;

/// Ответ updateRecord: упорядоченная последовательность исходов по
/// записям. В нашем сценарии (одна сделка, один массив сабформы)
/// интерпретируется только первый исход.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateResponse {
    #[serde(default)]
    pub data: Vec<UpdateOutcome>,
}

impl UpdateResponse {
    pub fn first_outcome(&self) -> Option<&UpdateOutcome> {
        self.data.first()
    }
}

/// Исход обновления одной записи
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub details: Option<UpdateOutcomeDetails>,
}

impl UpdateOutcome {
    pub fn is_success(&self) -> bool {
        self.code == "SUCCESS"
    }
}

/// Детали успешного обновления
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateOutcomeDetails {
    #[serde(rename = "Modified_Time", default)]
    pub modified_time: String,
    #[serde(rename = "Modified_By", default)]
    pub modified_by: UserRef,
    #[serde(rename = "Created_Time", default)]
    pub created_time: String,
    #[serde(default)]
    pub id: String,
}

impl UpdateOutcomeDetails {
    /// Время модификации как типизированная метка; Zoho присылает
    /// ISO 8601 со смещением
    pub fn modified_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.modified_time).ok()
    }
}
