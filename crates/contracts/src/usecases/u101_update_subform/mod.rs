pub mod request;
pub mod response;

pub use request::{SubformProductRecord, UpdateRecordCall, UpdateRecordRequest};
pub use response::{UpdateOutcome, UpdateOutcomeDetails, UpdateResponse};

use crate::usecases::common::UseCaseMetadata;

pub struct UpdateSubform;

impl UseCaseMetadata for UpdateSubform {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "update_subform"
    }

    fn display_name() -> &'static str {
        "Обновление сабформы продуктов"
    }

    fn description() -> &'static str {
        "Запись массива Subform_1 сделки через updateRecord API Zoho CRM"
    }
}
