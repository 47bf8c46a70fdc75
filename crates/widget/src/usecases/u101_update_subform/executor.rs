//! Executor отправки сабформы: конечный автомат
//! Validating -> CheckingApiAvailability -> Serializing -> Calling ->
//! Interpreting с различимым исходом на каждой ветке отказа.
//!
//! Ядро не защищается от реентерабельности: не больше одной отправки
//! в полёте — обязанность встраивающего слоя (кнопка submit
//! блокируется на время вызова).

use std::sync::Arc;

use contracts::domain::a002_product_line::{validate_line_items, EditableLineItem};
use contracts::usecases::common::UseCaseError;
use contracts::usecases::u101_update_subform::{UpdateRecordCall, UpdateRecordRequest};

use crate::editor::ProductEditor;
use crate::host::HostGateway;

/// Фаза конечного автомата отправки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Validating,
    CheckingApiAvailability,
    Serializing,
    Calling,
    Interpreting,
}

/// Терминальный исход отправки; каждая ветка отказа различима
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Первый исход ответа — SUCCESS
    Succeeded {
        updated: usize,
        record_id: Option<String>,
    },
    /// Хост ответил, но не SUCCESS; message — дословно из ответа
    Warned { message: String },
    Failed { error: UseCaseError },
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded { .. })
    }

    fn failed(error: UseCaseError) -> Self {
        tracing::warn!(%error, "submit failed");
        SubmitOutcome::Failed { error }
    }
}

fn advance(phase: &mut SubmitPhase, next: SubmitPhase) {
    tracing::debug!(from = ?*phase, to = ?next, "submit phase");
    *phase = next;
}

pub struct SubmitExecutor<G> {
    gateway: Arc<G>,
}

impl<G: HostGateway> SubmitExecutor<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Отправить весь редактируемый список как массив `Subform_1`.
    ///
    /// Отказы предусловий (нет id сделки, пустой список) отсекаются до
    /// валидации и до любого сетевого вызова.
    pub async fn submit_all(&self, deal_id: &str, items: &[EditableLineItem]) -> SubmitOutcome {
        let mut phase = SubmitPhase::Idle;
        advance(&mut phase, SubmitPhase::Validating);

        if deal_id.is_empty() {
            return SubmitOutcome::failed(UseCaseError::precondition(
                "Unable to save changes - deal information is missing",
            ));
        }
        if items.is_empty() {
            return SubmitOutcome::failed(UseCaseError::precondition(
                "No products found to update",
            ));
        }

        let errors = validate_line_items(items);
        if !errors.is_empty() {
            // полный список — только в developer-лог, пользователю
            // уходит общее сообщение
            tracing::warn!(errors = ?errors, "product validation failed");
            return SubmitOutcome::failed(
                UseCaseError::validation("Please check your product data and try again")
                    .with_details(errors.join("; ")),
            );
        }

        advance(&mut phase, SubmitPhase::CheckingApiAvailability);
        if !self.gateway.is_api_available() {
            return SubmitOutcome::failed(UseCaseError::api_unavailable(
                "Unable to connect to CRM system - please refresh and try again",
            ));
        }

        advance(&mut phase, SubmitPhase::Serializing);
        let call = UpdateRecordCall::for_deal(UpdateRecordRequest::from_line_items(deal_id, items));

        advance(&mut phase, SubmitPhase::Calling);
        let response = match self.gateway.update_record(call).await {
            Ok(response) => response,
            Err(err) => return SubmitOutcome::failed(UseCaseError::external(err.to_string())),
        };

        advance(&mut phase, SubmitPhase::Interpreting);
        match response.first_outcome() {
            Some(outcome) if outcome.is_success() => {
                let record_id = outcome.details.as_ref().map(|d| d.id.clone());
                tracing::info!(
                    updated = items.len(),
                    record_id = record_id.as_deref().unwrap_or("-"),
                    "subform updated"
                );
                SubmitOutcome::Succeeded {
                    updated: items.len(),
                    record_id,
                }
            }
            Some(outcome) => {
                let message = if outcome.message.is_empty() {
                    "Unknown status".to_string()
                } else {
                    outcome.message.clone()
                };
                tracing::warn!(code = %outcome.code, %message, "update completed with warnings");
                SubmitOutcome::Warned { message }
            }
            None => {
                tracing::warn!("update response carried no outcomes");
                SubmitOutcome::Warned {
                    message: "Unknown status".to_string(),
                }
            }
        }
    }

    /// Оптимистичное обновление группировки одной строки: локальная
    /// правка до сетевого вызова, откат к захваченному значению на
    /// любом исходе кроме успеха.
    pub async fn update_single_grouping(
        &self,
        editor: &mut ProductEditor,
        deal_id: &str,
        index: usize,
        raw: &str,
    ) -> SubmitOutcome {
        let Some(previous) = editor.grouping_at(index).map(str::to_string) else {
            return SubmitOutcome::failed(UseCaseError::precondition(
                "Cannot update: Missing deal ID or product",
            ));
        };

        editor.set_grouping(index, raw);
        let outcome = self.submit_all(deal_id, editor.items()).await;

        if !outcome.is_success() {
            tracing::warn!(index, previous, "rolling back optimistic grouping edit");
            editor.restore_grouping(index, &previous);
        }
        outcome
    }
}
