//! Готовность SDK и ожидание PageLoad-события.
//!
//! SDK хоста появляется в рантайме асинхронно, поэтому готовность
//! обнаруживается опросом — но ограниченным, с одним терминальным
//! исходом, а не бесконечным циклом. Так же ограничено и ожидание
//! самого события: не пришло за окно — это либо dev-режим с mock-
//! данными, либо зафиксированный таймаут.

use std::time::Duration;

use serde_json::Value;

use contracts::usecases::common::UseCaseError;

use super::gateway::HostGateway;
use super::mock_data::mock_page_load_payload;

/// Исход ожидания PageLoad-события
#[derive(Debug, Clone, PartialEq)]
pub enum PageLoadOutcome {
    /// Хост прислал payload
    Delivered(Value),
    /// Событие не пришло, контекст — localhost: подставлен mock
    MockFallback(Value),
    /// Событие не пришло, виджет встроен неправильно
    TimedOut,
}

/// Ограниченный опрос готовности SDK + окно ожидания PageLoad
#[derive(Debug, Clone)]
pub struct ReadinessProbe {
    pub poll_interval: Duration,
    pub max_polls: u32,
    pub page_load_timeout: Duration,
}

impl Default for ReadinessProbe {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(100),
            max_polls: 50,
            page_load_timeout: Duration::from_secs(5),
        }
    }
}

impl ReadinessProbe {
    /// Дождаться загрузки SDK или выйти с терминальной ошибкой
    pub async fn wait_for_sdk<G: HostGateway + ?Sized>(
        &self,
        gateway: &G,
    ) -> Result<(), UseCaseError> {
        for attempt in 0..self.max_polls {
            if gateway.sdk_ready() {
                tracing::debug!(attempt, "ZOHO SDK available");
                return Ok(());
            }
            tokio::time::sleep(self.poll_interval).await;
        }
        Err(UseCaseError::timeout("ZOHO SDK not available"))
    }

    /// Ждать PageLoad не дольше отведённого окна
    pub async fn await_page_load<G: HostGateway + ?Sized>(&self, gateway: &G) -> PageLoadOutcome {
        match tokio::time::timeout(self.page_load_timeout, gateway.next_page_load()).await {
            Ok(Some(payload)) => PageLoadOutcome::Delivered(payload),
            _ => {
                if gateway.is_dev_host() {
                    tracing::warn!(
                        "PageLoad event has not fired, dev host detected - using mock data"
                    );
                    PageLoadOutcome::MockFallback(mock_page_load_payload())
                } else {
                    tracing::warn!("PageLoad event has not fired within the timeout window");
                    PageLoadOutcome::TimedOut
                }
            }
        }
    }
}
