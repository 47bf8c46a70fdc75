//! Сессия виджета: состояние одной загрузки сделки.
//!
//! Повторяет жизненный цикл провайдера: дождаться SDK, подписаться на
//! PageLoad, нормализовать payload, извлечь продукты и засеять
//! редактор. Каждое новое PageLoad-событие вытесняет предыдущую
//! запись целиком — сделка после нормализации не мутируется.

use std::sync::Arc;

use serde_json::Value;

use contracts::domain::a001_deal::{parse_deal_record, DealRecord};
use contracts::domain::a002_product_line::{extract_line_items, LineItem};
use contracts::usecases::common::UseCaseError;

use crate::editor::ProductEditor;
use crate::host::{HostError, HostGateway, PageLoadOutcome, ReadinessProbe};

/// Наблюдаемое состояние сессии (то, что раньше жило в контексте UI)
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetState {
    pub is_ready: bool,
    pub deal: Option<DealRecord>,
    pub raw_page_load: Option<Value>,
    pub error: Option<String>,
    pub loading: bool,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            is_ready: false,
            deal: None,
            raw_page_load: None,
            error: None,
            loading: true,
        }
    }
}

pub struct WidgetSession<G> {
    gateway: Arc<G>,
    probe: ReadinessProbe,
    state: WidgetState,
    editor: ProductEditor,
    line_items: Vec<LineItem>,
    deal_id: String,
}

impl<G: HostGateway> WidgetSession<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self::with_probe(gateway, ReadinessProbe::default())
    }

    pub fn with_probe(gateway: Arc<G>, probe: ReadinessProbe) -> Self {
        Self {
            gateway,
            probe,
            state: WidgetState::default(),
            editor: ProductEditor::new(),
            line_items: Vec::new(),
            deal_id: String::new(),
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn editor(&self) -> &ProductEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut ProductEditor {
        &mut self.editor
    }

    /// Id сделки из сырого payload; пустая строка, пока сделка не
    /// загружена
    pub fn deal_id(&self) -> &str {
        &self.deal_id
    }

    /// Извлечённые строки последней загрузки (до правок)
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Полный цикл запуска: готовность SDK -> init -> PageLoad или
    /// деградация. Все отказы оседают в `state.error`, наружу не летят.
    pub async fn initialize(&mut self) {
        if let Err(err) = self.probe.wait_for_sdk(self.gateway.as_ref()).await {
            tracing::error!(%err, "ZOHO SDK never became ready");
            self.state.error = Some(err.message);
            self.state.loading = false;
            return;
        }

        if let Err(err) = self.gateway.init() {
            tracing::error!(%err, "embeddedApp init failed");
            self.state.error = Some(format!("Failed to initialize Zoho: {err}"));
            self.state.loading = false;
            return;
        }

        match self.probe.await_page_load(self.gateway.as_ref()).await {
            PageLoadOutcome::Delivered(payload) => self.handle_page_load(payload).await,
            PageLoadOutcome::MockFallback(payload) => {
                tracing::warn!("development mode - substituting mock deal data");
                self.handle_page_load(payload).await;
            }
            PageLoadOutcome::TimedOut => {
                self.state.error = Some(
                    "PageLoad event timeout - Widget may not be embedded in Zoho CRM context"
                        .to_string(),
                );
                self.state.loading = false;
            }
        }
    }

    /// Обработать один PageLoad payload: нормализация, извлечение,
    /// засев редактора, best-effort resize.
    pub async fn handle_page_load(&mut self, payload: Value) {
        let deal = parse_deal_record(&payload);

        self.deal_id = payload
            .get("data")
            .and_then(|data| data.get("id"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        match deal {
            Some(deal) => {
                let items = extract_line_items(&deal);
                self.editor.replace_from_extraction(&self.deal_id, &items);
                self.line_items = items;
                self.state = WidgetState {
                    is_ready: true,
                    deal: Some(deal),
                    raw_page_load: Some(payload),
                    error: None,
                    loading: false,
                };
            }
            None => {
                tracing::warn!("page load payload had no usable data object");
                self.line_items.clear();
                self.editor.clear();
                self.state = WidgetState {
                    is_ready: true,
                    deal: None,
                    raw_page_load: Some(payload),
                    error: Some("Failed to parse deal data".to_string()),
                    loading: false,
                };
            }
        }

        // resize — best-effort: отказ логируется, но не всплывает
        if let Err(err) = self.gateway.resize("100%", "50%").await {
            tracing::warn!(%err, "widget resize failed");
        }
    }

    /// Сбросить сессию перед повторной загрузкой (аналог reload)
    pub fn refresh(&mut self) {
        self.state = WidgetState::default();
        self.editor.clear();
        self.line_items.clear();
        self.deal_id.clear();
    }

    pub fn clear_error(&mut self) {
        self.state.error = None;
    }

    /// Попросить хост закрыть виджет. Отсутствие capability — warning
    /// для отчёта, а не фатальный отказ.
    pub async fn close_widget(&self) -> Result<(), UseCaseError> {
        match self.gateway.close().await {
            Ok(()) => {
                tracing::debug!("widget close requested");
                Ok(())
            }
            Err(err @ HostError::Unavailable { .. }) => {
                tracing::warn!(%err, "close capability is absent");
                Err(UseCaseError::api_unavailable(
                    "Widget close functionality is not available outside of Zoho CRM",
                ))
            }
            Err(err) => {
                tracing::error!(%err, "widget close failed");
                Err(UseCaseError::external(err.to_string()))
            }
        }
    }
}
