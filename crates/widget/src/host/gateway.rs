//! Явный интерфейс хостовых capability вместо глобального `window.ZOHO`.
//!
//! Весь доступ к SDK хоста идёт через этот trait: сессия и executor
//! получают gateway инъекцией, в тестах подставляется фейк.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use contracts::usecases::u101_update_subform::{UpdateRecordCall, UpdateResponse};

/// Отказ хостового вызова
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// Capability отсутствует — виджет встроен не в Zoho CRM.
    /// Восстановимо корректным встраиванием, фатально только для
    /// конкретной операции.
    #[error("host capability '{capability}' is not available")]
    Unavailable { capability: &'static str },

    /// Вызов дошёл до хоста и был отвергнут
    #[error("{message}")]
    Call { message: String },
}

/// Шлюз к SDK Zoho (embeddedApp + CRM.API + $Client)
#[async_trait]
pub trait HostGateway: Send + Sync {
    /// SDK загружен и `embeddedApp` доступен
    fn sdk_ready(&self) -> bool;

    /// Capability `updateRecord` достижима прямо сейчас
    fn is_api_available(&self) -> bool;

    /// Контекст локальной разработки (hostname == localhost)
    fn is_dev_host(&self) -> bool;

    /// Подписка оформлена, можно инициализировать embeddedApp
    fn init(&self) -> Result<(), HostError>;

    /// Следующий payload PageLoad-события; `None`, если поток событий
    /// закрыт. Может не завершиться вовсе — таймаут накладывает
    /// вызывающая сторона ([`super::ReadinessProbe`]).
    async fn next_page_load(&self) -> Option<Value>;

    /// updateRecord: единственная точка записи в хост
    async fn update_record(&self, call: UpdateRecordCall) -> Result<UpdateResponse, HostError>;

    /// Запрос размера виджета (best-effort)
    async fn resize(&self, height: &str, width: &str) -> Result<(), HostError>;

    /// Закрыть виджет (best-effort)
    async fn close(&self) -> Result<(), HostError>;
}
