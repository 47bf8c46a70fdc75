use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ссылка на пользователя Zoho (аккаунт, владелец, создатель и т.п.)
///
/// Хост присылает либо объект `{ name, id }`, либо голую строку, либо
/// вообще ничего — поэтому у ссылки всегда есть значения по умолчанию.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub name: String,
    pub id: String,
}

impl UserRef {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }

    /// Ссылка-заглушка: имя задано, id неизвестен
    pub fn unknown(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: "unknown".to_string(),
        }
    }
}

impl Default for UserRef {
    fn default() -> Self {
        Self::unknown("Unknown")
    }
}

/// Представление сабформы `Subform_1` на границе с хостом.
///
/// Zoho присылает сабформу то массивом строк, то keyed-map'ом (старые
/// версии API). Строки продуктов извлекаются только из варианта
/// `Array`; map-форма проходит нормализацию, но даёт пустой список —
/// это зафиксированный контракт, а не упущение (см. DESIGN.md).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubformShape {
    Array(Vec<Value>),
    Map(Map<String, Value>),
}

impl SubformShape {
    /// Строки сабформы; `None` для map-формы
    pub fn rows(&self) -> Option<&[Value]> {
        match self {
            SubformShape::Array(rows) => Some(rows),
            SubformShape::Map(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SubformShape::Array(rows) => rows.is_empty(),
            SubformShape::Map(map) => map.is_empty(),
        }
    }
}

impl Default for SubformShape {
    fn default() -> Self {
        SubformShape::Map(Map::new())
    }
}
