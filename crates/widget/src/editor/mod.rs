//! Редактируемое состояние списка продуктов.
//!
//! Единственное мутируемое состояние ядра. Список целиком заменяется
//! только новым проходом извлечения; точечная мутация одна —
//! `set_grouping`.

use contracts::domain::a002_product_line::{EditableLineItem, LineItem};

/// Срезать всё, кроме латинских букв, и привести к верхнему регистру.
/// Идемпотентна: sanitize(sanitize(x)) == sanitize(x).
pub fn sanitize_grouping(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Владелец редактируемого списка строк
#[derive(Debug, Default)]
pub struct ProductEditor {
    items: Vec<EditableLineItem>,
}

impl ProductEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[EditableLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Засеять список из результата извлечения, проставив id сделки на
    /// каждую строку. Пустое извлечение или неизвестная сделка очищают
    /// список: новая загрузка отбрасывает несохранённые правки.
    pub fn replace_from_extraction(&mut self, deal_id: &str, extracted: &[LineItem]) {
        if deal_id.is_empty() || extracted.is_empty() {
            tracing::debug!(
                deal_id,
                extracted = extracted.len(),
                "no products or deal id - clearing editable list"
            );
            self.items.clear();
            return;
        }
        self.items = extracted
            .iter()
            .cloned()
            .map(|item| EditableLineItem::new(deal_id, item))
            .collect();
        tracing::debug!(count = self.items.len(), deal_id, "editable products seeded");
    }

    /// Заменить группировку одной строки санированным значением.
    /// Индекс вне диапазона — ошибка программиста: логируется и
    /// игнорируется, паники нет.
    pub fn set_grouping(&mut self, index: usize, raw: &str) {
        let sanitized = sanitize_grouping(raw);
        match self.items.get_mut(index) {
            Some(entry) => entry.item.product_grouping = sanitized,
            None => tracing::warn!(
                index,
                len = self.items.len(),
                "set_grouping: index out of range, ignoring"
            ),
        }
    }

    /// Вернуть сохранённое ранее значение как есть, без санации —
    /// откат оптимистичной правки должен быть побайтово точным
    pub(crate) fn restore_grouping(&mut self, index: usize, value: &str) {
        if let Some(entry) = self.items.get_mut(index) {
            entry.item.product_grouping = value.to_string();
        }
    }

    pub fn grouping_at(&self, index: usize) -> Option<&str> {
        self.items
            .get(index)
            .map(|entry| entry.item.product_grouping.as_str())
    }
}
