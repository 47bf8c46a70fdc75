//! Извлечение строк продуктов из сабформы канонической сделки.
//!
//! Сабформа пережила две версии хостового API: в старой идентификация
//! продукта лежит во вложенном объекте `Products`, в новой — прямо на
//! строке. Форма определяется отдельно для каждой строки, строки в
//! одной сабформе бывают смешанными.

use serde_json::{Map, Value};

use super::line_item::{LineItem, PriceValue};
use crate::domain::a001_deal::DealRecord;
use crate::shared::coerce::{coerce_bool, coerce_number, coerce_string, coerce_string_or_null};

const NULL: Value = Value::Null;

/// Непустая строка из поля объекта; пустая строка считается
/// отсутствующей (falsy-семантика хоста)
fn string_field(row: &Map<String, Value>, key: &str) -> Option<String> {
    match row.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn row_field<'a>(row: &'a Map<String, Value>, key: &str) -> &'a Value {
    row.get(key).unwrap_or(&NULL)
}

/// Извлечь строки продуктов в исходном порядке.
///
/// Только массивная форма сабформы даёт строки; map-форма (легаси)
/// возвращает пустой список — зафиксированный контракт, см. DESIGN.md.
/// Не-объектные элементы отфильтровываются, дальше строки не
/// пропускаются и не дедуплицируются.
pub fn extract_line_items(deal: &DealRecord) -> Vec<LineItem> {
    let Some(rows) = deal.subform_1.rows() else {
        return Vec::new();
    };

    rows.iter()
        .filter_map(Value::as_object)
        .enumerate()
        .map(|(index, row)| build_line_item(index, row))
        .collect()
}

fn build_line_item(index: usize, row: &Map<String, Value>) -> LineItem {
    // Вложенный объект Products -> старая форма, иначе новая
    let (id, name) = match row.get("Products").and_then(Value::as_object) {
        Some(products) => (
            string_field(products, "id").unwrap_or_else(|| format!("product-{index}")),
            string_field(products, "name").unwrap_or_else(|| "Unknown Product".to_string()),
        ),
        None => (
            string_field(row, "id").unwrap_or_else(|| format!("product-{index}")),
            string_field(row, "Product_Name")
                .or_else(|| string_field(row, "name"))
                .unwrap_or_else(|| format!("Product {}", index + 1)),
        ),
    };

    LineItem {
        id,
        name,
        item_type: coerce_string(row_field(row, "Product_Type"), ""),
        quantity: coerce_number(row_field(row, "Quantity"), 0.0),
        terms: coerce_string(row_field(row, "Terms"), ""),
        unit_price: coerce_number(row_field(row, "Pricing"), 0.0),
        total_pricing: extract_total_pricing(row_field(row, "Total_Pricing")),
        vendor: coerce_string_or_null(row_field(row, "Vendor")).filter(|s| !s.is_empty()),
        product_grouping: coerce_string(row_field(row, "Product_Grouping"), ""),
        is_contract: coerce_bool(row_field(row, "Is_Contract")),
    }
}

/// Total_Pricing приходит то числом, то готовой строкой — обе формы
/// сохраняются как есть
fn extract_total_pricing(value: &Value) -> PriceValue {
    match value {
        Value::String(s) => PriceValue::Text(s.clone()),
        Value::Number(n) => match n.as_f64().filter(|v| v.is_finite()) {
            Some(v) => PriceValue::Number(v),
            None => PriceValue::default(),
        },
        _ => PriceValue::default(),
    }
}
