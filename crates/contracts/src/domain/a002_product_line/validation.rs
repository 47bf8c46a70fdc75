//! Pre-flight validation of the editable product list.
//!
//! Every rule is evaluated for every item (no short-circuit) so the
//! caller can log the complete error list in one pass; only the two
//! structural checks stop early.

use super::line_item::EditableLineItem;

/// Потолок пакетного обновления на стороне Zoho
pub const MAX_BATCH_SIZE: usize = 100;

/// Проверить список перед отправкой; пустой результат = данные валидны
pub fn validate_line_items(items: &[EditableLineItem]) -> Vec<String> {
    let mut errors = Vec::new();

    if items.is_empty() {
        errors.push("Products array cannot be empty".to_string());
        return errors;
    }

    if items.len() > MAX_BATCH_SIZE {
        errors.push(format!(
            "Cannot update more than {MAX_BATCH_SIZE} products at once (Zoho API limit)"
        ));
    }

    for (index, entry) in items.iter().enumerate() {
        let prefix = format!("Product {}:", index + 1);
        let item = &entry.item;

        if item.id.is_empty() {
            errors.push(format!("{prefix} Missing product ID"));
        }

        if item.name.is_empty() {
            errors.push(format!("{prefix} Missing or invalid product name"));
        }

        if !item.product_grouping.is_empty() && !is_single_uppercase_letter(&item.product_grouping)
        {
            errors.push(format!("{prefix} Product grouping must be a single letter A-Z"));
        }

        if !item.quantity.is_finite() || item.quantity < 0.0 {
            errors.push(format!("{prefix} Quantity must be a positive number"));
        }

        if !item.unit_price.is_finite() || item.unit_price < 0.0 {
            errors.push(format!("{prefix} Unit price must be a positive number"));
        }
    }

    errors
}

fn is_single_uppercase_letter(value: &str) -> bool {
    let mut chars = value.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_uppercase())
}
