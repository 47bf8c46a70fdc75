//! Синтетический PageLoad-payload для локальной разработки.
//!
//! Когда событие не пришло за отведённое окно, а виджет крутится на
//! localhost, сессия подставляет этот payload, чтобы UI можно было
//! разрабатывать без живого Zoho.

use serde_json::{json, Value};

pub fn mock_page_load_payload() -> Value {
    json!({
        "data": {
            "id": "mock-deal-123",
            "Deal_Name": "Mock Deal for Development",
            "Account_Name": {"name": "Mock Account", "id": "mock-account-123"},
            "Owner": {"name": "Mock Owner", "id": "mock-owner-123"},
            "Created_By": {"name": "Mock Creator", "id": "mock-creator-123"},
            "Modified_By": {"name": "Mock Modifier", "id": "mock-modifier-123"},
            "Subform_1": [
                {
                    "Products": {"name": "Mock Product 1", "id": "mock-product-1"},
                    "Product_Type": "Software",
                    "Is_Contract": true,
                    "Product_Grouping": null,
                    "Quantity": 1,
                    "Terms": "Co-Terminus",
                    "Pricing": 100,
                    "Total_Pricing": 100,
                    "Vendor": "Mock Vendor"
                }
            ]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_deal::parse_deal_record;
    use contracts::domain::a002_product_line::extract_line_items;

    #[test]
    fn mock_payload_parses_into_one_line_item() {
        let deal = parse_deal_record(&mock_page_load_payload()).unwrap();
        assert_eq!(deal.id, "mock-deal-123");

        let items = extract_line_items(&deal);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "mock-product-1");
        assert_eq!(items[0].name, "Mock Product 1");
        assert_eq!(items[0].unit_price, 100.0);
    }
}
