//! Update-payload для updateRecord: обратное преобразование
//! редактируемых строк в формат хоста.
//!
//! Требуемая структура — плоская, `Subform_1` на корневом уровне:
//!
//! ```json
//! {
//!   "id": "6637555000000860679",
//!   "Subform_1": [
//!     {
//!       "Product_Type": "AT&T Transactional",
//!       "Is_Contract": true,
//!       "Product_Grouping": "A",
//!       "Quantity": 2,
//!       "Terms": "Co-Terminus",
//!       "Pricing": 500,
//!       "Total_Pricing": "1,000.00",
//!       "Vendor": null,
//!       "Products": "6637555000000864095"
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::a002_product_line::line_item::EditableLineItem;

/// Запись продукта в `Subform_1` update-payload'а.
///
/// Поля `id` здесь нет намеренно: идентификаторы строк сабформы
/// назначает сам Zoho, запись с `id` была бы отвергнута или молча
/// проигнорирована. Id продукта уходит в поле `Products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubformProductRecord {
    #[serde(rename = "Product_Type")]
    pub product_type: String,
    #[serde(rename = "Is_Contract")]
    pub is_contract: bool,
    #[serde(rename = "Product_Grouping")]
    pub product_grouping: Option<String>,
    #[serde(rename = "Quantity")]
    pub quantity: f64,
    #[serde(rename = "Terms")]
    pub terms: String,
    #[serde(rename = "Pricing")]
    pub pricing: f64,
    #[serde(rename = "Total_Pricing")]
    pub total_pricing: String,
    #[serde(rename = "Vendor")]
    pub vendor: Option<String>,
    #[serde(rename = "Products")]
    pub products: String,
}

impl From<&EditableLineItem> for SubformProductRecord {
    fn from(entry: &EditableLineItem) -> Self {
        let item = &entry.item;
        Self {
            product_type: item.item_type.clone(),
            is_contract: item.is_contract,
            product_grouping: non_empty(&item.product_grouping),
            // falsy-дефолты хостового JS: workflow-правила Zoho на них
            // завязаны, поэтому воспроизводятся точно
            quantity: if item.quantity != 0.0 { item.quantity } else { 1.0 },
            terms: if item.terms.is_empty() {
                "Co-Terminus".to_string()
            } else {
                item.terms.clone()
            },
            pricing: item.unit_price,
            total_pricing: item.total_pricing.to_host_string(),
            vendor: item.vendor.as_deref().and_then(non_empty),
            products: item.id.clone(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Корневой update-payload сделки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRecordRequest {
    pub id: String,
    #[serde(rename = "Subform_1")]
    pub subform_1: Vec<SubformProductRecord>,
}

impl UpdateRecordRequest {
    /// Сериализация не может отказать на валидном входе — это чистое
    /// поэлементное отображение
    pub fn from_line_items(deal_id: impl Into<String>, items: &[EditableLineItem]) -> Self {
        Self {
            id: deal_id.into(),
            subform_1: items.iter().map(SubformProductRecord::from).collect(),
        }
    }
}

/// Конверт вызова updateRecord
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRecordCall {
    #[serde(rename = "Entity")]
    pub entity: String,
    #[serde(rename = "APIData")]
    pub api_data: UpdateRecordRequest,
    #[serde(rename = "Trigger")]
    pub trigger: Vec<String>,
}

impl UpdateRecordCall {
    pub fn for_deal(api_data: UpdateRecordRequest) -> Self {
        Self {
            entity: "Deals".to_string(),
            api_data,
            trigger: vec!["workflow".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_product_line::line_item::{LineItem, PriceValue};

    fn entry(item: LineItem) -> EditableLineItem {
        EditableLineItem::new("D1", item)
    }

    #[test]
    fn serialized_record_has_no_id_key() {
        let request = UpdateRecordRequest::from_line_items(
            "D1",
            &[entry(LineItem {
                id: "P1".into(),
                name: "Router".into(),
                ..LineItem::default()
            })],
        );
        let value = serde_json::to_value(&request).unwrap();
        let record = &value["Subform_1"][0];

        assert!(record.get("id").is_none());
        assert_eq!(record["Products"], "P1");
    }

    #[test]
    fn host_falsy_defaults_are_applied() {
        let record = SubformProductRecord::from(&entry(LineItem {
            id: "P1".into(),
            quantity: 0.0,
            terms: String::new(),
            product_grouping: String::new(),
            vendor: None,
            ..LineItem::default()
        }));

        assert_eq!(record.quantity, 1.0);
        assert_eq!(record.terms, "Co-Terminus");
        assert_eq!(record.product_grouping, None);
        assert_eq!(record.vendor, None);
        assert_eq!(record.pricing, 0.0);
    }

    #[test]
    fn explicit_values_pass_through() {
        let record = SubformProductRecord::from(&entry(LineItem {
            id: "P2".into(),
            item_type: "AT&T Transactional".into(),
            quantity: 2.0,
            terms: "Monthly".into(),
            unit_price: 500.0,
            total_pricing: PriceValue::Text("1,000.00".into()),
            vendor: Some("AT&T".into()),
            product_grouping: "A".into(),
            is_contract: true,
            ..LineItem::default()
        }));

        assert_eq!(record.product_type, "AT&T Transactional");
        assert!(record.is_contract);
        assert_eq!(record.product_grouping.as_deref(), Some("A"));
        assert_eq!(record.quantity, 2.0);
        assert_eq!(record.terms, "Monthly");
        assert_eq!(record.pricing, 500.0);
        assert_eq!(record.total_pricing, "1,000.00");
        assert_eq!(record.vendor.as_deref(), Some("AT&T"));
    }

    #[test]
    fn numeric_total_pricing_is_stringified() {
        let record = SubformProductRecord::from(&entry(LineItem {
            id: "P1".into(),
            total_pricing: PriceValue::Number(500.0),
            ..LineItem::default()
        }));
        assert_eq!(record.total_pricing, "500");
    }

    #[test]
    fn call_envelope_targets_deals_with_workflow_trigger() {
        let call = UpdateRecordCall::for_deal(UpdateRecordRequest::from_line_items("D1", &[]));
        let value = serde_json::to_value(&call).unwrap();
        assert_eq!(value["Entity"], "Deals");
        assert_eq!(value["Trigger"], serde_json::json!(["workflow"]));
        assert_eq!(value["APIData"]["id"], "D1");
    }
}
