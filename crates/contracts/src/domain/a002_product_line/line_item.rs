use serde::{Deserialize, Serialize};

/// Цена, как её прислал хост: числом или уже отформатированной строкой
/// (`"1,000.00"`). Обе формы сохраняются как есть до сериализации.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Number(f64),
    Text(String),
}

impl PriceValue {
    /// Строковая форма для update-payload: текст без изменений, число —
    /// так, как его отрендерил бы хостовый JS (`500` -> `"500"`)
    pub fn to_host_string(&self) -> String {
        match self {
            PriceValue::Text(s) => s.clone(),
            PriceValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
        }
    }
}

impl Default for PriceValue {
    fn default() -> Self {
        PriceValue::Text(String::new())
    }
}

/// Строка сабформы продуктов после извлечения
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Id продукта; при отсутствии синтезируется `product-{index}`
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub quantity: f64,
    pub terms: String,
    /// Хостовое поле `Pricing`
    pub unit_price: f64,
    pub total_pricing: PriceValue,
    pub vendor: Option<String>,
    /// Однобуквенный код группировки; пустая строка = не назначен
    pub product_grouping: String,
    pub is_contract: bool,
}

/// Редактируемая строка: line item + id сделки для контекста отправки
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableLineItem {
    #[serde(flatten)]
    pub item: LineItem,
    pub deal_id: String,
}

impl EditableLineItem {
    pub fn new(deal_id: impl Into<String>, item: LineItem) -> Self {
        Self {
            item,
            deal_id: deal_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_value_host_string() {
        assert_eq!(PriceValue::Text("1,000.00".into()).to_host_string(), "1,000.00");
        assert_eq!(PriceValue::Text(String::new()).to_host_string(), "");
        assert_eq!(PriceValue::Number(500.0).to_host_string(), "500");
        assert_eq!(PriceValue::Number(500.5).to_host_string(), "500.5");
        assert_eq!(PriceValue::Number(0.0).to_host_string(), "0");
    }

    #[test]
    fn test_editable_item_serde_shape() {
        let entry = EditableLineItem::new(
            "D1",
            LineItem {
                id: "P1".into(),
                name: "Router".into(),
                item_type: "Hardware".into(),
                unit_price: 500.0,
                ..LineItem::default()
            },
        );
        let value = serde_json::to_value(&entry).unwrap();
        // dealId лежит плоско рядом с полями item
        assert_eq!(value["dealId"], "D1");
        assert_eq!(value["type"], "Hardware");
        assert_eq!(value["unitPrice"], 500.0);
    }
}
