//! Total coercions from untyped host JSON to typed primitives.
//!
//! The Zoho payload is loosely typed: fields show up as the wrong
//! primitive, as `{ name, id }` lookup objects, or not at all. Every
//! function here accepts any `Value` and always returns something of
//! the target type — parsing a deal must never abort on a single bad
//! field.

use serde_json::Value;

use crate::domain::common::{SubformShape, UserRef};

/// Извлечь строку: строка как есть, у объекта берём поле `name`,
/// иначе значение по умолчанию
pub fn coerce_string(value: &Value, default: &str) -> String {
    match derive_string(value) {
        Some(s) => s,
        None => default.to_string(),
    }
}

/// То же, что [`coerce_string`], но без default: если строку извлечь
/// нельзя — явный `None`, никогда не "undefined"
pub fn coerce_string_or_null(value: &Value) -> Option<String> {
    derive_string(value)
}

fn derive_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => match map.get("name") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        },
        _ => None,
    }
}

/// Извлечь конечное число; строки парсим как десятичные
pub fn coerce_number(value: &Value, default: f64) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() => v,
        _ => default,
    }
}

/// Булево по правилам truthiness хоста: `false`, `null`, `0`, `NaN` и
/// пустая строка — ложь, объекты и массивы — истина
pub fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Извлечь ссылку на пользователя.
///
/// Объект разбирается по полям (`name ?? сам объект`, `id`), голая
/// строка трактуется как имя с неизвестным id, всё остальное — ссылка
/// по умолчанию.
pub fn coerce_user(value: &Value, default_name: &str) -> UserRef {
    match value {
        Value::Object(map) => {
            let name_source = match map.get("name") {
                Some(v) if !v.is_null() => v,
                _ => value,
            };
            UserRef {
                name: coerce_string(name_source, default_name),
                id: coerce_string(map.get("id").unwrap_or(&Value::Null), "unknown"),
            }
        }
        Value::String(s) => UserRef::unknown(s.clone()),
        _ => UserRef::unknown(default_name),
    }
}

/// Извлечь сабформу с сохранением формы: массив строк или keyed-map.
/// Любое другое значение сворачивается в пустой map.
pub fn coerce_subform(value: &Value) -> SubformShape {
    match value {
        Value::Array(rows) => SubformShape::Array(rows.clone()),
        Value::Object(map) => SubformShape::Map(map.clone()),
        _ => SubformShape::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_string() {
        assert_eq!(coerce_string(&json!("hello"), "d"), "hello");
        assert_eq!(coerce_string(&json!({"name": "Acme"}), "d"), "Acme");
        assert_eq!(coerce_string(&json!({"name": 42}), "d"), "42");
        assert_eq!(coerce_string(&json!({"id": "x"}), "d"), "d");
        assert_eq!(coerce_string(&json!(12.5), "d"), "d");
        assert_eq!(coerce_string(&Value::Null, "d"), "d");
    }

    #[test]
    fn test_coerce_string_or_null() {
        assert_eq!(coerce_string_or_null(&json!("a")), Some("a".to_string()));
        assert_eq!(
            coerce_string_or_null(&json!({"name": "b"})),
            Some("b".to_string())
        );
        assert_eq!(coerce_string_or_null(&Value::Null), None);
        assert_eq!(coerce_string_or_null(&json!(7)), None);
        assert_eq!(coerce_string_or_null(&json!([1, 2])), None);
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(2.5), 0.0), 2.5);
        assert_eq!(coerce_number(&json!("500"), 0.0), 500.0);
        assert_eq!(coerce_number(&json!(" 1.25 "), 0.0), 1.25);
        assert_eq!(coerce_number(&json!("abc"), 3.0), 3.0);
        assert_eq!(coerce_number(&Value::Null, 3.0), 3.0);
        assert_eq!(coerce_number(&json!(true), 3.0), 3.0);
    }

    #[test]
    fn test_coerce_bool_truthiness() {
        assert!(!coerce_bool(&Value::Null));
        assert!(!coerce_bool(&json!(false)));
        assert!(!coerce_bool(&json!(0)));
        assert!(!coerce_bool(&json!("")));
        assert!(coerce_bool(&json!(true)));
        assert!(coerce_bool(&json!(1)));
        assert!(coerce_bool(&json!("no")));
        assert!(coerce_bool(&json!({})));
        assert!(coerce_bool(&json!([])));
    }

    #[test]
    fn test_coerce_user_object() {
        let user = coerce_user(&json!({"name": "Ivan", "id": "42"}), "Unknown");
        assert_eq!(user, UserRef::new("Ivan", "42"));
    }

    #[test]
    fn test_coerce_user_bare_string_is_name() {
        let user = coerce_user(&json!("Ivan"), "Unknown");
        assert_eq!(user, UserRef::new("Ivan", "unknown"));
    }

    #[test]
    fn test_coerce_user_defaults() {
        assert_eq!(
            coerce_user(&Value::Null, "Unknown Owner"),
            UserRef::unknown("Unknown Owner")
        );
        // объект без name и id — оба поля по умолчанию
        assert_eq!(
            coerce_user(&json!({"email": "x@y.z"}), "Unknown Owner"),
            UserRef::unknown("Unknown Owner")
        );
    }

    #[test]
    fn test_coerce_subform_shapes() {
        assert_eq!(
            coerce_subform(&json!([{"id": "1"}])),
            SubformShape::Array(vec![json!({"id": "1"})])
        );
        assert!(matches!(
            coerce_subform(&json!({"row_0": {}})),
            SubformShape::Map(_)
        ));
        // не массив и не объект — пустой map
        assert_eq!(coerce_subform(&json!("junk")), SubformShape::default());
        assert_eq!(coerce_subform(&Value::Null), SubformShape::default());
    }
}
