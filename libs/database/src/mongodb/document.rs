//! Conversion between stored BSON documents and the JSON the API speaks.
//!
//! Documents go out as plain JSON: `_id` as a 24-char hex string, dates as
//! RFC 3339 strings, numbers as JSON numbers. Non-finite doubles have no JSON
//! form and are rendered as `null`.

use ::mongodb::bson::{Bson, Document};
use serde_json::{Map, Number, Value};

/// Render a stored document as a JSON object.
pub fn document_to_json(document: Document) -> Value {
    Value::Object(
        document
            .into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect(),
    )
}

/// Render a single BSON value.
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Value::from(dt.timestamp_millis()),
        },
        Bson::Double(v) => Number::from_f64(v).map_or(Value::Null, Value::Number),
        Bson::Int32(v) => Value::from(v),
        Bson::Int64(v) => Value::from(v),
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        Bson::Decimal128(d) => Value::String(d.to_string()),
        other => other.into_relaxed_extjson(),
    }
}

/// Convert an incoming JSON value to BSON.
///
/// Integers that fit 32 bits are stored as `Int32`, wider ones as `Int64`,
/// everything else numeric as `Double`.
pub fn json_to_bson(value: Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(b),
        Value::Number(n) => number_to_bson(&n),
        Value::String(s) => Bson::String(s),
        Value::Array(items) => Bson::Array(items.into_iter().map(json_to_bson).collect()),
        Value::Object(map) => Bson::Document(json_object_to_document(map)),
    }
}

/// Convert a JSON object body into a document, preserving key order.
pub fn json_object_to_document(map: Map<String, Value>) -> Document {
    map.into_iter()
        .map(|(key, value)| (key, json_to_bson(value)))
        .collect()
}

/// JavaScript truthiness of a request value.
///
/// `null`, `false`, `0`, and `""` are falsy; every array and object is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn number_to_bson(n: &Number) -> Bson {
    if let Some(i) = n.as_i64() {
        match i32::try_from(i) {
            Ok(small) => Bson::Int32(small),
            Err(_) => Bson::Int64(i),
        }
    } else {
        // u64 above i64::MAX and all fractional values
        Bson::Double(n.as_f64().unwrap_or(f64::NAN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::mongodb::bson::{DateTime, doc, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&value), "{value} should be falsy");
        }
        for value in [json!(true), json!(5), json!(-0.5), json!("0"), json!([]), json!({})] {
            assert!(is_truthy(&value), "{value} should be truthy");
        }
    }

    #[test]
    fn test_object_id_rendered_as_hex() {
        let id = ObjectId::parse_str("65a1b2c3d4e5f60718293a4b").unwrap();
        let rendered = document_to_json(doc! { "_id": id, "name": "Lamp" });
        assert_eq!(rendered, json!({ "_id": "65a1b2c3d4e5f60718293a4b", "name": "Lamp" }));
    }

    #[test]
    fn test_datetime_rendered_as_rfc3339() {
        let dt = DateTime::from_millis(1_700_000_000_000);
        let rendered = bson_to_json(Bson::DateTime(dt));
        let text = rendered.as_str().unwrap();
        assert!(text.starts_with("2023-11-14T22:13:20"));
        assert!(text.ends_with('Z'));
    }

    #[test]
    fn test_numbers_stay_numbers() {
        let rendered = document_to_json(doc! { "a": 1_i32, "b": 5_000_000_000_i64, "c": 9.5 });
        assert_eq!(rendered, json!({ "a": 1, "b": 5_000_000_000_i64, "c": 9.5 }));
    }

    #[test]
    fn test_nan_price_rendered_as_null() {
        let rendered = document_to_json(doc! { "price": f64::NAN });
        assert_eq!(rendered, json!({ "price": null }));
    }

    #[test]
    fn test_nested_values_converted() {
        let id = ObjectId::new();
        let rendered = document_to_json(doc! {
            "tags": ["a", { "ref": id }],
            "meta": { "ok": true, "note": Bson::Null },
        });
        assert_eq!(
            rendered,
            json!({
                "tags": ["a", { "ref": id.to_hex() }],
                "meta": { "ok": true, "note": null },
            })
        );
    }

    #[test]
    fn test_json_object_to_document_keeps_order_and_types() {
        let body = json!({ "name": "Pen", "price": 2, "big": 9_000_000_000_i64, "ratio": 0.5, "tags": ["x"] });
        let Value::Object(map) = body else {
            unreachable!()
        };
        let document = json_object_to_document(map);

        let keys: Vec<&str> = document.keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "price", "big", "ratio", "tags"]);
        assert_eq!(document.get("price"), Some(&Bson::Int32(2)));
        assert_eq!(document.get("big"), Some(&Bson::Int64(9_000_000_000)));
        assert_eq!(document.get("ratio"), Some(&Bson::Double(0.5)));
        assert_eq!(
            document.get("tags"),
            Some(&Bson::Array(vec![Bson::String("x".into())]))
        );
    }
}
