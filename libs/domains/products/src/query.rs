//! Translation of listing query parameters into a MongoDB find request.
//!
//! `GET /api/products?category=..&minPrice=..&sort=..&fields=..` is parsed
//! into [`ProductListParams`], normalised into a [`ProductQuery`], and the
//! query then renders the filter, sort and projection documents. Nothing
//! here touches the database.

use mongodb::bson::{doc, Document};
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;

/// Raw query string of the listing endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListParams {
    /// Exact, case-sensitive category match
    pub category: Option<String>,
    /// Only products with `price >= minPrice`
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    /// `price` for ascending, `-price` for descending price order
    pub sort: Option<String>,
    /// Comma-separated field names to return (`_id` is always included)
    pub fields: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceOrder {
    Ascending,
    Descending,
}

impl PriceOrder {
    /// `price` / `-price`; anything else means natural order.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "price" => Some(PriceOrder::Ascending),
            "-price" => Some(PriceOrder::Descending),
            _ => None,
        }
    }
}

/// Normalised listing request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub category: Option<String>,
    /// NaN when the client sent a non-numeric value
    pub min_price: Option<f64>,
    pub sort: Option<PriceOrder>,
    pub fields: Vec<String>,
}

impl From<ProductListParams> for ProductQuery {
    fn from(params: ProductListParams) -> Self {
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

        Self {
            category: non_empty(params.category),
            min_price: non_empty(params.min_price).map(|raw| coerce_number(&raw)),
            sort: params.sort.as_deref().and_then(PriceOrder::parse),
            fields: params
                .fields
                .as_deref()
                .map(split_fields)
                .unwrap_or_default(),
        }
    }
}

impl ProductQuery {
    /// A non-numeric `minPrice` can match no document.
    pub fn is_unsatisfiable(&self) -> bool {
        self.min_price.is_some_and(f64::is_nan)
    }

    pub fn filter(&self) -> Document {
        let mut filter = doc! {};

        if let Some(ref category) = self.category {
            filter.insert("category", category.clone());
        }

        if let Some(min) = self.min_price {
            filter.insert("price", doc! { "$gte": min });
        }

        filter
    }

    pub fn sort(&self) -> Option<Document> {
        self.sort.map(|order| match order {
            PriceOrder::Ascending => doc! { "price": 1 },
            PriceOrder::Descending => doc! { "price": -1 },
        })
    }

    /// Inclusion projection; `None` returns whole documents.
    pub fn projection(&self) -> Option<Document> {
        if self.fields.is_empty() {
            return None;
        }

        Some(
            self.fields
                .iter()
                .map(|field| (field.clone(), 1.into()))
                .collect(),
        )
    }
}

fn split_fields(raw: &str) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();
    for field in raw.split(',').map(str::trim).filter(|f| !f.is_empty()) {
        if !fields.iter().any(|seen| seen == field) {
            fields.push(field.to_string());
        }
    }
    fields
}

/// Numeric coercion with JavaScript `Number()` rules.
///
/// Surrounding whitespace is ignored, the empty string is `0`, `0x`/`0o`/`0b`
/// prefixes and `Infinity` are accepted, anything else unparseable is NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let text = raw.trim();
    if text.is_empty() {
        return 0.0;
    }

    let radix = match text.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        // `from_str_radix` tolerates a leading sign; a radix literal has none.
        let digits = &text[2..];
        if digits.starts_with(['+', '-']) {
            return f64::NAN;
        }
        return u64::from_str_radix(digits, radix).map_or(f64::NAN, |v| v as f64);
    }

    let unsigned = text.trim_start_matches(['+', '-']);
    if unsigned == "Infinity" {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    // Rust also accepts "inf" and "nan" spellings; JavaScript does not.
    let only_decimal = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !only_decimal {
        return f64::NAN;
    }

    text.parse().unwrap_or(f64::NAN)
}

/// Numeric cast of an arbitrary JSON value with JavaScript `Number()` rules.
///
/// `null` is `0`, booleans are `0`/`1`, strings go through [`coerce_number`].
/// Arrays convert through their string form, so `[]` is `0`, a single
/// element array is its element, and anything longer is NaN. Objects are NaN.
pub fn coerce_value(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => coerce_number(s),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [Value::Null] => 0.0,
            [Value::Bool(_)] | [Value::Object(_)] => f64::NAN,
            [single] => coerce_value(single),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(
        category: Option<&str>,
        min: Option<&str>,
        sort: Option<&str>,
        fields: Option<&str>,
    ) -> ProductQuery {
        ProductListParams {
            category: category.map(String::from),
            min_price: min.map(String::from),
            sort: sort.map(String::from),
            fields: fields.map(String::from),
        }
        .into()
    }

    #[test]
    fn test_empty_params_build_empty_request() {
        let query = params(None, None, None, None);
        assert!(query.filter().is_empty());
        assert!(query.sort().is_none());
        assert!(query.projection().is_none());
        assert!(!query.is_unsatisfiable());
    }

    #[test]
    fn test_category_filter() {
        let query = params(Some("Books"), None, None, None);
        assert_eq!(query.filter(), doc! { "category": "Books" });
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let query = params(Some(""), Some(""), Some(""), Some(""));
        assert_eq!(query, ProductQuery::default());
    }

    #[test]
    fn test_min_price_filter() {
        let query = params(None, Some("10"), None, None);
        assert_eq!(query.filter(), doc! { "price": { "$gte": 10.0 } });
    }

    #[test]
    fn test_combined_filter() {
        let query = params(Some("toys"), Some("2.5"), None, None);
        assert_eq!(
            query.filter(),
            doc! { "category": "toys", "price": { "$gte": 2.5 } }
        );
    }

    #[test]
    fn test_non_numeric_min_price_is_unsatisfiable() {
        let query = params(None, Some("cheap"), None, None);
        assert!(query.min_price.unwrap().is_nan());
        assert!(query.is_unsatisfiable());
    }

    #[test]
    fn test_sort_parsing() {
        assert_eq!(params(None, None, Some("price"), None).sort(), Some(doc! { "price": 1 }));
        assert_eq!(params(None, None, Some("-price"), None).sort(), Some(doc! { "price": -1 }));
        assert_eq!(params(None, None, Some("name"), None).sort(), None);
        assert_eq!(params(None, None, Some("PRICE"), None).sort(), None);
    }

    #[test]
    fn test_fields_projection() {
        let query = params(None, None, None, Some("name, price,,name"));
        assert_eq!(query.projection(), Some(doc! { "name": 1, "price": 1 }));
    }

    #[test]
    fn test_fields_without_usable_segment() {
        let query = params(None, None, None, Some(" , ,"));
        assert!(query.projection().is_none());
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("42"), 42.0);
        assert_eq!(coerce_number(" 3.5 "), 3.5);
        assert_eq!(coerce_number("-1e3"), -1000.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
        assert_eq!(coerce_number("0x1A"), 26.0);
        assert_eq!(coerce_number("0b101"), 5.0);
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
        assert!(coerce_number("abc").is_nan());
        assert!(coerce_number("12abc").is_nan());
        assert!(coerce_number("inf").is_nan());
        assert!(coerce_number("NaN").is_nan());
        assert!(coerce_number("0xZZ").is_nan());
    }

    #[test]
    fn test_coerce_number_rejects_sign_after_radix_prefix() {
        assert!(coerce_number("0x+1").is_nan());
        assert!(coerce_number("0x-1").is_nan());
        assert!(coerce_number("0b+1").is_nan());
        assert!(coerce_number("0o-7").is_nan());
        assert!(coerce_number("-0x1").is_nan());
    }

    #[test]
    fn test_coerce_value() {
        use serde_json::json;

        assert_eq!(coerce_value(&json!(null)), 0.0);
        assert_eq!(coerce_value(&json!(true)), 1.0);
        assert_eq!(coerce_value(&json!(false)), 0.0);
        assert_eq!(coerce_value(&json!(7)), 7.0);
        assert_eq!(coerce_value(&json!("2.5")), 2.5);
        assert_eq!(coerce_value(&json!([])), 0.0);
        assert_eq!(coerce_value(&json!(["4"])), 4.0);
        assert_eq!(coerce_value(&json!([[9]])), 9.0);
        assert_eq!(coerce_value(&json!([null])), 0.0);
        assert!(coerce_value(&json!([true])).is_nan());
        assert!(coerce_value(&json!([1, 2])).is_nan());
        assert!(coerce_value(&json!({ "a": 1 })).is_nan());
    }
}
