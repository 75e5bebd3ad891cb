//! Schemaless row records.
//!
//! The exporter never assumes a table layout: every row becomes a
//! [`Record`], an ordered column-name → JSON-value mapping. Field order
//! mirrors the source table's column order and survives serialization
//! (`serde_json` is built with `preserve_order`).

use serde_json::{Map, Value};

/// One row as an ordered column-name → value mapping.
pub type Record = Map<String, Value>;

/// Column holding a snapshot's owning trade identifier.
pub const TRADE_ID_COLUMN: &str = "trade_id";

/// True when a value identifies an owning trade.
///
/// Null, zero, and the empty string all mean "no owning trade"; the
/// analyzer's historical data relies on that reading.
#[must_use]
pub fn is_truthy_id(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Render an identifier value as a grouping key.
///
/// Strings group under their own content; every other value groups under
/// its canonical JSON rendering.
#[must_use]
pub fn group_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Tests for identifier truthiness

    #[test]
    fn null_is_not_an_id() {
        assert!(!is_truthy_id(&Value::Null));
    }

    #[test]
    fn zero_is_not_an_id() {
        assert!(!is_truthy_id(&json!(0)));
        assert!(!is_truthy_id(&json!(0.0)));
    }

    #[test]
    fn empty_string_is_not_an_id() {
        assert!(!is_truthy_id(&json!("")));
    }

    #[test]
    fn nonzero_numbers_are_ids() {
        assert!(is_truthy_id(&json!(1)));
        assert!(is_truthy_id(&json!(-3)));
        assert!(is_truthy_id(&json!(0.5)));
        assert!(is_truthy_id(&json!(i64::MAX)));
    }

    #[test]
    fn nonempty_strings_are_ids() {
        assert!(is_truthy_id(&json!("T-42")));
        assert!(is_truthy_id(&json!("0")));
    }

    // Tests for key rendering

    #[test]
    fn string_ids_key_as_themselves() {
        assert_eq!(group_key(&json!("T-42")), "T-42");
    }

    #[test]
    fn integer_ids_key_as_decimal_text() {
        assert_eq!(group_key(&json!(7)), "7");
        assert_eq!(group_key(&json!(-12)), "-12");
    }

    #[test]
    fn float_ids_key_as_json_text() {
        assert_eq!(group_key(&json!(2.5)), "2.5");
    }
}
