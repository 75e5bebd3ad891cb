//! SQLite value → JSON value encoding.

use rusqlite::types::ValueRef;
use serde_json::{Number, Value};

/// Convert one SQLite value into its JSON form.
///
/// Dispatch is total: values with no native JSON rendering fall through to
/// a string rendering instead of failing the export. Text already carries
/// dates in their interchange form, so it passes through unchanged.
#[must_use]
pub fn to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Number(i.into()),
        ValueRef::Real(f) => match Number::from_f64(f) {
            Some(n) => Value::Number(n),
            // NaN and the infinities have no JSON number form
            None => Value::String(f.to_string()),
        },
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
    }
}
