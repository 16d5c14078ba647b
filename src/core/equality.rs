//! Structural equality over the JSON value model used for chart data/layout.
//!
//! Sequences are order-sensitive. Mappings compare key sets and values and
//! ignore key order. Numbers compare by numeric value so `1` and `1.0` match,
//! which mirrors how serialized chart payloads treat them.

use serde_json::{Map, Number, Value};

/// Deep structural equality of two JSON values.
#[must_use]
pub fn structurally_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => structurally_equal_seqs(a, b),
        (Value::Object(a), Value::Object(b)) => structurally_equal_maps(a, b),
        _ => false,
    }
}

/// Element-wise, order-sensitive comparison.
#[must_use]
pub fn structurally_equal_seqs(left: &[Value], right: &[Value]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(a, b)| structurally_equal(a, b))
}

/// Key-set and per-key value comparison, independent of key order.
#[must_use]
pub fn structurally_equal_maps(left: &Map<String, Value>, right: &Map<String, Value>) -> bool {
    left.len() == right.len()
        && left.iter().all(|(key, a)| {
            right
                .get(key)
                .is_some_and(|b| structurally_equal(a, b))
        })
}

fn numbers_equal(left: &Number, right: &Number) -> bool {
    match (exact_integer(left), exact_integer(right)) {
        (Some(a), Some(b)) => a == b,
        (Some(int), None) => right.as_f64().is_some_and(|float| float_equals_integer(float, int)),
        (None, Some(int)) => left.as_f64().is_some_and(|float| float_equals_integer(float, int)),
        (None, None) => left.as_f64() == right.as_f64(),
    }
}

fn exact_integer(number: &Number) -> Option<i128> {
    number
        .as_i64()
        .map(i128::from)
        .or_else(|| number.as_u64().map(i128::from))
}

/// Integral floats inside the `i64`/`u64` span compare exactly; anything else
/// cannot equal an integer.
fn float_equals_integer(float: f64, int: i128) -> bool {
    const LOWER: f64 = -9_223_372_036_854_775_808.0;
    const UPPER_EXCLUSIVE: f64 = 18_446_744_073_709_551_616.0;
    float.fract() == 0.0 && (LOWER..UPPER_EXCLUSIVE).contains(&float) && float as i128 == int
}
