use serde_json::Value;

use crate::DeepEqual;

/// Performs a deep equality check between two JSON values.
///
/// Types are compared strictly: `1` is not `"1"`, `null` is not `{}`, and an
/// integer `0` is not the float `0.0` because serde_json keeps them as
/// different [`serde_json::Number`] representations.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_adapter_equal::deep_equal;
///
/// assert!(deep_equal(&json!({"a": [1, 2]}), &json!({"a": [1, 2]})));
/// assert!(!deep_equal(&json!({}), &json!(null)));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            if arr_a.len() != arr_b.len() {
                return false;
            }
            arr_a.iter().zip(arr_b).all(|(a, b)| deep_equal(a, b))
        }

        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            for (key, val_a) in obj_a {
                match obj_b.get(key) {
                    Some(val_b) => {
                        if !deep_equal(val_a, val_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        // Different types are never equal
        _ => false,
    }
}

impl DeepEqual for Value {
    #[inline]
    fn deep_equal(&self, other: &Self) -> bool {
        deep_equal(self, other)
    }
}
