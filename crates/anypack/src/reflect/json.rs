//! [`Reflect`] for `serde_json::Value`, so already-parsed JSON can be encoded
//! like any other value.

use serde_json::{Number, Value};

use super::{Kind, Reflect};

fn number_kind(n: &Number) -> Kind<'static> {
    if let Some(i) = n.as_i64() {
        Kind::I64(i)
    } else if let Some(u) = n.as_u64() {
        Kind::U64(u)
    } else {
        Kind::F64(n.as_f64().unwrap_or(f64::NAN))
    }
}

impl Reflect for Value {
    fn kind(&self) -> Kind<'_> {
        match self {
            Value::Null => Kind::Nullable(None),
            Value::Bool(b) => Kind::Bool(*b),
            Value::Number(n) => number_kind(n),
            Value::String(s) => Kind::Str(s),
            Value::Array(arr) => Kind::Seq(arr.iter().map(|v| v as &dyn Reflect).collect()),
            Value::Object(obj) => Kind::Map(
                obj.iter()
                    .map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_numbers_pick_fixed_width() {
        assert!(matches!(json!(-3).kind(), Kind::I64(-3)));
        assert!(matches!(json!(u64::MAX).kind(), Kind::U64(u64::MAX)));
        assert!(matches!(json!(0.5).kind(), Kind::F64(v) if v == 0.5));
    }

    #[test]
    fn json_null_is_absent() {
        assert!(matches!(json!(null).kind(), Kind::Nullable(None)));
    }

    #[test]
    fn json_object_entries_follow_insertion_order() {
        let value = json!({"b": 1, "a": 2});
        match value.kind() {
            Kind::Map(entries) => {
                let keys: Vec<&str> = entries
                    .iter()
                    .map(|(k, _)| match k.kind() {
                        Kind::Str(s) => s,
                        _ => panic!("expected string key"),
                    })
                    .collect();
                assert_eq!(keys, vec!["b", "a"]);
            }
            _ => panic!("expected map"),
        }
    }
}
