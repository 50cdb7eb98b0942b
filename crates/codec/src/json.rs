//! JSON encoding for DynamicTree
//!
//! Maps `serde_json::Value` onto the canonical tree. Integers that fit in
//! i64 stay integers; everything else numeric becomes a float. JSON has no
//! distinct bytes type, so none is introduced.
//!
//! Encoding is fallible: IEEE-754 specials (NaN, infinities) have no JSON
//! representation and surface as [`Error::Codec`](datafix_core::Error::Codec).

use crate::TreeCodec;
use datafix_core::{DynamicTree, Error, Result};
use serde_json::Value as JsonValue;

/// Codec between `serde_json::Value` and [`DynamicTree`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl TreeCodec for JsonCodec {
    type Repr = JsonValue;

    fn decode(&self, repr: JsonValue) -> Result<DynamicTree> {
        Ok(from_json(repr))
    }

    fn encode(&self, tree: &DynamicTree) -> Result<JsonValue> {
        to_json(tree)
    }
}

/// Convert a JSON value into a tree. Total: every JSON value has a tree
/// representation.
pub fn from_json(value: JsonValue) -> DynamicTree {
    match value {
        JsonValue::Null => DynamicTree::Null,
        JsonValue::Bool(b) => DynamicTree::Bool(b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                DynamicTree::Int(i)
            } else {
                // u64 beyond i64::MAX or a fractional number
                DynamicTree::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        JsonValue::String(s) => DynamicTree::String(s),
        JsonValue::Array(items) => {
            DynamicTree::List(items.into_iter().map(from_json).collect())
        }
        JsonValue::Object(entries) => DynamicTree::Map(
            entries.into_iter().map(|(k, v)| (k, from_json(v))).collect(),
        ),
    }
}

/// Convert a tree into a JSON value. Fails on non-finite floats.
pub fn to_json(tree: &DynamicTree) -> Result<JsonValue> {
    match tree {
        DynamicTree::Null => Ok(JsonValue::Null),
        DynamicTree::Bool(b) => Ok(JsonValue::Bool(*b)),
        DynamicTree::Int(i) => Ok(JsonValue::from(*i)),
        DynamicTree::Float(f) => serde_json::Number::from_f64(*f)
            .map(JsonValue::Number)
            .ok_or_else(|| Error::Codec(format!("float {f} has no JSON representation"))),
        DynamicTree::String(s) => Ok(JsonValue::String(s.clone())),
        DynamicTree::List(items) => Ok(JsonValue::Array(
            items.iter().map(to_json).collect::<Result<Vec<_>>>()?,
        )),
        DynamicTree::Map(entries) => {
            let mut out = serde_json::Map::with_capacity(entries.len());
            for (k, v) in entries {
                out.insert(k.clone(), to_json(v)?);
            }
            Ok(JsonValue::Object(out))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_maps_variants() {
        let tree = from_json(json!({
            "id": "minecraft:anvil",
            "count": 3,
            "weight": 1.5,
            "enchanted": false,
            "lore": ["a", null]
        }));

        assert_eq!(tree.get_str("id"), Some("minecraft:anvil"));
        assert_eq!(tree.get("count").and_then(|v| v.as_int()), Some(3));
        assert_eq!(tree.get("weight").and_then(|v| v.as_float()), Some(1.5));
        assert_eq!(tree.get("enchanted").and_then(|v| v.as_bool()), Some(false));
        let lore = tree.get("lore").and_then(|v| v.as_list()).unwrap();
        assert!(lore[1].is_null());
    }

    #[test]
    fn integral_json_numbers_stay_ints() {
        assert_eq!(from_json(json!(7)), DynamicTree::Int(7));
        assert_eq!(from_json(json!(7.0)), DynamicTree::Float(7.0));
    }

    #[test]
    fn encode_decode_preserves_nested_structure() {
        let codec = JsonCodec;
        let original = json!({"display": {"Name": "{\"translate\":\"x\"}"}, "n": [1, 2]});
        let tree = codec.decode(original.clone()).unwrap();
        assert_eq!(codec.encode(&tree).unwrap(), original);
    }

    #[test]
    fn nan_encode_is_a_codec_error() {
        let err = to_json(&DynamicTree::Float(f64::NAN)).unwrap_err();
        assert!(matches!(err, Error::Codec(_)));

        let nested = DynamicTree::map([("bad", DynamicTree::Float(f64::INFINITY))]);
        assert!(to_json(&nested).is_err());
    }
}
