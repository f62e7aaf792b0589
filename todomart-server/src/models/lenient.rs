//! Lenient field deserializers for request parameters
//!
//! Query strings and form bodies carry every value as text, while JSON
//! bodies carry typed values. These accept either, and treat an empty
//! string the same as an absent field.

use serde::de::{Deserializer, Error};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// `Option<i64>` from a JSON number, a numeric string, `""` or null.
pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Int(n)) => Ok(Some(n)),
        Some(Scalar::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Scalar::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid integer '{s}'"))),
        Some(Scalar::Bool(b)) => Err(D::Error::custom(format!("expected an integer, got {b}"))),
    }
}

/// Required `i64`; null or `""` is an error.
pub fn req_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    opt_i64(deserializer)?.ok_or_else(|| D::Error::custom("expected an integer"))
}

/// `Option<bool>` from a JSON bool, `true`/`false`/`1`/`0` as text or number,
/// `""` or null.
pub fn opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Bool(b)) => Ok(Some(b)),
        Some(Scalar::Int(0)) => Ok(Some(false)),
        Some(Scalar::Int(1)) => Ok(Some(true)),
        Some(Scalar::Text(s)) => match s.trim() {
            "" => Ok(None),
            "true" | "1" => Ok(Some(true)),
            "false" | "0" => Ok(Some(false)),
            other => Err(D::Error::custom(format!("invalid boolean '{other}'"))),
        },
        Some(Scalar::Int(n)) => Err(D::Error::custom(format!("invalid boolean '{n}'"))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "super::opt_i64")]
        count: Option<i64>,
        #[serde(default, deserialize_with = "super::opt_bool")]
        done: Option<bool>,
    }

    #[derive(Debug, Deserialize)]
    struct Keyed {
        #[serde(deserialize_with = "super::req_i64")]
        id: i64,
    }

    fn fields(value: serde_json::Value) -> Result<Fields, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn typed_json_values() {
        let f = fields(json!({ "count": 3, "done": true })).unwrap();
        assert_eq!(f.count, Some(3));
        assert_eq!(f.done, Some(true));
    }

    #[test]
    fn text_values_from_forms() {
        let f = fields(json!({ "count": "42", "done": "false" })).unwrap();
        assert_eq!(f.count, Some(42));
        assert_eq!(f.done, Some(false));

        let f = fields(json!({ "done": "1" })).unwrap();
        assert_eq!(f.done, Some(true));
    }

    #[test]
    fn absent_null_and_empty_are_none() {
        let f = fields(json!({})).unwrap();
        assert_eq!((f.count, f.done), (None, None));

        let f = fields(json!({ "count": null, "done": null })).unwrap();
        assert_eq!((f.count, f.done), (None, None));

        let f = fields(json!({ "count": "", "done": "" })).unwrap();
        assert_eq!((f.count, f.done), (None, None));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(fields(json!({ "count": "abc" })).is_err());
        assert!(fields(json!({ "count": true })).is_err());
        assert!(fields(json!({ "done": "maybe" })).is_err());
        assert!(fields(json!({ "done": 7 })).is_err());
    }

    #[test]
    fn required_id_accepts_text_or_number() {
        let k: Keyed = serde_json::from_value(json!({ "id": "5" })).unwrap();
        assert_eq!(k.id, 5);
        let k: Keyed = serde_json::from_value(json!({ "id": 6 })).unwrap();
        assert_eq!(k.id, 6);

        assert!(serde_json::from_value::<Keyed>(json!({ "id": null })).is_err());
        assert!(serde_json::from_value::<Keyed>(json!({})).is_err());
    }
}
