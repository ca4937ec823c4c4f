//! Lenient deserializers for model-supplied argument values.
//!
//! Models are loose with JSON types: a year arrives as `2023` or `"2023"`, a
//! product id as `"PD-1405"` or occasionally a bare number. These helpers are
//! meant for `#[serde(default, deserialize_with = "...")]` on optional request
//! fields. `null` reads as unspecified, as does a missing key (via
//! `#[serde(default)]`).

use serde::Deserialize;
use serde::de::{Deserializer, Error};
use serde_json::Value;

/// Read an optional string, accepting strings, numbers, and booleans.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string, got {}",
            kind(&other)
        ))),
    }
}

/// Read an optional year, accepting integers, whole-number floats such as
/// `2023.0`, and strings holding either.
///
/// A blank string reads as unspecified.
pub fn opt_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => i32::try_from(i)
                .map(Some)
                .map_err(|_| D::Error::custom(format!("year {n} is out of range"))),
            None => whole_year(n.as_f64().unwrap_or(f64::NAN))
                .map(Some)
                .map_err(|why| D::Error::custom(format!("year {n} {why}"))),
        },
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            match trimmed.parse::<i32>() {
                Ok(year) => Ok(Some(year)),
                Err(_) => match trimmed.parse::<f64>() {
                    Ok(f) => whole_year(f)
                        .map(Some)
                        .map_err(|why| D::Error::custom(format!("year '{s}' {why}"))),
                    Err(_) => Err(D::Error::custom(format!("year '{s}' is not a number"))),
                },
            }
        }
        Some(other) => Err(D::Error::custom(format!(
            "expected a year, got {}",
            kind(&other)
        ))),
    }
}

/// Narrow a float to a year, or say why it is not one.
fn whole_year(f: f64) -> Result<i32, &'static str> {
    if !f.is_finite() || f.fract() != 0.0 {
        return Err("is not a whole number");
    }
    if f < f64::from(i32::MIN) || f > f64::from(i32::MAX) {
        return Err("is out of range");
    }
    Ok(f as i32)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize, Debug, Default, PartialEq)]
    struct Args {
        #[serde(default, deserialize_with = "opt_string")]
        name: Option<String>,
        #[serde(default, deserialize_with = "opt_year")]
        year: Option<i32>,
    }

    fn parse(v: Value) -> Result<Args, serde_json::Error> {
        serde_json::from_value(v)
    }

    #[test]
    fn missing_and_null_are_unspecified() {
        assert_eq!(parse(json!({})).unwrap(), Args::default());
        assert_eq!(
            parse(json!({"name": null, "year": null})).unwrap(),
            Args::default()
        );
    }

    #[test]
    fn string_accepts_scalars() {
        assert_eq!(parse(json!({"name": "PD-1"})).unwrap().name.as_deref(), Some("PD-1"));
        assert_eq!(parse(json!({"name": 1405})).unwrap().name.as_deref(), Some("1405"));
        assert_eq!(parse(json!({"name": true})).unwrap().name.as_deref(), Some("true"));
    }

    #[test]
    fn string_rejects_containers() {
        let err = parse(json!({"name": ["a"]})).unwrap_err();
        assert!(err.to_string().contains("expected a string, got an array"));
    }

    #[test]
    fn year_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse(json!({"year": 2023})).unwrap().year, Some(2023));
        assert_eq!(parse(json!({"year": "2022"})).unwrap().year, Some(2022));
        assert_eq!(parse(json!({"year": " 2021 "})).unwrap().year, Some(2021));
        assert_eq!(parse(json!({"year": ""})).unwrap().year, None);
    }

    #[test]
    fn year_rejects_garbage() {
        assert!(parse(json!({"year": "last year"})).is_err());
        assert!(parse(json!({"year": 2023.5})).is_err());
        assert!(parse(json!({"year": {"y": 1}})).is_err());
    }

    #[test]
    fn year_accepts_whole_floats() {
        assert_eq!(parse(json!({"year": 2023.0})).unwrap().year, Some(2023));
        assert_eq!(parse(json!({"year": "2023.0"})).unwrap().year, Some(2023));

        let err = parse(json!({"year": 2023.5})).unwrap_err().to_string();
        assert!(err.contains("not a whole number"), "{err}");
        let err = parse(json!({"year": "2023.5"})).unwrap_err().to_string();
        assert!(err.contains("not a whole number"), "{err}");
        let err = parse(json!({"year": 1e12})).unwrap_err().to_string();
        assert!(err.contains("out of range"), "{err}");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let args = parse(json!({"name": "x", "colour": "red"})).unwrap();
        assert_eq!(args.name.as_deref(), Some("x"));
    }
}
