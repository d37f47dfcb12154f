//! Wire encodings for the transfer representation
//!
//! Integers and booleans travel as JSON strings (`"id": "7"`,
//! `"checked": "true"`). Use these with `#[serde(with = "...")]`.

use serde::{Deserialize, Deserializer, Serializer};

/// `i64` encoded as a JSON string.
pub mod string_i64 {
    use super::*;

    pub fn serialize<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.trim().parse().map_err(serde::de::Error::custom)
    }
}

/// Optional `i64` encoded as a JSON string; `null` maps to `None`.
pub mod string_i64_opt {
    use super::*;

    pub fn serialize<S>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_some(&v.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt {
            Some(s) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// `bool` encoded as a JSON string.
pub mod string_bool {
    use super::*;

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "invalid boolean string '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Probe {
        #[serde(with = "super::string_i64")]
        id: i64,
        #[serde(with = "super::string_bool")]
        flag: bool,
        #[serde(default, with = "super::string_i64_opt")]
        parent: Option<i64>,
    }

    #[test]
    fn encodes_numbers_and_bools_as_strings() {
        let json = serde_json::to_value(Probe {
            id: 42,
            flag: true,
            parent: None,
        })
        .unwrap();
        assert_eq!(json["id"], "42");
        assert_eq!(json["flag"], "true");
        assert!(json["parent"].is_null());
    }

    #[test]
    fn rejects_native_numbers() {
        let err = serde_json::from_str::<Probe>(r#"{"id": 42, "flag": "true"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_non_numeric_id() {
        let err = serde_json::from_str::<Probe>(r#"{"id": "abc", "flag": "false"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn missing_optional_defaults_to_none() {
        let probe: Probe = serde_json::from_str(r#"{"id": "3", "flag": "false"}"#).unwrap();
        assert_eq!(probe.parent, None);
        assert!(!probe.flag);
    }
}
