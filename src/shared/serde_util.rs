//! Custom serde helpers for backend wire formats.

/// Deserializes a field the backend sometimes sends as a JSON number instead
/// of a string (`confidence`, `pct_change`) into `String`. `null` becomes `""`.
pub mod string_or_number {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Float(f64),
        Null(()),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Str(s) => s,
            Raw::Int(i) => i.to_string(),
            Raw::Float(f) => f.to_string(),
            Raw::Null(()) => String::new(),
        })
    }
}

/// Deserializes an optional date string where the backend uses `""` or `null`
/// for "not set".
pub mod empty_string_as_none {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.filter(|s| !s.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(with = "super::string_or_number")]
        value: String,
        #[serde(default, with = "super::empty_string_as_none")]
        date: Option<String>,
    }

    #[test]
    fn test_string_or_number_accepts_both() {
        let p: Probe = serde_json::from_str(r#"{"value": "0.82"}"#).unwrap();
        assert_eq!(p.value, "0.82");
        let p: Probe = serde_json::from_str(r#"{"value": 0.5}"#).unwrap();
        assert_eq!(p.value, "0.5");
        let p: Probe = serde_json::from_str(r#"{"value": 3}"#).unwrap();
        assert_eq!(p.value, "3");
        let p: Probe = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(p.value, "");
    }

    #[test]
    fn test_empty_string_as_none() {
        let p: Probe = serde_json::from_str(r#"{"value": "x", "date": ""}"#).unwrap();
        assert!(p.date.is_none());
        let p: Probe = serde_json::from_str(r#"{"value": "x", "date": null}"#).unwrap();
        assert!(p.date.is_none());
        let p: Probe = serde_json::from_str(r#"{"value": "x"}"#).unwrap();
        assert!(p.date.is_none());
        let p: Probe = serde_json::from_str(r#"{"value": "x", "date": "2024-01-08"}"#).unwrap();
        assert_eq!(p.date.as_deref(), Some("2024-01-08"));
    }
}
