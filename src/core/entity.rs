//! Entity trait - common interface for all backend records

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};

/// Opaque, server-assigned record identifier
///
/// The backend emits numeric IDs for most tables but some endpoints return
/// them as strings; both are accepted and kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the ID can be spliced into a URL path unchanged
    pub fn is_path_safe(&self) -> bool {
        is_path_segment(&self.0)
    }
}

/// Whether `value` stands as exactly one URL path segment as-is
///
/// Rejects separators, query/fragment/escape markers, whitespace and the
/// `.`/`..` segments, any of which would retarget the request.
pub fn is_path_segment(value: &str) -> bool {
    !value.is_empty()
        && value != "."
        && value != ".."
        && !value
            .chars()
            .any(|c| matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace() || c.is_control())
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl std::str::FromStr for RecordId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = RecordId::new(s);
        if id.is_empty() {
            Err("record ID cannot be empty".to_string())
        } else if !id.is_path_safe() {
            Err(format!("invalid record ID {:?}", id.as_str()))
        } else {
            Ok(id)
        }
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => RecordId(n.to_string()),
            Raw::Float(f) => RecordId(f.to_string()),
            Raw::Text(s) => RecordId::new(s),
        })
    }
}

/// A loosely typed scalar field (status codes, version SKUs)
///
/// Kept as display text whether the server sends a number, bool or string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scalar(String);

impl Scalar {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bool(bool),
            Int(i64),
            Float(f64),
            Text(String),
        }

        Ok(Scalar(match Raw::deserialize(deserializer)? {
            Raw::Bool(b) => b.to_string(),
            Raw::Int(n) => n.to_string(),
            Raw::Float(f) => f.to_string(),
            Raw::Text(s) => s,
        }))
    }
}

/// Common trait for all records served by the backend
pub trait Entity:
    std::fmt::Debug + Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
    /// Singular display name (e.g., "product")
    const NAME: &'static str;

    /// Plural display name (e.g., "products")
    const NAME_PLURAL: &'static str;

    /// Column headers for list output, in display order
    const COLUMNS: &'static [&'static str];

    /// Get the record's identifier
    fn id(&self) -> &RecordId;

    /// Human label used in confirmations and messages
    fn label(&self) -> String;

    /// Cell values matching [`Entity::COLUMNS`]
    fn cells(&self) -> Vec<String>;
}

/// Render an optional nested value the way list tables do: blank when absent
pub fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_accepts_numbers_and_strings() {
        let ids: Vec<RecordId> = serde_json::from_str(r#"[7, "42", " abc "]"#).unwrap();
        assert_eq!(ids[0].as_str(), "7");
        assert_eq!(ids[1].as_str(), "42");
        assert_eq!(ids[2].as_str(), "abc");
    }

    #[test]
    fn test_record_id_serializes_as_string() {
        let json = serde_json::to_string(&RecordId::from(12u64)).unwrap();
        assert_eq!(json, "\"12\"");
    }

    #[test]
    fn test_record_id_parse_rejects_blank() {
        assert!("  ".parse::<RecordId>().is_err());
        assert_eq!("9".parse::<RecordId>().unwrap().as_str(), "9");
    }

    #[test]
    fn test_record_id_parse_rejects_path_tricks() {
        for bad in ["../x", "3/../../users", "..", "1?x=2", "4#top", "5%2F6", "a b"] {
            assert!(bad.parse::<RecordId>().is_err(), "{} should be rejected", bad);
        }
        assert!(!RecordId::new("a\\b").is_path_safe());
        assert!(RecordId::new("PO-2024.01").is_path_safe());
    }

    #[test]
    fn test_scalar_accepts_any_scalar() {
        let values: Vec<Scalar> = serde_json::from_str(r#"[1, true, "PENDING"]"#).unwrap();
        assert_eq!(values[0].as_str(), "1");
        assert_eq!(values[1].as_str(), "true");
        assert_eq!(values[2].to_string(), "PENDING");
    }

    #[test]
    fn test_cell_blank_when_absent() {
        assert_eq!(cell::<&str>(None), "");
        assert_eq!(cell(Some(3)), "3");
    }
}
