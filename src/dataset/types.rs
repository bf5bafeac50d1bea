//! Dataset record types.

use serde::{Deserialize, Serialize};

/// A single zip-code record parsed from the source CSV.
///
/// Fields may be empty strings when the source data is absent.
/// Empty fields are omitted from the JSON encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zip {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
}

impl Zip {
    pub fn new(
        code: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            city: city.into(),
            state: state.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let zip = Zip::new("00210", "Portsmouth", "NH");
        let json = serde_json::to_string(&zip).unwrap();
        assert_eq!(json, r#"{"code":"00210","city":"Portsmouth","state":"NH"}"#);

        let back: Zip = serde_json::from_str(&json).unwrap();
        assert_eq!(back, zip);
    }

    #[test]
    fn test_empty_fields_omitted() {
        let zip = Zip::new("00210", "Portsmouth", "");
        let json = serde_json::to_string(&zip).unwrap();
        assert_eq!(json, r#"{"code":"00210","city":"Portsmouth"}"#);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let zip: Zip = serde_json::from_str(r#"{"city":"Portsmouth"}"#).unwrap();
        assert_eq!(zip.code, "");
        assert_eq!(zip.city, "Portsmouth");
        assert_eq!(zip.state, "");
    }
}
