use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ResolvedProperty {
    pub address         : String,
    pub lat             : f64,
    pub lng             : f64,
    pub street_view_url : Option<String>,
}

/// Result of geocoding an uploaded address list.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct GeocodingResult {
    /// Number of resolved properties.
    pub count      : usize,
    /// Number of rows without an address.
    pub skipped    : usize,
    /// Number of rows that could not be resolved.
    pub failed     : usize,
    pub properties : Vec<ResolvedProperty>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KeyStatusLevel {
    Success,
    Warning,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ApiKeyStatus {
    pub status: KeyStatusLevel,
    pub message: String,
    pub key_exists: bool,
}

impl ApiKeyStatus {
    pub fn new(key_exists: bool) -> Self {
        if key_exists {
            Self {
                status: KeyStatusLevel::Success,
                message: "Google API key is configured".to_string(),
                key_exists,
            }
        } else {
            Self {
                status: KeyStatusLevel::Warning,
                message: "Google API key is not configured".to_string(),
                key_exists,
            }
        }
    }
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Error {
    /// HTTP status code
    pub http_status: u16,
    /// Error message
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_key_status() {
        let json = serde_json::to_value(ApiKeyStatus::new(false)).unwrap();
        assert_eq!(
            serde_json::json!({
                "status": "warning",
                "message": "Google API key is not configured",
                "key_exists": false
            }),
            json
        );
        let json = serde_json::to_value(ApiKeyStatus::new(true)).unwrap();
        assert_eq!("success", json["status"]);
        assert_eq!(true, json["key_exists"]);
    }

    #[test]
    fn serialize_property_without_url() {
        let p = ResolvedProperty {
            address: "Main Street 1".into(),
            lat: 1.5,
            lng: -2.5,
            street_view_url: None,
        };
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(
            r#"{"address":"Main Street 1","lat":1.5,"lng":-2.5,"street_view_url":null}"#,
            json
        );
    }
}
