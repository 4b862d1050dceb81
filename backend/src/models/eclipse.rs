use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single normalized eclipse event.
///
/// Records are built once by the loader and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EclipseRecord {
    /// Calendar date of the event (no time of day).
    pub date: NaiveDate,
    /// Lowercase primary category, e.g. `"total"` or `"partial"`.
    #[serde(rename = "type")]
    pub eclipse_type: String,
    /// Free-text description of where the eclipse is visible.
    pub regions: String,
    /// Duration in whole minutes, when the source provides one.
    pub duration: Option<i64>,
}

impl EclipseRecord {
    pub fn new(
        date: NaiveDate,
        eclipse_type: impl Into<String>,
        regions: impl Into<String>,
        duration: Option<i64>,
    ) -> Self {
        Self {
            date,
            eclipse_type: eclipse_type.into(),
            regions: regions.into(),
            duration,
        }
    }

    /// Whether the normalized type contains `filter` (case-insensitive).
    pub fn matches_type(&self, filter: &str) -> bool {
        self.eclipse_type.contains(&filter.to_lowercase())
    }
}

/// Eclipse families accepted by the `/eclipses/{type}` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EclipseKind {
    Solar,
    Lunar,
}

impl EclipseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EclipseKind::Solar => "solar",
            EclipseKind::Lunar => "lunar",
        }
    }
}

impl fmt::Display for EclipseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EclipseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "solar" => Ok(Self::Solar),
            "lunar" => Ok(Self::Lunar),
            _ => Err(format!("Unknown eclipse type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(eclipse_type: &str, duration: Option<i64>) -> EclipseRecord {
        EclipseRecord::new(
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            eclipse_type,
            "Americas, Europe",
            duration,
        )
    }

    #[test]
    fn test_record_serializes_type_and_null_duration() {
        let json = serde_json::to_value(record("total", None)).unwrap();
        assert_eq!(json["date"], "2025-03-14");
        assert_eq!(json["type"], "total");
        assert_eq!(json["regions"], "Americas, Europe");
        assert!(json["duration"].is_null());
        assert!(json.get("eclipse_type").is_none());
    }

    #[test]
    fn test_record_deserializes_from_api_shape() {
        let json = r#"{"date":"2099-12-31","type":"partial","regions":"Europe","duration":4}"#;
        let parsed: EclipseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2099, 12, 31).unwrap());
        assert_eq!(parsed.eclipse_type, "partial");
        assert_eq!(parsed.duration, Some(4));
    }

    #[test]
    fn test_matches_type_is_substring_and_case_insensitive() {
        let r = record("lunar eclipse", Some(3));
        assert!(r.matches_type("lunar"));
        assert!(r.matches_type("LUNAR"));
        assert!(r.matches_type("eclipse"));
        assert!(!r.matches_type("solar"));
    }

    #[test]
    fn test_eclipse_kind_from_str() {
        assert_eq!("solar".parse::<EclipseKind>().unwrap(), EclipseKind::Solar);
        assert_eq!("Lunar".parse::<EclipseKind>().unwrap(), EclipseKind::Lunar);
        assert_eq!("SOLAR".parse::<EclipseKind>().unwrap(), EclipseKind::Solar);
        assert!("solr".parse::<EclipseKind>().is_err());
        assert!("".parse::<EclipseKind>().is_err());
    }

    #[test]
    fn test_eclipse_kind_display() {
        assert_eq!(EclipseKind::Solar.to_string(), "solar");
        assert_eq!(EclipseKind::Lunar.as_str(), "lunar");
    }
}
