use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of one detected difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeType {
    New,
    Removed,
    DateChanged,
    TitleChanged,
    CityChanged,
    /// Ids differ but no compared field does
    Unknown,
}

impl ChangeType {
    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::New => "new",
            ChangeType::Removed => "removed",
            ChangeType::DateChanged => "date-changed",
            ChangeType::TitleChanged => "title-changed",
            ChangeType::CityChanged => "city-changed",
            ChangeType::Unknown => "unknown",
        }
    }

    /// True for changes that belong in the ChangeLog rather than the headline result.
    pub fn is_field_change(&self) -> bool {
        !matches!(self, ChangeType::New | ChangeType::Removed)
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected difference between two runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventChange {
    pub event_id: String,
    pub change_type: ChangeType,
    #[serde(default)]
    pub old_value: String,
    #[serde(default)]
    pub new_value: String,
    pub detected_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_names() {
        let json = serde_json::to_string(&ChangeType::DateChanged).unwrap();
        assert_eq!(json, "\"date-changed\"");
        for ct in [
            ChangeType::New,
            ChangeType::Removed,
            ChangeType::TitleChanged,
            ChangeType::CityChanged,
            ChangeType::Unknown,
        ] {
            let json = serde_json::to_string(&ct).unwrap();
            assert_eq!(json, format!("\"{}\"", ct.as_str()));
        }
    }

    #[test]
    fn test_field_change_split() {
        assert!(!ChangeType::New.is_field_change());
        assert!(!ChangeType::Removed.is_field_change());
        assert!(ChangeType::DateChanged.is_field_change());
        assert!(ChangeType::Unknown.is_field_change());
    }
}
