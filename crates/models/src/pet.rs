use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Opaque grouping carried through the store unchanged.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A catalog record.
///
/// `id == 0` means "not assigned yet"; the store hands out the next identifier on insert.
/// `status` is free text: the documented values are listed in [`PetStatus`], but anything
/// else is stored and echoed as-is.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub photo_urls: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Pet {
    pub fn has_id(&self) -> bool {
        self.id != 0
    }

    /// Status parsed as one of the documented values; `None` when unset or free text.
    pub fn known_status(&self) -> Option<PetStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PetStatus {
    Available,
    Pending,
    Sold,
}

impl PetStatus {
    pub const ALL: [PetStatus; 3] = [PetStatus::Available, PetStatus::Pending, PetStatus::Sold];

    pub fn as_str(&self) -> &'static str {
        match self {
            PetStatus::Available => "available",
            PetStatus::Pending => "pending",
            PetStatus::Sold => "sold",
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PetStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ModelError::UnknownStatus(s.to_string()))
    }
}

/// Form-encoded partial update: only non-empty fields are applied.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PetForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id_deserializes_as_unset() {
        let pet: Pet = serde_json::from_str(r#"{"name":"Fido","status":"available"}"#).unwrap();
        assert_eq!(pet.id, 0);
        assert!(!pet.has_id());
        assert!(pet.tags.is_empty());
    }

    #[test]
    fn photo_urls_use_camel_case() {
        let pet = Pet {
            id: 3,
            name: Some("Fido".into()),
            photo_urls: vec!["http://img/1.png".into()],
            ..Pet::default()
        };
        let json = serde_json::to_value(&pet).unwrap();
        assert_eq!(json["photoUrls"][0], "http://img/1.png");
        assert_eq!(json["id"], 3);
        assert!(json.get("category").is_none());
    }

    #[test]
    fn unknown_status_text_is_kept_on_the_record() {
        let pet: Pet = serde_json::from_str(r#"{"id":4,"status":"adopted"}"#).unwrap();
        assert_eq!(pet.status.as_deref(), Some("adopted"));
        assert!(PetStatus::from_str("adopted").is_err());
        assert_eq!(pet.known_status(), None);
    }

    #[test]
    fn known_status_parses_documented_values() {
        let pet: Pet = serde_json::from_str(r#"{"status":"pending"}"#).unwrap();
        assert_eq!(pet.known_status(), Some(PetStatus::Pending));
        assert_eq!(Pet::default().known_status(), None);
    }

    #[test]
    fn status_parse_is_case_sensitive() {
        assert_eq!("sold".parse::<PetStatus>(), Ok(PetStatus::Sold));
        assert_eq!(
            "Sold".parse::<PetStatus>(),
            Err(ModelError::UnknownStatus("Sold".into()))
        );
    }
}
