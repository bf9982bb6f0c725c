//! Resident domain model.
//!
//! # Responsibility
//! - Define the canonical roster record and its access classification.
//! - Provide the payload shapes used by store create/update paths.
//!
//! # Invariants
//! - `id` is stable and never reused for another record.
//! - `access_type` is always one of the three closed variants.
//! - Every field is required; there are no partially-populated records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every roster record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ResidentId = Uuid;

/// Access classification for people tracked at the estate gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessType {
    /// Permanent occupant of a house on the estate.
    Resident,
    /// Short-term guest admitted by a resident.
    Visitor,
    /// Estate employee (security, maintenance, management).
    Staff,
}

impl AccessType {
    /// All variants, in the order form collaborators render them.
    pub const ALL: [AccessType; 3] = [Self::Resident, Self::Visitor, Self::Staff];

    /// Canonical display/wire name of the variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Resident => "Resident",
            Self::Visitor => "Visitor",
            Self::Staff => "Staff",
        }
    }

    /// Parses a canonical name back into the closed enum.
    ///
    /// Returns `None` for anything outside the three variants; free text is
    /// never accepted.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Resident" => Some(Self::Resident),
            "Visitor" => Some(Self::Visitor),
            "Staff" => Some(Self::Staff),
            _ => None,
        }
    }
}

impl Display for AccessType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical roster record.
///
/// Field names serialize in camelCase to match the external roster schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    /// Assigned by the store on create; immutable thereafter.
    pub id: ResidentId,
    /// Non-empty display name.
    pub name: String,
    /// Non-empty free-form house label, e.g. `A-101`.
    pub house_number: String,
    pub access_type: AccessType,
    /// Serialized as ISO-8601; compared by instant, never by string.
    pub last_visit: DateTime<Utc>,
}

/// Create payload; the store assigns `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResident {
    pub name: String,
    pub house_number: String,
    pub access_type: AccessType,
    pub last_visit: DateTime<Utc>,
}

/// Partial update payload.
///
/// Only `Some` fields are merged into the stored record; `id` is excluded
/// so it can never be overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidentPatch {
    pub name: Option<String>,
    pub house_number: Option<String>,
    pub access_type: Option<AccessType>,
    pub last_visit: Option<DateTime<Utc>>,
}

impl ResidentPatch {
    /// Returns whether the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.house_number.is_none()
            && self.access_type.is_none()
            && self.last_visit.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{AccessType, Resident, ResidentPatch};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    #[test]
    fn access_type_parse_roundtrips_canonical_names() {
        for variant in AccessType::ALL {
            assert_eq!(AccessType::parse(variant.as_str()), Some(variant));
        }
        assert_eq!(AccessType::parse("Contractor"), None);
        assert_eq!(AccessType::parse("resident"), None);
    }

    #[test]
    fn resident_serializes_with_external_schema_names() {
        let resident = Resident {
            id: Uuid::new_v4(),
            name: "Adebayo Fatai".to_string(),
            house_number: "A-101".to_string(),
            access_type: AccessType::Resident,
            last_visit: Utc.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap(),
        };

        let json = serde_json::to_value(&resident).unwrap();
        assert_eq!(json["houseNumber"], "A-101");
        assert_eq!(json["accessType"], "Resident");
        assert_eq!(json["lastVisit"], "2025-01-15T14:30:00Z");
    }

    #[test]
    fn default_patch_is_empty() {
        assert!(ResidentPatch::default().is_empty());
        let patch = ResidentPatch {
            name: Some("X".to_string()),
            ..ResidentPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
