//! Categorical partitions of enriched loads.
//!
//! Every enriched load carries exactly one [`TrailerStatus`] and exactly one
//! [`TrailerType`]. The rollups pivot on these enums, so the set of variants
//! is also the set of count columns each rollup row always has.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Equipment code of a standard 53-foot truck.
pub const FIFTY_THREE_FOOT_TRUCK: &str = "FIFTY_THREE_FOOT_TRUCK";
/// Equipment code of a 53-foot container.
pub const FIFTY_THREE_FOOT_CONTAINER: &str = "FIFTY_THREE_FOOT_CONTAINER";

/// Whether a trailer was attached to a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailerStatus {
    /// A non-blank trailer id is present.
    TrailerAttached,
    /// Trailer id is null, empty, or whitespace only.
    NotAttached,
}

impl TrailerStatus {
    pub const ALL: [TrailerStatus; 2] = [TrailerStatus::TrailerAttached, TrailerStatus::NotAttached];

    /// Classify a load by its trailer id.
    pub fn from_trailer_id(trailer_id: Option<&str>) -> Self {
        match trailer_id {
            Some(id) if !id.trim().is_empty() => TrailerStatus::TrailerAttached,
            _ => TrailerStatus::NotAttached,
        }
    }

    /// Returns the column label used in summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrailerStatus::TrailerAttached => "trailer_attached",
            TrailerStatus::NotAttached => "not_attached",
        }
    }
}

impl fmt::Display for TrailerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TrailerStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trailer_attached" => Ok(TrailerStatus::TrailerAttached),
            "not_attached" => Ok(TrailerStatus::NotAttached),
            _ => Err(ModelError::UnknownTrailerStatus(s.to_string())),
        }
    }
}

/// Equipment classification used by the VRID summary.
///
/// - **AZNG**: standard 53-foot truck
/// - **AZNU**: 53-foot container
/// - **OTHER**: anything else, including a missing equipment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrailerType {
    #[serde(rename = "AZNG")]
    Azng,
    #[serde(rename = "AZNU")]
    Aznu,
    #[serde(rename = "OTHER")]
    Other,
}

impl TrailerType {
    pub const ALL: [TrailerType; 3] = [TrailerType::Azng, TrailerType::Aznu, TrailerType::Other];

    /// Classify by exact equipment code match.
    pub fn from_equipment_type(equipment_type: Option<&str>) -> Self {
        match equipment_type {
            Some(FIFTY_THREE_FOOT_TRUCK) => TrailerType::Azng,
            Some(FIFTY_THREE_FOOT_CONTAINER) => TrailerType::Aznu,
            _ => TrailerType::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrailerType::Azng => "AZNG",
            TrailerType::Aznu => "AZNU",
            TrailerType::Other => "OTHER",
        }
    }

    /// Returns true for the two trailer types counted as VRIDs.
    pub fn counts_as_vrid(&self) -> bool {
        matches!(self, TrailerType::Azng | TrailerType::Aznu)
    }
}

impl fmt::Display for TrailerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TrailerType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AZNG" => Ok(TrailerType::Azng),
            "AZNU" => Ok(TrailerType::Aznu),
            "OTHER" => Ok(TrailerType::Other),
            _ => Err(ModelError::UnknownTrailerType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailer_status_blank_ids() {
        assert_eq!(TrailerStatus::from_trailer_id(None), TrailerStatus::NotAttached);
        assert_eq!(TrailerStatus::from_trailer_id(Some("")), TrailerStatus::NotAttached);
        assert_eq!(TrailerStatus::from_trailer_id(Some("  ")), TrailerStatus::NotAttached);
        assert_eq!(TrailerStatus::from_trailer_id(Some("\t")), TrailerStatus::NotAttached);
        assert_eq!(
            TrailerStatus::from_trailer_id(Some("T123")),
            TrailerStatus::TrailerAttached
        );
    }

    #[test]
    fn test_trailer_type_exact_match() {
        assert_eq!(
            TrailerType::from_equipment_type(Some("FIFTY_THREE_FOOT_TRUCK")),
            TrailerType::Azng
        );
        assert_eq!(
            TrailerType::from_equipment_type(Some("FIFTY_THREE_FOOT_CONTAINER")),
            TrailerType::Aznu
        );
        // Case and padding are not normalized.
        assert_eq!(
            TrailerType::from_equipment_type(Some("fifty_three_foot_truck")),
            TrailerType::Other
        );
        assert_eq!(
            TrailerType::from_equipment_type(Some(" FIFTY_THREE_FOOT_TRUCK")),
            TrailerType::Other
        );
        assert_eq!(TrailerType::from_equipment_type(None), TrailerType::Other);
    }

    #[test]
    fn test_labels_round_trip_through_from_str() {
        for status in TrailerStatus::ALL {
            assert_eq!(status.as_str().parse::<TrailerStatus>().unwrap(), status);
        }
        for kind in TrailerType::ALL {
            assert_eq!(kind.as_str().parse::<TrailerType>().unwrap(), kind);
        }
        assert_eq!("aznu".parse::<TrailerType>().unwrap(), TrailerType::Aznu);
        assert!("DRY_VAN".parse::<TrailerType>().is_err());
        assert!("attached".parse::<TrailerStatus>().is_err());
    }

    #[test]
    fn test_only_azng_and_aznu_count_as_vrids() {
        assert!(TrailerType::Azng.counts_as_vrid());
        assert!(TrailerType::Aznu.counts_as_vrid());
        assert!(!TrailerType::Other.counts_as_vrid());
    }
}
