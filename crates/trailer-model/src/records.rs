use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{TrailerStatus, TrailerType};

/// One logistics load as read from the load-records table.
///
/// Values are kept as source text; a null cell is `None`. Interpretation
/// (site prefix, date parsing, classification) happens during enrichment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadRecord {
    pub lane: Option<String>,
    pub trailer_id: Option<String>,
    pub equipment_type: Option<String>,
    pub scheduled_arrival: Option<String>,
    pub runner_type: Option<String>,
}

/// Maps an origin site code to its region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionMapping {
    pub origin: String,
    pub origin_region: String,
}

impl RegionMapping {
    pub fn new(origin: impl Into<String>, origin_region: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            origin_region: origin_region.into(),
        }
    }
}

/// A load with its derived reporting attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    /// First four characters of the lane, or empty when the lane is too short.
    pub site: String,
    /// Region of `site`; `None` when the site has no mapping.
    pub origin_region: Option<String>,
    /// Parsed scheduled arrival; `None` when the source value was unparseable.
    pub scheduled_date: Option<NaiveDate>,
    pub trailer_status: TrailerStatus,
    pub trailer_type: TrailerType,
    pub source: LoadRecord,
}
