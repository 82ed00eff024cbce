//! Rollup rows and KPI blocks.
//!
//! Rollup rows are built through `from_counts` constructors so that the
//! derived totals always agree with the counts they are derived from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Grouping key shared by both rollups.
///
/// Ordering is date, then region (unmapped first), then site.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    pub scheduled_date: NaiveDate,
    pub origin_region: Option<String>,
    pub site: String,
}

impl GroupKey {
    pub fn new(scheduled_date: NaiveDate, origin_region: Option<String>, site: String) -> Self {
        Self {
            scheduled_date,
            origin_region,
            site,
        }
    }
}

/// `numerator / denominator`, or `0.0` when the denominator is zero.
pub fn ratio_or_zero(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Attachment-status rollup row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentRow {
    #[serde(flatten)]
    pub key: GroupKey,
    pub trailer_attached: u64,
    pub not_attached: u64,
    pub total_loads: u64,
    /// Fraction in `[0, 1]`; `0.0` for an empty group.
    pub not_attached_pct: f64,
}

impl AttachmentRow {
    pub fn from_counts(key: GroupKey, trailer_attached: u64, not_attached: u64) -> Self {
        let total_loads = trailer_attached + not_attached;
        Self {
            key,
            trailer_attached,
            not_attached,
            total_loads,
            not_attached_pct: ratio_or_zero(not_attached, total_loads),
        }
    }
}

/// Equipment-type / VRID rollup row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VridRow {
    #[serde(flatten)]
    pub key: GroupKey,
    #[serde(rename = "AZNG")]
    pub azng: u64,
    #[serde(rename = "AZNU")]
    pub aznu: u64,
    #[serde(rename = "OTHER")]
    pub other: u64,
    /// AZNG + AZNU; OTHER equipment is not a VRID.
    pub total_vrids: u64,
}

impl VridRow {
    pub fn from_counts(key: GroupKey, azng: u64, aznu: u64, other: u64) -> Self {
        Self {
            key,
            azng,
            aznu,
            other,
            total_vrids: azng + aznu,
        }
    }
}

/// AZNG / AZNU totals for one site, across dates and regions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteVridRow {
    pub site: String,
    #[serde(rename = "AZNG")]
    pub azng: u64,
    #[serde(rename = "AZNU")]
    pub aznu: u64,
}

/// Headline figures of the attachment view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentKpis {
    pub total_loads: u64,
    pub total_not_attached: u64,
    /// Percentage in `[0, 100]`; `0.0` when there are no loads.
    pub risk_pct: f64,
}

impl AttachmentKpis {
    pub fn from_totals(total_loads: u64, total_not_attached: u64) -> Self {
        Self {
            total_loads,
            total_not_attached,
            risk_pct: ratio_or_zero(total_not_attached, total_loads) * 100.0,
        }
    }

    /// Risk percentage with two decimals, e.g. `50.00%`.
    pub fn risk_pct_display(&self) -> String {
        format!("{:.2}%", self.risk_pct)
    }
}

/// Headline figures of the equipment view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentKpis {
    pub total_vrids: u64,
    pub total_azng: u64,
    pub total_aznu: u64,
}
