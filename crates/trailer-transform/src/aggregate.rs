//! Grouped rollups over a filtered view.
//!
//! Both rollups group by `(scheduled_date, origin_region, site)` and always
//! materialize every category column, so a group with only attached loads
//! still reports `not_attached = 0`. Output is ordered by [`GroupKey`].

use std::collections::BTreeMap;

use tracing::{debug, info_span};
use trailer_model::{
    AttachmentRow, EnrichedRecord, GroupKey, SiteVridRow, TrailerStatus, TrailerType, VridRow,
};

#[derive(Default)]
struct StatusCounts {
    attached: u64,
    not_attached: u64,
}

#[derive(Default)]
struct TypeCounts {
    azng: u64,
    aznu: u64,
    other: u64,
}

fn group_key(record: &EnrichedRecord) -> Option<GroupKey> {
    let date = record.scheduled_date?;
    Some(GroupKey::new(
        date,
        record.origin_region.clone(),
        record.site.clone(),
    ))
}

/// Attachment-status rollup: one row per group with attached and
/// not-attached counts.
///
/// Records without a scheduled date have no group and are skipped.
pub fn attachment_rollup(records: &[&EnrichedRecord]) -> Vec<AttachmentRow> {
    let span = info_span!("aggregate", view = "attachment", records = records.len());
    let _guard = span.enter();

    let mut groups: BTreeMap<GroupKey, StatusCounts> = BTreeMap::new();
    for record in records {
        let Some(key) = group_key(record) else {
            continue;
        };
        let counts = groups.entry(key).or_default();
        match record.trailer_status {
            TrailerStatus::TrailerAttached => counts.attached += 1,
            TrailerStatus::NotAttached => counts.not_attached += 1,
        }
    }

    debug!(groups = groups.len(), "attachment rollup built");
    groups
        .into_iter()
        .map(|(key, counts)| AttachmentRow::from_counts(key, counts.attached, counts.not_attached))
        .collect()
}

/// Equipment-type rollup: one row per group with AZNG, AZNU, and OTHER
/// counts.
pub fn vrid_rollup(records: &[&EnrichedRecord]) -> Vec<VridRow> {
    let span = info_span!("aggregate", view = "equipment", records = records.len());
    let _guard = span.enter();

    let mut groups: BTreeMap<GroupKey, TypeCounts> = BTreeMap::new();
    for record in records {
        let Some(key) = group_key(record) else {
            continue;
        };
        let counts = groups.entry(key).or_default();
        match record.trailer_type {
            TrailerType::Azng => counts.azng += 1,
            TrailerType::Aznu => counts.aznu += 1,
            TrailerType::Other => counts.other += 1,
        }
    }

    debug!(groups = groups.len(), "equipment rollup built");
    groups
        .into_iter()
        .map(|(key, c)| VridRow::from_counts(key, c.azng, c.aznu, c.other))
        .collect()
}

/// AZNG and AZNU totals per site, summed across dates and regions.
///
/// Sorted by site code.
pub fn site_chart(rows: &[VridRow]) -> Vec<SiteVridRow> {
    let mut sites: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
    for row in rows {
        let totals = sites.entry(row.key.site.as_str()).or_default();
        totals.0 += row.azng;
        totals.1 += row.aznu;
    }
    sites
        .into_iter()
        .map(|(site, (azng, aznu))| SiteVridRow {
            site: site.to_string(),
            azng,
            aznu,
        })
        .collect()
}
