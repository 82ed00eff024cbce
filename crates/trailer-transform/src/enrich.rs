//! Enrichment of raw load records.
//!
//! The derivations run in a fixed order because later steps read columns
//! produced by earlier ones (the region lookup needs the site):
//!
//! 1. site from the lane prefix
//! 2. origin region via [`RegionLookup`]
//! 3. scope to `OTR` runner type
//! 4. trailer status from the trailer id
//! 5. scheduled date parsing
//! 6. trailer type from the equipment code
//!
//! Malformed values degrade (empty site, missing region or date, `OTHER`
//! equipment) instead of failing the batch.

use tracing::{debug, info_span, warn};
use trailer_model::{EnrichedRecord, LoadRecord, TrailerStatus, TrailerType};

use crate::datetime::parse_scheduled_date;
use crate::region::RegionLookup;

/// Characters of the lane that identify the site.
pub const SITE_PREFIX_LEN: usize = 4;

/// Runner type kept in the reporting scope.
pub const OVER_THE_ROAD: &str = "OTR";

/// Site code: the first four characters of `lane`.
///
/// A missing lane, or one shorter than four characters, yields an empty site
/// rather than a truncated code.
pub fn derive_site(lane: Option<&str>) -> String {
    let Some(lane) = lane else {
        return String::new();
    };
    let site: String = lane.chars().take(SITE_PREFIX_LEN).collect();
    if site.chars().count() < SITE_PREFIX_LEN {
        String::new()
    } else {
        site
    }
}

/// True only for the exact runner type `OTR`.
pub fn is_over_the_road(runner_type: Option<&str>) -> bool {
    runner_type == Some(OVER_THE_ROAD)
}

/// Row counts gathered while enriching, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentStats {
    pub input: usize,
    pub dropped_runner_type: usize,
    pub unparsed_dates: usize,
    pub unmapped_regions: usize,
    pub short_lanes: usize,
    pub other_equipment: usize,
}

impl EnrichmentStats {
    /// Records kept after the runner-type scope.
    pub fn retained(&self) -> usize {
        self.input - self.dropped_runner_type
    }
}

/// Output of [`enrich`].
#[derive(Debug, Clone, Default)]
pub struct Enrichment {
    pub records: Vec<EnrichedRecord>,
    pub stats: EnrichmentStats,
}

/// Enrich load records with derived attributes and drop non-OTR loads.
///
/// The input is not modified; a new relation is returned in input order.
pub fn enrich(records: &[LoadRecord], regions: &RegionLookup) -> Enrichment {
    let span = info_span!("enrich", records = records.len());
    let _guard = span.enter();

    let mut stats = EnrichmentStats {
        input: records.len(),
        ..EnrichmentStats::default()
    };
    let mut enriched = Vec::with_capacity(records.len());

    for record in records {
        let site = derive_site(record.lane.as_deref());
        let origin_region = regions.region_for(&site).map(str::to_string);

        if !is_over_the_road(record.runner_type.as_deref()) {
            stats.dropped_runner_type += 1;
            continue;
        }

        let trailer_status = TrailerStatus::from_trailer_id(record.trailer_id.as_deref());
        let scheduled_date = record
            .scheduled_arrival
            .as_deref()
            .and_then(parse_scheduled_date);
        let trailer_type = TrailerType::from_equipment_type(record.equipment_type.as_deref());

        if site.is_empty() {
            stats.short_lanes += 1;
        }
        if origin_region.is_none() {
            stats.unmapped_regions += 1;
        }
        if scheduled_date.is_none() {
            stats.unparsed_dates += 1;
        }
        if trailer_type == TrailerType::Other {
            stats.other_equipment += 1;
        }

        enriched.push(EnrichedRecord {
            site,
            origin_region,
            scheduled_date,
            trailer_status,
            trailer_type,
            source: record.clone(),
        });
    }

    debug!(
        input = stats.input,
        retained = stats.retained(),
        dropped_runner_type = stats.dropped_runner_type,
        "enriched load records"
    );
    if stats.unparsed_dates > 0 {
        warn!(
            count = stats.unparsed_dates,
            "scheduled arrival values could not be parsed; rows excluded from rollups"
        );
    }
    if stats.unmapped_regions > 0 {
        debug!(count = stats.unmapped_regions, "loads without a region mapping");
    }

    Enrichment {
        records: enriched,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use trailer_model::RegionMapping;

    fn load(lane: &str, trailer: Option<&str>, equipment: &str, date: &str, runner: &str) -> LoadRecord {
        LoadRecord {
            lane: Some(lane.to_string()),
            trailer_id: trailer.map(str::to_string),
            equipment_type: Some(equipment.to_string()),
            scheduled_arrival: Some(date.to_string()),
            runner_type: Some(runner.to_string()),
        }
    }

    #[test]
    fn site_is_four_character_prefix() {
        assert_eq!(derive_site(Some("ABCD123")), "ABCD");
        assert_eq!(derive_site(Some("ABCD")), "ABCD");
        assert_eq!(derive_site(Some("ABC")), "");
        assert_eq!(derive_site(Some("")), "");
        assert_eq!(derive_site(None), "");
    }

    #[test]
    fn site_counts_characters_not_bytes() {
        assert_eq!(derive_site(Some("ÄBCD-X")), "ÄBCD");
        assert_eq!(derive_site(Some("ÄBC")), "");
    }

    #[test]
    fn runner_type_match_is_exact() {
        assert!(is_over_the_road(Some("OTR")));
        assert!(!is_over_the_road(Some("otr")));
        assert!(!is_over_the_road(Some("DEDICATED")));
        assert!(!is_over_the_road(None));
    }

    #[test]
    fn enrich_derives_all_attributes() {
        let lookup = RegionLookup::from_mappings(&[RegionMapping::new("ABCD", "West")]);
        let records = vec![
            load("ABCD123", Some("T1"), "FIFTY_THREE_FOOT_TRUCK", "2024-01-01", "OTR"),
            load("ABCD124", Some(""), "FIFTY_THREE_FOOT_CONTAINER", "2024-01-01", "OTR"),
        ];

        let result = enrich(&records, &lookup);

        assert_eq!(result.records.len(), 2);
        let first = &result.records[0];
        assert_eq!(first.site, "ABCD");
        assert_eq!(first.origin_region.as_deref(), Some("West"));
        assert_eq!(first.scheduled_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(first.trailer_status, TrailerStatus::TrailerAttached);
        assert_eq!(first.trailer_type, TrailerType::Azng);
        let second = &result.records[1];
        assert_eq!(second.trailer_status, TrailerStatus::NotAttached);
        assert_eq!(second.trailer_type, TrailerType::Aznu);
    }

    #[test]
    fn enrich_drops_non_otr_and_keeps_degraded_rows() {
        let lookup = RegionLookup::from_mappings(&[RegionMapping::new("ABCD", "West")]);
        let records = vec![
            load("ABCD123", Some("T1"), "FIFTY_THREE_FOOT_TRUCK", "2024-01-01", "DEDICATED"),
            load("ZZZZ999", Some("  "), "DRY_VAN", "soon", "OTR"),
            load("AB", None, "FIFTY_THREE_FOOT_TRUCK", "2024-01-02", "OTR"),
        ];

        let result = enrich(&records, &lookup);

        assert_eq!(result.records.len(), 2);
        let unmapped = &result.records[0];
        assert_eq!(unmapped.site, "ZZZZ");
        assert_eq!(unmapped.origin_region, None);
        assert_eq!(unmapped.scheduled_date, None);
        assert_eq!(unmapped.trailer_status, TrailerStatus::NotAttached);
        assert_eq!(unmapped.trailer_type, TrailerType::Other);
        assert_eq!(result.records[1].site, "");

        assert_eq!(
            result.stats,
            EnrichmentStats {
                input: 3,
                dropped_runner_type: 1,
                unparsed_dates: 1,
                unmapped_regions: 2,
                short_lanes: 1,
                other_equipment: 1,
            }
        );
        assert_eq!(result.stats.retained(), 2);
    }

    #[test]
    fn enrich_leaves_input_untouched() {
        let lookup = RegionLookup::default();
        let records = vec![load("ABCD1", None, "X", "2024-01-01", "OTR")];
        let before = records.clone();

        let result = enrich(&records, &lookup);

        assert_eq!(records, before);
        assert_eq!(result.records[0].source, before[0]);
    }
}
