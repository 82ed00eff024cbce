//! End-to-end and property tests over the full transform pipeline.

use chrono::NaiveDate;
use proptest::prelude::*;
use trailer_model::{
    DateRange, EnrichedRecord, LoadRecord, RegionMapping, RegionSet, ReportFilter, TrailerStatus,
};
use trailer_transform::{
    RegionLookup, attachment_kpis, attachment_rollup, date_bounds, enrich, equipment_kpis,
    filter_records, site_chart, vrid_rollup,
};

fn load(lane: &str, trailer: &str, equipment: &str, date: &str, runner: &str) -> LoadRecord {
    LoadRecord {
        lane: Some(lane.to_string()),
        trailer_id: Some(trailer.to_string()),
        equipment_type: Some(equipment.to_string()),
        scheduled_arrival: Some(date.to_string()),
        runner_type: Some(runner.to_string()),
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn scenario_records() -> Vec<LoadRecord> {
    vec![
        load("ABCD123", "T1", "FIFTY_THREE_FOOT_TRUCK", "2024-01-01", "OTR"),
        load("ABCD124", "", "FIFTY_THREE_FOOT_CONTAINER", "2024-01-01", "OTR"),
    ]
}

#[test]
fn two_load_scenario() {
    let lookup = RegionLookup::from_mappings(&[RegionMapping::new("ABCD", "West")]);
    let enriched = enrich(&scenario_records(), &lookup).records;
    let filter = ReportFilter::new(DateRange::single_day(day(2024, 1, 1)), RegionSet::all());
    let filtered = filter_records(&enriched, &filter);

    let attachment = attachment_rollup(&filtered);
    assert_eq!(attachment.len(), 1);
    let row = &attachment[0];
    assert_eq!(row.key.scheduled_date, day(2024, 1, 1));
    assert_eq!(row.key.origin_region.as_deref(), Some("West"));
    assert_eq!(row.key.site, "ABCD");
    assert_eq!(row.trailer_attached, 1);
    assert_eq!(row.not_attached, 1);
    assert_eq!(row.total_loads, 2);
    assert!((row.not_attached_pct - 0.5).abs() < f64::EPSILON);

    let vrid = vrid_rollup(&filtered);
    assert_eq!(vrid.len(), 1);
    assert_eq!((vrid[0].azng, vrid[0].aznu, vrid[0].other), (1, 1, 0));
    assert_eq!(vrid[0].total_vrids, 2);

    let kpis = attachment_kpis(&attachment);
    assert_eq!(kpis.total_loads, 2);
    assert_eq!(kpis.total_not_attached, 1);
    assert_eq!(kpis.risk_pct_display(), "50.00%");

    let equipment = equipment_kpis(&vrid);
    assert_eq!(equipment.total_vrids, 2);
    assert_eq!(equipment.total_azng, 1);
    assert_eq!(equipment.total_aznu, 1);

    let chart = site_chart(&vrid);
    assert_eq!(chart.len(), 1);
    assert_eq!((chart[0].azng, chart[0].aznu), (1, 1));
}

#[test]
fn dedicated_runner_contributes_nothing() {
    let lookup = RegionLookup::from_mappings(&[RegionMapping::new("ABCD", "West")]);
    let mut records = scenario_records();
    records.push(load(
        "ABCD125",
        "T2",
        "FIFTY_THREE_FOOT_TRUCK",
        "2024-01-01",
        "DEDICATED",
    ));

    let enriched = enrich(&records, &lookup).records;
    let filter = ReportFilter::new(DateRange::single_day(day(2024, 1, 1)), RegionSet::all());
    let filtered = filter_records(&enriched, &filter);

    assert_eq!(enriched.len(), 2);
    let kpis = attachment_kpis(&attachment_rollup(&filtered));
    assert_eq!(kpis.total_loads, 2);
    assert_eq!(equipment_kpis(&vrid_rollup(&filtered)).total_azng, 1);
}

#[test]
fn region_filter_excludes_unmapped_sites() {
    let lookup = RegionLookup::from_mappings(&[RegionMapping::new("ABCD", "West")]);
    let mut records = scenario_records();
    records.push(load("ZZZZ001", "T9", "FIFTY_THREE_FOOT_TRUCK", "2024-01-01", "OTR"));
    let enriched = enrich(&records, &lookup).records;
    let range = DateRange::single_day(day(2024, 1, 1));

    let unfiltered = filter_records(&enriched, &ReportFilter::new(range, RegionSet::all()));
    assert_eq!(attachment_kpis(&attachment_rollup(&unfiltered)).total_loads, 3);

    let west = filter_records(
        &enriched,
        &ReportFilter::new(range, ["West"].into_iter().collect()),
    );
    assert_eq!(attachment_kpis(&attachment_rollup(&west)).total_loads, 2);
}

#[test]
fn whitespace_trailer_id_is_not_attached() {
    let lookup = RegionLookup::default();
    let records = vec![
        load("ABCD1", "", "X", "2024-01-01", "OTR"),
        load("ABCD1", "  ", "X", "2024-01-01", "OTR"),
        load("ABCD1", "T123", "X", "2024-01-01", "OTR"),
    ];
    let statuses: Vec<TrailerStatus> = enrich(&records, &lookup)
        .records
        .iter()
        .map(|r| r.trailer_status)
        .collect();
    assert_eq!(
        statuses,
        vec![
            TrailerStatus::NotAttached,
            TrailerStatus::NotAttached,
            TrailerStatus::TrailerAttached,
        ]
    );
}

fn arb_load() -> impl Strategy<Value = LoadRecord> {
    (
        prop::sample::select(vec!["ABCD1", "ABCE22", "EFGH", "XY", "ZZZZ9"]),
        prop::sample::select(vec!["", " ", "T1", "TR-9"]),
        prop::sample::select(vec![
            "FIFTY_THREE_FOOT_TRUCK",
            "FIFTY_THREE_FOOT_CONTAINER",
            "DRY_VAN",
        ]),
        1u32..=28,
        prop::sample::select(vec!["OTR", "OTR", "DEDICATED"]),
    )
        .prop_map(|(lane, trailer, equipment, d, runner)| {
            load(lane, trailer, equipment, &format!("2024-02-{d:02}"), runner)
        })
}

fn lookup() -> RegionLookup {
    RegionLookup::from_mappings(&[
        RegionMapping::new("ABCD", "West"),
        RegionMapping::new("ABCE", "East"),
        RegionMapping::new("EFGH", "West"),
    ])
}

proptest! {
    #[test]
    fn rollup_totals_match_counts(records in prop::collection::vec(arb_load(), 0..60)) {
        let enriched = enrich(&records, &lookup()).records;
        let view: Vec<&EnrichedRecord> = enriched.iter().collect();

        let attachment = attachment_rollup(&view);
        for row in &attachment {
            prop_assert_eq!(row.total_loads, row.trailer_attached + row.not_attached);
            prop_assert!((0.0..=1.0).contains(&row.not_attached_pct));
        }
        let vrid = vrid_rollup(&view);
        for row in &vrid {
            prop_assert_eq!(row.total_vrids, row.azng + row.aznu);
        }

        let kpis = attachment_kpis(&attachment);
        prop_assert_eq!(kpis.total_loads as usize, enriched.len());
        prop_assert!((0.0..=100.0).contains(&kpis.risk_pct));
    }

    #[test]
    fn group_keys_are_unique(records in prop::collection::vec(arb_load(), 0..60)) {
        let enriched = enrich(&records, &lookup()).records;
        let view: Vec<&EnrichedRecord> = enriched.iter().collect();

        let attachment = attachment_rollup(&view);
        for pair in attachment.windows(2) {
            prop_assert!(pair[0].key < pair[1].key);
        }
        let vrid = vrid_rollup(&view);
        for pair in vrid.windows(2) {
            prop_assert!(pair[0].key < pair[1].key);
        }
    }

    #[test]
    fn only_otr_records_survive(records in prop::collection::vec(arb_load(), 0..60)) {
        let otr = records
            .iter()
            .filter(|r| r.runner_type.as_deref() == Some("OTR"))
            .count();
        let enrichment = enrich(&records, &lookup());
        prop_assert_eq!(enrichment.records.len(), otr);
        prop_assert!(enrichment.records.iter().all(|r| r.source.runner_type.as_deref() == Some("OTR")));
    }

    #[test]
    fn full_range_filter_is_identity(records in prop::collection::vec(arb_load(), 1..60)) {
        let enriched = enrich(&records, &lookup()).records;
        prop_assume!(!enriched.is_empty());
        let bounds = date_bounds(&enriched).unwrap();

        let filtered = filter_records(&enriched, &ReportFilter::new(bounds, RegionSet::all()));

        let expected: Vec<&EnrichedRecord> = enriched.iter().collect();
        prop_assert_eq!(filtered, expected);
    }
}
