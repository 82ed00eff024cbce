//! Serialization contract of the model types consumed by the report layer.

use chrono::NaiveDate;
use trailer_model::{
    AttachmentKpis, AttachmentRow, GroupKey, ReportFilter, DateRange, RegionSet, TrailerStatus,
    TrailerType, VridRow,
};

fn sample_key() -> GroupKey {
    GroupKey::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        Some("West".to_string()),
        "ABCD".to_string(),
    )
}

#[test]
fn attachment_row_serializes_flat() {
    let row = AttachmentRow::from_counts(sample_key(), 1, 1);
    let json = serde_json::to_value(&row).expect("serialize row");
    assert_eq!(json["scheduled_date"], "2024-01-01");
    assert_eq!(json["origin_region"], "West");
    assert_eq!(json["site"], "ABCD");
    assert_eq!(json["trailer_attached"], 1);
    assert_eq!(json["not_attached"], 1);
    assert_eq!(json["total_loads"], 2);
    assert_eq!(json["not_attached_pct"], 0.5);
}

#[test]
fn vrid_row_uses_equipment_labels() {
    let row = VridRow::from_counts(sample_key(), 1, 1, 0);
    let json = serde_json::to_value(&row).expect("serialize row");
    assert_eq!(json["AZNG"], 1);
    assert_eq!(json["AZNU"], 1);
    assert_eq!(json["OTHER"], 0);
    assert_eq!(json["total_vrids"], 2);
}

#[test]
fn enums_serialize_as_labels() {
    assert_eq!(
        serde_json::to_string(&TrailerStatus::NotAttached).unwrap(),
        "\"not_attached\""
    );
    assert_eq!(serde_json::to_string(&TrailerType::Azng).unwrap(), "\"AZNG\"");
}

#[test]
fn report_filter_round_trips() {
    let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    let filter = ReportFilter::new(
        DateRange::single_day(day),
        ["West"].into_iter().collect::<RegionSet>(),
    );
    let json = serde_json::to_string(&filter).expect("serialize filter");
    let round: ReportFilter = serde_json::from_str(&json).expect("deserialize filter");
    assert_eq!(round, filter);
}

#[test]
fn kpis_report_half_risk() {
    let kpis = AttachmentKpis::from_totals(2, 1);
    assert_eq!(kpis.risk_pct_display(), "50.00%");
}
