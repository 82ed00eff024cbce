use std::fs;

use chrono::NaiveDate;
use tempfile::TempDir;
use trailer_model::{
    DateRange, EnrichedRecord, LoadRecord, RegionSet, ReportFilter, TrailerStatus, TrailerType,
};
use trailer_report::{DashboardReport, ReportError, write_json_report, write_report_outputs};

fn record(site: &str, status: TrailerStatus, kind: TrailerType) -> EnrichedRecord {
    EnrichedRecord {
        site: site.to_string(),
        origin_region: Some("West".to_string()),
        scheduled_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        trailer_status: status,
        trailer_type: kind,
        source: LoadRecord::default(),
    }
}

fn sample_report() -> DashboardReport {
    let records = [
        record("ABCD", TrailerStatus::TrailerAttached, TrailerType::Azng),
        record("ABCD", TrailerStatus::NotAttached, TrailerType::Aznu),
    ];
    let view: Vec<&EnrichedRecord> = records.iter().collect();
    let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    DashboardReport::from_view(
        ReportFilter::new(DateRange::single_day(day), RegionSet::all()),
        &view,
    )
}

#[test]
fn report_from_view_collects_rollups_and_kpis() {
    let report = sample_report();

    assert!(!report.is_empty());
    assert_eq!(report.attachment.len(), 1);
    assert_eq!(report.attachment_kpis.risk_pct_display(), "50.00%");
    assert_eq!(report.equipment_kpis.total_vrids, 2);
    assert_eq!(report.site_chart.len(), 1);
}

#[test]
fn writes_all_output_files() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("nested").join("out");

    let outputs = write_report_outputs(&sample_report(), &out).expect("write outputs");

    for path in outputs.paths() {
        assert!(path.exists(), "missing {}", path.display());
    }

    let attachment = fs::read_to_string(&outputs.attachment_csv).unwrap();
    let mut lines = attachment.lines();
    insta::assert_snapshot!(
        lines.next().unwrap(),
        @"Scheduled Truck Arrival - 2 date,origin_region,site,trailer_attached,not_attached,total_loads,not_attached_pct"
    );
    assert_eq!(lines.count(), 1);

    let vrid = fs::read_to_string(&outputs.vrid_csv).unwrap();
    insta::assert_snapshot!(
        vrid.lines().next().unwrap(),
        @"Scheduled Truck Arrival - 2 date,origin_region,site,AZNG,AZNU,OTHER,total_vrids"
    );

    let chart = fs::read_to_string(&outputs.site_chart_csv).unwrap();
    insta::assert_snapshot!(chart.trim_end(), @r"
    site,AZNG,AZNU
    ABCD,1,1
    ");
}

#[test]
fn json_report_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");
    let report = sample_report();

    write_json_report(&report, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let parsed: DashboardReport = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, report);
    assert!(text.contains("\"AZNG\": 1"));
}

#[test]
fn unwritable_target_is_io_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "x").unwrap();

    let err = write_report_outputs(&sample_report(), &blocker).unwrap_err();

    assert!(matches!(err, ReportError::Io { .. }));
}
