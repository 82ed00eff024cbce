//! Rollups as polars DataFrames.
//!
//! Column names follow the upstream dashboard tables so exported files line
//! up with what analysts already use.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use trailer_model::columns::SCHEDULED_ARRIVAL;
use trailer_model::{AttachmentRow, GroupKey, SiteVridRow, TrailerStatus, TrailerType, VridRow};

use crate::error::Result;

pub const ORIGIN_REGION: &str = "origin_region";
pub const SITE: &str = "site";
pub const TOTAL_LOADS: &str = "total_loads";
pub const NOT_ATTACHED_PCT: &str = "not_attached_pct";
pub const TOTAL_VRIDS: &str = "total_vrids";

fn u64_column(name: &str, values: Vec<u64>) -> Column {
    Series::new(name.into(), values).into_column()
}

fn key_columns<'a>(keys: impl Iterator<Item = &'a GroupKey>) -> Vec<Column> {
    let mut dates = Vec::new();
    let mut regions = Vec::new();
    let mut sites = Vec::new();
    for key in keys {
        dates.push(key.scheduled_date.format("%Y-%m-%d").to_string());
        regions.push(key.origin_region.clone());
        sites.push(key.site.clone());
    }
    vec![
        Series::new(SCHEDULED_ARRIVAL.into(), dates).into_column(),
        Series::new(ORIGIN_REGION.into(), regions).into_column(),
        Series::new(SITE.into(), sites).into_column(),
    ]
}

/// Attachment rollup with key, status count, total, and percentage columns.
pub fn attachment_frame(rows: &[AttachmentRow]) -> Result<DataFrame> {
    let mut columns = key_columns(rows.iter().map(|row| &row.key));
    columns.push(u64_column(
        TrailerStatus::TrailerAttached.as_str(),
        rows.iter().map(|row| row.trailer_attached).collect(),
    ));
    columns.push(u64_column(
        TrailerStatus::NotAttached.as_str(),
        rows.iter().map(|row| row.not_attached).collect(),
    ));
    columns.push(u64_column(
        TOTAL_LOADS,
        rows.iter().map(|row| row.total_loads).collect(),
    ));
    let pct: Vec<f64> = rows.iter().map(|row| row.not_attached_pct).collect();
    columns.push(Series::new(NOT_ATTACHED_PCT.into(), pct).into_column());
    Ok(DataFrame::new(columns)?)
}

/// Equipment rollup with one count column per trailer type.
pub fn vrid_frame(rows: &[VridRow]) -> Result<DataFrame> {
    let mut columns = key_columns(rows.iter().map(|row| &row.key));
    columns.push(u64_column(
        TrailerType::Azng.as_str(),
        rows.iter().map(|row| row.azng).collect(),
    ));
    columns.push(u64_column(
        TrailerType::Aznu.as_str(),
        rows.iter().map(|row| row.aznu).collect(),
    ));
    columns.push(u64_column(
        TrailerType::Other.as_str(),
        rows.iter().map(|row| row.other).collect(),
    ));
    columns.push(u64_column(
        TOTAL_VRIDS,
        rows.iter().map(|row| row.total_vrids).collect(),
    ));
    Ok(DataFrame::new(columns)?)
}

pub fn site_chart_frame(rows: &[SiteVridRow]) -> Result<DataFrame> {
    let sites: Vec<String> = rows.iter().map(|row| row.site.clone()).collect();
    let columns = vec![
        Series::new(SITE.into(), sites).into_column(),
        u64_column(
            TrailerType::Azng.as_str(),
            rows.iter().map(|row| row.azng).collect(),
        ),
        u64_column(
            TrailerType::Aznu.as_str(),
            rows.iter().map(|row| row.aznu).collect(),
        ),
    ];
    Ok(DataFrame::new(columns)?)
}
