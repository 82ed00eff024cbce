//! Typed loading of the load-records and region-mapping tables.

use std::path::Path;

use polars::prelude::{AnyValue, Column, DataFrame};
use trailer_model::columns::{
    EQUIPMENT_TYPE, LANE, LOAD_RECORD_COLUMNS, ORIGIN, ORIGIN_REGION, REGION_MAPPING_COLUMNS,
    RUNNER_TYPE, SCHEDULED_ARRIVAL, TRAILER_ID,
};
use trailer_model::{LoadRecord, RegionMapping};

use crate::csv::read_csv_frame;
use crate::error::{IngestError, Result};
use crate::polars_utils::{any_to_optional_string, any_to_string_non_empty};

/// Both source relations, read once per session.
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    pub loads: Vec<LoadRecord>,
    pub regions: Vec<RegionMapping>,
}

/// Fails with [`IngestError::MissingColumn`] on the first absent column.
pub fn require_columns(df: &DataFrame, required: &[&str], path: &Path) -> Result<()> {
    for column in required {
        if df.column(column).is_err() {
            return Err(IngestError::MissingColumn {
                column: (*column).to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

fn cell(column: &Column, idx: usize) -> Result<AnyValue<'_>> {
    Ok(column.get(idx)?)
}

/// Converts a load-records DataFrame into typed records.
///
/// Extra columns are ignored. `source` is only used in error messages.
pub fn records_from_frame(df: &DataFrame, source: &Path) -> Result<Vec<LoadRecord>> {
    require_columns(df, &LOAD_RECORD_COLUMNS, source)?;

    let lane = df.column(LANE)?;
    let trailer_id = df.column(TRAILER_ID)?;
    let equipment_type = df.column(EQUIPMENT_TYPE)?;
    let scheduled_arrival = df.column(SCHEDULED_ARRIVAL)?;
    let runner_type = df.column(RUNNER_TYPE)?;

    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        records.push(LoadRecord {
            lane: any_to_optional_string(cell(lane, idx)?),
            trailer_id: any_to_optional_string(cell(trailer_id, idx)?),
            equipment_type: any_to_optional_string(cell(equipment_type, idx)?),
            scheduled_arrival: any_to_optional_string(cell(scheduled_arrival, idx)?),
            runner_type: any_to_optional_string(cell(runner_type, idx)?),
        });
    }
    Ok(records)
}

/// Converts a region-mapping DataFrame into typed mappings, preserving row order.
///
/// Rows with a blank origin or region are skipped: they can never resolve a
/// site, and skipping them lets a later row supply the region for that origin.
pub fn region_mappings_from_frame(df: &DataFrame, source: &Path) -> Result<Vec<RegionMapping>> {
    require_columns(df, &REGION_MAPPING_COLUMNS, source)?;

    let origin = df.column(ORIGIN)?;
    let origin_region = df.column(ORIGIN_REGION)?;

    let mut mappings = Vec::with_capacity(df.height());
    let mut skipped = 0usize;
    for idx in 0..df.height() {
        let (Some(code), Some(region)) = (
            any_to_string_non_empty(cell(origin, idx)?),
            any_to_string_non_empty(cell(origin_region, idx)?),
        ) else {
            skipped += 1;
            continue;
        };
        mappings.push(RegionMapping::new(code, region));
    }
    if skipped > 0 {
        tracing::debug!(
            path = %source.display(),
            skipped,
            "skipped region mapping rows with blank origin or region"
        );
    }
    Ok(mappings)
}

/// Reads and converts the load-records CSV.
pub fn load_records(path: &Path) -> Result<Vec<LoadRecord>> {
    let df = read_csv_frame(path)?;
    records_from_frame(&df, path)
}

/// Reads and converts the region-mapping CSV.
pub fn load_region_mappings(path: &Path) -> Result<Vec<RegionMapping>> {
    let df = read_csv_frame(path)?;
    region_mappings_from_frame(&df, path)
}

/// Loads both source tables. Any failure is fatal for the session.
pub fn load_sources(loads_path: &Path, regions_path: &Path) -> Result<SourceTables> {
    let loads = load_records(loads_path)?;
    let regions = load_region_mappings(regions_path)?;
    tracing::info!(
        loads_path = %loads_path.display(),
        regions_path = %regions_path.display(),
        load_count = loads.len(),
        region_count = regions.len(),
        "loaded source tables"
    );
    Ok(SourceTables { loads, regions })
}
