//! Dashboard session: load once, answer many filter requests.
//!
//! The source tables are read and enriched when the session is built and are
//! read-only afterwards. [`DashboardSession::run`] is a pure function of the
//! session and the filter, so repeated requests with the same filter return
//! the same report.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, info_span, warn};
use trailer_ingest::{IngestError, SourceTables, load_sources};
use trailer_model::{DateRange, EnrichedRecord, ModelError, RegionSet, ReportFilter};
use trailer_report::DashboardReport;
use trailer_transform::{
    EnrichmentStats, RegionLookup, available_regions, date_bounds, enrich, filter_records,
};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Model(#[from] ModelError),

    /// Date defaults were requested but no record has a parseable date.
    #[error("no load has a parseable scheduled arrival date; pass --start and --end")]
    NoScheduledDates,
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Enriched loads plus the metadata the dashboard needs for its controls.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    records: Vec<EnrichedRecord>,
    stats: EnrichmentStats,
    regions: Vec<String>,
    bounds: Option<DateRange>,
}

impl DashboardSession {
    /// Read both source tables and enrich the loads.
    pub fn load(loads: &Path, regions: &Path) -> Result<Self> {
        let span = info_span!("ingest", loads = %loads.display(), regions = %regions.display());
        let start = Instant::now();
        let tables = span.in_scope(|| load_sources(loads, regions))?;
        info!(
            loads = tables.loads.len(),
            mappings = tables.regions.len(),
            duration_ms = start.elapsed().as_millis(),
            "ingest complete"
        );
        Ok(Self::from_tables(&tables))
    }

    /// Build a session from tables already in memory.
    pub fn from_tables(tables: &SourceTables) -> Self {
        let start = Instant::now();
        let lookup = RegionLookup::from_mappings(&tables.regions);
        let enrichment = enrich(&tables.loads, &lookup);
        let records = enrichment.records;
        let regions = available_regions(&records);
        let bounds = date_bounds(&records);
        info!(
            records = records.len(),
            dropped = enrichment.stats.dropped_runner_type,
            regions = regions.len(),
            duration_ms = start.elapsed().as_millis(),
            "enrich complete"
        );
        Self {
            records,
            stats: enrichment.stats,
            regions,
            bounds,
        }
    }

    pub fn records(&self) -> &[EnrichedRecord] {
        &self.records
    }

    pub fn stats(&self) -> EnrichmentStats {
        self.stats
    }

    /// Sorted regions present in the data (the region selector options).
    pub fn available_regions(&self) -> &[String] {
        &self.regions
    }

    /// Earliest and latest scheduled dates in the data.
    pub fn date_bounds(&self) -> Option<DateRange> {
        self.bounds
    }

    /// Loads per region; unmapped sites are keyed `None` and sort first.
    pub fn region_counts(&self) -> Vec<(Option<String>, usize)> {
        let mut counts: BTreeMap<Option<&str>, usize> = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.origin_region.as_deref()).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(region, count)| (region.map(str::to_string), count))
            .collect()
    }

    /// Full date range and all regions.
    pub fn default_filter(&self) -> Result<ReportFilter> {
        self.resolve_filter(None, None, RegionSet::all())
    }

    /// Fill missing dates from the data bounds.
    pub fn resolve_filter(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        regions: RegionSet,
    ) -> Result<ReportFilter> {
        let (start, end) = match (start, end, self.bounds) {
            (Some(start), Some(end), _) => (start, end),
            (start, end, Some(bounds)) => (
                start.unwrap_or(bounds.start()),
                end.unwrap_or(bounds.end()),
            ),
            (_, _, None) => return Err(PipelineError::NoScheduledDates),
        };

        for region in regions.iter() {
            if !self.regions.iter().any(|known| known == region) {
                warn!(region, "selected region does not occur in the data");
            }
        }

        Ok(ReportFilter::new(DateRange::new(start, end)?, regions))
    }

    /// Compute the report for one filter request.
    pub fn run(&self, filter: &ReportFilter) -> DashboardReport {
        let start = Instant::now();
        let view = filter_records(&self.records, filter);
        let report = DashboardReport::from_view(filter.clone(), &view);
        info!(
            filtered = view.len(),
            attachment_rows = report.attachment.len(),
            vrid_rows = report.vrid.len(),
            duration_ms = start.elapsed().as_millis(),
            "report computed"
        );
        report
    }
}
