//! Report filtering and filter option discovery.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::{debug, info_span};
use trailer_model::{DateRange, EnrichedRecord, ReportFilter};

/// Records within the date range and, if any are selected, the regions.
///
/// Borrows from `records`; the input relation is never modified. Records
/// without a parseable date are always excluded.
pub fn filter_records<'a>(
    records: &'a [EnrichedRecord],
    filter: &ReportFilter,
) -> Vec<&'a EnrichedRecord> {
    let span = info_span!(
        "filter",
        start = %filter.date_range.start(),
        end = %filter.date_range.end(),
        regions = filter.regions.len()
    );
    let _guard = span.enter();

    let kept: Vec<&EnrichedRecord> = records
        .iter()
        .filter(|record| filter.date_range.contains(record.scheduled_date))
        .filter(|record| filter.regions.admits(record.origin_region.as_deref()))
        .collect();
    debug!(input = records.len(), kept = kept.len(), "filtered records");
    kept
}

/// Sorted distinct regions present in the records (region filter options).
pub fn available_regions(records: &[EnrichedRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| record.origin_region.as_deref())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Earliest and latest scheduled dates, or `None` if no record has a date.
pub fn date_bounds(records: &[EnrichedRecord]) -> Option<DateRange> {
    let mut dates = records.iter().filter_map(|record| record.scheduled_date);
    let first = dates.next()?;
    let (min, max) = dates.fold((first, first), |(min, max): (NaiveDate, NaiveDate), d| {
        (min.min(d), max.max(d))
    });
    DateRange::new(min, max).ok()
}
