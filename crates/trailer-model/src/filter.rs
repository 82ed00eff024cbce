//! Report filter parameters supplied by the presentation layer.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Inclusive scheduled-date interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ModelError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering a single day.
    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// A missing date never satisfies the range.
    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        date.is_some_and(|d| d >= self.start && d <= self.end)
    }
}

/// Selected regions. Empty means every region, including unmapped sites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionSet(BTreeSet<String>);

impl RegionSet {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns true if a load in `region` passes the region predicate.
    ///
    /// Once any region is selected, loads without a region are rejected.
    pub fn admits(&self, region: Option<&str>) -> bool {
        if self.0.is_empty() {
            return true;
        }
        region.is_some_and(|r| self.0.contains(r))
    }
}

impl<S: Into<String>> FromIterator<S> for RegionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(Into::into)
                .filter(|region: &String| !region.trim().is_empty())
                .collect(),
        )
    }
}

/// The `(start_date, end_date, region_set)` tuple of one dashboard request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    pub date_range: DateRange,
    pub regions: RegionSet,
}

impl ReportFilter {
    pub fn new(date_range: DateRange, regions: RegionSet) -> Self {
        Self {
            date_range,
            regions,
        }
    }
}
