//! Trailer attachment report pipeline.
//!
//! Each stage is a pure function over an immutable input:
//!
//! - **enrich**: derive site, region, trailer status, scheduled date, and trailer type
//! - **filter**: apply the date-range and region predicates
//! - **aggregate**: attachment-status and equipment-type rollups, site chart
//! - **kpi**: scalar totals of each rollup
//!
//! ```ignore
//! let lookup = RegionLookup::from_mappings(&tables.regions);
//! let enriched = enrich(&tables.loads, &lookup).records;
//! let filtered = filter_records(&enriched, &filter);
//! let attachment = attachment_rollup(&filtered);
//! let kpis = attachment_kpis(&attachment);
//! ```

pub mod aggregate;
pub mod datetime;
pub mod enrich;
pub mod filter;
pub mod kpi;
pub mod region;

pub use aggregate::{attachment_rollup, site_chart, vrid_rollup};
pub use datetime::parse_scheduled_date;
pub use enrich::{Enrichment, EnrichmentStats, derive_site, enrich, is_over_the_road};
pub use filter::{available_regions, date_bounds, filter_records};
pub use kpi::{attachment_kpis, equipment_kpis};
pub use region::RegionLookup;
