//! Data model for the trailer attachment dashboard.
//!
//! Raw load records and region mappings come in from the loader, get enriched
//! with derived attributes, and are rolled up into the two summary views
//! (attachment status and equipment type / VRID).

pub mod columns;
pub mod enums;
pub mod error;
pub mod filter;
pub mod records;
pub mod summary;

pub use enums::{TrailerStatus, TrailerType};
pub use error::{ModelError, Result};
pub use filter::{DateRange, RegionSet, ReportFilter};
pub use records::{EnrichedRecord, LoadRecord, RegionMapping};
pub use summary::{
    AttachmentKpis, AttachmentRow, EquipmentKpis, GroupKey, SiteVridRow, VridRow,
};
