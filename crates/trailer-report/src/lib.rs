//! Report assembly and export for the trailer attachment dashboard.
//!
//! - **report**: [`DashboardReport`], both rollups and KPI blocks for one filter
//! - **frame**: rollups as polars `DataFrame`s with the dashboard column names
//! - **export**: CSV files via polars and a JSON report via serde_json

mod error;
mod export;
pub mod frame;
mod report;

pub use error::{ReportError, Result};
pub use export::{
    ATTACHMENT_FILE, JSON_FILE, ReportOutputs, SITE_CHART_FILE, VRID_FILE, write_csv,
    write_json_report, write_report_outputs,
};
pub use frame::{attachment_frame, site_chart_frame, vrid_frame};
pub use report::DashboardReport;
