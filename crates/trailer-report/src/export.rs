//! CSV and JSON report files.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::{debug, info, info_span};

use crate::error::{ReportError, Result};
use crate::frame::{attachment_frame, site_chart_frame, vrid_frame};
use crate::report::DashboardReport;

pub const ATTACHMENT_FILE: &str = "attachment_summary.csv";
pub const VRID_FILE: &str = "vrid_summary.csv";
pub const SITE_CHART_FILE: &str = "site_chart.csv";
pub const JSON_FILE: &str = "report.json";

/// Paths written by [`write_report_outputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutputs {
    pub attachment_csv: PathBuf,
    pub vrid_csv: PathBuf,
    pub site_chart_csv: PathBuf,
    pub json: PathBuf,
}

impl ReportOutputs {
    pub fn paths(&self) -> [&Path; 4] {
        [
            self.attachment_csv.as_path(),
            self.vrid_csv.as_path(),
            self.site_chart_csv.as_path(),
            self.json.as_path(),
        ]
    }
}

fn create_file(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a DataFrame as CSV with a header row.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = create_file(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    debug!(path = %path.display(), rows = df.height(), "wrote csv");
    Ok(())
}

/// Write the report as pretty-printed JSON.
pub fn write_json_report(report: &DashboardReport, path: &Path) -> Result<()> {
    let file = create_file(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report).map_err(|source| ReportError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(())
}

/// Write every report file into `output_dir`, creating it if needed.
pub fn write_report_outputs(report: &DashboardReport, output_dir: &Path) -> Result<ReportOutputs> {
    let span = info_span!("export", dir = %output_dir.display());
    let _guard = span.enter();
    let start = Instant::now();

    fs::create_dir_all(output_dir).map_err(|source| ReportError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let outputs = ReportOutputs {
        attachment_csv: output_dir.join(ATTACHMENT_FILE),
        vrid_csv: output_dir.join(VRID_FILE),
        site_chart_csv: output_dir.join(SITE_CHART_FILE),
        json: output_dir.join(JSON_FILE),
    };

    write_csv(&mut attachment_frame(&report.attachment)?, &outputs.attachment_csv)?;
    write_csv(&mut vrid_frame(&report.vrid)?, &outputs.vrid_csv)?;
    write_csv(&mut site_chart_frame(&report.site_chart)?, &outputs.site_chart_csv)?;
    write_json_report(report, &outputs.json)?;

    info!(
        files = outputs.paths().len(),
        duration_ms = start.elapsed().as_millis(),
        "report outputs written"
    );
    Ok(outputs)
}
