use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use trailer_cli::pipeline::DashboardSession;
use trailer_cli::settings::Settings;
use trailer_cli::summary::{print_report, region_table};
use trailer_model::RegionSet;
use trailer_report::write_report_outputs;

use crate::cli::{ReportArgs, SourceArgs};

fn resolve_source(flag: Option<&PathBuf>, setting: Option<&PathBuf>, name: &str) -> Result<PathBuf> {
    flag.or(setting)
        .cloned()
        .with_context(|| format!("no {name} file given; pass --{name} or set [sources] {name}"))
}

fn open_session(args: &SourceArgs, settings: &Settings) -> Result<DashboardSession> {
    let loads = resolve_source(args.loads.as_ref(), settings.sources.loads.as_ref(), "loads")?;
    let regions = resolve_source(
        args.regions.as_ref(),
        settings.sources.regions.as_ref(),
        "regions",
    )?;
    DashboardSession::load(&loads, &regions)
        .with_context(|| format!("load {} and {}", loads.display(), regions.display()))
}

pub fn run_report(args: &ReportArgs, settings: &Settings) -> Result<()> {
    let session = open_session(&args.sources, settings)?;

    let regions: RegionSet = if args.region.is_empty() {
        settings.report.regions.iter().cloned().collect()
    } else {
        args.region.iter().cloned().collect()
    };
    let filter = session
        .resolve_filter(args.start, args.end, regions)
        .context("resolve report filter")?;
    let report = session.run(&filter);

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{json}");
    } else {
        print_report(&report, &settings.display);
    }

    let export_dir = args.export_dir.as_ref().or(settings.report.export_dir.as_ref());
    if let Some(dir) = export_dir {
        let outputs = write_report_outputs(&report, dir)
            .with_context(|| format!("export report to {}", dir.display()))?;
        info!(dir = %dir.display(), "report exported");
        if !args.json {
            println!();
            for path in outputs.paths() {
                println!("Wrote {}", path.display());
            }
        }
    }
    Ok(())
}

pub fn run_regions(args: &SourceArgs, settings: &Settings) -> Result<()> {
    let session = open_session(args, settings)?;
    let counts = session.region_counts();
    println!("{}", region_table(&counts, settings.display.table_width));
    Ok(())
}

pub fn run_dates(args: &SourceArgs, settings: &Settings) -> Result<()> {
    let session = open_session(args, settings)?;
    let filter = session.default_filter()?;
    println!("Earliest: {}", filter.date_range.start());
    println!("Latest:   {}", filter.date_range.end());
    let stats = session.stats();
    if stats.unparsed_dates > 0 {
        println!("({} loads have no parseable date)", stats.unparsed_dates);
    }
    Ok(())
}
