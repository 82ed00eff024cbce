use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use trailer_model::{
    AttachmentKpis, AttachmentRow, EquipmentKpis, GroupKey, SiteVridRow, TrailerType, VridRow,
};
use trailer_report::DashboardReport;

use crate::settings::DisplaySettings;

/// Label shown for loads whose site has no region mapping.
pub const UNMAPPED_REGION: &str = "(unmapped)";

const BAR: char = '█';

pub fn print_report(report: &DashboardReport, display: &DisplaySettings) {
    let filter = &report.filter;
    let regions: Vec<&str> = filter.regions.iter().collect();
    println!(
        "Scheduled {} to {} | Regions: {}",
        filter.date_range.start(),
        filter.date_range.end(),
        if regions.is_empty() {
            "all".to_string()
        } else {
            regions.join(", ")
        }
    );
    if report.is_empty() {
        println!("No loads match the selected filters.");
    }

    println!();
    println!("Trailer attachment");
    println!("{}", attachment_kpi_block(&report.attachment_kpis));
    println!("{}", attachment_table(&report.attachment, display.table_width));

    println!();
    println!("Equipment / VRIDs");
    println!("{}", equipment_kpi_block(&report.equipment_kpis));
    println!("{}", vrid_table(&report.vrid, display.table_width));

    println!();
    println!("AZNG vs AZNU by site");
    println!("{}", site_chart_table(&report.site_chart, display));
}

/// Metric tiles as aligned label/value lines.
pub fn kpi_block(tiles: &[(&str, String)]) -> String {
    let label_width = tiles.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = tiles
        .iter()
        .map(|(_, value)| value.chars().count())
        .max()
        .unwrap_or(0);
    tiles
        .iter()
        .map(|(label, value)| format!("{label:<label_width$}  {value:>value_width$}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn attachment_kpi_block(kpis: &AttachmentKpis) -> String {
    kpi_block(&[
        ("Total Loads", kpis.total_loads.to_string()),
        ("Total Not Attached", kpis.total_not_attached.to_string()),
        ("Risk %", kpis.risk_pct_display()),
    ])
}

pub fn equipment_kpi_block(kpis: &EquipmentKpis) -> String {
    kpi_block(&[
        ("Total VRIDs", kpis.total_vrids.to_string()),
        ("Total AZNG", kpis.total_azng.to_string()),
        ("Total AZNU", kpis.total_aznu.to_string()),
    ])
}

pub fn attachment_table(rows: &[AttachmentRow], width: u16) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Region"),
        header_cell("Site"),
        header_cell("Attached"),
        header_cell("Not Attached"),
        header_cell("Total"),
        header_cell("Not Attached %"),
    ]);
    apply_table_style(&mut table, width);
    for index in 3..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in rows {
        let mut cells = key_cells(&row.key);
        cells.push(Cell::new(row.trailer_attached));
        cells.push(count_cell(row.not_attached, Color::Red));
        cells.push(Cell::new(row.total_loads));
        cells.push(Cell::new(format!("{:.2}%", row.not_attached_pct * 100.0)));
        table.add_row(cells);
    }
    table
}

pub fn vrid_table(rows: &[VridRow], width: u16) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Region"),
        header_cell("Site"),
        header_cell(TrailerType::Azng.as_str()),
        header_cell(TrailerType::Aznu.as_str()),
        header_cell(TrailerType::Other.as_str()),
        header_cell("Total VRIDs"),
    ]);
    apply_table_style(&mut table, width);
    for index in 3..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in rows {
        let mut cells = key_cells(&row.key);
        cells.push(Cell::new(row.azng));
        cells.push(Cell::new(row.aznu));
        cells.push(count_cell(row.other, Color::DarkGrey));
        cells.push(Cell::new(row.total_vrids).add_attribute(Attribute::Bold));
        table.add_row(cells);
    }
    table
}

/// Horizontal bars scaled so the largest count spans `chart_width`.
pub fn bar(count: u64, max: u64, chart_width: usize) -> String {
    if count == 0 || max == 0 {
        return String::new();
    }
    let width = chart_width as u64;
    let len = (count * width).div_ceil(max);
    std::iter::repeat_n(BAR, len as usize).collect()
}

pub fn site_chart_table(rows: &[SiteVridRow], display: &DisplaySettings) -> Table {
    let max = rows
        .iter()
        .map(|row| row.azng.max(row.aznu))
        .max()
        .unwrap_or(0);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Site"),
        header_cell(TrailerType::Azng.as_str()),
        header_cell(TrailerType::Aznu.as_str()),
    ]);
    apply_table_style(&mut table, display.table_width);
    for row in rows {
        table.add_row(vec![
            site_cell(&row.site),
            Cell::new(format!("{} {}", bar(row.azng, max, display.chart_width), row.azng))
                .fg(Color::Blue),
            Cell::new(format!("{} {}", bar(row.aznu, max, display.chart_width), row.aznu))
                .fg(Color::Green),
        ]);
    }
    table
}

/// Region options with their load counts.
pub fn region_table(counts: &[(Option<String>, usize)], width: u16) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Region"), header_cell("Loads")]);
    apply_table_style(&mut table, width);
    align_column(&mut table, 1, CellAlignment::Right);
    for (region, count) in counts {
        let label = match region {
            Some(region) => Cell::new(region),
            None => dim_cell(UNMAPPED_REGION),
        };
        table.add_row(vec![label, Cell::new(count)]);
    }
    table
}

pub fn apply_table_style(table: &mut Table, width: u16) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);
}

fn key_cells(key: &GroupKey) -> Vec<Cell> {
    let region = match key.origin_region.as_deref() {
        Some(region) => Cell::new(region),
        None => dim_cell(UNMAPPED_REGION),
    };
    vec![
        Cell::new(key.scheduled_date.format("%Y-%m-%d")),
        region,
        site_cell(&key.site),
    ]
}

fn site_cell(site: &str) -> Cell {
    if site.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(site)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: u64, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
