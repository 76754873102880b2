use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::MergeReport;

pub fn print_summary(report: &MergeReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Records"),
        header_cell("Headers"),
        header_cell("Recognized"),
        header_cell("Passthrough"),
    ]);
    apply_table_style(&mut table);
    for idx in 1..=3 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for source in &report.sources {
        table.add_row(vec![
            Cell::new(&source.name),
            Cell::new(source.records),
            Cell::new(source.headers),
            Cell::new(source.recognized_headers),
            passthrough_cell(&source.passthrough_headers),
        ]);
    }
    println!("{table}");

    let stats = report.outcome.stats;
    let mut totals = Table::new();
    apply_table_style(&mut totals);
    totals.add_row(vec![Cell::new("Input records"), Cell::new(stats.original)]);
    totals.add_row(vec![
        Cell::new("Merged duplicates"),
        Cell::new(stats.merged).fg(if stats.merged > 0 {
            Color::Yellow
        } else {
            Color::Reset
        }),
    ]);
    totals.add_row(vec![
        Cell::new("Output records")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.total).add_attribute(Attribute::Bold),
    ]);
    align_column(&mut totals, 1, CellAlignment::Right);
    println!("{totals}");

    match &report.export {
        Some(paths) => {
            println!("Output: {}", report.output_dir.display());
            for path in paths.merged.iter().chain(paths.condensed.iter()) {
                println!("  {}", path.display());
            }
            println!("  {}", paths.summary.display());
        }
        None => println!("Dry run: no files written"),
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn passthrough_cell(headers: &[String]) -> Cell {
    if headers.is_empty() {
        Cell::new("-").add_attribute(Attribute::Dim)
    } else {
        Cell::new(headers.join(", ")).fg(Color::Yellow)
    }
}
