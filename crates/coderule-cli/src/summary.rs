use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use coderule_cli::reports::{KindRow, LengthReport, PreviewReport, ValidationOutcome};

pub fn print_kinds(rows: &[KindRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Label"),
        header_cell("Width"),
        header_cell("Rule editor"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for row in rows {
        table.add_row(vec![
            kind_cell(row.kind.as_str()),
            Cell::new(&row.label),
            row.fixed_width.map_or_else(|| dim_cell("-"), Cell::new),
            flag_cell(row.in_rule_editor),
        ]);
    }
    println!("{table}");
}

pub fn print_length(report: &LengthReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Kind"),
        header_cell("Label"),
        header_cell("Length"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for segment in &report.segments {
        table.add_row(vec![
            Cell::new(segment.index),
            kind_cell(&segment.kind),
            Cell::new(&segment.label),
            length_cell(segment.length),
        ]);
    }
    table.add_row(vec![
        dim_cell("-"),
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(report.total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_preview(report: &PreviewReport) {
    for code in &report.codes {
        println!("{code}");
    }
    eprintln!("length: {}", report.length);
}

pub fn print_validation(outcome: &ValidationOutcome) {
    if outcome.submittable {
        println!("Rule is valid.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Kind"),
        header_cell("Label"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for segment in &outcome.failing {
        for (field, failure) in &segment.failures {
            table.add_row(vec![
                Cell::new(segment.index),
                kind_cell(&segment.kind),
                Cell::new(&segment.label),
                Cell::new(field).add_attribute(Attribute::Bold),
                Cell::new(failure).fg(Color::Red),
            ]);
        }
    }
    println!("Issues:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
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

fn kind_cell(kind: &str) -> Cell {
    if kind == "-" {
        dim_cell(kind)
    } else {
        Cell::new(kind).fg(Color::Blue)
    }
}

fn length_cell(length: usize) -> Cell {
    if length == 0 {
        dim_cell(length)
    } else {
        Cell::new(length)
    }
}

fn flag_cell(enabled: bool) -> Cell {
    if enabled {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
