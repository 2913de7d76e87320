use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use roster_cli::pipeline::Prepared;
use roster_ingest::Coercion;
use roster_model::{EntityKind, ExportReadiness, Severity, ValidationIssue};
use roster_output::ExportPaths;

pub fn print_report(prepared: &Prepared) {
    println!("Data folder: {}", prepared.data_dir.display());
    if !prepared.config.rules.is_empty() {
        println!("Business rules: {}", prepared.config.rules.len());
    }
    print_sheet_table(prepared);
    print_coercions(&prepared.snapshot.coercions);
    print_issue_table(prepared.summary.issues());
    println!();
    println!("{}", readiness_line(prepared.readiness()));
}

pub fn print_export(dir: &Path, paths: &ExportPaths) {
    println!();
    println!("Export: {}", dir.display());
    for path in paths.all() {
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        println!("  {name}");
    }
}

fn print_sheet_table(prepared: &Prepared) {
    let snapshot = &prepared.snapshot;
    let summary = &prepared.summary;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("File"),
        header_cell("Records"),
        header_cell("Errors"),
        header_cell("Warnings"),
        header_cell("Info"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    for kind in EntityKind::all() {
        let records = match kind {
            EntityKind::Client => snapshot.clients.len(),
            EntityKind::Worker => snapshot.workers.len(),
            EntityKind::Task => snapshot.tasks.len(),
        };
        let count = |severity| {
            summary
                .for_entity(*kind)
                .filter(|issue| issue.severity == severity)
                .count()
        };
        let file = prepared
            .paths
            .get(*kind)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(kind.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(file),
            Cell::new(records),
            count_cell(count(Severity::Error), Color::Red),
            count_cell(count(Severity::Warning), Color::Yellow),
            count_cell(count(Severity::Info), Color::Cyan),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(snapshot.total_records()).add_attribute(Attribute::Bold),
        count_cell(summary.total_errors(), Color::Red).add_attribute(Attribute::Bold),
        count_cell(summary.total_warnings(), Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(summary.total_info(), Color::Cyan).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn print_coercions(coercions: &[Coercion]) {
    if coercions.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Row"),
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Read as"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for coercion in coercions {
        table.add_row(vec![
            Cell::new(coercion.entity.label()),
            Cell::new(coercion.row),
            Cell::new(coercion.field),
            Cell::new(&coercion.raw).fg(Color::Yellow),
            Cell::new(coercion.value),
        ]);
    }
    println!();
    println!("Unreadable numbers:");
    println!("{table}");
}

fn print_issue_table<'a>(issues: impl Iterator<Item = &'a ValidationIssue>) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Sheet"),
        header_cell("ID"),
        header_cell("Row"),
        header_cell("Field"),
        header_cell("Message"),
        header_cell("Suggestion"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for issue in issues {
        table.add_row(vec![
            severity_cell(issue.severity),
            Cell::new(issue.entity.label()),
            Cell::new(&issue.entity_id),
            optional_cell(issue.row.map(|row| row.to_string())),
            optional_cell(issue.field.clone()),
            Cell::new(&issue.message),
            optional_cell(issue.suggestion.clone()),
        ]);
    }
    if table.row_count() == 0 {
        return;
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

fn readiness_line(readiness: ExportReadiness) -> String {
    match readiness {
        ExportReadiness::Ready => format!("✓ {readiness}"),
        ExportReadiness::ReadyWithWarnings => format!("! {readiness}"),
        ExportReadiness::Blocked | ExportReadiness::NoData => format!("✗ {readiness}"),
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Fixed(9)),
        ColumnConstraint::UpperBoundary(Width::Fixed(8)),
        ColumnConstraint::UpperBoundary(Width::Fixed(12)),
        ColumnConstraint::LowerBoundary(Width::Fixed(5)),
        ColumnConstraint::UpperBoundary(Width::Fixed(18)),
        ColumnConstraint::UpperBoundary(Width::Percentage(45)),
        ColumnConstraint::UpperBoundary(Width::Percentage(25)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
        Severity::Info => Cell::new("INFO").fg(Color::Cyan),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn optional_cell(value: Option<String>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
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
