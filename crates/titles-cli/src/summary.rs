use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use titles_cli::types::CleanRun;
use titles_transform::RuleStatus;

pub fn print_summary(run: &CleanRun) {
    println!("Input: {}", run.paths.input.display());
    println!("Cleaned CSV: {}", run.paths.output.display());
    println!("Summary: {}", run.paths.summary.display());
    println!("{}", count_table(run));
    println!("{}", missing_table(run));
    println!("{}", rule_table(run));
}

fn count_table(run: &CleanRun) -> Table {
    let summary = &run.summary;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Before"),
        header_cell("After"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Rows"),
        Cell::new(summary.rows_before()),
        Cell::new(summary.rows_after()),
    ]);
    table.add_row(vec![
        Cell::new("Duplicates"),
        count_cell(summary.duplicates_before(), Color::Yellow),
        count_cell(summary.duplicates_after(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Missing cells"),
        count_cell(summary.before.total_missing(), Color::Yellow),
        count_cell(summary.after.total_missing(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Columns"),
        Cell::new(summary.before.missing.len()),
        Cell::new(run.columns.len()),
    ]);
    table
}

/// Missing counts per cleaned column. The before count is looked up under
/// the raw name the column was renamed from; derived columns show `new`.
fn missing_table(run: &CleanRun) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Missing before"),
        header_cell("Missing after"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in &run.summary.after.missing {
        let before = match run.summary.missing_before(&entry.column) {
            Some(missing) => count_cell(missing, Color::Yellow),
            None => dim_cell("new"),
        };
        table.add_row(vec![
            Cell::new(&entry.column),
            before,
            count_cell(entry.missing, Color::Yellow),
        ]);
    }
    table
}

fn rule_table(run: &CleanRun) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Column"),
        header_cell("Rows changed"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for outcome in &run.rules {
        let changed = match outcome.status {
            RuleStatus::Applied { rows_changed } => count_cell(rows_changed, Color::Green),
            RuleStatus::Skipped => dim_cell("skipped"),
        };
        table.add_row(vec![
            Cell::new(outcome.rule),
            Cell::new(outcome.column),
            changed,
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
