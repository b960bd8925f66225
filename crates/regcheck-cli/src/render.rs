//! Output rendering for check results and the rule listing.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use regcheck_model::{CheckSummary, RecordReport};
use regcheck_validate::{Rule, Strictness};

/// One verdict line per record, in input order.
pub fn render_text(reports: &[RecordReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&report.verdict.to_string());
        out.push('\n');
    }
    out
}

/// All reports as a pretty-printed JSON array.
pub fn render_json(reports: &[RecordReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

pub fn summary_table(summary: &CheckSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Result"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("OK").fg(Color::Green),
        count_cell(summary.ok, Color::Green),
    ]);
    for rule in Rule::PRECEDENCE {
        let role = rule.role();
        table.add_row(vec![
            Cell::new(format!("Invalid {}", role.label())),
            count_cell(summary.invalid_count(role), Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.records).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn rules_table(strictness: Strictness) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Order"),
        header_cell("Field"),
        header_cell("Position"),
        header_cell("Accepts"),
        header_cell("Pattern"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (order, rule) in Rule::PRECEDENCE.iter().enumerate() {
        table.add_row(vec![
            Cell::new(order + 1),
            Cell::new(rule.role().label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(rule.role().index()),
            Cell::new(rule.summary()),
            Cell::new(rule.pattern(strictness)),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
