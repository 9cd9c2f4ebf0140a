use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lifexp_cli::PipelineOutcome;

pub fn print_summary(input: &std::path::Path, outcome: &PipelineOutcome) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Result")]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new("Input"),
        Cell::new(input.display().to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Format"),
        Cell::new(format!(
            "{} / {}",
            outcome.strategy.reader, outcome.strategy.cleaner
        )),
    ]);
    table.add_row(vec![Cell::new("Raw rows"), Cell::new(outcome.raw_rows)]);
    table.add_row(vec![Cell::new("Clean rows"), Cell::new(outcome.clean_rows)]);
    table.add_row(vec![
        Cell::new(format!("{} rows", outcome.country))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(outcome.table.height()).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Output"),
        Cell::new(outcome.output_path.display().to_string()).fg(Color::Green),
    ]);
    println!("{table}");
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
