use std::fmt::Write;

use comfy_table::{Cell, CellAlignment, modifiers, presets};

use crate::{
    core::table::Table,
    error::ReportError,
    render::{Render, Section},
};

pub struct TextRenderer;

impl Render for TextRenderer {
    fn render(
        &self,
        daily_rate: &Table,
        daily_volume: &Table,
        weekly_volume: &Table,
    ) -> Result<Vec<u8>, ReportError> {
        let mut document = String::new();
        for section in Section::all(daily_rate, daily_volume, weekly_volume) {
            write_section(&mut document, &section).map_err(ReportError::render)?;
        }
        Ok(document.into_bytes())
    }
}

fn write_section(document: &mut String, section: &Section<'_>) -> std::fmt::Result {
    writeln!(document, "{} ({})", section.title, section.unit)?;
    if section.table.is_empty() {
        writeln!(document, "no data")?;
    } else {
        writeln!(document, "{}", build_table(section.table))?;
    }
    writeln!(document)
}

#[must_use]
pub fn build_table(table: &Table) -> comfy_table::Table {
    let mut rendered = comfy_table::Table::new();
    rendered
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .force_no_tty()
        .set_header(
            std::iter::once(Cell::new("Date"))
                .chain(
                    table
                        .column_names()
                        .map(|name| Cell::new(name).set_alignment(CellAlignment::Right)),
                )
                .collect::<Vec<_>>(),
        );
    for (index, row) in table.rows.iter().enumerate() {
        let cells = std::iter::once(Cell::new(row.format("%Y-%m-%d"))).chain(
            table.columns.iter().map(|column| {
                column.cells[index]
                    .map_or_else(|| Cell::new("n/a"), |value| Cell::new(format!("{value:.2}")))
                    .set_alignment(CellAlignment::Right)
            }),
        );
        rendered.add_row(cells.collect::<Vec<_>>());
    }
    rendered
}
