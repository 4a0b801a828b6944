//! Spreadsheet writer on top of `rust_xlsxwriter`.

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatPattern, Workbook, Worksheet};

use super::{Cell, ColumnWidths, RenderError, SheetSpec};

const MONEY_FORMAT: &str = "R$ #,##0.00";
const MIN_COLUMN_WIDTH: f64 = 10.0;
const MAX_COLUMN_WIDTH: f64 = 60.0;

/// Render one or more sheet specs into an in-memory workbook.
pub fn write_workbook(sheets: &[SheetSpec]) -> Result<Vec<u8>, RenderError> {
    let mut workbook = Workbook::new();
    for spec in sheets {
        let worksheet = workbook.add_worksheet();
        write_sheet(worksheet, spec)?;
    }
    Ok(workbook.save_to_buffer()?)
}

fn write_sheet(worksheet: &mut Worksheet, spec: &SheetSpec) -> Result<(), RenderError> {
    worksheet.set_name(&spec.name)?;

    let mut header_format = Format::new()
        .set_bold()
        .set_pattern(FormatPattern::Solid)
        .set_background_color(Color::RGB(spec.header_fill));
    if spec.header_on_dark {
        header_format = header_format.set_font_color(Color::White);
    }

    let mut row_index: u32 = 0;
    if let Some(title) = &spec.title {
        let title_format = Format::new()
            .set_bold()
            .set_font_size(18)
            .set_align(FormatAlign::Center);
        let last_col = spec.headers.len().saturating_sub(1) as u16;
        worksheet.merge_range(0, 0, 0, last_col, title, &title_format)?;
        row_index = 1;
    }

    let header_row = row_index;
    for (col, header) in spec.headers.iter().enumerate() {
        worksheet.write_string_with_format(header_row, col as u16, header, &header_format)?;
    }
    row_index += 1;

    let money_format = Format::new().set_num_format(MONEY_FORMAT);
    for row in spec.rows.iter().chain(spec.footer.iter()) {
        for (col, cell) in row.iter().enumerate() {
            write_cell(worksheet, row_index, col as u16, cell, &money_format)?;
        }
        row_index += 1;
    }

    if spec.autofilter {
        let last_col = spec.headers.len().saturating_sub(1) as u16;
        worksheet.autofilter(header_row, 0, header_row, last_col)?;
    }

    apply_column_widths(worksheet, spec)?;
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    money_format: &Format,
) -> Result<(), RenderError> {
    match cell {
        Cell::Text(text) => worksheet.write_string(row, col, text)?,
        Cell::Money(value) => worksheet.write_number_with_format(row, col, *value, money_format)?,
        Cell::Number(value) => worksheet.write_number(row, col, *value)?,
    };
    Ok(())
}

fn apply_column_widths(worksheet: &mut Worksheet, spec: &SheetSpec) -> Result<(), RenderError> {
    match &spec.column_widths {
        ColumnWidths::Fixed(width) => {
            for col in 0..spec.headers.len() {
                worksheet.set_column_width(col as u16, *width)?;
            }
        }
        ColumnWidths::PerColumn(widths) => {
            for (col, width) in widths.iter().enumerate() {
                worksheet.set_column_width(col as u16, *width)?;
            }
        }
        ColumnWidths::Auto => {
            for (col, header) in spec.headers.iter().enumerate() {
                let mut longest = header.chars().count();
                for row in spec.rows.iter().chain(spec.footer.iter()) {
                    if let Some(cell) = row.get(col) {
                        longest = longest.max(cell_display_len(cell));
                    }
                }
                let width = ((longest + 2) as f64).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH);
                worksheet.set_column_width(col as u16, width)?;
            }
        }
    }
    Ok(())
}

fn cell_display_len(cell: &Cell) -> usize {
    match cell {
        Cell::Text(text) => text.chars().count(),
        Cell::Money(value) => format!("R$ {value:.2}").chars().count(),
        Cell::Number(value) => format!("{value}").chars().count(),
    }
}
