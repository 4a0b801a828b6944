//! Document rendering backends.
//!
//! Handlers describe a report as data (`SheetSpec` for spreadsheets,
//! `PdfTableSpec` for the paginated backend); the writers here own every
//! library-specific styling detail.

pub mod pdf;
pub mod xlsx;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to build spreadsheet: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("failed to build PDF document: {0}")]
    Pdf(String),
}

/// One spreadsheet cell.
#[derive(Debug, Clone)]
pub enum Cell {
    Text(String),
    /// Currency value rendered with the `R$ #,##0.00` number format.
    Money(f64),
    Number(f64),
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

/// Column sizing policy for a sheet.
#[derive(Debug, Clone)]
pub enum ColumnWidths {
    /// Size each column to its longest formatted value, header included,
    /// within a floor and a cap.
    Auto,
    /// Uniform width for every column.
    Fixed(f64),
    PerColumn(Vec<f64>),
}

/// Data-driven description of one worksheet.
#[derive(Debug, Clone)]
pub struct SheetSpec {
    pub name: String,
    /// Merged title row above the header (bold, 18pt, centered).
    pub title: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    /// Summary rows appended after the data (e.g. running totals).
    pub footer: Vec<Vec<Cell>>,
    /// RGB fill behind the header row.
    pub header_fill: u32,
    /// White bold header text, for dark fills.
    pub header_on_dark: bool,
    /// Autofilter across the header row.
    pub autofilter: bool,
    pub column_widths: ColumnWidths,
}

impl SheetSpec {
    /// Plain table with the default light header styling.
    pub fn table(name: &str, headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.to_string(),
            title: None,
            headers,
            rows,
            footer: Vec::new(),
            header_fill: 0xDDDDDD,
            header_on_dark: false,
            autofilter: false,
            column_widths: ColumnWidths::Auto,
        }
    }
}
