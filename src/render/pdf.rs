//! Paginated PDF table writer on top of `printpdf`.
//!
//! Layout follows the company report: logo and heading block at the top of
//! the first page, then a bordered grid. The vertical cursor is checked
//! against the bottom margin before each row is drawn; when it would run
//! below the margin a fresh page is appended and the cursor resets to the
//! top margin.

use std::io::Cursor;

use printpdf::image_crate::codecs::jpeg::JpegDecoder;
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfLayerReference, Point, Rgb,
};

use super::RenderError;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_X: f32 = 18.0;
/// Cursor reset position on continuation pages.
const TOP_MARGIN: f32 = 30.0;
const BOTTOM_MARGIN: f32 = 25.0;
const ROW_HEIGHT: f32 = 7.0;
const LOGO_WIDTH_MM: f32 = 25.0;
// printpdf places embedded images at 300 dpi unless told otherwise.
const IMAGE_DPI: f32 = 300.0;

/// Description of a paginated table report.
#[derive(Debug, Clone)]
pub struct PdfTableSpec {
    pub org_name: String,
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Optional JPEG logo; decode failures degrade to a logo-less document.
    pub logo_jpeg: Option<Vec<u8>>,
}

/// Render the table into PDF bytes.
pub fn render_table(spec: &PdfTableSpec) -> Result<Vec<u8>, RenderError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(&spec.title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_error)?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);

    if let Some(jpeg) = &spec.logo_jpeg {
        draw_logo(&layer, jpeg);
    }

    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.2, 0.6, None)));
    layer.use_text(&spec.org_name, 16.0, Mm(52.0), Mm(PAGE_HEIGHT - 20.0), &bold);
    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    layer.use_text(&spec.title, 12.0, Mm(52.0), Mm(PAGE_HEIGHT - 27.0), &font);

    let column_count = spec.headers.len().max(1);
    let col_width = (PAGE_WIDTH - MARGIN_X * 2.0) / column_count as f32;

    // Top edge of the header row, below the heading block.
    let mut cursor = PAGE_HEIGHT - 42.0;
    let header_cells: Vec<String> = spec.headers.iter().map(|h| h.to_uppercase()).collect();
    draw_row(&layer, &bold, &header_cells, cursor, col_width, 0.7, 0.8);
    cursor -= ROW_HEIGHT;

    for row in &spec.rows {
        if cursor - ROW_HEIGHT < BOTTOM_MARGIN {
            let (page, page_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            layer = doc.get_page(page).get_layer(page_layer);
            cursor = PAGE_HEIGHT - TOP_MARGIN;
        }
        draw_row(&layer, &font, row, cursor, col_width, 0.85, 0.6);
        cursor -= ROW_HEIGHT;
    }

    doc.save_to_bytes().map_err(pdf_error)
}

fn draw_row(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    cells: &[String],
    top: f32,
    col_width: f32,
    border_gray: f32,
    border_width: f32,
) {
    layer.set_outline_color(Color::Rgb(Rgb::new(border_gray, border_gray, border_gray, None)));
    layer.set_outline_thickness(border_width);
    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));

    for (index, text) in cells.iter().enumerate() {
        let x = MARGIN_X + index as f32 * col_width;
        layer.add_line(cell_border(x, top, col_width));
        layer.use_text(text, 9.0, Mm(x + 1.5), Mm(top - 5.0), font);
    }
}

fn cell_border(x: f32, top: f32, width: f32) -> Line {
    let bottom = top - ROW_HEIGHT;
    Line {
        points: vec![
            (Point::new(Mm(x), Mm(top)), false),
            (Point::new(Mm(x + width), Mm(top)), false),
            (Point::new(Mm(x + width), Mm(bottom)), false),
            (Point::new(Mm(x), Mm(bottom)), false),
        ],
        is_closed: true,
    }
}

fn draw_logo(layer: &PdfLayerReference, jpeg: &[u8]) {
    let image = match JpegDecoder::new(Cursor::new(jpeg))
        .map_err(|e| e.to_string())
        .and_then(|decoder| Image::try_from(decoder).map_err(|e| e.to_string()))
    {
        Ok(image) => image,
        Err(error) => {
            log::warn!("logo inválida, gerando PDF sem imagem: {error}");
            return;
        }
    };

    let natural_width_mm = image.image.width.0 as f32 * 25.4 / IMAGE_DPI;
    let natural_height_mm = image.image.height.0 as f32 * 25.4 / IMAGE_DPI;
    if natural_width_mm <= 0.0 {
        return;
    }
    let scale = LOGO_WIDTH_MM / natural_width_mm;
    let drawn_height = natural_height_mm * scale;

    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(MARGIN_X)),
            translate_y: Some(Mm(PAGE_HEIGHT - 12.0 - drawn_height)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            ..Default::default()
        },
    );
}

fn pdf_error(error: impl std::fmt::Display) -> RenderError {
    RenderError::Pdf(error.to_string())
}
