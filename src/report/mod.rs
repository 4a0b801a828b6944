//! Tabular report pipeline.
//!
//! Every report endpoint runs the same linear flow: validate the request
//! shape, filter the record list, resolve the selected columns, format the
//! headers, project each record into display cells and hand the result to a
//! renderer. The modules here hold that shared logic; per-report variation
//! (titles, boolean label pairs, header overrides, column widths) is supplied
//! by the handlers as data.

pub mod columns;
pub mod dates;
pub mod filter;
pub mod project;
pub mod validate;


use thiserror::Error;

use crate::render::RenderError;

/// Errors a report request can end in. `InvalidInput` maps to 400,
/// `EmptyResult` to the per-endpoint empty outcome (404 or a 200 notice),
/// everything else to a generic 500.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    EmptyResult(String),
    #[error("falha na consulta externa: {0}")]
    Upstream(String),
    #[error("falha ao gerar documento: {0}")]
    Render(#[from] RenderError),
    #[error("falha de E/S: {0}")]
    Io(#[from] std::io::Error),
}

/// Output backend selector for endpoints that accept a `formato` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Xlsx,
    Pdf,
}

impl ReportFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "xlsx" => Some(Self::Xlsx),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Pdf => "pdf",
        }
    }
}
