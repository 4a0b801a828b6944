//! Column selection and header formatting.

use serde_json::{Map, Value};

use super::ReportError;

/// Ordered list of selected column keys: the entries mapped to `true`, in
/// the order the selection object declares them. This list is the single
/// source of truth for both the header row and row projection.
pub fn selected_columns(selection: &Map<String, Value>) -> Result<Vec<String>, ReportError> {
    let columns: Vec<String> = selection
        .iter()
        .filter(|(_, flag)| flag.as_bool() == Some(true))
        .map(|(key, _)| key.clone())
        .collect();

    if columns.is_empty() {
        return Err(ReportError::InvalidInput(
            "Nenhuma coluna selecionada.".to_string(),
        ));
    }
    Ok(columns)
}

/// Display label for a raw column key: underscores become spaces and each
/// word is capitalized. Override pairs take precedence over the derived
/// label.
pub fn format_header(key: &str, overrides: &[(&str, &str)]) -> String {
    if let Some((_, label)) = overrides.iter().find(|(raw, _)| *raw == key) {
        return (*label).to_string();
    }
    key.replace('_', " ")
        .to_lowercase()
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_headers(columns: &[String], overrides: &[(&str, &str)]) -> Vec<String> {
    columns
        .iter()
        .map(|column| format_header(column, overrides))
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
