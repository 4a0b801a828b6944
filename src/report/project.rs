//! Row projection: one record plus the ordered column list becomes an
//! ordered list of display strings.

use serde_json::{Map, Value};

/// Label pair substituted for boolean values. The pair is chosen by the
/// report, never inferred from the data.
#[derive(Debug, Clone, Copy)]
pub struct BoolLabels {
    pub when_true: &'static str,
    pub when_false: &'static str,
}

pub const SIM_NAO: BoolLabels = BoolLabels {
    when_true: "Sim",
    when_false: "Não",
};

pub const ATIVO_INATIVO: BoolLabels = BoolLabels {
    when_true: "Ativo",
    when_false: "Inativo",
};

/// Maximum cell text length on fixed-width (PDF) targets.
pub const PDF_TEXT_LIMIT: usize = 30;

/// Display text for one scalar field value. Missing and null fields become
/// the empty string, never a literal "null".
pub fn display_scalar(value: Option<&Value>, labels: BoolLabels) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Bool(true)) => labels.when_true.to_string(),
        Some(Value::Bool(false)) => labels.when_false.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(other) => other.to_string(),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RowProjector {
    labels: BoolLabels,
    max_len: Option<usize>,
}

impl RowProjector {
    pub fn new(labels: BoolLabels) -> Self {
        Self {
            labels,
            max_len: None,
        }
    }

    /// Projector for fixed-width targets; cells longer than `max_len`
    /// characters are cut and marked with an ellipsis.
    pub fn truncated(labels: BoolLabels, max_len: usize) -> Self {
        Self {
            labels,
            max_len: Some(max_len),
        }
    }

    /// Project one record through the ordered column list. Each output cell
    /// depends only on the record field named by the matching column.
    pub fn project(&self, record: &Map<String, Value>, columns: &[String]) -> Vec<String> {
        columns
            .iter()
            .map(|column| self.cell(record.get(column)))
            .collect()
    }

    fn cell(&self, value: Option<&Value>) -> String {
        let text = display_scalar(value, self.labels);
        match self.max_len {
            Some(limit) => truncate(&text, limit),
            None => text,
        }
    }
}

/// Shorten text to `limit` characters, appending an ellipsis marker when a
/// cut happened.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{cut}...")
}
