//! Record filtering.
//!
//! A `FilterSpec` is the conjunction of the filter keys a request actually
//! carried; absent keys impose no constraint. Applying a spec never mutates
//! the input list.

use serde_json::{Map, Value};

/// One constraint over a record field.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Case-insensitive, trimmed equality against the field value.
    Equals { field: String, value: String },
    /// The field must be a boolean set to `true`.
    FlagTrue { field: String },
}

impl Predicate {
    fn matches(&self, record: &Map<String, Value>) -> bool {
        match self {
            Predicate::Equals { field, value } => record
                .get(field)
                .map(|found| normalize_value(found) == normalize(value))
                .unwrap_or(false),
            Predicate::FlagTrue { field } => {
                record.get(field).and_then(Value::as_bool).unwrap_or(false)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    predicates: Vec<Predicate>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality constraint when the filter value is present and
    /// non-blank.
    pub fn equals(self, field: &str, value: Option<&str>) -> Self {
        self.equals_scalar(field, value.map(|v| Value::String(v.to_string())).as_ref())
    }

    /// Equality constraint from a raw JSON scalar (identifiers may arrive as
    /// numbers).
    pub fn equals_scalar(mut self, field: &str, value: Option<&Value>) -> Self {
        let text = match value {
            Some(Value::String(text)) => Some(text.clone()),
            Some(Value::Number(number)) => Some(number.to_string()),
            Some(Value::Bool(flag)) => Some(flag.to_string()),
            _ => None,
        };
        if let Some(text) = text {
            if !text.trim().is_empty() {
                self.predicates.push(Predicate::Equals {
                    field: field.to_string(),
                    value: text,
                });
            }
        }
        self
    }

    /// Require a boolean record field to be `true` when `requested` is set.
    pub fn flag(mut self, field: &str, requested: bool) -> Self {
        if requested {
            self.predicates.push(Predicate::FlagTrue {
                field: field.to_string(),
            });
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, record: &Map<String, Value>) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }

    /// Produce the subset of records satisfying every predicate. The source
    /// list is left untouched.
    pub fn apply(&self, records: &[Value]) -> Vec<Value> {
        if self.predicates.is_empty() {
            return records.to_vec();
        }
        records
            .iter()
            .filter(|record| {
                record
                    .as_object()
                    .map(|fields| self.matches(fields))
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Stringify a scalar for comparison: strings trimmed and lowercased, other
/// scalars in their canonical text form.
fn normalize_value(value: &Value) -> String {
    match value {
        Value::String(text) => normalize(text),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
