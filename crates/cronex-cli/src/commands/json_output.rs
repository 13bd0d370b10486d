//! Machine-readable JSON output types for the `--json` flag.

use serde::Serialize;

use cronex_expr::{CronExpression, CronExpressionError, ExpandError, Field};

/// One schedule field in the JSON envelope.
#[derive(Debug, Serialize)]
pub struct FieldOutput {
    /// Field identifier (snake_case).
    pub field: Field,
    /// The raw value exactly as supplied.
    pub raw: String,
    /// Expansion tokens; omitted when the field failed to expand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expansion: Option<Vec<String>>,
}

/// One error entry in the JSON envelope.
#[derive(Debug, Serialize)]
pub struct JsonError {
    /// Stable error kind (e.g. `invalid_range`).
    pub kind: &'static str,
    /// Field the error is scoped to; omitted for construction errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
    /// Human-readable message.
    pub message: String,
}

impl JsonError {
    /// Builds an entry from a field-scoped expansion error.
    pub fn from_expand(err: &ExpandError) -> Self {
        Self {
            kind: err.kind(),
            field: Some(err.field()),
            message: err.to_string(),
        }
    }

    /// Builds an entry from a construction-level error.
    pub fn from_construction(err: &CronExpressionError) -> Self {
        Self {
            kind: "missing_fields",
            field: None,
            message: err.to_string(),
        }
    }
}

/// Top-level JSON envelope printed by `cronex --json`.
#[derive(Debug, Serialize)]
pub struct ExpandOutput {
    /// True when every field expanded.
    pub success: bool,
    /// Per-field results in input order; empty if construction failed.
    pub fields: Vec<FieldOutput>,
    /// One entry per failed field (or one construction error).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
    /// The command string, tokens after the fifth rejoined with spaces.
    pub command: String,
}

impl ExpandOutput {
    /// Builds the envelope from a constructed expression.
    pub fn from_expression(expr: &CronExpression) -> Self {
        let fields = Field::all()
            .iter()
            .map(|field| FieldOutput {
                field: *field,
                raw: expr.raw(*field).to_string(),
                expansion: expr.expansion(*field).map(|t| t.to_vec()),
            })
            .collect();
        let errors = expr.errors().values().map(JsonError::from_expand).collect();
        Self {
            success: expr.is_valid(),
            fields,
            errors,
            command: expr.command().to_string(),
        }
    }

    /// Builds a failure envelope for input that never formed an expression.
    pub fn construction_failure(err: &CronExpressionError) -> Self {
        Self {
            success: false,
            fields: Vec::new(),
            errors: vec![JsonError::from_construction(err)],
            command: String::new(),
        }
    }
}
