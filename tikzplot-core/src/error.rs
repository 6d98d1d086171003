//! Structured errors
//!
//! Errors never abort document generation. A failing function or setting is
//! dropped from the output and the error is reported next to the text,
//! carrying enough context to fix the input.

use serde::{Deserialize, Serialize};

/// Machine-readable error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Expression cannot be compiled at all
    InvalidExpression,
    /// Expression evaluated to a non-finite value
    EvaluationError,
    /// Domain is not `min:max` with `min < max`
    InvalidDomain,
    /// Tangent point is not numeric or lies outside the domain
    InvalidTangentPoint,
    /// No descriptor registered under the id
    UnknownSetting,
    /// Value does not fit the descriptor (variant, bounds or options)
    TypeMismatch,
    /// Configuration document cannot be read
    InvalidConfig,
    Internal,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidExpression => "INVALID_EXPRESSION",
            ErrorKind::EvaluationError => "EVALUATION_ERROR",
            ErrorKind::InvalidDomain => "INVALID_DOMAIN",
            ErrorKind::InvalidTangentPoint => "INVALID_TANGENT_POINT",
            ErrorKind::UnknownSetting => "UNKNOWN_SETTING",
            ErrorKind::TypeMismatch => "TYPE_MISMATCH",
            ErrorKind::InvalidConfig => "INVALID_CONFIG",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Generation continued without one annotation
    Warning,
    /// A fragment was dropped from the output
    Error,
    /// Nothing could be generated
    Fatal,
}

/// Where an error occurred
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Setting id being set or rendered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting: Option<String>,

    /// Position of the function in the function list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<usize>,

    /// Expression text involved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,

    /// Propagation notes
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

/// Structured error reported alongside generated output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotError {
    /// Machine-readable kind
    pub kind: ErrorKind,

    /// Human-readable message
    pub message: String,

    /// Suggestion for fixing the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,

    pub severity: Severity,
}

/// Result alias used across the workspace
pub type PlotResult<T> = Result<T, PlotError>;

impl PlotError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            suggestion: None,
            context: None,
            severity: Severity::Error,
        }
    }

    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set setting context
    pub fn in_setting(mut self, id: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.setting = Some(id.into());
        self
    }

    /// Builder: set function-list position
    pub fn in_function(mut self, index: usize) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.function = Some(index);
        self
    }

    /// Builder: set expression context
    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.expression = Some(expression.into());
        self
    }

    /// Builder: add propagation note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.notes.push(note.into());
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|_| {
            serde_json::json!({ "kind": self.kind.code(), "message": self.message })
        })
    }

    // ========== Common Error Constructors ==========

    pub fn invalid_expression(details: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::InvalidExpression,
            format!("Invalid expression: {}", details.into()),
        )
        .with_suggestion("Use x, numbers, + - * / ^, parentheses and sin, cos, tan, deg, sqrt, ln, log, exp, abs")
    }

    pub fn evaluation_error(details: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::EvaluationError,
            format!("Evaluation error: {}", details.into()),
        )
        .with_suggestion("Check the domain for poles, negative roots or logarithms of non-positive values")
    }

    pub fn invalid_domain(domain: &str, reason: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::InvalidDomain,
            format!("Invalid domain '{}': {}", domain, reason.into()),
        )
        .with_suggestion("Write the domain as min:max with min < max, e.g. -10:10")
    }

    pub fn invalid_tangent_point(point: &str, reason: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::InvalidTangentPoint,
            format!("Invalid tangent point '{}': {}", point, reason.into()),
        )
        .with_suggestion("Use a number inside the function's domain")
        .with_severity(Severity::Warning)
    }

    pub fn unknown_setting(id: &str) -> Self {
        Self::new(ErrorKind::UnknownSetting, format!("Unknown setting: {}", id))
            .with_suggestion("Use catalog() to list available settings")
            .in_setting(id)
    }

    pub fn type_mismatch(id: &str, expected: &str, got: &str) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!("Setting '{}' expects {}, got {}", id, expected, got),
        )
        .in_setting(id)
    }

    pub fn out_of_range(id: &str, value: f64, min: f64, max: f64) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!(
                "Setting '{}' must lie in [{}, {}], got {}",
                id,
                crate::format_number(min),
                crate::format_number(max),
                crate::format_number(value)
            ),
        )
        .in_setting(id)
    }

    pub fn off_step(id: &str, value: f64, min: f64, step: f64) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!(
                "Setting '{}' moves in steps of {} from {}, got {}",
                id,
                crate::format_number(step),
                crate::format_number(min),
                crate::format_number(value)
            ),
        )
        .in_setting(id)
    }

    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::InvalidConfig,
            format!("Invalid configuration: {}", details.into()),
        )
        .with_suggestion("Expected {\"settings\": {id: value}, \"functions\": [...]}")
        .with_severity(Severity::Fatal)
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
            .with_severity(Severity::Fatal)
    }
}

impl std::fmt::Display for PlotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for PlotError {}
