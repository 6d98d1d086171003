//! Expression errors

use thiserror::Error;
use tikzplot_core::PlotError;

/// Error raised while compiling or evaluating an expression
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),

    #[error("unexpected {found} at position {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("expected '(' after function {0}")]
    MissingArgument(String),

    #[error("expected ')' at position {pos}")]
    MissingParen { pos: usize },

    #[error("unknown identifier '{0}' (only x is a variable)")]
    UnknownIdentifier(String),

    #[error("expression nests deeper than {limit} levels")]
    TooDeep { limit: usize },

    #[error("{op} is not finite at x = {x}")]
    NonFinite { op: String, x: f64 },
}

impl ExprError {
    /// Raised by evaluation rather than compilation
    pub fn is_runtime(&self) -> bool {
        matches!(self, ExprError::NonFinite { .. })
    }
}

impl From<ExprError> for PlotError {
    fn from(err: ExprError) -> Self {
        if err.is_runtime() {
            PlotError::evaluation_error(err.to_string())
        } else {
            PlotError::invalid_expression(err.to_string())
        }
    }
}
