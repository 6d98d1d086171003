//! Numerical derivatives and tangent lines

use serde::Serialize;
use tikzplot_core::{format_number, PlotError, PlotResult};
use tikzplot_expr::CompiledExpr;
use tracing::debug;

/// Forward-difference step
///
/// The forward scheme and this fixed step are part of the output: changing
/// either changes every generated tangent and extremum.
pub const STEP: f64 = 1e-4;

/// `(f(x+h) - f(x)) / h` with `h = STEP`
pub fn derivative_of(f: &CompiledExpr, x: f64) -> PlotResult<f64> {
    let slope = (f.eval(x + STEP)? - f.eval(x)?) / STEP;
    if slope.is_finite() {
        Ok(slope)
    } else {
        Err(PlotError::evaluation_error(format!("derivative is not finite at x = {}", x))
            .with_expression(f.source()))
    }
}

/// Derivative estimate of expression text at `x`
pub fn derivative(expression: &str, x: f64) -> PlotResult<f64> {
    derivative_of(&CompiledExpr::compile(expression)?, x)
}

/// Tangent to a curve at one point
///
/// Displays as the linear expression `<slope>*x + <intercept>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TangentLine {
    pub slope: f64,
    pub intercept: f64,
    /// Point of tangency
    pub x0: f64,
    pub y0: f64,
}

impl TangentLine {
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

impl std::fmt::Display for TangentLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}*x + {}",
            format_number(self.slope),
            format_number(self.intercept)
        )
    }
}

pub fn tangent_line_of(f: &CompiledExpr, x0: f64) -> PlotResult<TangentLine> {
    let y0 = f.eval(x0)?;
    let slope = derivative_of(f, x0)?;
    let line = TangentLine {
        slope,
        intercept: y0 - slope * x0,
        x0,
        y0,
    };
    debug!(expression = f.source(), x0, %line, "tangent line");
    Ok(line)
}

/// Tangent line of expression text at `x0`
pub fn tangent_line(expression: &str, x0: f64) -> PlotResult<TangentLine> {
    tangent_line_of(&CompiledExpr::compile(expression)?, x0)
}
