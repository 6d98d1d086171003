//! Tree-walking evaluation of compiled expressions

use crate::ast::{Expr, Op};
use crate::{parser, ExprError};
use tikzplot_core::{PlotError, PlotResult};

/// An expression compiled once and evaluated at many sample points
///
/// Evaluation is pure: the same `x` always yields the same value. Every
/// intermediate result is checked, so a non-finite value surfaces as an
/// `EvaluationError` instead of leaking `NaN` into coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpr {
    source: String,
    ast: Expr,
}

impl CompiledExpr {
    /// Compile expression text, failing with `InvalidExpression`
    pub fn compile(source: &str) -> PlotResult<Self> {
        let ast = parser::parse(source)
            .map_err(|e| PlotError::from(e).with_expression(source))?;
        Ok(Self {
            source: source.to_string(),
            ast,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn ast(&self) -> &Expr {
        &self.ast
    }

    /// Evaluate at `x`, failing with `EvaluationError` on a non-finite result
    pub fn eval(&self, x: f64) -> PlotResult<f64> {
        eval_node(&self.ast, x).map_err(|e| PlotError::from(e).with_expression(&self.source))
    }

    /// View as a plain callable
    pub fn as_fn(&self) -> impl Fn(f64) -> PlotResult<f64> + '_ {
        move |x| self.eval(x)
    }

    /// Whether the expression depends on `x` at all
    pub fn uses_variable(&self) -> bool {
        contains_var(&self.ast)
    }
}

fn contains_var(expr: &Expr) -> bool {
    match expr {
        Expr::Var => true,
        Expr::Num(_) => false,
        Expr::BinOp(l, _, r) => contains_var(l) || contains_var(r),
        Expr::Neg(inner) | Expr::Call(_, inner) => contains_var(inner),
    }
}

fn finite(value: f64, op: impl FnOnce() -> String, x: f64) -> Result<f64, ExprError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExprError::NonFinite { op: op(), x })
    }
}

fn eval_node(expr: &Expr, x: f64) -> Result<f64, ExprError> {
    match expr {
        Expr::Num(n) => Ok(*n),
        Expr::Var => Ok(x),
        Expr::Neg(inner) => Ok(-eval_node(inner, x)?),
        Expr::BinOp(left, op, right) => {
            let l = eval_node(left, x)?;
            let r = eval_node(right, x)?;
            let value = match op {
                Op::Add => l + r,
                Op::Sub => l - r,
                Op::Mul => l * r,
                Op::Div => l / r,
                Op::Pow => l.powf(r),
            };
            finite(value, || format!("{} {} {}", l, op.symbol(), r), x)
        }
        Expr::Call(func, arg) => {
            let v = eval_node(arg, x)?;
            finite(func.apply(v), || format!("{}({})", func.name(), v), x)
        }
    }
}

/// Compile expression text into a callable
pub fn compile(source: &str) -> PlotResult<CompiledExpr> {
    CompiledExpr::compile(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tikzplot_core::ErrorKind;

    fn eval_at(src: &str, x: f64) -> f64 {
        compile(src).unwrap().eval(x).unwrap()
    }

    #[test]
    fn test_eval_polynomial() {
        assert_eq!(eval_at("x^2", 3.0), 9.0);
        assert_eq!(eval_at("2*x^2 - 3*x + 1", 2.0), 3.0);
        assert_eq!(eval_at("-x^2", 3.0), -9.0);
        assert_eq!(eval_at("(-x)^2", 3.0), 9.0);
    }

    #[test]
    fn test_eval_negative_base_integer_power() {
        assert_eq!(eval_at("x^3", -2.0), -8.0);
    }

    #[test]
    fn test_eval_degree_trig() {
        assert!(eval_at("sin(90)", 0.0) > 0.999_999);
        assert!((eval_at("sin(deg(x))", std::f64::consts::FRAC_PI_2) - 1.0).abs() < 1e-12);
        assert!((eval_at("cos(deg(pi))", 0.0) + 1.0).abs() < 1e-12);
        assert!((eval_at("atan(1)", 0.0) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_eval_logs_and_roots() {
        assert!((eval_at("ln(e)", 0.0) - 1.0).abs() < 1e-12);
        assert!((eval_at("log(e^2)", 0.0) - 2.0).abs() < 1e-12);
        assert!((eval_at("log10(1000)", 0.0) - 3.0).abs() < 1e-12);
        assert_eq!(eval_at("sqrt(x)", 16.0), 4.0);
        assert_eq!(eval_at("abs(x)", -2.5), 2.5);
    }

    #[test]
    fn test_division_by_zero_is_evaluation_error() {
        let f = compile("1/x").unwrap();
        let err = f.eval(0.0).unwrap_err();
        assert_eq!(err.kind, ErrorKind::EvaluationError);
        assert_eq!(err.context.unwrap().expression.as_deref(), Some("1/x"));
    }

    #[test]
    fn test_domain_errors_are_evaluation_errors() {
        assert!(compile("sqrt(x)").unwrap().eval(-1.0).unwrap_err().is(ErrorKind::EvaluationError));
        assert!(compile("ln(x)").unwrap().eval(0.0).unwrap_err().is(ErrorKind::EvaluationError));
        assert!(compile("x^0.5").unwrap().eval(-4.0).unwrap_err().is(ErrorKind::EvaluationError));
    }

    #[test]
    fn test_intermediate_infinity_is_caught() {
        // 1/(1/x) would be 0 at x=0 if the inner infinity were allowed through
        assert!(compile("1/(1/x)").unwrap().eval(0.0).is_err());
    }

    #[test]
    fn test_invalid_expression_at_compile_time() {
        let err = compile("x +* 2").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidExpression);
        assert!(compile("").unwrap_err().is(ErrorKind::InvalidExpression));
        assert!(compile("Math.sin(x)").unwrap_err().is(ErrorKind::InvalidExpression));
    }

    #[test]
    fn test_pure_and_repeatable() {
        let f = compile("sin(deg(x)) + x^2").unwrap();
        assert_eq!(f.eval(1.25).unwrap(), f.eval(1.25).unwrap());
        let call = f.as_fn();
        assert_eq!(call(1.25).unwrap(), f.eval(1.25).unwrap());
    }

    #[test]
    fn test_uses_variable() {
        assert!(compile("2*x").unwrap().uses_variable());
        assert!(!compile("2*pi").unwrap().uses_variable());
    }
}
