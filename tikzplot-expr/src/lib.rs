//! tikzplot Expressions
//!
//! Turns a textual single-variable expression into a callable numeric
//! function. The grammar is closed: numbers, the variable `x`, the constants
//! `pi` and `e`, `+ - * / ^`, parentheses and the functions
//! `sin cos tan asin acos atan deg rad sqrt ln log log10 exp abs`.
//!
//! Expressions are written the way pgfplots reads them, so `^` is the power
//! operator and trigonometry works in degrees (`sin(deg(x))`).

mod ast;
mod error;
mod eval;
mod parser;

pub use ast::{Expr, Func, Op};
pub use error::ExprError;
pub use eval::{compile, CompiledExpr};
pub use parser::{parse, MAX_DEPTH};
