//! Expression syntax tree

/// AST node
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(f64),
    /// The free variable `x`
    Var,
    BinOp(Box<Expr>, Op, Box<Expr>),
    Neg(Box<Expr>),
    Call(Func, Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Op {
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Pow => "^",
        }
    }
}

/// Built-in functions
///
/// Angles are in degrees, as in pgfplots: `sin(deg(x))` is the sine of `x`
/// radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Deg,
    Rad,
    Sqrt,
    Ln,
    Log10,
    Exp,
    Abs,
}

impl Func {
    pub fn from_name(name: &str) -> Option<Func> {
        let func = match name {
            "sin" => Func::Sin,
            "cos" => Func::Cos,
            "tan" => Func::Tan,
            "asin" => Func::Asin,
            "acos" => Func::Acos,
            "atan" => Func::Atan,
            "deg" => Func::Deg,
            "rad" => Func::Rad,
            "sqrt" => Func::Sqrt,
            "ln" | "log" => Func::Ln,
            "log10" => Func::Log10,
            "exp" => Func::Exp,
            "abs" => Func::Abs,
            _ => return None,
        };
        Some(func)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Asin => "asin",
            Func::Acos => "acos",
            Func::Atan => "atan",
            Func::Deg => "deg",
            Func::Rad => "rad",
            Func::Sqrt => "sqrt",
            Func::Ln => "ln",
            Func::Log10 => "log10",
            Func::Exp => "exp",
            Func::Abs => "abs",
        }
    }

    pub fn apply(&self, v: f64) -> f64 {
        match self {
            Func::Sin => v.to_radians().sin(),
            Func::Cos => v.to_radians().cos(),
            Func::Tan => v.to_radians().tan(),
            Func::Asin => v.asin().to_degrees(),
            Func::Acos => v.acos().to_degrees(),
            Func::Atan => v.atan().to_degrees(),
            Func::Deg => v.to_degrees(),
            Func::Rad => v.to_radians(),
            Func::Sqrt => v.sqrt(),
            Func::Ln => v.ln(),
            Func::Log10 => v.log10(),
            Func::Exp => v.exp(),
            Func::Abs => v.abs(),
        }
    }
}

/// Named constants
pub fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(std::f64::consts::PI),
        "e" => Some(std::f64::consts::E),
        _ => None,
    }
}
