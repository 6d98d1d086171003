//! Recursive-descent parser for single-variable expressions
//!
//! Grammar (lowest to highest precedence):
//!
//! ```text
//! expr    = term (('+' | '-') term)*
//! term    = unary (('*' | '/') unary)*
//! unary   = ('-' | '+') unary | power
//! power   = primary ('^' unary)?
//! primary = number | 'x' | constant | func '(' expr ')' | '(' expr ')'
//! ```
//!
//! `^` is right associative and binds tighter than unary minus, so `-x^2`
//! is `-(x^2)` and `2^3^2` is `2^9`.
//!
//! Nesting (parentheses, calls, signs, exponents and operator chains) is
//! capped at [`MAX_DEPTH`] levels so evaluation never recurses unboundedly.

use crate::ast::{constant, Expr, Func, Op};
use crate::ExprError;

/// Deepest expression tree the parser will build
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Number(n) => format!("number {}", n),
            Token::Ident(name) => format!("identifier '{}'", name),
            Token::Plus => "'+'".to_string(),
            Token::Minus => "'-'".to_string(),
            Token::Star => "'*'".to_string(),
            Token::Slash => "'/'".to_string(),
            Token::Caret => "'^'".to_string(),
            Token::LParen => "'('".to_string(),
            Token::RParen => "')'".to_string(),
        }
    }
}

/// Token with its byte offset in the source
#[derive(Debug, Clone)]
struct Spanned {
    token: Token,
    pos: usize,
}

fn tokenize(input: &str) -> Result<Vec<Spanned>, ExprError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        let single = match ch {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            '*' => Some(Token::Star),
            '/' => Some(Token::Slash),
            '^' => Some(Token::Caret),
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            _ => None,
        };
        if let Some(token) = single {
            tokens.push(Spanned { token, pos });
            chars.next();
            continue;
        }

        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut literal = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        literal.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }

                // Exponent only when digits follow, so "2e" stays an error
                // instead of swallowing the constant e
                if let Some(&(_, 'e' | 'E')) = chars.peek() {
                    let mut lookahead = chars.clone();
                    lookahead.next();
                    let mut exponent = String::from("e");
                    if let Some(&(_, sign @ ('+' | '-'))) = lookahead.peek() {
                        exponent.push(sign);
                        lookahead.next();
                    }
                    let mut digits = String::new();
                    while let Some(&(_, d)) = lookahead.peek() {
                        if d.is_ascii_digit() {
                            digits.push(d);
                            lookahead.next();
                        } else {
                            break;
                        }
                    }
                    if !digits.is_empty() {
                        literal.push_str(&exponent);
                        literal.push_str(&digits);
                        chars = lookahead;
                    }
                }

                match literal.parse::<f64>() {
                    Ok(n) if n.is_finite() => tokens.push(Spanned {
                        token: Token::Number(n),
                        pos,
                    }),
                    _ => return Err(ExprError::InvalidNumber(literal)),
                }
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut ident = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_alphanumeric() || c == '_' {
                        ident.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Spanned {
                    token: Token::Ident(ident),
                    pos,
                });
            }
            _ => return Err(ExprError::UnexpectedChar { ch, pos }),
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    end: usize,
    depth: usize,
}

impl Parser {
    fn new(tokens: Vec<Spanned>, end: usize) -> Self {
        Parser {
            tokens,
            pos: 0,
            end,
            depth: 0,
        }
    }

    fn descend(&mut self) -> Result<(), ExprError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ExprError::TooDeep { limit: MAX_DEPTH });
        }
        Ok(())
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|s| &s.token)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|s| s.token.clone());
        self.pos += 1;
        token
    }

    /// Source offset of the current token
    fn offset(&self) -> usize {
        self.tokens.get(self.pos).map_or(self.end, |s| s.pos)
    }

    fn unexpected(&self) -> ExprError {
        match self.tokens.get(self.pos) {
            Some(s) => ExprError::UnexpectedToken {
                found: s.token.describe(),
                pos: s.pos,
            },
            None => ExprError::UnexpectedEnd,
        }
    }

    fn expect_rparen(&mut self) -> Result<(), ExprError> {
        if matches!(self.peek(), Some(Token::RParen)) {
            self.advance();
            Ok(())
        } else {
            Err(ExprError::MissingParen { pos: self.offset() })
        }
    }

    // Each chained operator deepens the left-leaning tree by one level
    fn parse_expr(&mut self) -> Result<Expr, ExprError> {
        let depth = self.depth;
        let mut left = self.parse_term()?;

        loop {
            let op = match self.peek() {
                Some(Token::Plus) => Op::Add,
                Some(Token::Minus) => Op::Sub,
                _ => break,
            };
            self.advance();
            self.descend()?;
            let right = self.parse_term()?;
            left = Expr::BinOp(Box::new(left), op, Box::new(right));
        }

        self.depth = depth;
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr, ExprError> {
        let depth = self.depth;
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.peek() {
                Some(Token::Star) => Op::Mul,
                Some(Token::Slash) => Op::Div,
                _ => break,
            };
            self.advance();
            self.descend()?;
            let right = self.parse_unary()?;
            left = Expr::BinOp(Box::new(left), op, Box::new(right));
        }

        self.depth = depth;
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ExprError> {
        self.descend()?;
        let expr = match self.peek() {
            Some(Token::Minus) => {
                self.advance();
                let inner = self.parse_unary()?;
                Expr::Neg(Box::new(inner))
            }
            Some(Token::Plus) => {
                self.advance();
                self.parse_unary()?
            }
            _ => self.parse_power()?,
        };
        self.depth -= 1;
        Ok(expr)
    }

    fn parse_power(&mut self) -> Result<Expr, ExprError> {
        let base = self.parse_primary()?;

        if matches!(self.peek(), Some(Token::Caret)) {
            self.advance();
            let exponent = self.parse_unary()?;
            return Ok(Expr::BinOp(Box::new(base), Op::Pow, Box::new(exponent)));
        }

        Ok(base)
    }

    fn parse_primary(&mut self) -> Result<Expr, ExprError> {
        match self.peek().cloned() {
            Some(Token::Number(n)) => {
                self.advance();
                Ok(Expr::Num(n))
            }
            Some(Token::Ident(name)) => {
                self.advance();
                if name == "x" {
                    return Ok(Expr::Var);
                }
                if let Some(value) = constant(&name) {
                    return Ok(Expr::Num(value));
                }
                let func = Func::from_name(&name).ok_or_else(|| ExprError::UnknownIdentifier(name.clone()))?;
                if !matches!(self.peek(), Some(Token::LParen)) {
                    return Err(ExprError::MissingArgument(name));
                }
                self.advance();
                let arg = self.parse_expr()?;
                self.expect_rparen()?;
                Ok(Expr::Call(func, Box::new(arg)))
            }
            Some(Token::LParen) => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect_rparen()?;
                Ok(inner)
            }
            _ => Err(self.unexpected()),
        }
    }
}

/// Parse an expression string into an AST
pub fn parse(input: &str) -> Result<Expr, ExprError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ExprError::Empty);
    }

    let mut parser = Parser::new(tokens, input.len());
    let expr = parser.parse_expr()?;

    if parser.pos < parser.tokens.len() {
        return Err(parser.unexpected());
    }

    Ok(expr)
}
