//! Recursive-descent parser.
//!
//! Precedence, loosest first:
//!
//! ```text
//! or      := and ("||" and)*
//! and     := cmp ("&&" cmp)*
//! cmp     := add (("<" | "<=" | ">" | ">=" | "==" | "!=") add)*
//! add     := mul (("+" | "-") mul)*
//! mul     := unary (("*" | "/" | "%") unary)*
//! unary   := ("-" | "+" | "!") unary | pow
//! pow     := primary (("^" | "**") unary)?
//! primary := number | ident | ident "(" args ")" | "(" or ")"
//! ```
//!
//! Exponentiation is right-associative and binds tighter than unary minus,
//! so `-t^2` is `-(t^2)` and `2^-n` is `2^(-n)`.
//!
//! Every nested `unary` (parentheses, call arguments, exponents, prefix
//! operators) counts one level; past [`MAX_DEPTH`] parsing stops with
//! [`ExprError::TooDeep`]. Runs of a left-associative operator are iterated,
//! not nested, so `t + t + ... + t` has no length limit.

use std::f64::consts::{E, PI};

use crate::ast::{BinOp, Expr, Func};
use crate::error::ExprError;
use crate::lexer::{lex, Spanned, Tok};

/// Deepest nesting accepted by the parser.
pub const MAX_DEPTH: usize = 128;

pub fn parse(src: &str) -> Result<Expr, ExprError> {
    let tokens = lex(src)?;
    let mut parser = Parser::new(tokens);
    let expr = parser.parse_or()?;
    match parser.bump() {
        None => Ok(expr),
        Some(extra) => Err(ExprError::UnexpectedToken {
            found: extra.tok.describe(),
            expected: "end of expression",
            pos: extra.pos,
        }),
    }
}

struct Parser {
    toks: Vec<Spanned>,
    i: usize,
    depth: usize,
}

impl Parser {
    fn new(toks: Vec<Spanned>) -> Self {
        Self {
            toks,
            i: 0,
            depth: 0,
        }
    }

    /// Source position of the next token, or of the last one at the end.
    fn pos(&self) -> usize {
        self.toks
            .get(self.i)
            .or_else(|| self.toks.last())
            .map_or(0, |s| s.pos)
    }

    fn peek(&self) -> Option<&Tok> {
        self.toks.get(self.i).map(|s| &s.tok)
    }

    fn bump(&mut self) -> Option<Spanned> {
        let tok = self.toks.get(self.i).cloned();
        if tok.is_some() {
            self.i += 1;
        }
        tok
    }

    fn expect(&mut self, want: Tok, expected: &'static str) -> Result<(), ExprError> {
        match self.bump() {
            Some(s) if s.tok == want => Ok(()),
            Some(s) => Err(ExprError::UnexpectedToken {
                found: s.tok.describe(),
                expected,
                pos: s.pos,
            }),
            None => Err(ExprError::UnexpectedEnd { expected }),
        }
    }

    fn chain(first: Expr, rest: Vec<(BinOp, Expr)>) -> Expr {
        if rest.is_empty() {
            return first;
        }
        Expr::Chain {
            first: Box::new(first),
            rest,
        }
    }

    fn parse_or(&mut self) -> Result<Expr, ExprError> {
        let first = self.parse_and()?;
        let mut rest = Vec::new();
        while matches!(self.peek(), Some(Tok::Or)) {
            self.bump();
            rest.push((BinOp::Or, self.parse_and()?));
        }
        Ok(Self::chain(first, rest))
    }

    fn parse_and(&mut self) -> Result<Expr, ExprError> {
        let first = self.parse_cmp()?;
        let mut rest = Vec::new();
        while matches!(self.peek(), Some(Tok::And)) {
            self.bump();
            rest.push((BinOp::And, self.parse_cmp()?));
        }
        Ok(Self::chain(first, rest))
    }

    fn parse_cmp(&mut self) -> Result<Expr, ExprError> {
        let first = self.parse_add()?;
        let mut rest = Vec::new();
        loop {
            let op = match self.peek() {
                Some(Tok::Lt) => BinOp::Lt,
                Some(Tok::Le) => BinOp::Le,
                Some(Tok::Gt) => BinOp::Gt,
                Some(Tok::Ge) => BinOp::Ge,
                Some(Tok::Eq) => BinOp::Eq,
                Some(Tok::Ne) => BinOp::Ne,
                _ => break,
            };
            self.bump();
            rest.push((op, self.parse_add()?));
        }
        Ok(Self::chain(first, rest))
    }

    fn parse_add(&mut self) -> Result<Expr, ExprError> {
        let first = self.parse_mul()?;
        let mut rest = Vec::new();
        loop {
            let op = match self.peek() {
                Some(Tok::Plus) => BinOp::Add,
                Some(Tok::Minus) => BinOp::Sub,
                _ => break,
            };
            self.bump();
            rest.push((op, self.parse_mul()?));
        }
        Ok(Self::chain(first, rest))
    }

    fn parse_mul(&mut self) -> Result<Expr, ExprError> {
        let first = self.parse_unary()?;
        let mut rest = Vec::new();
        loop {
            let op = match self.peek() {
                Some(Tok::Star) => BinOp::Mul,
                Some(Tok::Slash) => BinOp::Div,
                Some(Tok::Percent) => BinOp::Rem,
                _ => break,
            };
            self.bump();
            rest.push((op, self.parse_unary()?));
        }
        Ok(Self::chain(first, rest))
    }

    fn parse_unary(&mut self) -> Result<Expr, ExprError> {
        if self.depth >= MAX_DEPTH {
            return Err(ExprError::TooDeep {
                max: MAX_DEPTH,
                pos: self.pos(),
            });
        }
        self.depth += 1;
        let expr = self.parse_prefixed();
        self.depth -= 1;
        expr
    }

    fn parse_prefixed(&mut self) -> Result<Expr, ExprError> {
        match self.peek() {
            Some(Tok::Minus) => {
                self.bump();
                Ok(Expr::Neg(Box::new(self.parse_unary()?)))
            }
            Some(Tok::Plus) => {
                self.bump();
                self.parse_unary()
            }
            Some(Tok::Not) => {
                self.bump();
                Ok(Expr::Not(Box::new(self.parse_unary()?)))
            }
            _ => self.parse_pow(),
        }
    }

    fn parse_pow(&mut self) -> Result<Expr, ExprError> {
        let base = self.parse_primary()?;
        if matches!(self.peek(), Some(Tok::Caret)) {
            self.bump();
            let exponent = self.parse_unary()?;
            return Ok(Expr::Binary {
                op: BinOp::Pow,
                lhs: Box::new(base),
                rhs: Box::new(exponent),
            });
        }
        Ok(base)
    }

    fn parse_primary(&mut self) -> Result<Expr, ExprError> {
        let Some(Spanned { tok, pos }) = self.bump() else {
            return Err(ExprError::UnexpectedEnd {
                expected: "a value",
            });
        };
        match tok {
            Tok::Number(v) => Ok(Expr::Number(v)),
            Tok::LParen => {
                let inner = self.parse_or()?;
                self.expect(Tok::RParen, "')'")?;
                Ok(inner)
            }
            Tok::Ident(name) if matches!(self.peek(), Some(Tok::LParen)) => {
                self.bump();
                self.parse_call(name)
            }
            Tok::Ident(name) => Ok(match name.as_str() {
                "pi" | "PI" | "Pi" => Expr::Number(PI),
                "e" | "E" => Expr::Number(E),
                _ => Expr::Var(name),
            }),
            other => Err(ExprError::UnexpectedToken {
                found: other.describe(),
                expected: "a value",
                pos,
            }),
        }
    }

    fn parse_call(&mut self, name: String) -> Result<Expr, ExprError> {
        let func = Func::lookup(&name).ok_or(ExprError::UnknownFunction(name))?;
        let mut args = Vec::new();
        if matches!(self.peek(), Some(Tok::RParen)) {
            self.bump();
        } else {
            loop {
                args.push(self.parse_or()?);
                match self.bump() {
                    Some(Spanned { tok: Tok::Comma, .. }) => continue,
                    Some(Spanned { tok: Tok::RParen, .. }) => break,
                    Some(s) => {
                        return Err(ExprError::UnexpectedToken {
                            found: s.tok.describe(),
                            expected: "',' or ')'",
                            pos: s.pos,
                        })
                    }
                    None => return Err(ExprError::UnexpectedEnd { expected: "')'" }),
                }
            }
        }
        if args.len() != func.arity() {
            return Err(ExprError::Arity {
                name: func.name(),
                expected: func.arity(),
                got: args.len(),
            });
        }
        Ok(Expr::Call { func, args })
    }
}
