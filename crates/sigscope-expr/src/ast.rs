//! Syntax tree and pointwise evaluation.

use std::collections::BTreeSet;

use crate::error::ExprError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    And,
    Or,
}

impl BinOp {
    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinOp::Add => a + b,
            BinOp::Sub => a - b,
            BinOp::Mul => a * b,
            BinOp::Div => a / b,
            BinOp::Rem => a % b,
            BinOp::Pow => a.powf(b),
            BinOp::Lt => indicator(a < b),
            BinOp::Le => indicator(a <= b),
            BinOp::Gt => indicator(a > b),
            BinOp::Ge => indicator(a >= b),
            BinOp::Eq => indicator(a == b),
            BinOp::Ne => indicator(a != b),
            BinOp::And => indicator(a != 0.0 && b != 0.0),
            BinOp::Or => indicator(a != 0.0 || b != 0.0),
        }
    }
}

fn indicator(cond: bool) -> f64 {
    if cond {
        1.0
    } else {
        0.0
    }
}

/// Built-in functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log10,
    Log2,
    Sqrt,
    Abs,
    Sign,
    Floor,
    Ceil,
    Round,
    /// Unit step, 1 for `x >= 0`
    Heaviside,
    /// Unit rectangle, 1 for `|x| <= 0.5`
    Rect,
    /// Normalized sinc, `sin(πx)/(πx)`
    Sinc,
    Min,
    Max,
    Pow,
    Atan2,
}

const FUNCS: &[(&str, Func)] = &[
    ("sin", Func::Sin),
    ("cos", Func::Cos),
    ("tan", Func::Tan),
    ("asin", Func::Asin),
    ("acos", Func::Acos),
    ("atan", Func::Atan),
    ("sinh", Func::Sinh),
    ("cosh", Func::Cosh),
    ("tanh", Func::Tanh),
    ("exp", Func::Exp),
    ("ln", Func::Ln),
    ("log", Func::Ln),
    ("log10", Func::Log10),
    ("log2", Func::Log2),
    ("sqrt", Func::Sqrt),
    ("abs", Func::Abs),
    ("sign", Func::Sign),
    ("floor", Func::Floor),
    ("ceil", Func::Ceil),
    ("round", Func::Round),
    ("heaviside", Func::Heaviside),
    ("step", Func::Heaviside),
    ("u", Func::Heaviside),
    ("rect", Func::Rect),
    ("sinc", Func::Sinc),
    ("min", Func::Min),
    ("max", Func::Max),
    ("pow", Func::Pow),
    ("atan2", Func::Atan2),
];

impl Func {
    /// Case-insensitive lookup by name
    pub fn lookup(name: &str) -> Option<Func> {
        let lower = name.to_ascii_lowercase();
        FUNCS
            .iter()
            .find(|(n, _)| *n == lower)
            .map(|(_, f)| *f)
    }

    pub fn name(self) -> &'static str {
        FUNCS
            .iter()
            .find(|(_, f)| *f == self)
            .map(|(n, _)| *n)
            .unwrap_or("?")
    }

    pub fn arity(self) -> usize {
        match self {
            Func::Min | Func::Max | Func::Pow | Func::Atan2 => 2,
            _ => 1,
        }
    }

    fn apply(self, args: &[f64]) -> f64 {
        let x = args[0];
        match self {
            Func::Sin => x.sin(),
            Func::Cos => x.cos(),
            Func::Tan => x.tan(),
            Func::Asin => x.asin(),
            Func::Acos => x.acos(),
            Func::Atan => x.atan(),
            Func::Sinh => x.sinh(),
            Func::Cosh => x.cosh(),
            Func::Tanh => x.tanh(),
            Func::Exp => x.exp(),
            Func::Ln => x.ln(),
            Func::Log10 => x.log10(),
            Func::Log2 => x.log2(),
            Func::Sqrt => x.sqrt(),
            Func::Abs => x.abs(),
            Func::Sign => {
                if x > 0.0 {
                    1.0
                } else if x < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }
            Func::Floor => x.floor(),
            Func::Ceil => x.ceil(),
            Func::Round => x.round(),
            Func::Heaviside => indicator(x >= 0.0),
            Func::Rect => indicator(x.abs() <= 0.5),
            Func::Sinc => {
                if x == 0.0 {
                    1.0
                } else {
                    let px = std::f64::consts::PI * x;
                    px.sin() / px
                }
            }
            Func::Min => x.min(args[1]),
            Func::Max => x.max(args[1]),
            Func::Pow => x.powf(args[1]),
            Func::Atan2 => x.atan2(args[1]),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Var(String),
    Neg(Box<Expr>),
    Not(Box<Expr>),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Left-associative run `first op1 a op2 b ...`, folded left to right.
    ///
    /// Kept flat so a long sum or product does not produce a deep tree.
    Chain {
        first: Box<Expr>,
        rest: Vec<(BinOp, Expr)>,
    },
    Call {
        func: Func,
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Evaluate with `var` bound to `x`.
    ///
    /// Intermediate infinities and NaNs propagate; the caller decides whether
    /// the final value is acceptable.
    pub fn eval(&self, var: &str, x: f64) -> Result<f64, ExprError> {
        Ok(match self {
            Expr::Number(v) => *v,
            Expr::Var(name) if name == var => x,
            Expr::Var(name) => return Err(ExprError::UnboundVariable(name.clone())),
            Expr::Neg(inner) => -inner.eval(var, x)?,
            Expr::Not(inner) => indicator(inner.eval(var, x)? == 0.0),
            Expr::Binary { op, lhs, rhs } => op.apply(lhs.eval(var, x)?, rhs.eval(var, x)?),
            Expr::Chain { first, rest } => {
                let mut acc = first.eval(var, x)?;
                for (op, rhs) in rest {
                    acc = op.apply(acc, rhs.eval(var, x)?);
                }
                acc
            }
            Expr::Call { func, args } => {
                if args.len() != func.arity() {
                    return Err(ExprError::Arity {
                        name: func.name(),
                        expected: func.arity(),
                        got: args.len(),
                    });
                }
                let values = args
                    .iter()
                    .map(|a| a.eval(var, x))
                    .collect::<Result<Vec<_>, _>>()?;
                func.apply(&values)
            }
        })
    }

    /// Collect every variable name referenced by the tree
    pub fn collect_variables(&self, out: &mut BTreeSet<String>) {
        match self {
            Expr::Number(_) => {}
            Expr::Var(name) => {
                out.insert(name.clone());
            }
            Expr::Neg(inner) | Expr::Not(inner) => inner.collect_variables(out),
            Expr::Binary { lhs, rhs, .. } => {
                lhs.collect_variables(out);
                rhs.collect_variables(out);
            }
            Expr::Chain { first, rest } => {
                first.collect_variables(out);
                for (_, rhs) in rest {
                    rhs.collect_variables(out);
                }
            }
            Expr::Call { args, .. } => {
                for arg in args {
                    arg.collect_variables(out);
                }
            }
        }
    }
}
