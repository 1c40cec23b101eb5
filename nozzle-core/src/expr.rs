//! A small expression engine for closed-form relations.
//!
//! This module provides just enough computer algebra to keep the isentropic
//! relations symbolic in `γ` until a value is known:
//!
//! - [`Expr`] trees built with ordinary arithmetic operators,
//! - substitution of a value for a [`Symbol`] with [`Expr::subs`],
//! - constant folding with [`Expr::simplify`],
//! - compilation into a numeric function of one variable with [`Expr::compile`].
//!
//! Folding and evaluation share [`BinaryOp::apply`], so a simplified
//! expression produces bit-for-bit the same values as the expression it came
//! from.
//!
//! # Example
//!
//! ```
//! use nozzle_core::expr::{Expr, Symbol};
//!
//! let x = Symbol::new("x");
//! let a = Symbol::new("a");
//!
//! let expr = (Expr::from(a) - 1.0) * Expr::from(x).pow(2.0);
//! let bound = expr.subs(a, 3.0).simplify();
//! assert_eq!(bound.to_string(), "2 * x^2");
//!
//! let f = bound.compile(x).unwrap();
//! assert_eq!(f.eval(3.0), 18.0);
//! ```

use std::{
    collections::BTreeSet,
    fmt,
    ops::{Add, Div, Mul, Sub},
};

use crate::CompileError;

/// A named symbol standing for a positive real quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    name: &'static str,
}

impl Symbol {
    /// Declares a symbol with the given display name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The binary operations an [`Expr`] can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Applies the operation to two numbers.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
            BinaryOp::Pow => lhs.powf(rhs),
        }
    }

    fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
            BinaryOp::Pow => 3,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => " + ",
            BinaryOp::Sub => " - ",
            BinaryOp::Mul => " * ",
            BinaryOp::Div => " / ",
            BinaryOp::Pow => "^",
        }
    }
}

/// An immutable closed-form expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Constant(f64),
    Symbol(Symbol),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    #[must_use]
    pub fn binary(op: BinaryOp, lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Expr::Binary(op, Box::new(lhs.into()), Box::new(rhs.into()))
    }

    /// Raises this expression to the given power.
    #[must_use]
    pub fn pow(self, exponent: impl Into<Expr>) -> Self {
        Expr::binary(BinaryOp::Pow, self, exponent)
    }

    /// Returns the value if this expression is a constant.
    #[must_use]
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Expr::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the set of symbols appearing in this expression.
    #[must_use]
    pub fn free_symbols(&self) -> BTreeSet<Symbol> {
        let mut symbols = BTreeSet::new();
        self.visit(&mut |expr| {
            if let Expr::Symbol(symbol) = expr {
                symbols.insert(*symbol);
            }
        });
        symbols
    }

    /// Replaces every occurrence of `symbol` with the constant `value`.
    ///
    /// No simplification is performed; call [`Expr::simplify`] afterwards to
    /// fold the resulting constant subexpressions.
    #[must_use]
    pub fn subs(&self, symbol: Symbol, value: f64) -> Self {
        match self {
            Expr::Symbol(s) if *s == symbol => Expr::Constant(value),
            Expr::Constant(_) | Expr::Symbol(_) => self.clone(),
            Expr::Binary(op, lhs, rhs) => {
                Expr::binary(*op, lhs.subs(symbol, value), rhs.subs(symbol, value))
            }
        }
    }

    /// Folds constant subexpressions and removes exact identities.
    ///
    /// Only rewrites that preserve every IEEE 754 result are applied:
    /// `x + 0`, `0 + x`, `x - 0`, `x * 1`, `1 * x`, `x / 1`, `x^1` and `x^0`.
    #[must_use]
    pub fn simplify(&self) -> Self {
        let Expr::Binary(op, lhs, rhs) = self else {
            return self.clone();
        };

        let lhs = lhs.simplify();
        let rhs = rhs.simplify();

        match (op, lhs.as_constant(), rhs.as_constant()) {
            (op, Some(a), Some(b)) => Expr::Constant(op.apply(a, b)),
            (BinaryOp::Add | BinaryOp::Sub, _, Some(b)) if b == 0.0 => lhs,
            (BinaryOp::Add, Some(a), _) if a == 0.0 => rhs,
            (BinaryOp::Mul | BinaryOp::Div, _, Some(b)) if b == 1.0 => lhs,
            (BinaryOp::Mul, Some(a), _) if a == 1.0 => rhs,
            (BinaryOp::Pow, _, Some(b)) if b == 1.0 => lhs,
            (BinaryOp::Pow, _, Some(b)) if b == 0.0 => Expr::Constant(1.0),
            (op, _, _) => Expr::binary(*op, lhs, rhs),
        }
    }

    /// Compiles this expression into a numeric function of `variable`.
    ///
    /// # Errors
    ///
    /// Returns a [`CompileError`] if any other symbol is still free or if a
    /// constant in the expression is not finite.
    pub fn compile(&self, variable: Symbol) -> Result<CompiledExpr, CompileError> {
        if let Some(symbol) = self.free_symbols().into_iter().find(|s| *s != variable) {
            return Err(CompileError::UnboundSymbol { symbol });
        }

        let mut non_finite = None;
        self.visit(&mut |expr| {
            if let Expr::Constant(value) = expr {
                if !value.is_finite() && non_finite.is_none() {
                    non_finite = Some(*value);
                }
            }
        });
        if let Some(value) = non_finite {
            return Err(CompileError::NonFiniteConstant { value });
        }

        Ok(CompiledExpr {
            variable,
            expr: self.clone(),
        })
    }

    fn visit(&self, f: &mut impl FnMut(&Expr)) {
        f(self);
        if let Expr::Binary(_, lhs, rhs) = self {
            lhs.visit(f);
            rhs.visit(f);
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Constant(value) if value.is_sign_negative() => 1,
            Expr::Constant(_) | Expr::Symbol(_) => 4,
            Expr::Binary(op, _, _) => op.precedence(),
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Constant(value)
    }
}

impl From<Symbol> for Expr {
    fn from(symbol: Symbol) -> Self {
        Expr::Symbol(symbol)
    }
}

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait<Expr> for Expr {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                Expr::binary($op, self, rhs)
            }
        }

        impl $trait<f64> for Expr {
            type Output = Expr;

            fn $method(self, rhs: f64) -> Expr {
                Expr::binary($op, self, rhs)
            }
        }

        impl $trait<Expr> for f64 {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                Expr::binary($op, self, rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add, BinaryOp::Add);
impl_binary_operator!(Sub, sub, BinaryOp::Sub);
impl_binary_operator!(Mul, mul, BinaryOp::Mul);
impl_binary_operator!(Div, div, BinaryOp::Div);

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(value) => write!(f, "{value}"),
            Expr::Symbol(symbol) => write!(f, "{symbol}"),
            Expr::Binary(op, lhs, rhs) => {
                let prec = op.precedence();

                // `^` is right associative, the others are left associative.
                let (lhs_parens, rhs_parens) = if *op == BinaryOp::Pow {
                    (lhs.precedence() <= prec, rhs.precedence() < prec)
                } else {
                    let strict = matches!(op, BinaryOp::Sub | BinaryOp::Div);
                    (
                        lhs.precedence() < prec,
                        rhs.precedence() < prec || (strict && rhs.precedence() == prec),
                    )
                };

                write_operand(f, lhs, lhs_parens)?;
                f.write_str(op.symbol())?;
                write_operand(f, rhs, rhs_parens)
            }
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

/// A numeric function of a single variable, produced by [`Expr::compile`].
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpr {
    variable: Symbol,
    expr: Expr,
}

impl CompiledExpr {
    /// Evaluates the function at `x`.
    ///
    /// Results follow IEEE 754 semantics, so poles evaluate to `±∞` or NaN.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        eval(&self.expr, x)
    }

    /// The variable this function was compiled over.
    #[must_use]
    pub fn variable(&self) -> Symbol {
        self.variable
    }

    #[must_use]
    pub fn expression(&self) -> &Expr {
        &self.expr
    }
}

fn eval(expr: &Expr, x: f64) -> f64 {
    match expr {
        Expr::Constant(value) => *value,
        // Compilation guarantees the only free symbol is the variable.
        Expr::Symbol(_) => x,
        Expr::Binary(op, lhs, rhs) => op.apply(eval(lhs, x), eval(rhs, x)),
    }
}
