//! # Symbolic Engine Derivatives Module
//!
//! This module extends the symbolic engine with analytical differentiation and
//! numerical evaluation of expression trees.
//!
//! ## Key Methods
//!
//! ### Differentiation
//! - `diff(var: &str)` - analytical derivative, `None` if the tree holds an operator
//!   without a rule
//! - `try_diff(var: &str)` - same, reporting the offending operator
//! - `diff_multi(vars)` - derivatives with respect to several variables at once
//! - `n_th_derivative(var, n)` - repeated differentiation with constant folding in between
//!
//! ### Function evaluation
//! - `eval(lookup)` - post-order numeric walk with an optional variable lookup
//! - `eval_with(closure)`, `eval_from_map(map)`, `eval_const()` - convenience forms
//!
//! ## Interesting Code Features
//!
//! 1. **No shared subtrees**: the product and quotient rules reuse `u` and `v` on both
//!    sides of the result. Every reuse is a fresh `clone()`, so the derivative owns all of
//!    its nodes and outlives the tree it was computed from.
//!
//! 2. **Undefined sentinel**: evaluation never panics. Division by exactly zero and
//!    variables that cannot be resolved give NaN, which then flows through every
//!    following operation.

use crate::symbolic::symbolic_engine::{BinOp, Expr};
use crate::symbolic::symbolic_error::SymbolicError;
use log::warn;
use std::collections::HashMap;

impl Expr {
    /// DIFFERENTIATION

    /// Computes the analytical derivative of the expression with respect to a variable.
    ///
    /// Implements the rules:
    /// - d/dx(c) = 0, d/dx(x) = 1, d/dx(y) = 0
    /// - Sum/difference rule: d/dx(u ± v) = u' ± v'
    /// - Product rule: d/dx(u*v) = u'*v + u*v'
    /// - Quotient rule: d/dx(u/v) = (u'*v - u*v')/(v*v)
    ///
    /// No rule exists for `^`; a tree containing it anywhere gives `None`.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::parse_expression("x * x").unwrap();
    /// let df_dx = f.diff("x").unwrap(); // 1 * x + x * 1
    /// ```
    pub fn diff(&self, var: &str) -> Option<Expr> {
        match self.try_diff(var) {
            Ok(derivative) => Some(derivative),
            Err(err) => {
                warn!("cannot differentiate '{}' by {}: {}", self, var, err);
                None
            }
        }
    }

    /// Same as [`Expr::diff`] but reports which operator had no rule.
    pub fn try_diff(&self, var: &str) -> Result<Expr, SymbolicError> {
        match self {
            Expr::Const(_) => Ok(Expr::Const(0.0)),
            Expr::Var(name) => {
                if name == var {
                    Ok(Expr::Const(1.0))
                } else {
                    Ok(Expr::Const(0.0))
                }
            }
            Expr::Op(op, lhs, rhs) => {
                let du = lhs.try_diff(var)?;
                let dv = rhs.try_diff(var)?;
                match op {
                    BinOp::Add => Ok(du + dv),
                    BinOp::Sub => Ok(du - dv),
                    BinOp::Mul => {
                        let u = *lhs.clone();
                        let v = *rhs.clone();
                        Ok(du * v + u * dv)
                    }
                    BinOp::Div => {
                        let numerator = du * *rhs.clone() - *lhs.clone() * dv;
                        let denominator = *rhs.clone() * *rhs.clone();
                        Ok(numerator / denominator)
                    }
                    BinOp::Pow => Err(SymbolicError::UnsupportedOperator(*op)),
                }
            }
        }
    }

    /// Derivatives with respect to every variable in `all_vars`, in the same order.
    ///
    /// `None` as soon as one of them cannot be computed.
    pub fn diff_multi_args(&self, all_vars: &[&str]) -> Option<Vec<Expr>> {
        all_vars.iter().map(|var| self.diff(var)).collect()
    }

    /// Derivatives with respect to all variables of the expression, sorted by name.
    pub fn diff_multi(&self) -> Option<Vec<Expr>> {
        let vars = self.all_arguments_are_variables();
        let vars: Vec<&str> = vars.iter().map(|s| s.as_str()).collect();
        self.diff_multi_args(&vars)
    }

    /// n-th derivative; constants are folded after every step to keep the tree small.
    pub fn n_th_derivative(&self, var_name: &str, n: usize) -> Option<Expr> {
        let mut expr = self.clone();
        for _ in 0..n {
            expr = expr.diff(var_name)?.simplify();
        }
        Some(expr)
    }

    /// EVALUATION

    /// Evaluates the expression numerically.
    ///
    /// `Var` nodes are resolved through `lookup`; without one they are undefined (NaN).
    /// Both operands of an operator are always evaluated, then the operator is applied
    /// with [`BinOp::apply`], so `x / 0` is NaN rather than a fault.
    pub fn eval(&self, lookup: Option<&dyn Fn(&str) -> f64>) -> f64 {
        match self {
            Expr::Const(val) => *val,
            Expr::Var(name) => match lookup {
                Some(lookup) => lookup(name.as_str()),
                None => f64::NAN,
            },
            Expr::Op(op, lhs, rhs) => {
                let lhs_val = lhs.eval(lookup);
                let rhs_val = rhs.eval(lookup);
                op.apply(lhs_val, rhs_val)
            }
        }
    }

    /// Evaluates with a closure as the variable lookup.
    pub fn eval_with<F>(&self, lookup: F) -> f64
    where
        F: Fn(&str) -> f64,
    {
        let lookup: &dyn Fn(&str) -> f64 = &lookup;
        self.eval(Some(lookup))
    }

    /// Evaluates with variable values taken from a map; missing names are NaN.
    pub fn eval_from_map(&self, values: &HashMap<String, f64>) -> f64 {
        self.eval_with(|name| values.get(name).copied().unwrap_or(f64::NAN))
    }

    /// Evaluates an expression that should contain no variables.
    pub fn eval_const(&self) -> f64 {
        self.eval(None)
    }
}
