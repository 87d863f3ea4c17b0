//! # Symbolic Engine Module
//!
//! This module holds the expression tree every other part of the crate works on.
//! An expression is parsed from text once and then transformed by pure tree walks:
//! differentiation, constant folding, substitution, evaluation and rendering back
//! to text.
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! - **Constants**: `Const(f64)` - numerical literals
//! - **Variables**: `Var(VarName)` - named variables resolved at evaluation time
//! - **Operations**: `Op(BinOp, Box<Expr>, Box<Expr>)` - binary arithmetic
//!
//! ### `BinOp` Enum
//! The closed operator set `+ - * / ^`. The parser only produces the first four,
//! `^` can only appear in trees built by hand and is rejected by the differentiator.
//!
//! ### `VarName`
//! Variable name capped at 31 bytes, longer names are cut on construction.
//!
//! ### Key Methods
//! - `set_variable(var, value)` - substitute a variable with a constant
//! - `set_variable_from_map(map)` - substitute many variables at once
//! - `contains_variable(name)` - check whether a variable occurs in the tree
//! - `all_arguments_are_variables()` - sorted list of distinct variable names
//! - `node_count()` - number of nodes in the tree
//!
//! ## Interesting Code Features
//!
//! 1. **Exclusive ownership**: children are `Box<Expr>`, so a tree is never shared and
//!    is released exactly once when dropped. Reusing a subtree means cloning it.
//!
//! 2. **Operator Overloading**: `std::ops` traits build `Op` nodes, so trees can be
//!    written as `x.clone() * x + Expr::Const(3.0)`
//!
//! 3. **No parentheses on output**: `Display` renders `<left> <op> <right>` and never
//!    re-inserts brackets, so printing and re-parsing a tree does not always give the
//!    same shape back.

use crate::symbolic::symbolic_error::SymbolicError;
use itertools::Itertools;
use std::collections::HashMap;
use std::fmt;
use strum_macros::{Display, EnumIter};

/// Longest variable name kept by [`VarName`], in bytes.
pub const MAX_VAR_NAME_LEN: usize = 31;

/// Binary operator of an `Expr::Op` node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum BinOp {
    #[strum(to_string = "+")]
    Add,
    #[strum(to_string = "-")]
    Sub,
    #[strum(to_string = "*")]
    Mul,
    #[strum(to_string = "/")]
    Div,
    /// power; evaluated and folded, never parsed and never differentiated
    #[strum(to_string = "^")]
    Pow,
}

impl BinOp {
    /// Character used for the operator in text form.
    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
            BinOp::Pow => '^',
        }
    }

    /// Applies the operator to two numbers.
    ///
    /// Division by exactly `0.0` gives NaN instead of an infinity, and NaN operands
    /// propagate through every operator.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinOp::Add => a + b,
            BinOp::Sub => a - b,
            BinOp::Mul => a * b,
            BinOp::Div => {
                if b != 0.0 {
                    a / b
                } else {
                    f64::NAN
                }
            }
            BinOp::Pow => a.powf(b),
        }
    }
}

impl TryFrom<char> for BinOp {
    type Error = SymbolicError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(BinOp::Add),
            '-' => Ok(BinOp::Sub),
            '*' => Ok(BinOp::Mul),
            '/' => Ok(BinOp::Div),
            '^' => Ok(BinOp::Pow),
            other => Err(SymbolicError::UnknownOperator(other)),
        }
    }
}

/// Variable name of at most [`MAX_VAR_NAME_LEN`] bytes.
///
/// Longer input is silently truncated, the same way a fixed 32-byte name buffer
/// would keep only its first 31 characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarName(String);

impl VarName {
    pub fn new(name: &str) -> Self {
        let mut end = name.len().min(MAX_VAR_NAME_LEN);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        VarName(name[..end].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VarName {
    fn from(name: &str) -> Self {
        VarName::new(name)
    }
}

impl AsRef<str> for VarName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for VarName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for VarName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for VarName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Symbolic expression tree.
///
/// `Const` and `Var` are leaves, `Op` owns exactly two children. Two trees are equal
/// when they have the same shape and the same values.
///
/// # Examples
/// ```rust, ignore
/// use RustedSymbolic::symbolic::symbolic_engine::{BinOp, Expr};
/// let x = Expr::var("x");
/// let expr = Expr::Op(BinOp::Add, Box::new(x), Box::new(Expr::Const(2.0)));
/// assert_eq!(expr.to_string(), "x + 2");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Numerical constant value
    Const(f64),
    /// Symbolic variable (e.g., "x", "velocity")
    Var(VarName),
    /// Binary operation: left op right
    Op(BinOp, Box<Expr>, Box<Expr>),
}

/// Renders the tree as `<left> <op> <right>` without parentheses.
///
/// Constants use the shortest text that parses back to the same `f64`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Op(op, lhs, rhs) => write!(f, "{} {} {}", lhs, op, rhs),
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Op(BinOp::Add, self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Op(BinOp::Sub, self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Op(BinOp::Mul, self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Op(BinOp::Div, self.boxed(), rhs.boxed())
    }
}

impl Expr {
    /// BASIC FEATURES

    pub fn constant(value: f64) -> Expr {
        Expr::Const(value)
    }

    /// Creates a variable node, truncating the name to 31 bytes.
    pub fn var(name: &str) -> Expr {
        Expr::Var(VarName::new(name))
    }

    pub fn op(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Op(op, lhs.boxed(), rhs.boxed())
    }

    /// Creates power expression self^rhs.
    ///
    /// Only reachable from code: the text grammar has no exponent operator.
    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Op(BinOp::Pow, self.boxed(), rhs.boxed())
    }

    /// Convenience method to wrap expression in Box for recursive structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Returns the value of a `Const` node.
    pub fn as_const(&self) -> Option<f64> {
        match self {
            Expr::Const(val) => Some(*val),
            _ => None,
        }
    }

    /// Checks if expression is exactly zero (constant 0.0).
    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Const(val) if *val == 0.0)
    }

    /// Number of nodes reachable from this one, itself included.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Const(_) | Expr::Var(_) => 1,
            Expr::Op(_, lhs, rhs) => 1 + lhs.node_count() + rhs.node_count(),
        }
    }

    //___________________________________SUBSTITUTION____________________________________

    /// Substitutes a variable with a constant value throughout the expression.
    ///
    /// Returns a full deep copy; `self` is left untouched and stays usable.
    ///
    /// # Arguments
    /// * `var` - Name of the variable to substitute
    /// * `value` - Numerical value to substitute for the variable
    pub fn set_variable(&self, var: &str, value: f64) -> Expr {
        match self {
            Expr::Const(val) => Expr::Const(*val),
            Expr::Var(name) if name == var => Expr::Const(value),
            Expr::Var(name) => Expr::Var(name.clone()),
            Expr::Op(op, lhs, rhs) => Expr::Op(
                *op,
                Box::new(lhs.set_variable(var, value)),
                Box::new(rhs.set_variable(var, value)),
            ),
        }
    }

    /// Substitutes multiple variables with constant values using a HashMap.
    ///
    /// Only variables present in the map are substituted.
    pub fn set_variable_from_map(&self, var_map: &HashMap<String, f64>) -> Expr {
        match self {
            Expr::Var(name) => match var_map.get(name.as_str()) {
                Some(value) => Expr::Const(*value),
                None => Expr::Var(name.clone()),
            },
            Expr::Const(val) => Expr::Const(*val),
            Expr::Op(op, lhs, rhs) => Expr::Op(
                *op,
                Box::new(lhs.set_variable_from_map(var_map)),
                Box::new(rhs.set_variable_from_map(var_map)),
            ),
        }
    }

    /// check if the expression contains a variable
    pub fn contains_variable(&self, var_name: &str) -> bool {
        match self {
            Expr::Var(name) => name == var_name,
            Expr::Const(_) => false,
            Expr::Op(_, left, right) => {
                left.contains_variable(var_name) || right.contains_variable(var_name)
            }
        }
    }

    /// Sorted list of the distinct variable names used in the expression.
    pub fn all_arguments_are_variables(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names.into_iter().sorted().dedup().collect()
    }

    fn collect_variables(&self, names: &mut Vec<String>) {
        match self {
            Expr::Var(name) => names.push(name.to_string()),
            Expr::Const(_) => {}
            Expr::Op(_, lhs, rhs) => {
                lhs.collect_variables(names);
                rhs.collect_variables(names);
            }
        }
    }
}
