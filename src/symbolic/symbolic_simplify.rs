//! # Symbolic Expression Simplification Module
//!
//! Constant folding over the expression tree. The walk is post-order: both children
//! of an operator are simplified first, and when both of them turned into constants the
//! operator node itself collapses into a single `Const`.
//!
//! Only constant folding is done. Identities such as `x * 1 = x` or `x + 0 = x` are
//! left alone, so `1 * x + x * 1` stays as it is while `(2 + 3) * x` becomes `5 * x`.
//!
//! Folding uses the same arithmetic as evaluation: `a / 0` folds to NaN, and NaN keeps
//! folding upward through the operators above it.

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    //___________________________________SIMPLIFICATION____________________________________

    /// Returns a constant-folded copy of the expression; `self` is left untouched.
    ///
    /// ## Examples
    ///
    /// - `2 + 2` → `4`
    /// - `(1 + 1) * x` → `2 * x`
    /// - `x * (3 - 1) / 0` → `x * 2 / 0` (the left operand is not constant)
    pub fn simplify(&self) -> Expr {
        let mut simplified = self.clone();
        simplified.simplify_in_place();
        simplified
    }

    /// Folds constants in place, replacing each foldable `Op` node by a `Const`.
    ///
    /// The two discarded children are dropped as soon as the node is overwritten.
    pub fn simplify_in_place(&mut self) {
        let folded = match self {
            Expr::Op(op, lhs, rhs) => {
                lhs.simplify_in_place();
                rhs.simplify_in_place();
                match (lhs.as_const(), rhs.as_const()) {
                    (Some(a), Some(b)) => Some(op.apply(a, b)),
                    _ => None,
                }
            }
            Expr::Const(_) | Expr::Var(_) => None,
        };
        if let Some(value) = folded {
            *self = Expr::Const(value);
        }
    }
}
