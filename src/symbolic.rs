#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use RustedSymbolic::symbolic::symbolic_engine::Expr;
/// let input = "(x + 2) * y - pi";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// // no parentheses are kept when printing
/// assert_eq!(parsed_expression.to_string(), "x + 2 * y - 3.141592653589793");
/// // trailing garbage and unbalanced brackets are rejected
/// assert!(Expr::parse_expression("x + ").is_none());
/// assert!(Expr::parse_expression("(x + 1").is_none());
///  ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) turns a String expression into a symbolic expression
/// 2) differentiates, simplifies and substitutes symbolic expressions
/// 3) evaluates a symbolic expression with a closure resolving variable names
///# Example#
/// ```
/// use RustedSymbolic::symbolic::symbolic_engine::Expr;
/// let input = "x * x + 3 * y";
///   // here you've got symbolic expression
///   let parsed_expression = Expr::parse_expression(input).unwrap();
///   println!(" parsed_expression {}", parsed_expression);
///   // return vec of all arguments
///   let all = parsed_expression.all_arguments_are_variables();
///   assert_eq!(all, vec!["x".to_string(), "y".to_string()]);
///   // differentiate with respect to x
///   let df_dx = parsed_expression.diff("x").unwrap();
///   println!("df_dx = {}", df_dx);
///   // evaluate with a closure, unknown names are NaN
///   let lookup = |name: &str| match name {
///       "x" => 3.0,
///       "y" => 1.0,
///       _ => f64::NAN,
///   };
///   assert_eq!(parsed_expression.eval_with(lookup), 12.0);
///   assert_eq!(df_dx.eval_with(lookup), 6.0);
///   // substitute x = 5 and fold the constants
///   let substituted = parsed_expression.set_variable("x", 5.0).simplify();
///   assert_eq!(substituted.to_string(), "25 + 3 * y");
/// ```
/// Example2#
/// ```
/// use RustedSymbolic::symbolic::symbolic_engine::Expr;
///   let f = Expr::parse_expression("pi + e").unwrap();
///   // no lookup at all: only constants can be evaluated
///   let f_res = f.eval(None);
///   assert!((f_res - 5.859874482).abs() < 1e-8);
///   // division by zero is NaN and stays NaN
///   let g = Expr::parse_expression("1 / 0 + 2").unwrap();
///   assert!(g.eval(None).is_nan());
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
pub mod symbolic_engine_derivatives;
pub mod symbolic_error;
pub mod symbolic_simplify;
///______________________________________________________________________________________________________________________________________________
/// rendering of expressions into fixed-size buffers
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;
