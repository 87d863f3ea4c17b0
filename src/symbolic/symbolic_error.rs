use crate::symbolic::symbolic_engine::BinOp;
use std::fmt;

/// Error types of the symbolic engine
///
/// Public entry points that follow the sentinel contract (`parse_expression`, `diff`)
/// turn these into `None`; the `try_*` variants hand them to the caller.
#[derive(Debug)]
pub enum SymbolicError {
    /// text is not a complete expression; holds the part left unparsed
    MalformedInput(String),
    /// operator without a differentiation rule
    UnsupportedOperator(BinOp),
    /// character that is not an operator symbol
    UnknownOperator(char),
    /// task document is missing a key or has a value of the wrong kind
    Task(String),
    Io(std::io::Error),
}

impl fmt::Display for SymbolicError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SymbolicError::MalformedInput(rest) => {
                write!(f, "Malformed expression, could not parse: '{}'", rest)
            }
            SymbolicError::UnsupportedOperator(op) => {
                write!(f, "No differentiation rule for operator '{}'", op)
            }
            SymbolicError::UnknownOperator(c) => write!(f, "Unknown operator '{}'", c),
            SymbolicError::Task(msg) => write!(f, "Invalid task: {}", msg),
            SymbolicError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for SymbolicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SymbolicError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SymbolicError {
    fn from(err: std::io::Error) -> Self {
        SymbolicError::Io(err)
    }
}
