#![allow(non_snake_case)]
use RustedSymbolic::Utils::logger::init_logger;
use RustedSymbolic::Utils::task::SymbolicTask;
use RustedSymbolic::symbolic::parse_expr::parse_expression_func;
use RustedSymbolic::symbolic::symbolic_error::SymbolicError;
use std::process::ExitCode;

const DEMO_TASK: &str = "expression
  // product of a polynomial and a constant
  text: (x + 2) * (x - 1) * pi
  diff: x
  substitute: x, 3.0
  simplify: true
  buffer: 24
  loglevel: info
";

fn run(task: &SymbolicTask) -> Result<(), SymbolicError> {
    init_logger(task.loglevel.as_deref());
    println!("task: {}", task.text);
    let report = task.run()?;
    println!("{}", report);
    Ok(())
}

fn demo() -> Result<(), SymbolicError> {
    let task = SymbolicTask::from_str(DEMO_TASK)?;
    run(&task)?;

    // the same pipeline by hand, with a closure resolving the variables
    let parsed_expression = parse_expression_func("x * y / (x + y)")?;
    let df_dx = parsed_expression.try_diff("x")?;
    let lookup = |name: &str| match name {
        "x" => 1.0,
        "y" => 2.0,
        _ => f64::NAN,
    };
    println!(
        "f = {}, df/dx = {}, f(1, 2) = {}, df/dx(1, 2) = {}",
        parsed_expression,
        df_dx,
        parsed_expression.eval_with(lookup),
        df_dx.eval_with(lookup)
    );
    Ok(())
}

fn main() -> ExitCode {
    let result = match std::env::args().nth(1) {
        Some(path) => SymbolicTask::from_file(&path).and_then(|task| run(&task)),
        None => demo(),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
