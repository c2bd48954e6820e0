use std::io::{self, Write};

use calculator::{logging, BinaryOperator, Calculator, Expression, Number};

use anyhow::{Context as AnyhowContext, Result};

const HEADER: &str = "Calculator Demo";

fn demo_expressions() -> [Expression; 6] {
    use BinaryOperator::*;

    let n = Number::from_i64;
    [
        Expression::BinaryOperator(Add, n(5), n(3)),
        Expression::BinaryOperator(Sub, n(10), n(4)),
        Expression::BinaryOperator(Mul, n(6), n(7)),
        Expression::BinaryOperator(Div, n(15), n(3)),
        Expression::BinaryOperator(Power, n(2), n(8)),
        Expression::SquareRoot(n(25)),
    ]
}

/// Evaluates each expression and prints its line right away, stopping at the
/// first failure.
fn run(
    calc: &Calculator,
    expressions: impl IntoIterator<Item = Expression>,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "{HEADER}")?;
    writeln!(out, "{}", "=".repeat(HEADER.len()))?;

    for expr in expressions {
        let result = calc
            .evaluate(expr)
            .with_context(|| format!("could not evaluate '{expr}'"))?;
        writeln!(out, "{}", expr.with_result(result))?;
    }
    Ok(())
}

fn main() {
    logging::init();

    let stdout = io::stdout();
    if let Err(e) = run(&Calculator::new(), demo_expressions(), &mut stdout.lock()) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
