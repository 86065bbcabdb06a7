//! Compares forward Euler with a reference solution from the command line.
//!
//! The program runs the chosen equation twice in one [`Session`], first at the
//! given step size and then at half of it, and prints both top-error tables so
//! the effect of refining the step is visible.
//!
//! # Usage
//!
//! ```text
//! cargo run -p stepwise-compare --example compare -- 1
//! cargo run -p stepwise-compare --example compare -- 3 0.01
//! cargo run -p stepwise-compare --example compare -- 2 0.001 --json
//! cargo run -p stepwise-compare --example compare -- --config run.toml
//! ```
//!
//! Set `RUST_LOG=debug` to see what each run does.

use std::{error::Error, fs};

use stepwise_compare::{Comparison, Equation, Session, SimulationConfig, analysis::ErrorPoint};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|arg| arg == "--json");
    let positional: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|arg| !arg.starts_with("--"))
        .collect();

    let config = if let Some(i) = args.iter().position(|arg| arg == "--config") {
        let Some(path) = args.get(i + 1) else {
            eprintln!("--config needs a path");
            std::process::exit(1);
        };
        SimulationConfig::from_toml_str(&fs::read_to_string(path)?)?
    } else {
        from_args(&positional)
    };

    // Unusable step sizes or precisions fall back to the documented defaults.
    let config = config.with_defaults();
    let refined = SimulationConfig {
        dx: config.dx / 2.0,
        ..config.clone()
    };

    let mut session = Session::new();
    let first = session.run(&config)?;
    let second = session.run(&refined)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&second)?);
    } else {
        print_comparison(&first);
        println!();
        print_comparison(&second);
    }
    Ok(())
}

fn from_args(positional: &[&str]) -> SimulationConfig {
    let equation = match positional.first().map(|s| s.parse::<Equation>()) {
        None => Equation::NegativeLinear,
        Some(Ok(equation)) => equation,
        Some(Err(err)) => {
            eprintln!("{err}");
            eprintln!("Usage: compare [1|2|3 [dx]] [--json] | --config <path> [--json]");
            std::process::exit(1);
        }
    };

    let mut config = SimulationConfig {
        equation,
        ..SimulationConfig::default()
    };
    if let Some(dx) = positional.get(1) {
        config.dx = dx.parse().unwrap_or_else(|_| {
            eprintln!("Invalid step size, expected a number, e.g. 0.01");
            std::process::exit(1);
        });
    }
    config
}

fn print_comparison(comparison: &Comparison) {
    let report = &comparison.report;
    let decimals = report.label_decimals;

    println!(
        "{} vs {} reference, {} trials",
        report.equation,
        report.reference.label(),
        report.trial_count
    );

    if let Some(previous) = &comparison.previous {
        println!("previous top errors:");
        print_table(previous, decimals);
    }
    println!("top errors:");
    print_table(&report.top_errors, decimals);

    println!(
        "zoom [{:.*}, {:.*}] ({} samples)",
        decimals,
        report.zoom.start,
        decimals,
        report.zoom.end,
        report.zoom_labels.len()
    );

    let verdict = &report.verdict;
    println!(
        "max error {:.10} {} tolerance {}",
        verdict.max_error,
        if verdict.passed { "within" } else { "exceeds" },
        verdict.tolerance.value()
    );
}

fn print_table(points: &[ErrorPoint], decimals: usize) {
    for point in points {
        println!("  x = {:>12.*}  error = {:.10}", decimals, point.x, point.error);
    }
}
