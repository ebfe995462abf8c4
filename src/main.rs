use std::f64::consts::{
    E,
    PI
};
use std::process::ExitCode;

use tabfun::configuration::Configuration;
use tabfun::function::basic::exp::Exp;
use tabfun::function::basic::trigonometric::Sin;
use tabfun::integration::integrate;
use tabfun::opts::Opts;
use tabfun::tabulated::backend::Backend;
use tabfun::tabulated::tabulatedfunction::{
    tabulated_eq,
    TabulatedFunction
};
use tabfun::tabulation::binaryformat::{
    read_binary,
    write_binary
};
use tabfun::tabulation::tabulation::{
    tabulate,
    TabulationError
};
use tabfun::tabulation::textformat::{
    read_text,
    write_text
};
use tabfun::task::handoff::run_tasks;

const STEPS: [f64; 3] = [1e-3, 1e-4, 1e-5];

fn exp_convergence() {
    let exact = E - 1.0;
    println!("integral of exp(x) over [0, 1], exact value {}", exact);
    for step in STEPS {
        match integrate(&Exp, 0.0, 1.0, step) {
            Ok(result) => {
                let error = (result - exact).abs();
                println!("  step {:8.5}: result {:.10}, error {:.10}", step, result, error);
                if error < 1e-7 {
                    println!("  step {} is accurate to 7 decimal places", step);
                    break;
                }
            },
            Err(error) => {
                println!("  step {}: {}", step, error);
            }
        }
    }
}

fn sine_table(backend: Backend) -> Result<(), TabulationError> {
    let sampled = tabulate(&Sin, 0.0, PI, 11)?;
    let table = backend.from_points(&sampled.points())?;
    println!("sin(x) tabulated over [0, pi] ({:?}): {}", backend, table);

    let mut binary = Vec::new();
    write_binary(table.as_ref(), &mut binary)?;
    let mut text = Vec::new();
    write_text(table.as_ref(), &mut text)?;
    let from_binary = read_binary(&mut binary.as_slice())?;
    let from_text = read_text(&mut text.as_slice())?;
    println!(
        "  binary {} bytes, round trip {}; text {} bytes, round trip {}",
        binary.len(),
        tabulated_eq(table.as_ref(), &from_binary),
        text.len(),
        tabulated_eq(table.as_ref(), &from_text)
    );

    let area = integrate(&table, 0.0, PI, 1e-3);
    println!("  integral over [0, pi]: {:?} (exact 2)", area);
    Ok(())
}

fn main() -> ExitCode {
    let opts = Opts::parse();
    env_logger::Builder::new().filter_level(opts.log_level).init();

    let mut configuration = match &opts.config {
        Some(path) => match Configuration::from_reader(&path.to_string_lossy()) {
            Ok(configuration) => configuration,
            Err(error) => {
                eprintln!("cannot load {}: {}", path.display(), error);
                return ExitCode::FAILURE;
            }
        },
        None => Configuration::new()
    };
    if let Some(tasks) = opts.tasks {
        configuration = configuration.with_task_count(tasks);
    }

    exp_convergence();
    if let Err(error) = sine_table(opts.backend) {
        eprintln!("sine table: {}", error);
        return ExitCode::FAILURE;
    }

    match run_tasks(&configuration) {
        Ok(reports) => {
            for report in &reports {
                println!("{}", report);
            }
            ExitCode::SUCCESS
        },
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}
