use std::io;

use clap::Parser;
use lineq::{console, solve_system};

/// lineq solves linear equation systems with complex coefficients using
/// Cramer's rule.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Singularity tolerance for the determinant check. The default of 0
    /// keeps the exact zero comparison.
    #[arg(short, long, default_value_t = 0.0)]
    tolerance: f64,

    /// System dimension n. Skips the interactive dimension prompt.
    #[arg(short, long)]
    size: Option<usize>,
}

fn main() {
    let args = Args::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = stdin.lock();
    let mut writer = stdout.lock();

    let (rows, terms) = match console::read_system(&mut reader, &mut writer, args.size) {
        Ok(system) => system,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };

    match solve_system(rows, &terms, args.tolerance) {
        Ok(solution) => {
            if let Err(e) = console::print_solution(&mut writer, &solution) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
