//! A command line interface to *Uncapacitated Facility Location* solver.
//!
//! ## Usage
//!
//! - solve a problem in **matrix** format:
//!
//!     `ufl solve matrix problem.txt --max-rounds 100 --log`
//!
//! - solve a problem from **OR-Library** using configuration file, writing json solution to the file:
//!
//!     `ufl solve orlib cap71.txt --config config.json --out-format json -o cap71.json`
//!
//! - generate a random problem:
//!
//!     `ufl generate -f 50 -c 200 --seed 42 -o random.txt`
//!
//! For more details, simply run
//!
//!     ufl --help

mod commands;

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod cli {
    use super::commands::create_write_buffer;
    use super::commands::generate::{get_generate_app, run_generate};
    use super::commands::solve::{get_solve_app, run_solve};
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Uncapacitated Facility Location Solver")
            .version(env!("CARGO_PKG_VERSION"))
            .author("Ilya Builuk <ilya.builuk@gmail.com>")
            .about("A command line interface to Uncapacitated Facility Location solver")
            .subcommand(get_solve_app())
            .subcommand(get_generate_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        let result = match arg_matches.subcommand() {
            Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
            Some(("generate", generate_matches)) => run_generate(generate_matches, create_write_buffer),
            _ => Err("no subcommand was used. Use -h to print help information.".into()),
        };

        if let Err(err) = result {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn main() {
    let matches = cli::get_app().get_matches();

    cli::run_subcommand(matches);
}
