#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;

use clap::{Arg, Command};
use ufl_cli::extensions::generate::{GenerateConfig, generate_problem};
use ufl_cli::scientific::matrix::MatrixWriter;

const FACILITIES_ARG_NAME: &str = "facilities";
const CLIENTS_ARG_NAME: &str = "clients";
const SEED_ARG_NAME: &str = "seed";
const MAX_OPENING_COST_ARG_NAME: &str = "max-opening-cost";
const MAX_CONNECTION_COST_ARG_NAME: &str = "max-connection-cost";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Generates random problems in matrix format for testing and benchmarking")
        .arg(
            Arg::new(FACILITIES_ARG_NAME)
                .help("Amount of facilities in generated problem")
                .short('f')
                .long(FACILITIES_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(CLIENTS_ARG_NAME)
                .help("Amount of clients in generated problem")
                .short('c')
                .long(CLIENTS_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies randomization seed to get the same problem on each run")
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MAX_OPENING_COST_ARG_NAME)
                .help("Specifies max opening cost of a facility")
                .long(MAX_OPENING_COST_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MAX_CONNECTION_COST_ARG_NAME)
                .help("Specifies max connection cost between facility and client")
                .long(MAX_CONNECTION_COST_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_generate(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), GenericError> {
    let config = GenerateConfig {
        facilities_size: parse_int_value::<usize>(matches, FACILITIES_ARG_NAME, "facilities")?
            .ok_or("amount of facilities is not set")?,
        clients_size: parse_int_value::<usize>(matches, CLIENTS_ARG_NAME, "clients")?
            .ok_or("amount of clients is not set")?,
        seed: parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?,
        max_opening_cost: parse_float_value::<f64>(matches, MAX_OPENING_COST_ARG_NAME, "max opening cost")?,
        max_connection_cost: parse_float_value::<f64>(matches, MAX_CONNECTION_COST_ARG_NAME, "max connection cost")?,
    };

    let problem = generate_problem(&config)?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out problem"));
    let mut writer = out_writer_func(out_result);

    problem.write_matrix(&mut writer)
}
