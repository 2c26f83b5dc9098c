#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use clap::{Arg, ArgAction, Command};
use std::io::BufReader;
use std::sync::Arc;
use ufl_cli::core::prelude::*;
use ufl_cli::extensions::solve::config::{create_builder_from_config, create_telemetry_mode, read_config};
use ufl_cli::extensions::solve::formats::{get_problem_readers, get_solution_writers};
use ufl_cli::extensions::solve::interruption::create_interruption_quota;

const FORMAT_ARG_NAME: &str = "FORMAT";
const PROBLEM_ARG_NAME: &str = "PROBLEM";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const OUT_FORMAT_ARG_NAME: &str = "out-format";
const TIME_ARG_NAME: &str = "max-time";
const ROUNDS_ARG_NAME: &str = "max-rounds";
const CONFIG_ARG_NAME: &str = "config";
const LOG_ARG_NAME: &str = "log";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves Uncapacitated Facility Location problem")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies the problem type")
                .required(true)
                .value_parser(["matrix", "orlib"])
                .index(1),
        )
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(2))
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_FORMAT_ARG_NAME)
                .help("Specifies the solution output type")
                .long(OUT_FORMAT_ARG_NAME)
                .required(false)
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time algorithm run in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ROUNDS_ARG_NAME)
                .help("Specifies max amount of rounds, it never exceeds amount of facilities")
                .short('r')
                .long(ROUNDS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file, it overrides termination arguments")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
}

/// Runs solver commands.
pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), GenericError> {
    let readers = get_problem_readers();
    let writers = get_solution_writers();

    // required
    let problem_format = get_required_value(matches, FORMAT_ARG_NAME)?;
    let problem_path = get_required_value(matches, PROBLEM_ARG_NAME)?;
    let out_format = get_required_value(matches, OUT_FORMAT_ARG_NAME)?;

    // optional
    let max_time = parse_int_value::<usize>(matches, TIME_ARG_NAME, "max time")?;
    let max_rounds = parse_int_value::<usize>(matches, ROUNDS_ARG_NAME, "max rounds")?;
    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| read_config(BufReader::new(open_file(path, "config"))))
        .transpose()?;
    let is_logging =
        matches.get_flag(LOG_ARG_NAME) || config.as_ref().is_some_and(|config| config.is_logging_enabled());

    let problem_reader =
        readers.get(problem_format).ok_or_else(|| GenericError::from(format!("unknown format: '{problem_format}'")))?;
    let solution_writer = writers
        .get(out_format)
        .ok_or_else(|| GenericError::from(format!("unknown output format: '{out_format}'")))?;

    let problem = problem_reader.0(open_file(problem_path, "problem"))
        .map(Arc::new)
        .map_err(|err| format!("cannot read {problem_format} problem from '{problem_path}': '{err}'"))?;

    let logger: InfoLogger =
        if is_logging { Arc::new(|msg: &str| println!("{msg}")) } else { Arc::new(|_: &str| {}) };
    let environment = Arc::new(Environment::new(Some(create_interruption_quota()), logger.clone()));

    let builder = if let Some(config) = config {
        create_builder_from_config(problem, environment, &config)?
    } else {
        Builder::new(problem, environment)
            .with_max_time(max_time)
            .with_max_rounds(max_rounds)
            .with_telemetry(create_telemetry_mode(is_logging, false, logger))
    };

    let (solution, metrics) =
        builder.build()?.solve().map_err(|err| format!("cannot find solution: '{err}'"))?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out solution"));

    solution_writer.0(&solution, metrics.as_ref(), out_writer_func(out_result))
}
