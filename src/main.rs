//! Command line front end: sort the integers of a file with a chosen pivot strategy.

use std::process;
use clap::{Arg, ArgAction, Command};
use env_logger::Env;
use log::debug;

use pivot_quicksort::{
    config::SortConfig,
    error::SortResult,
    sort,
};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let result = run();
    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("quicksort: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let matches = build_cli().get_matches();
    let config = parse_config_from_matches(&matches)?;
    debug!("configuration: {:?}", config);

    sort(&config)
}

fn build_cli() -> Command {
    Command::new("quicksort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("quicksort [-v] [-p WORD]... [-o FILE] [--seed N] FILE")
        .about("Sort the integers of a file with quicksort")
        .long_about("Read one integer per line from FILE, sort them with quicksort and print them one per line.\n\nLines that do not start with an integer are skipped. Use '-' to read from stdin.")

        .arg(Arg::new("file")
            .help("Input file (use '-' for stdin)")
            .value_name("FILE"))

        .arg(Arg::new("pivot")
            .short('p')
            .long("pivot")
            .help("Pivot strategy: first, last, median or random")
            .long_help("Pivot strategy: first, last, median or random. Unknown values are reported and ignored; when given more than once the last recognised value wins.")
            .value_name("WORD")
            .action(ArgAction::Append))
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .help("Print the unordered input, the buffer size and the comparison count")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .help("Write result to FILE instead of standard output")
            .value_name("FILE"))
        .arg(Arg::new("seed")
            .long("seed")
            .help("Seed for the random pivot strategy")
            .value_name("N"))
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &clap::ArgMatches) -> SortResult<SortConfig> {
    let mut config = SortConfig::new()
        .with_verbose(matches.get_flag("verbose"))
        .with_input_file(matches.get_one::<String>("file").cloned())
        .with_output_file(matches.get_one::<String>("output").cloned());

    for pivot in matches.get_many::<String>("pivot").unwrap_or_default() {
        config.apply_pivot_flag(pivot);
    }

    if let Some(seed_str) = matches.get_one::<String>("seed") {
        config.set_seed_from_string(seed_str)?;
    }

    config.validate()?;

    Ok(config)
}
