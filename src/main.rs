use clap::Parser;
use std::process;

use mobihw::cli::commands::{Cli, Commands};
use mobihw::cli;
use mobihw::config::Config;
use mobihw::logging;

fn main() {
    let cli_args = Cli::parse();
    logging::init_logging(cli_args.verbose);
    let json_output = cli_args.json;
    let config = Config::resolve(cli_args.db);

    let exit_code = match cli_args.command {
        Commands::Char(cmd) => cli::character::run(cmd, &config, json_output),
        Commands::Task(cmd) => cli::task::run(cmd, &config, json_output),
        Commands::Reset { cadence, character } => {
            cli::reset::run(&cadence, character.as_deref(), &config, json_output)
        }
        Commands::Status => cli::status::run(&config, json_output),
        Commands::Barrier { alarm } => cli::barrier::run(alarm.as_deref(), &config, json_output),
        Commands::Watch { interval_secs, ticks } => {
            cli::watch::run(interval_secs, ticks, &config, json_output)
        }
        Commands::Wipe { yes } => cli::wipe::run(yes, &config, json_output),
    };

    process::exit(exit_code);
}
