//! tradedump binary entry point.

use std::process;

use clap::Parser;

use tradedump::cli::command::{Cli, ColorChoice, Commands, ConfigCommand};
use tradedump::cli::output::{self, OutputConfig};
use tradedump::cli::{config as config_cmd, export, inspect};

fn main() {
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.quiet, cli.verbose));

    let result = match &cli.command {
        Commands::Export(args) => export::execute(args),
        Commands::Inspect(args) => inspect::execute(args),
        Commands::Config(command) => match command {
            ConfigCommand::Init(args) => config_cmd::execute_init(&args.path, args.force),
            ConfigCommand::Show(args) => config_cmd::execute_show(&args.config),
            ConfigCommand::Validate(args) => config_cmd::execute_validate(&args.config),
        },
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        process::exit(1);
    }
}
