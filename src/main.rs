mod action;
mod cli;
mod commands;
mod config;
mod error;
mod notify;
mod runner;

use clap::Parser;

use action::Action;
use cli::{Cli, Commands, HomeCommands, OsCommands};
use config::Config;

fn main() {
    let cli = Cli::parse();
    let config = Config::load();

    if cli.allow_unfree {
        std::env::set_var("NIXPKGS_ALLOW_UNFREE", "1");
    }

    let result = match &cli.command {
        Commands::Home { command } => match command {
            HomeCommands::Switch(args) => commands::home::run(&config, Action::Switch, args),
            HomeCommands::Build(args) => commands::home::run(&config, Action::Build, args),
            HomeCommands::Instantiate(args) => {
                commands::home::run(&config, Action::Instantiate, args)
            }
            HomeCommands::Generations(args) => {
                commands::home::run(&config, Action::Generations, args)
            }
            HomeCommands::Packages(args) => commands::home::run(&config, Action::Packages, args),
            HomeCommands::News(args) => commands::home::news(&config, args),
        },
        Commands::Os { command } => match command {
            OsCommands::Switch(args) => commands::os::run(&config, Action::Switch, args),
            OsCommands::Boot(args) => commands::os::run(&config, Action::Boot, args),
            OsCommands::Test(args) => commands::os::run(&config, Action::Test, args),
            OsCommands::Build(args) => commands::os::run(&config, Action::Build, args),
            OsCommands::DryActivate(args) => commands::os::run(&config, Action::DryActivate, args),
            OsCommands::BuildVm(args) => commands::os::run(&config, Action::BuildVm, args),
        },
        Commands::Edit => commands::edit::run(&config),
        Commands::Hs(args) => commands::home::run(&config, Action::Switch, args),
        Commands::Osw(args) => commands::os::run(&config, Action::Switch, args),
    };

    if let Err(e) = result {
        commands::error(&e.to_string());
        std::process::exit(1);
    }
}
