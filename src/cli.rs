use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rui", about = "Personal NixOS Flake Manager")]
#[command(version)]
pub struct Cli {
    /// Set NIXPKGS_ALLOW_UNFREE=1 for the invoked tools
    #[arg(long, global = true)]
    pub allow_unfree: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the Home Manager environment
    Home {
        #[command(subcommand)]
        command: HomeCommands,
    },

    /// Manage the NixOS system
    Os {
        #[command(subcommand)]
        command: OsCommands,
    },

    /// Open the flake in the configured editor
    Edit,

    /// Alias for `home switch`
    #[command(hide = true)]
    Hs(HomeArgs),

    /// Alias for `os switch`
    #[command(hide = true)]
    Osw(OsArgs),
}

#[derive(Subcommand)]
pub enum HomeCommands {
    /// Build and activate the home configuration
    #[command(alias = "sw")]
    Switch(HomeArgs),

    /// Build the home configuration without activating it
    Build(HomeArgs),

    /// Instantiate the home configuration
    Instantiate(HomeArgs),

    /// List home environment generations
    #[command(alias = "gens")]
    Generations(HomeArgs),

    /// List packages installed in the home environment
    #[command(alias = "pkgs")]
    Packages(HomeArgs),

    /// Show Home Manager news entries
    News(NewsArgs),
}

#[derive(Subcommand)]
pub enum OsCommands {
    /// Build and activate the system configuration
    #[command(alias = "sw")]
    Switch(OsArgs),

    /// Build the system configuration and make it the boot default
    Boot(OsArgs),

    /// Activate the system configuration without adding a boot entry
    Test(OsArgs),

    /// Build the system configuration without activating it
    Build(OsArgs),

    /// Show what would change without building anything
    #[command(alias = "dry")]
    DryActivate(OsArgs),

    /// Build a virtual machine running the system configuration
    #[command(alias = "vm")]
    BuildVm(OsArgs),
}

#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct HomeArgs {
    /// Use home-manager even when nh is available
    #[arg(long)]
    pub force_home_manager: bool,

    /// Home Manager user to target (defaults to $USER)
    #[arg(long)]
    pub user: Option<String>,

    /// Extra arguments passed through to the invoked tool
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct NewsArgs {
    /// Select a named flake output for the news feed
    #[arg(long)]
    pub user: Option<String>,

    /// Extra arguments passed through to home-manager
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct OsArgs {
    /// Use nixos-rebuild even when nh is available
    #[arg(long)]
    pub force_nixos_rebuild: bool,

    /// Hostname to target (defaults to the machine hostname)
    #[arg(long)]
    pub hostname: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hs_parses_like_home_switch() {
        let alias = Cli::try_parse_from(["rui", "hs", "--user", "alice"]).unwrap();
        let full = Cli::try_parse_from(["rui", "home", "switch", "--user", "alice"]).unwrap();

        let alias_args = match alias.command {
            Commands::Hs(args) => args,
            _ => panic!("hs did not parse"),
        };
        let full_args = match full.command {
            Commands::Home {
                command: HomeCommands::Switch(args),
            } => args,
            _ => panic!("home switch did not parse"),
        };

        assert_eq!(alias_args, full_args);
    }

    #[test]
    fn test_osw_parses_like_os_switch() {
        let alias = Cli::try_parse_from(["rui", "osw", "--hostname", "box1"]).unwrap();
        let full = Cli::try_parse_from(["rui", "os", "switch", "--hostname", "box1"]).unwrap();

        let alias_args = match alias.command {
            Commands::Osw(args) => args,
            _ => panic!("osw did not parse"),
        };
        let full_args = match full.command {
            Commands::Os {
                command: OsCommands::Switch(args),
            } => args,
            _ => panic!("os switch did not parse"),
        };

        assert_eq!(alias_args, full_args);
    }

    #[test]
    fn test_home_switch_trailing_args() {
        let cli =
            Cli::try_parse_from(["rui", "home", "switch", "--show-trace", "-b", "bak"]).unwrap();
        match cli.command {
            Commands::Home {
                command: HomeCommands::Switch(args),
            } => {
                assert_eq!(args.extra, vec!["--show-trace", "-b", "bak"]);
                assert!(!args.force_home_manager);
            }
            _ => panic!("home switch did not parse"),
        }
    }

    #[test]
    fn test_home_subcommand_aliases() {
        for (alias, canonical) in [("sw", "switch"), ("gens", "generations"), ("pkgs", "packages")]
        {
            let parsed = Cli::try_parse_from(["rui", "home", alias]).unwrap();
            let full = Cli::try_parse_from(["rui", "home", canonical]).unwrap();
            let name = |command: Commands| match command {
                Commands::Home { command } => match command {
                    HomeCommands::Switch(_) => "switch",
                    HomeCommands::Generations(_) => "generations",
                    HomeCommands::Packages(_) => "packages",
                    _ => "other",
                },
                _ => "other",
            };
            assert_eq!(name(parsed.command), name(full.command));
        }
    }

    #[test]
    fn test_allow_unfree_is_global() {
        let cli = Cli::try_parse_from(["rui", "os", "switch", "--allow-unfree"]).unwrap();
        assert!(cli.allow_unfree);
    }
}
