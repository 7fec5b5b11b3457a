use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::GlobalFlags;
pub use root_commands::{CheckArgs, Commands};

/// Top-level CLI parser for the `discobase` binary.
///
/// Without a subcommand the interactive manager starts.
#[derive(Debug, Parser)]
#[command(
    name = "discobase",
    version,
    about = "Discobase manager - browse, pause, resume, and delete bot commands and events"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (only warnings and errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Bot project root (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            quiet: self.quiet,
            project: self.project.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["discobase"]).expect("cli should parse");
        assert!(cli.command.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn check_collects_repeated_roles() {
        let cli = Cli::try_parse_from([
            "discobase",
            "check",
            "src/commands/util/ping.js",
            "--user",
            "42",
            "--role",
            "R1",
            "--role",
            "R2",
            "--verbose",
        ])
        .expect("cli should parse");

        assert!(cli.verbose);
        let Some(Commands::Check(args)) = cli.command else {
            panic!("expected check subcommand");
        };
        assert_eq!(args.user, "42");
        assert_eq!(args.roles, vec!["R1".to_string(), "R2".to_string()]);
        assert!(!args.guest);
    }

    #[test]
    fn guest_conflicts_with_roles() {
        let parsed = Cli::try_parse_from([
            "discobase", "check", "a.js", "--user", "1", "--guest", "--role", "R1",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn project_flag_is_global() {
        let cli = Cli::try_parse_from(["discobase", "check", "a.js", "--user", "1", "-p", "/bot"])
            .expect("cli should parse");
        assert_eq!(cli.global_flags().project.as_deref(), Some("/bot"));
    }
}
