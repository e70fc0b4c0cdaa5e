use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};
pub use root_commands::Commands;

/// Top-level CLI parser for the `dv` binary.
#[derive(Debug, Parser)]
#[command(
    name = "dv",
    version,
    about = "DeepVerify - mock fact-checking for news text and images"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Processing spinner: auto, on, off
    #[arg(long, global = true, default_value = "auto")]
    pub progress: ProgressMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            progress: self.progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    use super::subcommands::AuthCommands;
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["dv", "--format", "table", "--verbose", "home"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Home));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["dv", "home", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["dv", "--format", "xml", "home"]).is_err());
    }

    #[test]
    fn text_accepts_inline_or_file_but_not_both() {
        let cli = Cli::try_parse_from(["dv", "text", "Local bakery wins award"])
            .expect("inline text parses");
        let Commands::Text(args) = cli.command else {
            panic!("expected text command");
        };
        assert_eq!(args.text.as_deref(), Some("Local bakery wins award"));

        let cli = Cli::try_parse_from(["dv", "text", "--file", "story.txt"])
            .expect("file text parses");
        let Commands::Text(args) = cli.command else {
            panic!("expected text command");
        };
        assert_eq!(args.file, Some(PathBuf::from("story.txt")));

        assert!(Cli::try_parse_from(["dv", "text", "inline", "--file", "story.txt"]).is_err());
    }

    #[test]
    fn image_requires_path() {
        assert!(Cli::try_parse_from(["dv", "image"]).is_err());
        let cli = Cli::try_parse_from(["dv", "image", "photo.jpg"]).expect("image parses");
        assert!(matches!(cli.command, Commands::Image(_)));
    }

    #[test]
    fn auth_login_takes_token() {
        let cli = Cli::try_parse_from(["dv", "auth", "login", "--token", "a.b.c"])
            .expect("login parses");
        let Commands::Auth { action: AuthCommands::Login(args) } = cli.command else {
            panic!("expected auth login");
        };
        assert_eq!(args.token.as_deref(), Some("a.b.c"));
    }
}
