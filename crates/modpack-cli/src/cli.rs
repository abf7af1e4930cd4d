//! CLI argument parsing using clap.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "modpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Delete existing *.zip files in the working directory before building
    #[arg(long)]
    pub clean: bool,

    /// Enable verbose output and debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["modpack"]).unwrap();
        assert!(!cli.clean);
        assert!(!cli.verbose);
        assert!(!cli.quiet);
        assert!(!cli.json);
    }

    #[test]
    fn test_clean_flag() {
        let cli = Cli::try_parse_from(["modpack", "--clean"]).unwrap();
        assert!(cli.clean);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["modpack", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_unknown_argument_rejected() {
        assert!(Cli::try_parse_from(["modpack", "--cleanup"]).is_err());
        assert!(Cli::try_parse_from(["modpack", "module"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }
}
