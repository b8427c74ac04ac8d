use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gh-analysis",
    version,
    about = "Score trending GitHub repositories by unused declared dependencies"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clone trending repositories and score their unused requirements
    Analyze(AnalyzeCommand),
}

#[derive(Args)]
pub struct AnalyzeCommand {
    /// The number of repositories to inspect.
    #[arg(short = 'n', long = "num_to_search", allow_negative_numbers = true)]
    pub num_to_search: i64,

    /// Your personal access token from Github.
    #[arg(short = 'g', long = "github_access_token")]
    pub github_access_token: String,

    #[arg(short, long, value_enum, default_value = "table")]
    pub format: ReportFormat,

    /// Extra config file, applied after the global and working-directory ones
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_accepts_short_and_long_options() {
        let cli = Cli::try_parse_from(["gh-analysis", "analyze", "-n", "5", "-g", "tok"])
            .expect("short options should parse");
        let Commands::Analyze(cmd) = cli.command;
        assert_eq!(cmd.num_to_search, 5);
        assert_eq!(cmd.github_access_token, "tok");
        assert!(matches!(cmd.format, ReportFormat::Table));

        let cli = Cli::try_parse_from([
            "gh-analysis",
            "-vv",
            "analyze",
            "--num_to_search",
            "25",
            "--github_access_token",
            "tok",
            "--format",
            "json",
        ])
        .expect("long options should parse");
        assert_eq!(cli.verbose, 2);
        let Commands::Analyze(cmd) = cli.command;
        assert_eq!(cmd.num_to_search, 25);
        assert!(matches!(cmd.format, ReportFormat::Json));
    }

    #[test]
    fn analyze_rejects_non_numeric_count() {
        let parsed = Cli::try_parse_from(["gh-analysis", "analyze", "-n", "many", "-g", "tok"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn analyze_accepts_negative_count() {
        let cli = Cli::try_parse_from(["gh-analysis", "analyze", "-n", "-1", "-g", "tok"])
            .expect("negative count should parse");
        let Commands::Analyze(cmd) = cli.command;
        assert_eq!(cmd.num_to_search, -1);
    }
}
