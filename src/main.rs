mod analyze;
mod checkout;
mod cli;
mod config;
mod error;
mod github;
mod progress;
mod report;
mod scan;
mod types;

use crate::error::AnalysisError;
use clap::Parser;
use indicatif::MultiProgress;
use secrecy::SecretString;
use tracing::error;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool, multi: &MultiProgress) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer({
            let writer = progress::LogWriter::new(multi.clone());
            move || writer.clone()
        })
        .with_target(false)
        .init();
}

fn run() -> Result<i32, AnalysisError> {
    let cli = cli::Cli::parse();
    let multi = MultiProgress::new();
    init_logging(cli.verbose, cli.quiet, &multi);

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            // over the limit: logged, nothing printed, exit status stays 0
            let num_to_search = match analyze::validate_limit(cmd.num_to_search) {
                Ok(count) => count,
                Err(e) => {
                    error!(requested = cmd.num_to_search, "{}", e);
                    return Ok(exit_code::SUCCESS);
                }
            };

            let cfg = config::load_config(cmd.config.as_deref())?;
            let token = SecretString::from(cmd.github_access_token);
            let host = github::GitHubClient::new(&cfg.github, token);
            let trending =
                github::trending::GitHubTrending::new(&cfg.trending, cfg.github.timeout_secs);
            let cloner = checkout::GitCloner::new(&cfg.clone);
            let analyzer = scan::ImportScanAnalyzer;
            let inspector =
                analyze::inspect::Inspector::new(&host, &cloner, &analyzer, cfg.scan.clone());

            let spinner = progress::spinner(
                &multi,
                format!("Processing {} trending repositories", num_to_search),
                cli.quiet,
            );
            let results = analyze::run(&trending, &inspector, num_to_search);
            spinner.finish_and_clear();
            let results = results?;

            let output_format = match cmd.format {
                cli::ReportFormat::Table => report::OutputFormat::Table,
                cli::ReportFormat::Json => report::OutputFormat::Json,
            };
            let rendered = report::render(&results, output_format)?;
            println!("{rendered}");

            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
