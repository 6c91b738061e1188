use crate::batch::{run_rank, run_score, RankArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use job_match::config::AppConfig;
use job_match::error::AppError;
use job_match::matching::ScoringPolicy;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "job-match",
    about = "Score and rank applicants against job requirements",
    version
)]
struct Cli {
    /// Scoring policy JSON overriding APP_SCORING_POLICY
    #[arg(long, global = true)]
    policy: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score one applicant against one job and print the breakdown
    Score(ScoreArgs),
    /// Rank a pool of applicants for one job
    Rank(RankArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args, cli.policy).await,
        Command::Score(args) => run_score(args, &resolve_policy(cli.policy)?),
        Command::Rank(args) => run_rank(args, &resolve_policy(cli.policy)?),
    }
}

/// An explicit `--policy` file wins over the environment.
pub(crate) fn resolve_policy(path: Option<PathBuf>) -> Result<ScoringPolicy, AppError> {
    match path {
        Some(path) => Ok(ScoringPolicy::from_path(path)?),
        None => Ok(AppConfig::load()?.scoring.policy()?),
    }
}
