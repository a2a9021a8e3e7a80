use crate::commands::{run_analyse, run_recommend, AnalyseArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use recruit_ai::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Recruit AI",
    about = "Screen job applicants and suggest learning paths from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Bucket the applicants of one job offer and print the result
    Analyse(AnalyseArgs),
    /// Look up the learning recommendation for a job title
    Recommend(RecommendArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured model artifact path
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
    /// Override the configured dataset path
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// Experience CSV export merged into the dataset before serving
    #[arg(long)]
    pub(crate) experiences_csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyse(args) => run_analyse(args),
        Command::Recommend(args) => run_recommend(args),
    }
}
