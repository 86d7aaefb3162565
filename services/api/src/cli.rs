use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use lendscore::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "LendScore",
    about = "Run and exercise the rule-based credit scoring service from the command line",
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
    /// Score a single application and print the decision record
    Score(ScoreArgs),
    /// Walk through canned applications covering every decision path
    Demo(DemoArgs),
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
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}
