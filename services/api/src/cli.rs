use crate::demo::{run_demo, run_quiz, DemoArgs, QuizArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use cyrano::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Cyrano",
    about = "Run the Cyrano dating coach service or score quizzes from the command line",
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
    /// Score a string of A/B answers offline and print the classification
    Quiz(QuizArgs),
    /// Seed an in-memory store, run a scripted quiz session, and print admin stats
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
        Command::Quiz(args) => run_quiz(args),
        Command::Demo(args) => run_demo(args).await,
    }
}
