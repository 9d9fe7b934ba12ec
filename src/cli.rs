use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "wellcheck",
    version,
    about = "Self-administered anxiety, depression and stress check-in"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding wellcheck.toml and the default store
    #[arg(long, global = true, default_value = ".")]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the questions and answer options
    Questions(QuestionsCommand),
    /// Score answers without saving them
    Score(ScoreCommand),
    /// Score and save a completed questionnaire
    Submit(SubmitCommand),
    /// Answer the questionnaire interactively, then save it
    Take(TakeCommand),
    /// Show the most recent result
    Results(ResultsCommand),
    /// Show every result with trends
    History(HistoryCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ResponseArgs {
    /// JSON file mapping question id to answer (0-3)
    #[arg(long)]
    pub responses: Option<PathBuf>,

    /// Answer as ID=VALUE, repeatable (overrides the responses file)
    #[arg(short, long = "answer", value_name = "ID=VALUE")]
    pub answers: Vec<String>,
}

#[derive(Args)]
pub struct QuestionsCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ScoreCommand {
    #[command(flatten)]
    pub input: ResponseArgs,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct SubmitCommand {
    #[arg(long)]
    pub user: Option<String>,
    #[command(flatten)]
    pub input: ResponseArgs,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct TakeCommand {
    #[arg(long)]
    pub user: Option<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ResultsCommand {
    #[arg(long)]
    pub user: Option<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct HistoryCommand {
    #[arg(long)]
    pub user: Option<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}
