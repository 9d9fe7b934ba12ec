mod cli;
mod config;
mod error;
mod history;
mod input;
mod prompt;
mod questionnaire;
mod report;
mod scoring;
mod session;
mod store;
mod types;

use crate::error::{Result, WellcheckError};
use crate::questionnaire::{OPTIONS, QUESTIONS};
use crate::report::OutputFormat;
use crate::session::{AssessmentSession, SessionState};
use crate::store::{HistorySource, JsonlStore};
use crate::types::config::{FormatSetting, WellcheckConfig};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const VALIDATION: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

struct Context {
    config: Option<WellcheckConfig>,
    store: JsonlStore,
    quiet: bool,
}

impl Context {
    fn format(&self, requested: Option<cli::ReportFormat>) -> OutputFormat {
        match requested {
            Some(cli::ReportFormat::Json) => OutputFormat::Json,
            Some(cli::ReportFormat::Md) => OutputFormat::Md,
            None => match self.config.as_ref().and_then(WellcheckConfig::output_format) {
                Some(FormatSetting::Json) => OutputFormat::Json,
                Some(FormatSetting::Md) | None => OutputFormat::Md,
            },
        }
    }

    fn user(&self, requested: Option<&str>) -> Result<String> {
        requested
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .or_else(|| self.config.as_ref().and_then(WellcheckConfig::user_id))
            .map(str::to_string)
            .ok_or(WellcheckError::MissingUser)
    }

    fn emit(&self, rendered: &str) {
        if !self.quiet {
            println!("{rendered}");
        }
    }
}

fn run(cli: cli::Cli) -> Result<i32> {
    if !cli.dir.exists() {
        return Err(WellcheckError::PathNotFound(cli.dir.display().to_string()));
    }
    let config = config::load_config(&cli.dir)?;
    if config.is_none() {
        info!(dir = %cli.dir.display(), "no wellcheck.toml found, using defaults");
    }
    let store = JsonlStore::new(config::store_path(&cli.dir, config.as_ref()));
    debug!(store = %store.path().display(), "store resolved");
    let mut ctx = Context {
        config,
        store,
        quiet: cli.quiet,
    };

    match cli.command {
        cli::Commands::Questions(cmd) => {
            let rendered = report::render_questionnaire(QUESTIONS, OPTIONS, ctx.format(cmd.format))?;
            ctx.emit(&rendered);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            let responses = input::collect_responses(
                QUESTIONS,
                cmd.input.responses.as_deref(),
                &cmd.input.answers,
            )?;
            let unanswered = responses.unanswered(QUESTIONS);
            if !unanswered.is_empty() {
                let ids = unanswered
                    .iter()
                    .map(|question| question.id)
                    .collect::<Vec<_>>();
                info!(count = ids.len(), "scoring partial responses");
                if !ctx.quiet {
                    eprintln!(
                        "warning: {} unanswered question(s) scored as 0: {}",
                        ids.len(),
                        ids.join(", ")
                    );
                }
            }
            let result = scoring::assess(&responses, QUESTIONS);
            ctx.emit(&report::render_result(&result, ctx.format(cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Submit(cmd) => {
            let user = ctx.user(cmd.user.as_deref())?;
            let responses = input::collect_responses(
                QUESTIONS,
                cmd.input.responses.as_deref(),
                &cmd.input.answers,
            )?;
            let mut session = AssessmentSession::with_responses(QUESTIONS, responses);
            let record = session.submit(&user, &mut ctx.store)?;
            ctx.emit(&report::render_record(&record, ctx.format(cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Take(cmd) => {
            let user = ctx.user(cmd.user.as_deref())?;
            let mut session = AssessmentSession::new(QUESTIONS);
            // stdout carries only the saved record
            let stdin = std::io::stdin();
            let stderr = std::io::stderr();
            prompt::run_questionnaire(&mut session, &mut stdin.lock(), &mut stderr.lock())?;
            if let SessionState::InProgress { answered } = session.state() {
                info!(answered, "questionnaire ended early");
            }
            let record = session.submit(&user, &mut ctx.store)?;
            ctx.emit(&report::render_record(&record, ctx.format(cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Results(cmd) => {
            let user = ctx.user(cmd.user.as_deref())?;
            let format = ctx.format(cmd.format);
            let rendered = match ctx.store.latest(&user)? {
                Some(record) => report::render_record(&record, format)?,
                None => match format {
                    OutputFormat::Json => "null".to_string(),
                    OutputFormat::Md => report::md::EMPTY_HISTORY.to_string(),
                },
            };
            ctx.emit(&rendered);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::History(cmd) => {
            let user = ctx.user(cmd.user.as_deref())?;
            let records = ctx.store.fetch_history(&user)?;
            let entries = history::timeline(&records);
            ctx.emit(&report::render_history(&entries, ctx.format(cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != exit_code::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_validation() {
                exit_code::VALIDATION
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
