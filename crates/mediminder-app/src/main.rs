//! MediMinder terminal front end.
//!
//! Reads one command or question per line from stdin. Free text goes to the
//! assistant; lines starting with `/` drive the medication checklist.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use mediminder_app::config::load_schedule;
use mediminder_app::output::{Output, OutputMode};
use mediminder_app::{AppState, Config};
use mediminder_core::QUICK_QUESTIONS;

/// MediMinder - medication reminders with a health assistant
#[derive(Parser)]
#[command(name = "mediminder")]
#[command(about = "Medication reminders with a rule-based health assistant")]
#[command(version)]
struct Cli {
    /// Simulated assistant reply latency in milliseconds
    #[arg(long, default_value = "1500")]
    reply_latency_ms: u64,

    /// Current adherence streak in days
    #[arg(long, default_value = "7")]
    streak: u32,

    /// JSON file with today's doses: [{"name", "time": "HH:MM", "condition", "taken"?}]
    #[arg(long)]
    schedule: Option<PathBuf>,

    /// Start without the assistant greeting
    #[arg(long)]
    no_greeting: bool,

    /// Emit JSON lines instead of text
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: Level,
}

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Ask(String),
    Take(String),
    Doses,
    Status,
    Quick,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Command::Ask(line.to_string());
        };
        let (name, arg) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        match name {
            "take" => Command::Take(arg.trim().to_string()),
            "doses" => Command::Doses,
            "status" => Command::Status,
            "quick" => Command::Quick,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

const HELP: &str = "Type a health question, or:
  /take N   mark dose N as taken
  /doses    show today's checklist
  /status   show progress and streak
  /quick    list quick questions
  /quit     exit
";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for the transcript
    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load config
    let mut config = Config::default()
        .with_reply_latency(Duration::from_millis(cli.reply_latency_ms))
        .with_streak(cli.streak)
        .with_greeting(!cli.no_greeting);
    if let Some(path) = &cli.schedule {
        config = config.with_schedule(load_schedule(path)?);
    }

    let (mut state, mut notifications) = AppState::new(&config)?;
    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let mut out = Output::stdout(mode);

    info!(
        session_id = %state.session.id(),
        reply_latency_ms = cli.reply_latency_ms,
        "Starting MediMinder"
    );

    for message in state.session.messages() {
        out.message(message)?;
    }
    if mode == OutputMode::Human {
        out.summary(&state.medications.dashboard().summary())?;
        out.help(HELP)?;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        if !stdin_open && !state.session.is_composing() {
            break;
        }

        let composing = state.session.is_composing();
        tokio::select! {
            line = lines.next_line(), if stdin_open => {
                match line? {
                    Some(line) => {
                        if !handle_line(&line, &mut state, &mut out)? {
                            stdin_open = false;
                        }
                    }
                    None => stdin_open = false,
                }
            }
            reply = state.session.next_reply(), if composing => {
                if let Some(message) = reply {
                    out.message(message)?;
                }
            }
            notification = notifications.recv() => {
                match notification {
                    Ok(notification) => out.notification(&notification)?,
                    Err(RecvError::Lagged(n)) => {
                        warn!("Notification channel lagged by {} messages", n);
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        }
    }

    // Flush notifications raised by the last replies
    while let Ok(notification) = notifications.try_recv() {
        out.notification(&notification)?;
    }

    info!("MediMinder stopped");
    Ok(())
}

/// Apply one input line. Returns false when the user asked to quit.
fn handle_line(
    line: &str,
    state: &mut AppState,
    out: &mut Output<std::io::Stdout>,
) -> std::io::Result<bool> {
    match Command::parse(line) {
        Command::Ask(text) => {
            if state.session.submit(&text).is_some() {
                if let Some(message) = state.session.messages().last() {
                    out.message(message)?;
                }
                out.composing(state.session.pending_replies())?;
            }
        }
        Command::Take(arg) => match arg.parse::<usize>() {
            Ok(n) if n >= 1 => {
                let outcome = state.medications.mark_taken(n - 1);
                out.dose_mark(&outcome)?;
            }
            _ => out.error(&format!("'/take' needs a dose number, got '{}'", arg))?,
        },
        Command::Doses => out.doses(state.medications.doses())?,
        Command::Status => out.summary(&state.medications.dashboard().summary())?,
        Command::Quick => out.quick_questions(QUICK_QUESTIONS)?,
        Command::Help => out.help(HELP)?,
        Command::Quit => return Ok(false),
        Command::Unknown(name) => out.error(&format!("unknown command '/{}' (try /help)", name))?,
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/take 2"), Command::Take("2".to_string()));
        assert_eq!(Command::parse("  /doses  "), Command::Doses);
        assert_eq!(Command::parse("/exit"), Command::Quit);
        assert_eq!(Command::parse("/nope"), Command::Unknown("nope".to_string()));
        assert_eq!(
            Command::parse("headache help"),
            Command::Ask("headache help".to_string())
        );
    }

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::try_parse_from(["mediminder"]).unwrap();
        assert_eq!(cli.reply_latency_ms, 1500);
        assert_eq!(cli.streak, 7);
        assert!(!cli.json);
        assert_eq!(cli.log_level, Level::INFO);
    }
}
