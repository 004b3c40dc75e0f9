use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use mathgame::quiz::constants::INVALID_EXPRESSION_MESSAGE;
use mathgame::{Evaluator, QuestionGenerator, Session, Signal};
use rand::Rng;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Math Game - answer arithmetic questions in the terminal
#[derive(Parser, Debug)]
#[command(name = "mathgame")]
#[command(about = "Answer random arithmetic questions and keep score")]
#[command(version)]
pub struct CliArgs {
    /// Seed for reproducible questions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with this expression instead of a random question
    #[arg(short, long, value_name = "EXPR")]
    pub question: Option<String>,

    /// Ring the terminal bell on wrong answers
    #[arg(long)]
    pub bell: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub seed: Option<u64>,
    pub question: Option<String>,
    pub bell: bool,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    Ok(CliConfig::from(CliArgs::parse()))
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        CliConfig {
            seed: args.seed,
            question: args.question,
            bell: args.bell,
            log_level: args.log_level,
        }
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

const HELP: &str = "\
Commands:
  <number>         answer the current question
  new, n           ask a new question
  custom, c <expr> use your own expression as the next question
  score, s         show the score
  help, h          show this help
  quit, q          end the game";

/// One line of player input
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Empty,
    Answer(String),
    New,
    Custom(String),
    Score,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Command::Empty;
        }

        let (head, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (trimmed, ""),
        };

        match head.to_ascii_lowercase().as_str() {
            "c" | "custom" => Command::Custom(rest.to_string()),
            "n" | "new" if rest.is_empty() => Command::New,
            "s" | "score" if rest.is_empty() => Command::Score,
            "h" | "help" if rest.is_empty() => Command::Help,
            "q" | "quit" | "exit" if rest.is_empty() => Command::Quit,
            _ => Command::Answer(trimmed.to_string()),
        }
    }
}

fn print_question<R: Rng, E: Evaluator, W: Write>(
    session: &Session<R, E>,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "Question: {}", session.current_question().text())?;
    Ok(())
}

/// Play until the input ends or the player quits
pub fn play<R: Rng, E: Evaluator, I: BufRead, W: Write>(
    session: &mut Session<R, E>,
    input: I,
    output: &mut W,
    bell: bool,
) -> Result<()> {
    writeln!(output, "Math Game (type 'help' for commands)")?;
    writeln!(output, "Score: {}", session.score())?;
    print_question(session, output)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let command = Command::parse(&line);
        debug!("Command: {:?}", command);

        match command {
            Command::Empty => continue,
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Score => writeln!(output, "Score: {}", session.score())?,
            Command::New => {
                session.new_question()?;
                print_question(session, output)?;
            }
            Command::Custom(expression) => match session.submit_custom(&expression).map(|_| ()) {
                Ok(()) => print_question(session, output)?,
                Err(e) => writeln!(
                    output,
                    "{} ({})",
                    session.feedback().unwrap_or(INVALID_EXPRESSION_MESSAGE),
                    e
                )?,
            },
            Command::Answer(answer) => {
                let outcome = session.submit_answer(&answer);
                if bell && outcome.verdict().signal() == Signal::Error {
                    write!(output, "\x07")?;
                }
                writeln!(output, "{}", outcome.message)?;
                writeln!(output, "Score: {}", session.score())?;
            }
        }
    }

    writeln!(output, "Final score: {}", session.score())?;
    output.flush()?;
    Ok(())
}

/// Build the session, starting from `--question` when given
pub fn start_session(config: &CliConfig) -> Result<Session> {
    let generator = match config.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            QuestionGenerator::seeded(seed)
        }
        None => QuestionGenerator::new(),
    };
    let mut session = Session::new(generator).context("Failed to start the game")?;

    if let Some(expression) = &config.question {
        info!("Starting with custom question '{}'", expression);
        session
            .submit_custom(expression)
            .context("Invalid custom question")?;
    }

    Ok(session)
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    let mut session = start_session(&config)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    play(&mut session, stdin.lock(), &mut stdout.lock(), config.bell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play_lines(seed: u64, script: &str, bell: bool) -> String {
        let mut output = Vec::new();
        let session = Session::new(QuestionGenerator::seeded(seed));
        assert!(session.is_ok());
        if let Ok(mut session) = session {
            let result = play(&mut session, Cursor::new(script), &mut output, bell);
            assert!(result.is_ok());
        }
        String::from_utf8_lossy(&output).into_owned()
    }

    #[test]
    fn test_command_parsing() {
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse(" 42 "), Command::Answer("42".to_string()));
        assert_eq!(Command::parse("n"), Command::New);
        assert_eq!(Command::parse("NEW"), Command::New);
        assert_eq!(Command::parse("s"), Command::Score);
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(
            Command::parse("custom (1 + 2) * 3"),
            Command::Custom("(1 + 2) * 3".to_string())
        );
        assert_eq!(Command::parse("c 2+2"), Command::Custom("2+2".to_string()));
        assert_eq!(Command::parse("custom"), Command::Custom(String::new()));
        assert_eq!(
            Command::parse("new york"),
            Command::Answer("new york".to_string())
        );
    }

    #[test]
    fn test_play_custom_question_and_answer() {
        let output = play_lines(1, "custom 6 * 7\n42\n41\nq\n", false);
        assert!(output.contains("Question: 6 * 7"));
        assert!(output.contains("Correct! 🎉"));
        assert!(output.contains("Incorrect. The answer was 42"));
        assert!(output.contains("Final score: 1"));
    }

    #[test]
    fn test_play_rejects_invalid_custom_question() {
        let output = play_lines(2, "custom 6 * 7\ncustom 10 / 0\n42\n", false);
        assert!(output.contains("Invalid mathematical expression (Division by zero)"));
        assert!(output.contains("Correct! 🎉"));
        assert!(output.contains("Final score: 1"));
    }

    #[test]
    fn test_play_stops_at_quit() {
        let output = play_lines(3, "custom 1 + 1\nquit\n2\n", false);
        assert!(!output.contains("Correct!"));
        assert!(output.contains("Final score: 0"));
    }

    #[test]
    fn test_play_new_question() {
        let output = play_lines(4, "new\n", false);
        assert_eq!(output.matches("Question: ").count(), 2);
    }

    #[test]
    fn test_play_bell_on_wrong_answer() {
        let output = play_lines(5, "custom 2 + 2\n5\n", true);
        assert!(output.contains("\x07Incorrect. The answer was 4"));

        let quiet = play_lines(5, "custom 2 + 2\n5\n", false);
        assert!(!quiet.contains('\x07'));
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["mathgame", "--seed", "7", "-q", "2 + 2", "--bell"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.seed, Some(7));
            assert_eq!(args.question.as_deref(), Some("2 + 2"));
            assert!(args.bell);
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    fn config_from(argv: &[&str]) -> Option<CliConfig> {
        CliArgs::try_parse_from(argv.iter().copied()).ok().map(CliConfig::from)
    }

    #[test]
    fn test_start_session_with_custom_question() {
        let config = config_from(&["mathgame", "--seed", "3", "-q", "6 * 7"]);
        assert!(config.is_some());
        if let Some(config) = config {
            let session = start_session(&config);
            assert!(session.is_ok());
            if let Ok(session) = session {
                assert_eq!(session.current_question().text(), "6 * 7");
                assert_eq!(session.current_question().expected_answer(), 42.0);
            }
        }
    }

    #[test]
    fn test_start_session_rejects_invalid_custom_question() {
        let config = config_from(&["mathgame", "-q", "2 +"]);
        assert!(config.is_some());
        if let Some(config) = config {
            assert_eq!(config.question.as_deref(), Some("2 +"));
            let result = start_session(&config);
            assert!(result.is_err());
            if let Err(e) = result {
                assert_eq!(e.to_string(), "Invalid custom question");
                assert!(format!("{:#}", e).contains("Unexpected end of expression"));
            }
        }
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
