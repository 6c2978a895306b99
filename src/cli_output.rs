// Progress output for desktop-file generation
use colored::Colorize;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};

/// Width the `[pkgname]` column is padded to
const PACKAGE_COLUMN: usize = 32;

/// Output mode for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Colored progress lines
    Human,
    /// Machine-readable JSON lines
    Json,
    /// Plain text without colors (for pipes/logs)
    Plain,
    /// Nothing on stdout
    Quiet,
}

impl OutputMode {
    /// Pick a mode from the command-line switches and the environment
    pub fn detect(quiet: bool, no_color: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if std::env::var("GENDESK_JSON").is_ok() {
            Self::Json
        } else if no_color || !io::stdout().is_terminal() {
            Self::Plain
        } else {
            Self::Human
        }
    }
}

/// How a step ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// Step finished
    Ok,
    /// Something was fetched over the network
    Downloaded,
    /// Step didn't produce anything, a fallback follows
    Missing,
    /// A fallback was used
    Fallback,
    /// Step was not needed
    Skipped,
    Failed,
}

impl StepStatus {
    fn label(&self) -> &'static str {
        match self {
            StepStatus::Ok | StepStatus::Downloaded => "ok",
            StepStatus::Missing => "no",
            StepStatus::Fallback => "yes",
            StepStatus::Skipped => "skipped",
            StepStatus::Failed => "failed",
        }
    }
}

/// Structured progress update
#[derive(Debug, Clone, Serialize)]
struct StepEvent<'a> {
    package: &'a str,
    stage: &'a str,
    status: Option<StepStatus>,
}

/// CLI output writer with mode awareness
pub struct OutputWriter {
    mode: OutputMode,
}

impl OutputWriter {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    fn padding(package: &str) -> String {
        " ".repeat(PACKAGE_COLUMN.saturating_sub(package.len()))
    }

    /// Line for a step, left open until [`OutputWriter::end`]
    pub fn begin(&self, package: &str, stage: &str) {
        match self.mode {
            OutputMode::Human => {
                print!(
                    "{}{}{}{} {} ",
                    "[".bright_black(),
                    package.bright_blue(),
                    "]".bright_black(),
                    Self::padding(package),
                    stage.bright_black()
                );
                io::stdout().flush().ok();
            }
            OutputMode::Plain => {
                print!("[{}]{} {} ", package, Self::padding(package), stage);
                io::stdout().flush().ok();
            }
            OutputMode::Json => self.emit(&StepEvent {
                package,
                stage,
                status: None,
            }),
            OutputMode::Quiet => {}
        }
    }

    /// Close a step line with its status
    pub fn end(&self, package: &str, stage: &str, status: StepStatus) {
        match self.mode {
            OutputMode::Human => {
                let label = status.label();
                let text = match status {
                    StepStatus::Ok => label.green(),
                    StepStatus::Downloaded => label.bright_cyan(),
                    StepStatus::Missing | StepStatus::Skipped => label.yellow(),
                    StepStatus::Fallback => label.bright_magenta(),
                    StepStatus::Failed => label.red(),
                };
                println!("{}", text);
            }
            OutputMode::Plain => println!("{}", status.label()),
            OutputMode::Json => self.emit(&StepEvent {
                package,
                stage,
                status: Some(status),
            }),
            OutputMode::Quiet => {}
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Human => eprintln!("{}", message.red()),
            _ => eprintln!("{}", message),
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        match self.mode {
            OutputMode::Human => println!("{}", message.yellow()),
            OutputMode::Plain => println!("[WARN] {}", message),
            OutputMode::Json | OutputMode::Quiet => {}
        }
    }

    fn emit(&self, event: &StepEvent) {
        if let Ok(json) = serde_json::to_string(event) {
            println!("{}", json);
        }
    }
}
