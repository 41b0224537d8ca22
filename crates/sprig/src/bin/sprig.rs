//! Interactive read-eval-print loop for sprig

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use sprig::rep::Session;
use sprig::{EvalContext, ReadError, SprigError};

const PROMPT: &str = "user> ";
const HISTORY_FILE: &str = ".sprig_history";

#[derive(Parser, Debug)]
#[command(name = "sprig", version, about = "Read-eval-print loop for sprig")]
struct Cli {
    /// Read plain lines from stdin without line editing (for test harnesses)
    #[arg(long)]
    raw: bool,

    /// Read and print forms without evaluating them
    #[arg(long)]
    read_only: bool,

    /// Trace every evaluation step to stderr
    #[arg(long)]
    trace: bool,
}

struct Repl {
    session: Session,
    read_only: bool,
}

impl Repl {
    /// Handle one input line, returning the text to show, if any.
    fn line(&mut self, line: &str) -> Option<String> {
        let result = if self.read_only {
            self.session.read_print(line)
        } else {
            self.session.rep(line)
        };
        match result {
            Ok(output) => Some(output),
            Err(SprigError::Read(ReadError::EmptyInput)) => None,
            Err(e) => Some(format!("error: {}", e)),
        }
    }
}

fn history_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(HISTORY_FILE))
}

fn run_raw(repl: &mut Repl) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "{}", PROMPT)?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        if let Some(output) = repl.line(&line) {
            writeln!(stdout, "{}", output)?;
        }
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;
    }
    writeln!(stdout)?;
    Ok(())
}

fn run_interactive(repl: &mut Repl) -> Result<()> {
    let mut editor = DefaultEditor::new().context("failed to initialize line editor")?;
    let history = history_path();
    if let Some(path) = &history {
        // Missing history on first run is fine
        let _ = editor.load_history(path);
    }

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                if let Some(output) = repl.line(&line) {
                    println!("{}", output);
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(e) => return Err(e).context("failed to read line"),
        }
    }

    if let Some(path) = &history {
        editor
            .save_history(path)
            .with_context(|| format!("failed to save history to {}", path.display()))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = EvalContext {
        trace: cli.trace,
        ..EvalContext::default()
    };
    let mut repl = Repl {
        session: Session::with_context(ctx),
        read_only: cli.read_only,
    };

    if cli.raw {
        run_raw(&mut repl)
    } else {
        run_interactive(&mut repl)
    }
}
