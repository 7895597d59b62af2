//! Key sequence runner behind the `press`, `repl` and `keypad` commands

use std::io::{BufRead, Write};

use keypad_calculator::prelude::{CalcError, CalculatorDriver, Keypad, Session};
use tracing::{debug, warn};

use crate::commands::{PressArgs, ReplArgs};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{DisplayPrinter, OutputFormat, Step};

/// Splits one token into keypad labels.
///
/// A token that is itself a key (`AC`, `DEL`, `x`) is pressed once.
/// Otherwise every character must be a key, so `12`, `3.5` and `12+3=`
/// are typed one character at a time.
pub fn expand_keys(keypad: &Keypad, token: &str) -> Result<Vec<String>, CalcError> {
    if keypad.find_by_label(token).is_ok() {
        return Ok(vec![token.to_string()]);
    }
    let keys: Vec<String> = token.chars().map(String::from).collect();
    if !keys.is_empty() && keys.iter().all(|k| keypad.find_by_label(k).is_ok()) {
        Ok(keys)
    } else {
        Err(CalcError::UnknownKey(token.to_string()))
    }
}

/// Drives a [`Session`] and prints its display
#[derive(Debug)]
pub struct KeyRunner {
    session: Session,
    printer: DisplayPrinter,
    quiet: bool,
}

impl KeyRunner {
    /// Create a runner from the CLI configuration
    #[must_use]
    pub fn new(config: &CliConfig, format: OutputFormat) -> Self {
        Self {
            session: Session::with_config(config.display.clone()),
            printer: DisplayPrinter::new(config.color.should_color(), format),
            quiet: config.verbosity.is_quiet(),
        }
    }

    /// The session being driven
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Expands every token first so an unknown key leaves the calculator
    /// untouched, then presses the keys in order
    pub fn press_tokens<S: AsRef<str>>(&mut self, tokens: &[S]) -> CliResult<Vec<Step>> {
        let mut keys = Vec::new();
        for token in tokens {
            keys.extend(expand_keys(self.session.keypad(), token.as_ref())?);
        }

        let mut steps = Vec::with_capacity(keys.len());
        for key in keys {
            let action = self.session.press(&key)?;
            debug!(key = %key, ?action, "pressed");
            steps.push(Step {
                key,
                display: self.session.snapshot(),
            });
        }
        Ok(steps)
    }

    /// `kcalc press`
    pub fn run_press(&mut self, args: &PressArgs, out: &mut dyn Write) -> CliResult<()> {
        let steps = self.press_tokens(&args.keys)?;
        let steps = args.steps.then_some(steps.as_slice());
        self.printer.report(
            out,
            &self.session.snapshot(),
            self.session.calculator(),
            steps,
        )?;
        Ok(())
    }

    /// `kcalc repl`: one key sequence per line until EOF, `quit` or `exit`.
    ///
    /// Unknown keys are reported and the line is skipped. Quiet mode
    /// drops the prompt.
    pub fn run_repl(
        &mut self,
        args: &ReplArgs,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> CliResult<()> {
        let mut line = String::new();
        loop {
            if !args.no_prompt && !self.quiet {
                write!(out, "> ")?;
                out.flush()?;
            }
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens.as_slice() {
                [] => continue,
                ["quit" | "exit"] => break,
                _ => {}
            }
            match self.press_tokens(&tokens) {
                Ok(_) => self.printer.display(out, &self.session.snapshot())?,
                Err(CliError::Calc(e)) => {
                    warn!(error = %e, "rejected line");
                    self.printer.error(out, &e.to_string())?;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// `kcalc keypad`
    pub fn run_keypad(&self, out: &mut dyn Write) -> CliResult<()> {
        self.printer.keypad(out, self.session.keypad())?;
        Ok(())
    }
}
