//! Interactive console input
//!
//! Wraps an input/output pair so the interactive flows can run against the
//! terminal or against scripted input in tests.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Money};

/// Line-oriented prompter over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

/// Prompter bound to the process stdin/stdout
pub type StdPrompter = Prompter<StdinLock<'static>, Stdout>;

impl StdPrompter {
    /// Create a prompter on the terminal
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Prompter::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a full line
    pub fn say(&mut self, line: impl AsRef<str>) -> ExpenseResult<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line
    ///
    /// End of input is an error, so retry loops can't spin forever.
    pub fn ask(&mut self, prompt: &str) -> ExpenseResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(ExpenseError::Input("unexpected end of input".into()));
        }

        Ok(line.trim().to_string())
    }

    /// Ask a yes/no question; only "y" or "yes" count as yes
    pub fn confirm(&mut self, prompt: &str) -> ExpenseResult<bool> {
        let answer = self.ask(prompt)?.to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    /// Ask for a line of at most `max_chars` characters, re-prompting when
    /// the answer is longer
    pub fn ask_bounded(&mut self, prompt: &str, max_chars: usize) -> ExpenseResult<String> {
        loop {
            let answer = self.ask(prompt)?;
            let len = answer.chars().count();
            if len <= max_chars {
                return Ok(answer);
            }
            self.say(format!(
                "Too long ({} characters, max {}). Try again.",
                len, max_chars
            ))?;
        }
    }

    /// Ask for a non-negative amount, re-prompting until one is given
    ///
    /// `negative_message` is shown when a negative number is typed.
    pub fn ask_amount(&mut self, prompt: &str, negative_message: &str) -> ExpenseResult<Money> {
        loop {
            let answer = self.ask(prompt)?;
            match Money::parse(&answer) {
                Ok(amount) if amount.is_negative() => self.say(negative_message)?,
                Ok(amount) => return Ok(amount),
                Err(_) => self.say("Invalid number. Try again.")?,
            }
        }
    }

    /// Show the numbered category menu and read a choice
    pub fn ask_category(&mut self) -> ExpenseResult<Category> {
        loop {
            self.say("Select a category:")?;
            for category in Category::ALL {
                self.say(format!(
                    "  {:>2}. {} {}",
                    category.menu_index(),
                    category.emoji(),
                    category
                ))?;
            }

            let answer = self.ask(&format!("Choice [1-{}]: ", Category::ALL.len()))?;
            match answer.parse::<usize>() {
                Ok(index) => match Category::from_menu_index(index) {
                    Some(category) => return Ok(category),
                    None => self.say("Invalid selection.")?,
                },
                Err(_) => match answer.parse::<Category>() {
                    Ok(category) => return Ok(category),
                    Err(_) => self.say("Please enter a number.")?,
                },
            }
        }
    }

    /// Consume the prompter, returning the output (used by tests)
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }
}
