//! Line-based interactive prompts.
//!
//! [`Console`] wraps any buffered reader and writer so the session can be
//! driven from stdin/stdout or, in tests, from in-memory buffers.

use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::catalog::{city_choices, day_choices, month_choices};
use crate::loader::Filters;
use crate::reports::rule;

const RETRY_MESSAGE: &str = "Sorry, I didn't catch that. Try again.";

const CITY_PROMPT: &str =
    "\nWhich city would you like to filter by? New York City, Chicago or Washington?\n";
const MONTH_PROMPT: &str = "\nWhich month would you like to filter by? January, February, March, April, May, June or type 'all' if you do not have any preference?\n";
const DAY_PROMPT: &str = "\nAre you looking for a particular day? If so, kindly enter the day as follows: Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday or type 'all' if you do not have any preference.\n";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and reads one answer, trimmed and lowercased.
    ///
    /// Returns `None` once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        Ok(self.read_line(prompt)?.map(|line| line.trim().to_lowercase()))
    }

    /// Prints `prompt` and reads one line with only the line terminator removed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    /// Re-prompts until the answer is one of `valid`, then returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the input closes before a valid answer is given.
    pub fn get_user_input(&mut self, prompt: &str, valid: &[String]) -> Result<String> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                bail!("input closed while waiting for an answer");
            };
            if valid.contains(&answer) {
                return Ok(answer);
            }
            debug!(answer = %answer, "Rejected input");
            writeln!(self.output, "{RETRY_MESSAGE}")?;
        }
    }

    /// Asks a yes/no question. Only `yes` in any letter case counts; padded
    /// answers and closed input are no.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self
            .read_line(prompt)?
            .is_some_and(|line| line.eq_ignore_ascii_case("yes")))
    }
}

/// Asks for a city, month, and day, returning them in title case.
pub fn get_filters<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Filters> {
    writeln!(console.output(), "\nHello! Let's explore some US bikeshare data!")?;

    let city = console.get_user_input(CITY_PROMPT, &city_choices())?;
    let month = console.get_user_input(MONTH_PROMPT, &month_choices())?;
    let day = console.get_user_input(DAY_PROMPT, &day_choices())?;

    writeln!(console.output(), "{}", rule())?;
    Ok(Filters::new(
        &title_case(&city),
        &title_case(&month),
        &title_case(&day),
    ))
}

/// Uppercases the first letter of each space-separated word.
pub fn title_case(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
