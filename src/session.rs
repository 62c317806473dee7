//! The interactive session loop.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

use crate::loader::load_data;
use crate::output::display_data;
use crate::prompt::{Console, get_filters};
use crate::reports::{DurationStats, StationStats, TimeStats, UserStats, print_report};

const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

/// Runs filter → load → reports → raw rows, repeating while the user asks to
/// restart. Returns the number of completed rounds.
///
/// # Errors
///
/// Returns an error if input closes during the filter prompts, a data file
/// cannot be loaded, or writing to the console fails.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, data_dir: &Path) -> Result<usize> {
    let mut rounds = 0;

    loop {
        rounds += 1;
        let span = tracing::info_span!("round", round = rounds);
        let _enter = span.enter();

        let filters = get_filters(console)?;
        info!(city = %filters.city, month = %filters.month, day = %filters.day, "Filters selected");

        let table = load_data(data_dir, &filters)?;

        print_report::<TimeStats, _>(&table, console.output())?;
        print_report::<StationStats, _>(&table, console.output())?;
        print_report::<DurationStats, _>(&table, console.output())?;
        print_report::<UserStats, _>(&table, console.output())?;

        display_data(console, &table)?;

        if !console.confirm(RESTART_PROMPT)? {
            break;
        }
    }

    info!(rounds, "Session finished");
    Ok(rounds)
}
