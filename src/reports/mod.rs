//! Descriptive statistics over a filtered trip table.
//!
//! Each report is computed from a borrowed [`TripTable`], printed with the time
//! the computation took, and logged as JSON at debug level.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;
pub mod utility;

pub use duration::DurationStats;
pub use station::StationStats;
pub use time::TimeStats;
pub use user::UserStats;

use anyhow::Result;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::time::Instant;
use tracing::debug;

use crate::trip::TripTable;

pub const NO_DATA: &str = "No data available.";

/// A statistic block that can be computed from a trip table and printed.
pub trait Report: Serialize + fmt::Display + Sized {
    /// Heading printed before the report, e.g. `Calculating Trip Duration...`.
    const HEADING: &'static str;

    fn from_table(table: &TripTable) -> Self;
}

/// Computes `R` over `table`, writes it to `out` followed by the elapsed time and
/// a separator rule, and returns the computed report.
#[tracing::instrument(skip_all, fields(report = R::HEADING, rows = table.len()))]
pub fn print_report<R: Report, W: Write>(table: &TripTable, out: &mut W) -> Result<R> {
    writeln!(out, "\n{}\n", R::HEADING)?;
    let start = Instant::now();

    let report = R::from_table(table);
    write!(out, "{report}")?;

    let elapsed = start.elapsed();
    writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{}", rule())?;

    debug!(
        report = %serde_json::to_string(&report)?,
        elapsed_secs = elapsed.as_secs_f64(),
        "{}",
        R::HEADING
    );
    Ok(report)
}

/// The 40-dash separator printed between sections.
pub fn rule() -> String {
    "-".repeat(40)
}

/// Displays the wrapped value, or [`NO_DATA`] when it is absent.
pub struct OrNoData<'a, T>(pub &'a Option<T>);

impl<T: fmt::Display> fmt::Display for OrNoData<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str(NO_DATA),
        }
    }
}

/// Writes `(label, count)` pairs as two aligned columns.
pub(crate) fn write_counts(f: &mut fmt::Formatter<'_>, counts: &[(String, usize)]) -> fmt::Result {
    let label_width = counts.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    let count_width = counts
        .iter()
        .map(|(_, count)| count.to_string().len())
        .max()
        .unwrap_or(0);
    for (label, count) in counts {
        writeln!(f, "{label:<label_width$}    {count:>count_width$}")?;
    }
    Ok(())
}
