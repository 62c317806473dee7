use serde::Serialize;
use std::fmt;

use super::utility::{mode, value_counts};
use super::{NO_DATA, Report, write_counts};
use crate::trip::TripTable;

/// Rider demographics.
///
/// Gender and birth-year metrics are `None` when the city's data has no such
/// column (or no values survived the filter); each is reported independently.
#[derive(Debug, Serialize)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<Vec<(String, usize)>>,
    pub earliest_year: Option<i64>,
    pub most_recent_year: Option<i64>,
    pub most_common_year: Option<i64>,
}

impl Report for UserStats {
    const HEADING: &'static str = "Calculating User Stats...";

    fn from_table(table: &TripTable) -> Self {
        let user_types = value_counts(table.rows().iter().filter_map(|t| t.user_type.as_deref()));
        let genders = table.genders().map(value_counts);

        // whole-number years; the files store them as floats
        let birth_years: Option<Vec<i64>> = table
            .birth_years()
            .map(|years| years.map(|y| y as i64).collect());
        let years = birth_years.as_deref().unwrap_or_default();

        UserStats {
            user_types: owned(user_types),
            genders: genders.map(owned),
            earliest_year: years.iter().min().copied(),
            most_recent_year: years.iter().max().copied(),
            most_common_year: mode(years.iter().copied()),
        }
    }
}

fn owned(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect()
}

fn write_year(f: &mut fmt::Formatter<'_>, label: &str, year: Option<i64>) -> fmt::Result {
    match year {
        Some(year) => writeln!(f, "\n{label}: {year}"),
        None => writeln!(f, "\n{label}:\n{NO_DATA}"),
    }
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "User Types:")?;
        write_counts(f, &self.user_types)?;

        writeln!(f, "\nGender Types:")?;
        match &self.genders {
            Some(genders) => write_counts(f, genders)?,
            None => writeln!(f, "{NO_DATA}")?,
        }

        write_year(f, "Earliest Year", self.earliest_year)?;
        write_year(f, "Most Recent Year", self.most_recent_year)?;
        write_year(f, "Most Common Year", self.most_common_year)
    }
}
