use serde::Serialize;
use std::fmt;

use super::utility::mode;
use super::{OrNoData, Report};
use crate::trip::TripTable;

/// The most frequent times of travel.
#[derive(Debug, Serialize)]
pub struct TimeStats {
    pub popular_month: Option<u32>,
    pub popular_day: Option<String>,
    pub popular_hour: Option<u32>,
}

impl Report for TimeStats {
    const HEADING: &'static str = "Calculating The Most Frequent Times of Travel...";

    fn from_table(table: &TripTable) -> Self {
        let rows = table.rows();
        TimeStats {
            popular_month: mode(rows.iter().map(|t| t.month())),
            popular_day: mode(rows.iter().map(|t| t.day_of_week())).map(String::from),
            popular_hour: mode(rows.iter().map(|t| t.hour())),
        }
    }
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Most Common Month: {}", OrNoData(&self.popular_month))?;
        writeln!(f, "Most Common Day: {}", OrNoData(&self.popular_day))?;
        writeln!(f, "Most Common Hour: {}", OrNoData(&self.popular_hour))
    }
}
