use serde::Serialize;
use std::fmt;

use super::utility::mean;
use super::{NO_DATA, Report};
use crate::trip::TripTable;

const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Total and average trip duration, kept in seconds.
#[derive(Debug, Serialize)]
pub struct DurationStats {
    pub total_seconds: f64,
    pub mean_seconds: Option<f64>,
}

impl DurationStats {
    pub fn total_days(&self) -> f64 {
        self.total_seconds / SECONDS_PER_DAY
    }

    pub fn mean_minutes(&self) -> Option<f64> {
        self.mean_seconds.map(|s| s / SECONDS_PER_MINUTE)
    }
}

impl Report for DurationStats {
    const HEADING: &'static str = "Calculating Trip Duration...";

    fn from_table(table: &TripTable) -> Self {
        let durations: Vec<f64> = table.rows().iter().map(|t| t.trip_duration).collect();
        DurationStats {
            // fold from +0.0; an empty f64 sum is -0.0 and would print as "-0.00"
            total_seconds: durations.iter().fold(0.0, |acc, d| acc + d),
            mean_seconds: mean(&durations),
        }
    }
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Travel Time: {:.2} Days", self.total_days())?;
        match self.mean_minutes() {
            Some(minutes) => writeln!(f, "Mean Travel Time: {minutes:.2} Minutes"),
            None => writeln!(f, "Mean Travel Time: {NO_DATA}"),
        }
    }
}
