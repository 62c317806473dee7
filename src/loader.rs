//! CSV loader for city trip data, with month/day filtering.

use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::catalog::{city_path, month_index};
use crate::trip::{Columns, Trip, TripTable};

/// The user's selection: a city plus a month and day, either of which may be `All`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub city: String,
    pub month: String,
    pub day: String,
}

impl Filters {
    pub fn new(city: &str, month: &str, day: &str) -> Self {
        Self {
            city: city.to_string(),
            month: month.to_string(),
            day: day.to_string(),
        }
    }

    /// The 1-based month to keep, or `None` when every month is wanted.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is neither `All` nor a known month name.
    pub fn month_number(&self) -> Result<Option<u32>> {
        if is_all(&self.month) {
            return Ok(None);
        }
        match month_index(&self.month) {
            Some(index) => Ok(Some(index)),
            None => bail!("unknown month '{}'", self.month),
        }
    }

    /// The weekday name to keep, or `None` when every day is wanted.
    pub fn day_name(&self) -> Result<Option<&str>> {
        if is_all(&self.day) {
            return Ok(None);
        }
        let known = crate::catalog::DAYS
            .iter()
            .any(|d| d.eq_ignore_ascii_case(&self.day));
        if !known {
            bail!("unknown day '{}'", self.day);
        }
        Ok(Some(self.day.as_str()))
    }
}

fn is_all(value: &str) -> bool {
    value.eq_ignore_ascii_case("all")
}

/// Loads the trips for `filters.city` from `data_dir` and narrows them to the
/// requested month and day.
///
/// # Errors
///
/// Returns an error if the city is unknown, the file cannot be read, or a row
/// cannot be parsed.
#[tracing::instrument(skip(data_dir), fields(data_dir = %data_dir.display()))]
pub fn load_data(data_dir: &Path, filters: &Filters) -> Result<TripTable> {
    let month = filters.month_number()?;
    let day = filters.day_name()?;
    let path = city_path(data_dir, &filters.city)?;

    let file = File::open(&path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut table = read_trips(file).with_context(|| format!("failed to load {}", path.display()))?;
    let loaded = table.len();

    table.retain_month(month);
    table.retain_day(day);

    info!(
        city = %filters.city,
        path = %path.display(),
        loaded,
        kept = table.len(),
        "Trip data loaded"
    );
    Ok(table)
}

/// Reads every trip from CSV data and derives each row's month and weekday.
pub fn read_trips<R: Read>(reader: R) -> Result<TripTable> {
    let mut rdr = csv::Reader::from_reader(reader);
    let columns = Columns::from_headers(rdr.headers()?.iter());
    debug!(?columns, "CSV header read");

    let mut rows = Vec::new();
    for (i, result) in rdr.deserialize().enumerate() {
        // line 1 is the header
        let mut trip: Trip = result.with_context(|| format!("invalid trip on line {}", i + 2))?;
        trip.derive_fields();
        rows.push(trip);
    }

    Ok(TripTable::new(rows, columns))
}
