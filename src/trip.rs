//! Trip records and the in-memory trip table.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Deserializer};

/// Timestamp layouts found in the city data files.
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// A single trip, deserialized from one CSV row.
///
/// `month` and `day_of_week` are derived from `start_time` and are never read
/// from the file.
#[derive(Debug, Clone, Deserialize)]
pub struct Trip {
    #[serde(rename = "Start Time", deserialize_with = "deserialize_timestamp")]
    start_time: NaiveDateTime,
    #[serde(rename = "End Time", default)]
    pub end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,

    #[serde(skip_deserializing)]
    month: u32,
    #[serde(skip_deserializing)]
    day_of_week: String,
}

impl Trip {
    pub fn new(
        start_time: NaiveDateTime,
        trip_duration: f64,
        start_station: &str,
        end_station: &str,
    ) -> Self {
        let mut trip = Trip {
            start_time,
            end_time: None,
            trip_duration,
            start_station: start_station.to_string(),
            end_station: end_station.to_string(),
            user_type: None,
            gender: None,
            birth_year: None,
            month: 0,
            day_of_week: String::new(),
        };
        trip.derive_fields();
        trip
    }

    /// Set the rider's user type
    pub fn with_user_type(mut self, user_type: &str) -> Self {
        self.user_type = Some(user_type.to_string());
        self
    }

    /// Set rider demographics
    pub fn with_demographics(mut self, gender: Option<&str>, birth_year: Option<f64>) -> Self {
        self.gender = gender.map(str::to_string);
        self.birth_year = birth_year;
        self
    }

    /// Recomputes the derived columns from `start_time`.
    pub(crate) fn derive_fields(&mut self) {
        self.month = self.start_time.month();
        self.day_of_week = day_name(self.start_time.weekday()).to_string();
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    /// Calendar month of the start time, 1-based.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Title-cased weekday name of the start time.
    pub fn day_of_week(&self) -> &str {
        &self.day_of_week
    }

    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }
}

/// Column presence for the optional demographic columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    pub gender: bool,
    pub birth_year: bool,
}

impl Columns {
    /// Inspects a CSV header row for the optional columns.
    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        let mut columns = Columns::default();
        for header in headers {
            match header.trim() {
                "Gender" => columns.gender = true,
                "Birth Year" => columns.birth_year = true,
                _ => {}
            }
        }
        columns
    }

    pub fn all() -> Self {
        Columns {
            gender: true,
            birth_year: true,
        }
    }
}

/// The trips for one city, optionally narrowed to a month and day.
#[derive(Debug, Clone)]
pub struct TripTable {
    rows: Vec<Trip>,
    columns: Columns,
}

impl TripTable {
    pub fn new(rows: Vec<Trip>, columns: Columns) -> Self {
        Self { rows, columns }
    }

    pub fn rows(&self) -> &[Trip] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> Columns {
        self.columns
    }

    /// Keeps only trips that started in `month` (1-based), if given.
    pub fn retain_month(&mut self, month: Option<u32>) {
        if let Some(month) = month {
            self.rows.retain(|t| t.month() == month);
        }
    }

    /// Keeps only trips that started on the named weekday, if given.
    pub fn retain_day(&mut self, day: Option<&str>) {
        if let Some(day) = day {
            self.rows.retain(|t| t.day_of_week().eq_ignore_ascii_case(day));
        }
    }

    /// Returns up to `len` rows starting at `offset`; empty once past the end.
    pub fn window(&self, offset: usize, len: usize) -> &[Trip] {
        let start = offset.min(self.rows.len());
        let end = offset.saturating_add(len).min(self.rows.len());
        &self.rows[start..end]
    }

    /// Gender values, or `None` if the source had no `Gender` column.
    pub fn genders(&self) -> Option<impl Iterator<Item = &str>> {
        self.columns
            .gender
            .then(|| self.rows.iter().filter_map(|t| t.gender.as_deref()))
    }

    /// Birth years, or `None` if the source had no `Birth Year` column.
    pub fn birth_years(&self) -> Option<impl Iterator<Item = f64> + '_> {
        self.columns
            .birth_year
            .then(|| self.rows.iter().filter_map(|t| t.birth_year))
    }
}

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parses a start/end timestamp in any of the layouts used by the data files.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let raw = raw.trim();
    let mut result = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMATS[0]);
    for format in &TIMESTAMP_FORMATS[1..] {
        if result.is_ok() {
            break;
        }
        result = NaiveDateTime::parse_from_str(raw, format);
    }
    result
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(raw: &str) -> NaiveDateTime {
        parse_timestamp(raw).unwrap()
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let plain = ts("2017-01-02 09:07:57");
        assert_eq!(plain.hour(), 9);
        assert_eq!(ts("2017-01-02T09:07:57"), plain);
        assert_eq!(ts("2017-01-02 09:07:57.000"), plain);
        assert!(parse_timestamp("01/02/2017").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn test_derived_fields_follow_start_time() {
        // 2017-01-02 was a Monday
        let trip = Trip::new(ts("2017-01-02 17:30:00"), 600.0, "A", "B");
        assert_eq!(trip.month(), 1);
        assert_eq!(trip.day_of_week(), "Monday");
        assert_eq!(trip.hour(), 17);
        assert_eq!(trip.start_time(), ts("2017-01-02 17:30:00"));
    }

    #[test]
    fn test_columns_from_headers() {
        let columns = Columns::from_headers(["", "Start Time", "Gender", "Birth Year"]);
        assert_eq!(columns, Columns::all());

        let columns = Columns::from_headers(["Start Time", "User Type"]);
        assert!(!columns.gender);
        assert!(!columns.birth_year);
    }

    #[test]
    fn test_retain_month_and_day() {
        let mut table = TripTable::new(
            vec![
                Trip::new(ts("2017-01-02 08:00:00"), 60.0, "A", "B"), // Jan, Monday
                Trip::new(ts("2017-01-03 08:00:00"), 60.0, "A", "B"), // Jan, Tuesday
                Trip::new(ts("2017-02-06 08:00:00"), 60.0, "A", "B"), // Feb, Monday
            ],
            Columns::default(),
        );

        table.retain_month(None);
        table.retain_day(None);
        assert_eq!(table.len(), 3);

        table.retain_day(Some("monday"));
        assert_eq!(table.len(), 2);

        table.retain_month(Some(2));
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].month(), 2);
    }

    #[test]
    fn test_window_past_end_is_empty() {
        let rows = (0..7)
            .map(|i| Trip::new(ts("2017-03-01 10:00:00"), i as f64, "A", "B"))
            .collect();
        let table = TripTable::new(rows, Columns::default());

        assert_eq!(table.window(0, 5).len(), 5);
        assert_eq!(table.window(5, 5).len(), 2);
        assert!(table.window(10, 5).is_empty());
        assert!(table.window(usize::MAX, 5).is_empty());
    }

    #[test]
    fn test_optional_columns_absent() {
        let table = TripTable::new(
            vec![Trip::new(ts("2017-03-01 10:00:00"), 1.0, "A", "B")],
            Columns::default(),
        );
        assert!(table.genders().is_none());
        assert!(table.birth_years().is_none());
    }

    #[test]
    fn test_optional_columns_skip_blank_values() {
        let table = TripTable::new(
            vec![
                Trip::new(ts("2017-03-01 10:00:00"), 1.0, "A", "B")
                    .with_demographics(Some("Male"), Some(1990.0)),
                Trip::new(ts("2017-03-01 11:00:00"), 1.0, "A", "B"),
            ],
            Columns::all(),
        );
        assert_eq!(table.genders().unwrap().collect::<Vec<_>>(), vec!["Male"]);
        assert_eq!(table.birth_years().unwrap().collect::<Vec<_>>(), vec![1990.0]);
    }
}
