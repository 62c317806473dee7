//! Fixed catalog of supported cities and their trip data files.

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

/// Display name → CSV file name, one entry per supported city.
pub static CITY_DATA: &[(&str, &str)] = &[
    ("Chicago", "chicago.csv"),
    ("New York City", "new_york_city.csv"),
    ("Washington", "washington.csv"),
];

/// Months that trip data is available for, in calendar order.
pub static MONTHS: &[&str] = &["January", "February", "March", "April", "May", "June"];

/// Days of the week in the order they are offered to the user.
pub static DAYS: &[&str] = &[
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Returns the CSV file name registered for `city`.
///
/// # Errors
///
/// Returns an error if `city` is not one of the display names in [`CITY_DATA`].
pub fn city_file(city: &str) -> Result<&'static str> {
    match CITY_DATA.iter().find(|(name, _)| *name == city) {
        Some((_, file)) => Ok(*file),
        None => bail!("unknown city '{city}'"),
    }
}

/// Resolves the data file for `city` under `data_dir`.
pub fn city_path(data_dir: &Path, city: &str) -> Result<PathBuf> {
    Ok(data_dir.join(city_file(city)?))
}

/// Returns the 1-based calendar index of a month name, matched case-insensitively.
pub fn month_index(month: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(month))
        .map(|i| i as u32 + 1)
}

/// Lowercase allow-list of city names, as accepted by the input collector.
pub fn city_choices() -> Vec<String> {
    CITY_DATA.iter().map(|(name, _)| name.to_lowercase()).collect()
}

/// Lowercase allow-list of month names plus `all`.
pub fn month_choices() -> Vec<String> {
    with_all(MONTHS)
}

/// Lowercase allow-list of day names plus `all`.
pub fn day_choices() -> Vec<String> {
    with_all(DAYS)
}

fn with_all(names: &[&str]) -> Vec<String> {
    names
        .iter()
        .map(|n| n.to_lowercase())
        .chain(std::iter::once("all".to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_file_known() {
        assert_eq!(city_file("Chicago").unwrap(), "chicago.csv");
        assert_eq!(city_file("New York City").unwrap(), "new_york_city.csv");
        assert_eq!(city_file("Washington").unwrap(), "washington.csv");
    }

    #[test]
    fn test_city_file_unknown_is_error() {
        assert!(city_file("Boston").is_err());
        // lookups use the title-cased display name
        assert!(city_file("chicago").is_err());
    }

    #[test]
    fn test_city_path_joins_data_dir() {
        let path = city_path(Path::new("data"), "Washington").unwrap();
        assert_eq!(path, Path::new("data").join("washington.csv"));
    }

    #[test]
    fn test_month_index() {
        assert_eq!(month_index("January"), Some(1));
        assert_eq!(month_index("june"), Some(6));
        assert_eq!(month_index("July"), None);
        assert_eq!(month_index("All"), None);
    }

    #[test]
    fn test_choices_are_lowercase_with_all() {
        assert_eq!(city_choices(), vec!["chicago", "new york city", "washington"]);

        let months = month_choices();
        assert_eq!(months.len(), 7);
        assert_eq!(months.last().map(String::as_str), Some("all"));

        let days = day_choices();
        assert_eq!(days.len(), 8);
        assert_eq!(days[0], "sunday");
        assert_eq!(days.last().map(String::as_str), Some("all"));
    }
}
