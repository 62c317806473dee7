use serde::Serialize;
use std::fmt;

use super::utility::mode;
use super::{NO_DATA, OrNoData, Report};
use crate::trip::TripTable;

/// The most popular stations and start/end combination.
#[derive(Debug, Serialize)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub trip: Option<(String, String)>,
}

impl Report for StationStats {
    const HEADING: &'static str = "Calculating The Most Popular Stations and Trip...";

    fn from_table(table: &TripTable) -> Self {
        let rows = table.rows();
        let trip = mode(
            rows.iter()
                .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
        );

        StationStats {
            start_station: mode(rows.iter().map(|t| t.start_station.as_str())).map(String::from),
            end_station: mode(rows.iter().map(|t| t.end_station.as_str())).map(String::from),
            trip: trip.map(|(start, end)| (start.to_string(), end.to_string())),
        }
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Most Commonly Used Start Station: {}",
            OrNoData(&self.start_station)
        )?;
        writeln!(
            f,
            "Most Commonly Used End Station: {}",
            OrNoData(&self.end_station)
        )?;
        match &self.trip {
            Some((start, end)) => writeln!(f, "Most Common Trip: {start} to {end}"),
            None => writeln!(f, "Most Common Trip: {NO_DATA}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::{Columns, Trip, parse_timestamp};

    fn trip(start: &str, end: &str) -> Trip {
        Trip::new(parse_timestamp("2017-04-01 12:00:00").unwrap(), 60.0, start, end)
    }

    #[test]
    fn test_popular_stations_and_trip() {
        let table = TripTable::new(
            vec![
                trip("Canal St", "Clark St"),
                trip("Canal St", "State St"),
                trip("Wells St", "State St"),
                trip("Wells St", "State St"),
                trip("Canal St", "Lake St"),
            ],
            Columns::default(),
        );

        let stats = StationStats::from_table(&table);
        assert_eq!(stats.start_station.as_deref(), Some("Canal St"));
        assert_eq!(stats.end_station.as_deref(), Some("State St"));
        assert_eq!(
            stats.trip,
            Some(("Wells St".to_string(), "State St".to_string()))
        );
        assert!(
            stats
                .to_string()
                .contains("Most Common Trip: Wells St to State St")
        );
    }

    #[test]
    fn test_trip_tie_prefers_first_pair_in_order() {
        let table = TripTable::new(
            vec![trip("B", "A"), trip("A", "C"), trip("A", "B")],
            Columns::default(),
        );

        let stats = StationStats::from_table(&table);
        assert_eq!(stats.trip, Some(("A".to_string(), "B".to_string())));
    }

    #[test]
    fn test_empty_table() {
        let stats = StationStats::from_table(&TripTable::new(vec![], Columns::default()));
        assert!(stats.trip.is_none());
        assert!(stats.to_string().contains("Most Common Trip: No data available."));
    }
}
