//! Raw trip rows, printed on request in fixed-size windows.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::prompt::Console;
use crate::trip::{Trip, TripTable};

/// Rows shown per "yes" answer.
pub const WINDOW_SIZE: usize = 5;

const VIEW_PROMPT: &str = "Do you want to see 5 rows of data? Enter yes or no.\n";

/// Prints successive windows of [`WINDOW_SIZE`] rows for as long as the user
/// answers `yes`. Returns the number of windows printed.
pub fn display_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<usize> {
    let mut offset = 0;
    let mut windows = 0;

    while console.confirm(VIEW_PROMPT)? {
        let rows = table.window(offset, WINDOW_SIZE);
        debug!(offset, rows = rows.len(), "Showing raw rows");
        write!(console.output(), "{}", render_rows(table, offset))?;
        offset += WINDOW_SIZE;
        windows += 1;
    }

    Ok(windows)
}

/// Renders the window starting at `offset` as an aligned text table, with each
/// row labelled by its position in the filtered table.
pub fn render_rows(table: &TripTable, offset: usize) -> String {
    let columns = table.columns();
    let mut headers = vec![
        "",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if columns.gender {
        headers.push("Gender");
    }
    if columns.birth_year {
        headers.push("Birth Year");
    }
    headers.extend(["month", "day_of_week"]);

    let rows = table.window(offset, WINDOW_SIZE);
    if rows.is_empty() {
        return format!("No rows to show from row {offset}.\n");
    }

    let mut cells: Vec<Vec<String>> = vec![headers.iter().map(|h| h.to_string()).collect()];
    for (i, trip) in rows.iter().enumerate() {
        cells.push(row_cells(offset + i, trip, columns.gender, columns.birth_year));
    }

    let widths: Vec<usize> = (0..headers.len())
        .map(|col| cells.iter().map(|row| row[col].chars().count()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for row in &cells {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:>width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn row_cells(index: usize, trip: &Trip, gender: bool, birth_year: bool) -> Vec<String> {
    let mut cells = vec![
        index.to_string(),
        trip.start_time().format("%Y-%m-%d %H:%M:%S").to_string(),
        trip.end_time.clone().unwrap_or_default(),
        trip.trip_duration.to_string(),
        trip.start_station.clone(),
        trip.end_station.clone(),
        trip.user_type.clone().unwrap_or_default(),
    ];
    if gender {
        cells.push(trip.gender.clone().unwrap_or_default());
    }
    if birth_year {
        cells.push(trip.birth_year.map(|y| y.to_string()).unwrap_or_default());
    }
    cells.push(trip.month().to_string());
    cells.push(trip.day_of_week().to_string());
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::{Columns, parse_timestamp};
    use std::io::Cursor;

    fn table(len: usize, columns: Columns) -> TripTable {
        let start = parse_timestamp("2017-01-02 09:00:00").unwrap();
        TripTable::new(
            (0..len)
                .map(|i| Trip::new(start, 100.0 + i as f64, &format!("Station {i}"), "Depot"))
                .collect(),
            columns,
        )
    }

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_render_rows_labels_positions() {
        let text = render_rows(&table(12, Columns::default()), 5);
        let lines: Vec<_> = text.lines().collect();

        // header + 5 rows
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("Start Station"));
        assert!(!lines[0].contains("Gender"));
        assert!(lines[1].trim_start().starts_with("5 "));
        assert!(lines[1].contains("Station 5"));
        assert!(lines[5].contains("Station 9"));
        assert!(lines[5].ends_with("Monday"));
    }

    #[test]
    fn test_render_rows_includes_demographic_columns() {
        let text = render_rows(&table(1, Columns::all()), 0);
        assert!(text.lines().next().unwrap().contains("Gender"));
        assert!(text.contains("Birth Year"));
    }

    #[test]
    fn test_render_rows_past_end() {
        let text = render_rows(&table(3, Columns::default()), 5);
        assert_eq!(text, "No rows to show from row 5.\n");
    }

    #[test]
    fn test_display_data_advances_by_five() {
        let data = table(12, Columns::default());
        let mut c = console("yes\nYes\nno\nyes\n");

        let windows = display_data(&mut c, &data).unwrap();
        assert_eq!(windows, 2);

        let output = String::from_utf8(c.into_output()).unwrap();
        assert!(output.contains("Station 0"));
        assert!(output.contains("Station 9"));
        // stopped after "no", so the third window never printed
        assert!(!output.contains("Station 10"));
        assert_eq!(output.matches(VIEW_PROMPT).count(), 3);
    }

    #[test]
    fn test_display_data_no_stops_immediately() {
        let data = table(12, Columns::default());
        let mut c = console("no\n");

        assert_eq!(display_data(&mut c, &data).unwrap(), 0);
        let output = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(output, VIEW_PROMPT);
    }

    #[test]
    fn test_display_data_past_end_still_prints() {
        let data = table(3, Columns::default());
        let mut c = console("yes\nyes\nno\n");

        assert_eq!(display_data(&mut c, &data).unwrap(), 2);
        let output = String::from_utf8(c.into_output()).unwrap();
        assert!(output.contains("Station 2"));
        assert!(output.contains("No rows to show from row 5."));
    }
}
