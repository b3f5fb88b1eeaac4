use std::fmt;

use crate::model::{AirportRecord, EnrichedFlight};

pub const COLUMNS: [&str; 4] = ["Flight Number", "Departure Time", "Destination", "Delayed?"];

/// Departures board for one airport, one row per flight.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightTable {
    pub title: String,
    pub rows: Vec<[String; 4]>,
}

impl FlightTable {
    pub fn new(airport: &AirportRecord, flights: &[EnrichedFlight]) -> Self {
        let rows = flights
            .iter()
            .map(|f| {
                [
                    f.flight_iata.clone().unwrap_or_default(),
                    f.dep_time_utc.clone().unwrap_or_default(),
                    f.arr_airport.clone().unwrap_or_default(),
                    f.delayed_display.clone(),
                ]
            })
            .collect();

        Self { title: format!("Flights from {} ({})", airport.name, airport.iata), rows }
    }

    fn column_widths(&self) -> [usize; 4] {
        let mut widths = COLUMNS.map(|c| c.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

/// Plain-text rendering with centered cells.
impl fmt::Display for FlightTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        // cell padding plus one separator per column, plus the closing border
        let total: usize = widths.iter().map(|w| w + 3).sum::<usize>() + 1;

        let border: String = widths.iter().fold(String::from("+"), |mut acc, w| {
            acc.push_str(&"-".repeat(w + 2));
            acc.push('+');
            acc
        });

        writeln!(f, "{:^total$}", self.title)?;
        writeln!(f, "{border}")?;
        write_row(f, &COLUMNS, &widths)?;
        writeln!(f, "{border}")?;
        for row in &self.rows {
            write_row(f, row, &widths)?;
        }
        write!(f, "{border}")
    }
}

fn write_row<S: AsRef<str>>(
    f: &mut fmt::Formatter<'_>,
    cells: &[S; 4],
    widths: &[usize; 4],
) -> fmt::Result {
    write!(f, "|")?;
    for (cell, &width) in cells.iter().zip(widths) {
        write!(f, " {:^width$} |", cell.as_ref())?;
    }
    writeln!(f)
}

/// Where finished tables and user-facing notices go.
pub trait Renderer {
    fn render(&mut self, table: &FlightTable);

    /// Show a message that is not a table, e.g. a failed fetch.
    fn notify(&mut self, message: &str);
}
