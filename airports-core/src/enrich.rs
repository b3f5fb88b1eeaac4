use crate::{
    catalog::AirportCatalog,
    model::{EnrichedFlight, ScheduleRecord},
};

/// Attach destination names and a readable delay to each departure.
///
/// One output per input, same order. An unknown destination code leaves
/// `arr_airport` empty.
pub fn enrich(raw: Vec<ScheduleRecord>, catalog: &AirportCatalog) -> Vec<EnrichedFlight> {
    raw.into_iter()
        .map(|record| {
            let arr_airport = record
                .arr_iata
                .as_deref()
                .and_then(|code| catalog.lookup_by_iata(code))
                .map(|airport| airport.name.clone());

            EnrichedFlight {
                flight_iata: record.flight_iata,
                dep_time_utc: record.dep_time_utc,
                arr_airport,
                delayed_display: delay_display(record.delayed),
            }
        })
        .collect()
}

pub fn delay_display(delayed: Option<i64>) -> String {
    match delayed {
        None => "No".to_string(),
        Some(minutes) => format!("{minutes} minutes"),
    }
}
