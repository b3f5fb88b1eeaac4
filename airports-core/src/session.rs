use log::{info, warn};

use crate::{
    catalog::AirportCatalog,
    disambiguate::resolve_airport,
    enrich::enrich,
    error::PromptError,
    prompt::Prompter,
    provider::ScheduleSource,
    table::{FlightTable, Renderer},
};

pub const SEARCH_PROMPT: &str = "Search for an airport";

/// What a single search cycle ended with.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// A table for `iata` with `flights` rows was rendered.
    Rendered { iata: String, flights: usize },
    /// The schedule fetch failed; the failure was reported and nothing was rendered.
    FetchFailed { iata: String },
}

/// Prompt, resolve, fetch, enrich, render, repeat.
pub struct SearchLoop<P, R> {
    catalog: AirportCatalog,
    schedules: Box<dyn ScheduleSource>,
    prompter: P,
    renderer: R,
}

impl<P: Prompter, R: Renderer> SearchLoop<P, R> {
    pub fn new(
        catalog: AirportCatalog,
        schedules: Box<dyn ScheduleSource>,
        prompter: P,
        renderer: R,
    ) -> Self {
        Self { catalog, schedules, prompter, renderer }
    }

    /// Run cycles until a prompt is cancelled.
    ///
    /// Fetch failures never end the loop. A cancelled prompt returns `Ok`;
    /// a broken prompt returns the error.
    pub async fn run(&mut self) -> Result<(), PromptError> {
        loop {
            match self.cycle().await {
                Ok(outcome) => info!("Search cycle finished: {outcome:?}"),
                Err(PromptError::Cancelled) => {
                    info!("Search cancelled, leaving loop");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// One full search: read a query, settle on one airport, show its departures.
    pub async fn cycle(&mut self) -> Result<CycleOutcome, PromptError> {
        let query = self.prompter.ask(SEARCH_PROMPT)?;
        let airport = resolve_airport(&query, &self.catalog, &mut self.prompter)?;
        let iata = airport.iata.clone();

        let raw = match self.schedules.fetch_departures(&iata).await {
            Ok(raw) => raw,
            Err(err) => {
                let err = anyhow::Error::from(err);
                warn!("Fetching departures for {iata} failed: {err:#}");
                self.renderer.notify(&format!(
                    "Could not load departures for {} ({iata}): {err:#}",
                    airport.name
                ));
                return Ok(CycleOutcome::FetchFailed { iata });
            }
        };

        let flights = enrich(raw, &self.catalog);
        self.renderer.render(&FlightTable::new(airport, &flights));

        Ok(CycleOutcome::Rendered { iata, flights: flights.len() })
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
