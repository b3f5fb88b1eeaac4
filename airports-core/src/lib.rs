//! Core library for the `airports` CLI.
//!
//! This crate defines:
//! - The in-memory airport catalog and name/IATA lookups
//! - Interactive disambiguation of airport searches
//! - Providers for flight schedules (AirLabs) and country facts (REST Countries)
//! - Enrichment of departures and the search loop that ties it together
//! - Configuration & credentials handling
//!
//! It is used by `airports-cli`, but the console and network seams are traits,
//! so other front ends (or tests) can drive the same pipeline.

pub mod catalog;
pub mod config;
pub mod disambiguate;
pub mod enrich;
pub mod error;
pub mod model;
pub mod prompt;
pub mod provider;
pub mod session;
pub mod table;

#[cfg(test)]
mod testing;

pub use catalog::AirportCatalog;
pub use config::Config;
pub use error::{CatalogError, CountryFetchError, PromptError, ScheduleFetchError};
pub use model::{AirportRecord, EnrichedFlight, ScheduleRecord};
pub use prompt::Prompter;
pub use provider::{CountrySource, CountrySummary, ScheduleSource};
pub use session::{CycleOutcome, SearchLoop};
pub use table::{FlightTable, Renderer};
