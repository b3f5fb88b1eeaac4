use crate::{
    Config,
    error::{CountryFetchError, ScheduleFetchError},
    model::ScheduleRecord,
    provider::{airlabs::AirLabsProvider, restcountries::RestCountriesProvider},
};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use std::{fmt::Debug, time::Duration};

pub mod airlabs;
pub mod restcountries;

pub use restcountries::CountrySummary;

/// Source of scheduled departures for an airport.
#[async_trait]
pub trait ScheduleSource: Send + Sync + Debug {
    async fn fetch_departures(&self, iata: &str)
    -> Result<Vec<ScheduleRecord>, ScheduleFetchError>;
}

/// Source of country facts for a free-text country name.
#[async_trait]
pub trait CountrySource: Send + Sync + Debug {
    async fn fetch_country(&self, name: &str) -> Result<CountrySummary, CountryFetchError>;
}

/// Construct the schedule provider from config and a resolved API key.
pub fn schedule_source_from_config(
    config: &Config,
    api_key: String,
) -> anyhow::Result<Box<dyn ScheduleSource>> {
    let http = http_client(config.request_timeout())?;
    Ok(Box::new(AirLabsProvider::new(api_key, http)))
}

pub fn country_source_from_config(config: &Config) -> anyhow::Result<Box<dyn CountrySource>> {
    let http = http_client(config.request_timeout())?;
    Ok(Box::new(RestCountriesProvider::new(http)))
}

fn http_client(timeout: Duration) -> anyhow::Result<Client> {
    Client::builder().timeout(timeout).build().context("Failed to build HTTP client")
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
