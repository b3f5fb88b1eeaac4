use std::{collections::BTreeMap, fmt};

use async_trait::async_trait;
use log::info;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::error::CountryFetchError;

use super::{CountrySource, truncate_body};

pub const COUNTRIES_URL: &str = "https://restcountries.com/v3.1/name";

#[derive(Debug, Clone)]
pub struct RestCountriesProvider {
    http: Client,
    base_url: String,
}

impl RestCountriesProvider {
    pub fn new(http: Client) -> Self {
        Self { http, base_url: COUNTRIES_URL.to_string() }
    }
}

/// `{base_url}/{name}` with the name as one percent-encoded path segment.
///
/// `None` when `base_url` is not an absolute, hierarchical URL.
pub fn country_url(base_url: &str, name: &str) -> Option<Url> {
    let mut url = Url::parse(base_url).ok()?;
    url.path_segments_mut().ok()?.pop_if_empty().push(name.trim());
    Some(url)
}

/// The handful of facts shown for a country.
#[derive(Debug, Clone, PartialEq)]
pub struct CountrySummary {
    pub name: String,
    pub capital: Option<String>,
    pub currency: Option<String>,
}

impl fmt::Display for CountrySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Country: {}", self.name)?;
        writeln!(f, "Capital: {}", self.capital.as_deref().unwrap_or("-"))?;
        write!(f, "Currency: {}", self.currency.as_deref().unwrap_or("-"))
    }
}

#[derive(Debug, Deserialize)]
struct RcName {
    common: String,
}

#[derive(Debug, Deserialize)]
struct RcCurrency {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RcCountry {
    name: RcName,
    #[serde(default)]
    capital: Vec<String>,
    /// Keyed by currency code.
    #[serde(default)]
    currencies: BTreeMap<String, RcCurrency>,
}

/// Interpret a `/name/{name}` response, keeping the first country returned.
pub fn parse_country_body(
    status: StatusCode,
    body: &str,
) -> Result<CountrySummary, CountryFetchError> {
    if status == StatusCode::NOT_FOUND {
        return Err(CountryFetchError::NotFound);
    }

    if !status.is_success() {
        return Err(CountryFetchError::Status {
            status: status.as_u16(),
            body: truncate_body(body),
        });
    }

    let countries: Vec<RcCountry> =
        serde_json::from_str(body).map_err(CountryFetchError::Malformed)?;

    let first = countries.into_iter().next().ok_or(CountryFetchError::NotFound)?;

    Ok(CountrySummary {
        name: first.name.common,
        capital: first.capital.into_iter().next(),
        currency: first.currencies.into_values().next().map(|c| c.name),
    })
}

#[async_trait]
impl CountrySource for RestCountriesProvider {
    async fn fetch_country(&self, name: &str) -> Result<CountrySummary, CountryFetchError> {
        let url = country_url(&self.base_url, name)
            .ok_or_else(|| CountryFetchError::InvalidUrl { base_url: self.base_url.clone() })?;
        info!("Fetching country data from {url}");

        let res = self.http.get(url).send().await.map_err(CountryFetchError::Request)?;

        let status = res.status();
        let body = res.text().await.map_err(CountryFetchError::Request)?;

        parse_country_body(status, &body)
    }
}
