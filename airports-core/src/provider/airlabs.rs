use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{error::ScheduleFetchError, model::ScheduleRecord};

use super::{ScheduleSource, truncate_body};

pub const SCHEDULES_URL: &str = "https://airlabs.co/api/v9/schedules";

/// AirLabs departures schedule, authenticated with a query-string API key.
#[derive(Debug, Clone)]
pub struct AirLabsProvider {
    api_key: String,
    http: Client,
    base_url: String,
}

impl AirLabsProvider {
    pub fn new(api_key: String, http: Client) -> Self {
        Self { api_key, http, base_url: SCHEDULES_URL.to_string() }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Deserialize)]
struct AlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct AlEnvelope {
    response: Option<Vec<ScheduleRecord>>,
    error: Option<AlError>,
}

/// Interpret a schedules response.
///
/// AirLabs reports some failures (bad key, unknown airport) with a 200 and an
/// `error` object instead of `response`.
pub fn parse_schedule_body(
    status: StatusCode,
    body: &str,
) -> Result<Vec<ScheduleRecord>, ScheduleFetchError> {
    if !status.is_success() {
        return Err(ScheduleFetchError::Status {
            status: status.as_u16(),
            body: truncate_body(body),
        });
    }

    let parsed: AlEnvelope = serde_json::from_str(body).map_err(ScheduleFetchError::Malformed)?;

    match parsed {
        AlEnvelope { response: Some(flights), .. } => Ok(flights),
        AlEnvelope { error: Some(err), .. } => {
            Err(ScheduleFetchError::Api { message: err.message })
        }
        AlEnvelope { response: None, error: None } => {
            Err(ScheduleFetchError::MissingResponse { body: truncate_body(body) })
        }
    }
}

/// The request URL carries the API key, so it is stripped from transport errors.
fn request_error(err: reqwest::Error) -> ScheduleFetchError {
    ScheduleFetchError::Request(err.without_url())
}

#[async_trait]
impl ScheduleSource for AirLabsProvider {
    async fn fetch_departures(
        &self,
        iata: &str,
    ) -> Result<Vec<ScheduleRecord>, ScheduleFetchError> {
        info!("Fetching departures from {} for dep_iata={iata}", self.base_url);

        let res = self
            .http
            .get(&self.base_url)
            .query(&[("dep_iata", iata), ("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(request_error)?;

        let status = res.status();
        let body = res.text().await.map_err(request_error)?;
        debug!("Schedules response status={status} bytes={}", body.len());

        parse_schedule_body(status, &body)
    }
}
