//! Blocking HTTP client for the Opsgenie REST API (v2).
//!
//! Each endpoint module owns the wire shapes for its responses and maps
//! them into domain types; nothing outside `api` sees raw payloads. The
//! API wraps every payload in `{"data": ...}`, so each response struct
//! here has a single `data` field.

mod alerts;
mod schedules;

pub use alerts::AlertFilter;
pub use schedules::{Interval, IntervalUnit};

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};

use crate::config::Config;
use crate::model::{Alert, Rotation, Schedule};
use crate::timeline::RotationTimeline;

/// Errors from talking to the API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = core::result::Result<T, ApiError>;

/// Authenticated client for one Opsgenie account.
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    /// Creates a client from resolved configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Lists alerts matching the filter, newest first.
    pub fn list_alerts(&self, filter: &AlertFilter) -> Result<Vec<Alert>> {
        alerts::list(self, filter)
    }

    /// Lists schedules. With `expand_rotations`, each schedule's rotations
    /// are included inline.
    pub fn list_schedules(&self, expand_rotations: bool) -> Result<Vec<Schedule>> {
        schedules::list(self, expand_rotations)
    }

    /// Lists the rotations of a schedule, identified by name.
    pub fn list_rotations(&self, schedule_name: &str) -> Result<Vec<Rotation>> {
        schedules::list_rotations(self, schedule_name)
    }

    /// Fetches a schedule's final timeline over the interval starting at
    /// `date`, compacting each rotation's periods.
    pub fn schedule_timeline(
        &self,
        schedule_name: &str,
        date: jiff::civil::Date,
        interval: Interval,
    ) -> Result<Vec<RotationTimeline>> {
        schedules::timeline(self, schedule_name, date, interval)
    }

    /// Starts an authenticated GET request against an API path.
    fn get(&self, path: &str) -> RequestBuilder {
        self.client
            .get(format!("{}{path}", self.base_url))
            .header("Authorization", format!("GenieKey {}", self.api_key))
    }

    /// Sends a request and decodes the JSON response body.
    ///
    /// Non-2xx responses become [`ApiError::Api`] with the body text as the
    /// message, since Opsgenie puts its error description there.
    fn fetch<T: serde::de::DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send()?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json()?)
        } else {
            Err(ApiError::Api {
                status: status.as_u16(),
                message: response.text().unwrap_or_default(),
            })
        }
    }
}
