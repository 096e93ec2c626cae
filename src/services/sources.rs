//! Data-source collaborators: airports, location lists and per-location
//! details. The traits are what the planning core depends on; the `Http*`
//! implementations are thin reqwest clients in front of the backing APIs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::models::airport::Airport;
use crate::models::location::{Location, LocationDetails};

/// Hard cap on aggregated pages so a source that always reports another
/// page cannot loop the client forever.
pub const MAX_LOCATION_PAGES: u32 = 20;

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// One page of the location list.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationPage {
    pub data: Vec<Location>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    #[serde(alias = "hasNext")]
    pub has_next: bool,
}

#[allow(async_fn_in_trait)]
pub trait LocationDataSource {
    async fn fetch_page(&self, page: u32) -> Result<LocationPage, SourceError>;
}

#[allow(async_fn_in_trait)]
pub trait AirportDataSource {
    async fn fetch_airports(&self) -> Result<Vec<Airport>, SourceError>;
}

#[allow(async_fn_in_trait)]
pub trait LocationDetailsSource {
    async fn fetch_details(&self, location_id: &str) -> Result<LocationDetails, SourceError>;
}

/// Aggregate every page of the location list, stopping at the source's
/// `has_next` signal or at `MAX_LOCATION_PAGES`, whichever comes first.
/// Hitting the cap keeps what was collected rather than failing.
pub async fn fetch_all_locations<S: LocationDataSource>(
    source: &S,
) -> Result<Vec<Location>, SourceError> {
    let mut all = Vec::new();
    let mut page = 1;

    loop {
        let batch = source.fetch_page(page).await?;
        all.extend(batch.data);

        if !batch.pagination.has_next {
            break;
        }
        page += 1;
        if page > MAX_LOCATION_PAGES {
            log::warn!(
                "location source still reports more pages after {}; stopping with {} records",
                MAX_LOCATION_PAGES,
                all.len()
            );
            break;
        }
    }

    Ok(all)
}

/// Cancellation for in-flight fetches whose originating selection was torn
/// down. The fetch itself is not interrupted; callers check the token
/// before applying results to state and discard them when it fired.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Location list/details over HTTP.
pub struct HttpLocationSource {
    http_client: reqwest::Client,
    base_url: Url,
}

impl HttpLocationSource {
    pub fn new(base_url: &str) -> Result<Self, SourceError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
        })
    }
}

impl LocationDataSource for HttpLocationSource {
    async fn fetch_page(&self, page: u32) -> Result<LocationPage, SourceError> {
        let mut url = self.base_url.join("locations")?;
        url.query_pairs_mut().append_pair("page", &page.to_string());

        let response = self.http_client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }
        Ok(response.json::<LocationPage>().await?)
    }
}

impl LocationDetailsSource for HttpLocationSource {
    async fn fetch_details(&self, location_id: &str) -> Result<LocationDetails, SourceError> {
        let url = self
            .base_url
            .join(&format!("locations/{}", location_id))?;

        let response = self.http_client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }
        Ok(response.json::<LocationDetails>().await?)
    }
}

/// Airport list over HTTP.
pub struct HttpAirportSource {
    http_client: reqwest::Client,
    base_url: Url,
}

impl HttpAirportSource {
    pub fn new(base_url: &str) -> Result<Self, SourceError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
        })
    }
}

impl AirportDataSource for HttpAirportSource {
    async fn fetch_airports(&self) -> Result<Vec<Airport>, SourceError> {
        let url = self.base_url.join("airports")?;

        let response = self.http_client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }
        Ok(response.json::<Vec<Airport>>().await?)
    }
}
