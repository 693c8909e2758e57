//! Distance Matrix client.
//!
//! Each lookup sends a single origin and a single destination with the travel
//! mode fixed to `driving`. Batching several pairs into one request would only
//! touch this module; the pipeline sees the [`DistanceLookup`] trait.

use crate::domain::model::LookupResult;
use crate::domain::ports::DistanceLookup;
use crate::utils::error::{EtlError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";
pub const TRAVEL_MODE: &str = "driving";
const STATUS_OK: &str = "OK";

/// Distance Matrix API response body.
#[derive(Debug, Deserialize)]
pub struct DistanceMatrixResponse {
    /// Top-level status, `"OK"` on success. Other values include
    /// `"INVALID_REQUEST"`, `"REQUEST_DENIED"` and `"OVER_QUERY_LIMIT"`.
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Deserialize)]
pub struct MatrixRow {
    #[serde(default)]
    pub elements: Vec<MatrixElement>,
}

#[derive(Debug, Deserialize)]
pub struct MatrixElement {
    #[serde(default)]
    pub status: String,
    /// Absent when the element has no route, e.g. `ZERO_RESULTS`.
    pub distance: Option<Measure>,
    pub duration: Option<Measure>,
}

#[derive(Debug, Deserialize)]
pub struct Measure {
    #[serde(default)]
    pub text: String,
    /// Meters for distance, seconds for duration.
    pub value: u64,
}

impl DistanceMatrixResponse {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    pub fn first_element(&self) -> Option<&MatrixElement> {
        self.rows.first().and_then(|row| row.elements.first())
    }

    /// Distance and duration of the first element, or the sentinel when the
    /// response carries no route.
    pub fn to_lookup_result(&self) -> LookupResult {
        let Some(element) = self.first_element() else {
            tracing::warn!("Distance matrix response contained no elements");
            return LookupResult::unavailable();
        };

        match (&element.distance, &element.duration) {
            (Some(distance), Some(duration)) => {
                LookupResult::new(meters_to_km(distance.value), duration.text.clone())
            }
            _ => {
                tracing::warn!("No route available (element status: {})", element.status);
                LookupResult::unavailable()
            }
        }
    }
}

fn meters_to_km(meters: u64) -> f64 {
    meters as f64 / 1000.0
}

#[derive(Debug, Clone)]
pub struct DistanceMatrixClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl DistanceMatrixClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    fn request_url(&self, origin: &str, destination: &str) -> Result<Url> {
        let url = Url::parse_with_params(
            &self.endpoint,
            &[
                ("origins", origin),
                ("destinations", destination),
                ("mode", TRAVEL_MODE),
                ("key", self.api_key.as_str()),
            ],
        )?;
        Ok(url)
    }

    /// 呼叫 API 並檢查頂層狀態
    pub async fn fetch_matrix(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DistanceMatrixResponse> {
        let url = self.request_url(origin, destination)?;

        tracing::debug!(
            "Requesting distance matrix from {} for {} -> {}",
            self.endpoint,
            origin,
            destination
        );
        // reqwest 錯誤訊息會附上含金鑰的網址
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| EtlError::NetworkError(e.without_url()))?;
        tracing::debug!("API response status: {}", response.status());

        let body = response
            .bytes()
            .await
            .map_err(|e| EtlError::NetworkError(e.without_url()))?;
        let matrix: DistanceMatrixResponse = serde_json::from_slice(&body)?;

        if !matrix.is_ok() {
            return Err(EtlError::ApiStatusError {
                status: matrix.status,
                message: matrix.error_message,
            });
        }

        Ok(matrix)
    }
}

#[async_trait]
impl DistanceLookup for DistanceMatrixClient {
    async fn lookup(&self, origin: &str, destination: &str) -> Result<LookupResult> {
        let matrix = self.fetch_matrix(origin, destination).await?;
        Ok(matrix.to_lookup_result())
    }
}
