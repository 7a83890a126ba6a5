// Upstream PV API repository implementation
use crate::application::power_repository::PowerRepository;
use crate::domain::power::RawReading;
use crate::domain::station::Station;
use crate::domain::time_range::TimeRange;
use crate::infrastructure::config::UpstreamSettings;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpPowerRepository {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StationListResponse {
    stations: Vec<StationEntry>,
    #[allow(dead_code)]
    #[serde(default)]
    total_count: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StationEntry {
    station_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PowerDataResponse {
    #[allow(dead_code)]
    #[serde(default)]
    station_id: Option<String>,
    #[serde(default)]
    data: Vec<RawReading>,
}

impl HttpPowerRepository {
    pub fn new(settings: &UpstreamSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build upstream HTTP client")?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn stations_url(&self) -> String {
        format!("{}/pv/stations", self.base_url)
    }

    fn power_url(&self, station_id: &str) -> String {
        format!("{}/pv/{}/power", self.base_url, urlencoding::encode(station_id))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        tracing::debug!("API request: GET {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .query(params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Upstream request to {} failed: {}", url, e);
                if e.is_timeout() {
                    anyhow::anyhow!("Upstream request timed out")
                } else {
                    anyhow::anyhow!("Failed to connect to upstream PV API: {}", e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Upstream returned {} for {}: {}", status, url, body);
            anyhow::bail!("{}", describe_status(status));
        }

        response
            .json::<T>()
            .await
            .context("Failed to parse upstream response")
    }
}

fn describe_status(status: StatusCode) -> String {
    match status {
        StatusCode::BAD_REQUEST => "Upstream rejected the request parameters".to_string(),
        StatusCode::NOT_FOUND => "Requested resource does not exist upstream".to_string(),
        StatusCode::INTERNAL_SERVER_ERROR => "Upstream server error".to_string(),
        other => format!("Upstream request failed ({})", other.as_u16()),
    }
}

#[async_trait]
impl PowerRepository for HttpPowerRepository {
    async fn list_stations(&self) -> Result<Vec<Station>> {
        let response: StationListResponse = self.get_json(&self.stations_url(), &[]).await?;
        Ok(response
            .stations
            .into_iter()
            .map(|s| Station::new(s.station_id))
            .collect())
    }

    async fn fetch_power_data(&self, station_id: &str, range: &TimeRange) -> Result<Vec<RawReading>> {
        let params = [
            ("startTime", range.start.to_string()),
            ("endTime", range.end.to_string()),
        ];
        let response: PowerDataResponse = self.get_json(&self.power_url(station_id), &params).await?;

        tracing::debug!(
            "Fetched {} readings for station {}",
            response.data.len(),
            station_id
        );
        Ok(response.data)
    }
}
