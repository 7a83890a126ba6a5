// Repository trait for PV station data access
use crate::domain::power::RawReading;
use crate::domain::station::Station;
use crate::domain::time_range::TimeRange;
use async_trait::async_trait;

#[async_trait]
pub trait PowerRepository: Send + Sync {
    /// List all stations known to the upstream API
    async fn list_stations(&self) -> anyhow::Result<Vec<Station>>;

    /// Fetch the complete batch of raw readings for a station within `range`
    async fn fetch_power_data(
        &self,
        station_id: &str,
        range: &TimeRange,
    ) -> anyhow::Result<Vec<RawReading>>;
}
