// Power service - Use case for querying a station's chart data
use crate::application::chart_pipeline::{process_chart_data, PipelineConfig};
use crate::application::loading::LoadingState;
use crate::application::power_repository::PowerRepository;
use crate::domain::error::PipelineError;
use crate::domain::power::ChartResult;
use crate::domain::time_range::{format_timestamp, TimeRange};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PowerQueryError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

#[derive(Clone)]
pub struct PowerService {
    repository: Arc<dyn PowerRepository>,
    pipeline: PipelineConfig,
    max_span_ms: i64,
    loading: LoadingState,
}

impl PowerService {
    pub fn new(
        repository: Arc<dyn PowerRepository>,
        pipeline: PipelineConfig,
        max_span_ms: i64,
        loading: LoadingState,
    ) -> Self {
        Self {
            repository,
            pipeline,
            max_span_ms,
            loading,
        }
    }

    /// Validate the range, fetch the batch and reduce it for charting.
    pub async fn query_power_data(
        &self,
        station_id: &str,
        start: i64,
        end: i64,
    ) -> Result<ChartResult, PowerQueryError> {
        // Rejected before any fetch happens
        let range = TimeRange::new(start, end, self.max_span_ms)?;

        let _loading = self.loading.begin();

        tracing::debug!(
            "Querying {} from {} to {} ({} ms)",
            station_id,
            format_timestamp(range.start),
            format_timestamp(range.end),
            range.span_ms()
        );

        let readings = self.repository.fetch_power_data(station_id, &range).await?;
        let result = process_chart_data(&readings, &self.pipeline)?;

        tracing::info!(
            "Station {}: {} readings -> {} chart points",
            station_id,
            result.raw_count,
            result.chart_data.len()
        );

        Ok(result)
    }

    pub fn loading(&self) -> &LoadingState {
        &self.loading
    }
}
