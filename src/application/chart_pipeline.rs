// Chart pipeline - Raw readings to bounded chart series plus statistics
use crate::domain::error::PipelineError;
use crate::domain::gap_fill::GapFill;
use crate::domain::normalize::{normalize_readings, sort_chronologically};
use crate::domain::power::{ChartResult, RawReading, Statistics};
use crate::domain::sampling::SamplingStrategy;
use serde::Deserialize;

/// Tunables for the reduction pipeline. Defaults keep charts near 1000 points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub small_series_threshold: usize,
    pub medium_series_ceiling: usize,
    pub lttb_target_buckets: usize,
    pub gap_fill_max_length: usize,
    pub gap_fill_base_interval_ms: i64,
    pub gap_fill_trigger_multiple: i64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            small_series_threshold: 1000,
            medium_series_ceiling: 10000,
            lttb_target_buckets: 1000,
            gap_fill_max_length: 500,
            gap_fill_base_interval_ms: 300_000,
            gap_fill_trigger_multiple: 3,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), PipelineError> {
        let invalid = |msg: &str| Err(PipelineError::InvalidConfig(msg.to_string()));

        if self.small_series_threshold == 0 {
            return invalid("small_series_threshold must be positive");
        }
        if self.medium_series_ceiling < self.small_series_threshold {
            return invalid("medium_series_ceiling must not be below small_series_threshold");
        }
        if self.lttb_target_buckets < 3 {
            return invalid("lttb_target_buckets must be at least 3");
        }
        if self.gap_fill_base_interval_ms <= 0 {
            return invalid("gap_fill_base_interval_ms must be positive");
        }
        if self.gap_fill_trigger_multiple <= 0 {
            return invalid("gap_fill_trigger_multiple must be positive");
        }
        Ok(())
    }

    pub fn strategy_for(&self, n: usize) -> SamplingStrategy {
        SamplingStrategy::select(
            n,
            self.small_series_threshold,
            self.medium_series_ceiling,
            self.lttb_target_buckets,
        )
    }

    pub fn gap_fill(&self) -> GapFill {
        GapFill {
            max_len: self.gap_fill_max_length,
            base_interval_ms: self.gap_fill_base_interval_ms,
            trigger_multiple: self.gap_fill_trigger_multiple,
        }
    }
}

/// Run normalize -> sort -> sample -> gap fill -> statistics over one batch.
pub fn process_chart_data(
    readings: &[RawReading],
    config: &PipelineConfig,
) -> Result<ChartResult, PipelineError> {
    if readings.is_empty() {
        return Ok(ChartResult {
            chart_data: Vec::new(),
            statistics: Statistics::default(),
            raw_count: 0,
        });
    }

    let points = sort_chronologically(normalize_readings(readings)?);
    let raw_count = points.len();

    let strategy = config.strategy_for(raw_count);
    let reduced = strategy.apply(points);
    tracing::debug!(
        "Reduced {} -> {} points using {}",
        raw_count,
        reduced.len(),
        strategy.name()
    );

    let chart_data = config.gap_fill().fill(reduced);
    let statistics = Statistics::from_points(&chart_data);

    Ok(ChartResult {
        chart_data,
        statistics,
        raw_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::power::GridPower;

    fn readings(n: usize, step_ms: i64) -> Vec<RawReading> {
        (0..n)
            .map(|i| {
                RawReading::new(
                    (1_700_000_000_000 + i as i64 * step_ms).to_string(),
                    GridPower::Number((i % 50) as f64 / 10.0),
                )
            })
            .collect()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        let bad = PipelineConfig {
            lttb_target_buckets: 2,
            ..PipelineConfig::default()
        };
        assert!(matches!(bad.validate(), Err(PipelineError::InvalidConfig(_))));

        let bad = PipelineConfig {
            medium_series_ceiling: 10,
            ..PipelineConfig::default()
        };
        assert!(bad.validate().is_err());

        let bad = PipelineConfig {
            gap_fill_base_interval_ms: 0,
            ..PipelineConfig::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_empty_input() {
        let result = process_chart_data(&[], &PipelineConfig::default()).unwrap();
        assert!(result.chart_data.is_empty());
        assert_eq!(result.statistics, Statistics::default());
    }

    #[test]
    fn test_unsorted_input_is_ordered_and_converted() {
        let input = vec![
            RawReading::new("3000", GridPower::Number(0.3)),
            RawReading::new("1000", GridPower::Text("2.5".to_string())),
            RawReading::new("2000", GridPower::Text("abc".to_string())),
        ];
        let result = process_chart_data(&input, &PipelineConfig::default()).unwrap();
        let times: Vec<i64> = result.chart_data.iter().map(|p| p.time).collect();
        assert_eq!(times, vec![1000, 2000, 3000]);
        assert_eq!(result.chart_data[0].value, 2500.0);
        assert_eq!(result.chart_data[1].value, 0.0);
        assert_eq!(result.statistics.max_power, 2500.0);
        assert_eq!(result.statistics.data_count, 3);
    }

    #[test]
    fn test_malformed_time_aborts() {
        let input = vec![
            RawReading::new("1000", GridPower::Number(1.0)),
            RawReading::new("not-a-time", GridPower::Number(1.0)),
        ];
        let err = process_chart_data(&input, &PipelineConfig::default()).unwrap_err();
        assert!(matches!(err, PipelineError::MalformedInput { index: 1, .. }));
    }

    #[test]
    fn test_large_series_reduced_to_budget() {
        let input = readings(20_000, 60_000);
        let result = process_chart_data(&input, &PipelineConfig::default()).unwrap();
        assert_eq!(result.raw_count, 20_000);
        assert_eq!(result.chart_data.len(), 1_000);
        assert!(result.chart_data.windows(2).all(|w| w[0].time <= w[1].time));
        assert_eq!(result.statistics.data_count, 1_000);
    }

    #[test]
    fn test_medium_series_strided() {
        let input = readings(5_000, 60_000);
        let result = process_chart_data(&input, &PipelineConfig::default()).unwrap();
        assert_eq!(result.chart_data.len(), 1_000);
    }

    #[test]
    fn test_sparse_series_gets_gap_anchors() {
        let input = vec![
            RawReading::new("0", GridPower::Number(1.0)),
            RawReading::new("1200000", GridPower::Number(2.0)),
        ];
        let result = process_chart_data(&input, &PipelineConfig::default()).unwrap();
        assert_eq!(result.chart_data.len(), 3);
        assert_eq!(result.chart_data[1].time, 300_000);
        assert_eq!(result.chart_data[1].value, 0.0);
        assert_eq!(result.statistics.data_count, 3);
        assert_eq!(result.statistics.min_power, 1000.0);
        assert_eq!(result.statistics.avg_power, 1500.0);
    }

    #[test]
    fn test_overridden_thresholds() {
        let config = PipelineConfig {
            small_series_threshold: 10,
            medium_series_ceiling: 20,
            lttb_target_buckets: 5,
            ..PipelineConfig::default()
        };
        let result = process_chart_data(&readings(50, 1_000), &config).unwrap();
        assert_eq!(result.chart_data.len(), 5);
    }
}
