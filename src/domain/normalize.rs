// Unit normalization (kW -> W) and chronological ordering
use crate::domain::error::PipelineError;
use crate::domain::power::{ChartPoint, RawReading};

const WATTS_PER_KILOWATT: f64 = 1000.0;

/// Convert one raw reading into a chart point in watts.
///
/// A non-numeric power value degrades to zero. A timestamp that is not a
/// decimal integer is rejected, since every later stage depends on ordering.
pub fn normalize_reading(index: usize, reading: &RawReading) -> Result<ChartPoint, PipelineError> {
    let time = reading
        .device_time
        .trim()
        .parse::<i64>()
        .map_err(|_| PipelineError::MalformedInput {
            index,
            device_time: reading.device_time.clone(),
        })?;

    let value = reading.grid_power.as_kilowatts().unwrap_or(0.0) * WATTS_PER_KILOWATT;
    Ok(ChartPoint::new(time, value))
}

/// Normalize a whole batch, failing on the first corrupt timestamp.
pub fn normalize_readings(readings: &[RawReading]) -> Result<Vec<ChartPoint>, PipelineError> {
    readings
        .iter()
        .enumerate()
        .map(|(index, reading)| normalize_reading(index, reading))
        .collect()
}

/// Stable ascending sort by time; equal timestamps keep arrival order.
pub fn sort_chronologically(mut points: Vec<ChartPoint>) -> Vec<ChartPoint> {
    points.sort_by_key(|p| p.time);
    points
}
