// Summary statistics over chart values
use crate::domain::power::{ChartPoint, Statistics};

impl Statistics {
    /// Peak over every value; min and mean over positive values only, since
    /// zero means "not generating" rather than a low reading.
    pub fn from_values(values: &[f64]) -> Self {
        let max_power = values.iter().copied().fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |m| m.max(v)))
        });

        let (positive_count, positive_sum, positive_min) = values
            .iter()
            .copied()
            .filter(|v| *v > 0.0)
            .fold((0usize, 0.0, f64::INFINITY), |(n, sum, min), v| {
                (n + 1, sum + v, min.min(v))
            });

        let (min_power, avg_power) = if positive_count > 0 {
            (positive_min, positive_sum / positive_count as f64)
        } else {
            (0.0, 0.0)
        };

        Self {
            max_power: max_power.unwrap_or(0.0),
            min_power,
            avg_power,
            data_count: values.len(),
        }
    }

    pub fn from_points(points: &[ChartPoint]) -> Self {
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        Self::from_values(&values)
    }
}
