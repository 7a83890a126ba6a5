// Power measurement domain models
use serde::{Deserialize, Serialize};

/// Grid power as delivered by the upstream API: usually a number in kW,
/// sometimes a numeric string, occasionally null.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(untagged)]
pub enum GridPower {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl GridPower {
    /// Kilowatt value, or `None` when the reading isn't numeric.
    pub fn as_kilowatts(&self) -> Option<f64> {
        let kw = match self {
            GridPower::Number(v) => *v,
            GridPower::Text(s) => s.trim().parse::<f64>().ok()?,
            GridPower::Missing => return None,
        };
        if kw.is_nan() { None } else { Some(kw) }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReading {
    pub device_time: String,
    #[serde(default)]
    pub grid_power: GridPower,
}

impl RawReading {
    pub fn new(device_time: impl Into<String>, grid_power: GridPower) -> Self {
        Self {
            device_time: device_time.into(),
            grid_power,
        }
    }
}

/// A single chart sample: epoch milliseconds and watts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub time: i64,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(time: i64, value: f64) -> Self {
        Self { time, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub max_power: f64,
    pub min_power: f64,
    pub avg_power: f64,
    pub data_count: usize,
}

/// Output of the chart pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResult {
    pub chart_data: Vec<ChartPoint>,
    pub statistics: Statistics,
    pub raw_count: usize,
}
