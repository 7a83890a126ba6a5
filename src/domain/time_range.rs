// Query time ranges
use crate::domain::error::PipelineError;
use chrono::{DateTime, Days, Local, TimeZone};
use serde::{Deserialize, Serialize};

pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Longest span a caller may request by default.
pub const DEFAULT_MAX_SPAN_MS: i64 = 30 * MS_PER_DAY;

/// Half-open millisecond interval with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum QuickRange {
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "3days")]
    ThreeDays,
    #[serde(rename = "7days")]
    SevenDays,
}

impl TimeRange {
    pub fn new(start: i64, end: i64, max_span_ms: i64) -> Result<Self, PipelineError> {
        if start >= end {
            return Err(PipelineError::InvalidRange {
                start,
                end,
                reason: "start must be before end".to_string(),
            });
        }
        // Widened so extreme bounds cannot overflow the subtraction
        if (end as i128 - start as i128) > max_span_ms as i128 {
            return Err(PipelineError::InvalidRange {
                start,
                end,
                reason: format!("span exceeds {} days", max_span_ms / MS_PER_DAY),
            });
        }
        Ok(Self { start, end })
    }

    /// Preset ranges ending at `now`, anchored in local time.
    pub fn quick<Tz: TimeZone>(kind: QuickRange, now: DateTime<Tz>) -> Self {
        let start = match kind {
            QuickRange::Today => now
                .date_naive()
                .and_hms_opt(0, 0, 0)
                .and_then(|midnight| now.timezone().from_local_datetime(&midnight).earliest())
                .unwrap_or_else(|| now.clone()),
            QuickRange::ThreeDays => now.clone().checked_sub_days(Days::new(3)).unwrap_or_else(|| now.clone()),
            QuickRange::SevenDays => now.clone().checked_sub_days(Days::new(7)).unwrap_or_else(|| now.clone()),
        };
        Self {
            start: start.timestamp_millis(),
            end: now.timestamp_millis(),
        }
    }

    pub fn span_ms(&self) -> i64 {
        self.end - self.start
    }
}

/// Render epoch milliseconds as `YYYY-MM-DD HH:MM:SS` local time.
pub fn format_timestamp(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => ms.to_string(),
    }
}
