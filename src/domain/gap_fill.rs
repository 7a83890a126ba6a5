// Zero-anchor insertion across data outages
use crate::domain::power::ChartPoint;

/// Gap filling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapFill {
    /// Only series with `1 < len <= max_len` are filled.
    pub max_len: usize,
    pub base_interval_ms: i64,
    /// Gaps wider than `base_interval_ms * trigger_multiple` are filled, and
    /// anchors after the first are spaced by the same amount.
    pub trigger_multiple: i64,
}

impl GapFill {
    pub fn applies_to(&self, len: usize) -> bool {
        len > 1 && len <= self.max_len
    }

    /// Insert zero-valued anchors into every gap wider than the trigger.
    ///
    /// Anchors sit at `current + I`, then every `I * multiple` after that,
    /// strictly before the next real point. Series outside the length window
    /// are returned unchanged.
    pub fn fill(&self, points: Vec<ChartPoint>) -> Vec<ChartPoint> {
        if !self.applies_to(points.len()) || self.base_interval_ms <= 0 {
            return points;
        }

        let stride = self.base_interval_ms.saturating_mul(self.trigger_multiple.max(1));
        let mut filled = Vec::with_capacity(points.len());

        for pair in points.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            filled.push(current);

            if next.time.saturating_sub(current.time) > stride {
                let mut time = current.time + self.base_interval_ms;
                while time < next.time {
                    filled.push(ChartPoint::new(time, 0.0));
                    time = time.saturating_add(stride);
                }
            }
        }

        filled.push(points[points.len() - 1]);
        filled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_MIN: i64 = 300_000;

    fn filler() -> GapFill {
        GapFill {
            max_len: 500,
            base_interval_ms: FIVE_MIN,
            trigger_multiple: 3,
        }
    }

    #[test]
    fn test_small_gaps_untouched() {
        let points: Vec<ChartPoint> = (0..10)
            .map(|i| ChartPoint::new(i * 3 * FIVE_MIN, 100.0))
            .collect();
        assert_eq!(filler().fill(points.clone()), points);
    }

    #[test]
    fn test_twenty_minute_gap_gets_one_anchor() {
        let points = vec![ChartPoint::new(0, 50.0), ChartPoint::new(1_200_000, 60.0)];
        let out = filler().fill(points);
        assert_eq!(
            out,
            vec![
                ChartPoint::new(0, 50.0),
                ChartPoint::new(300_000, 0.0),
                ChartPoint::new(1_200_000, 60.0),
            ]
        );
    }

    #[test]
    fn test_long_outage_anchors_at_stride() {
        let points = vec![ChartPoint::new(0, 1.0), ChartPoint::new(3_600_000, 2.0)];
        let out = filler().fill(points);
        let times: Vec<i64> = out.iter().map(|p| p.time).collect();
        assert_eq!(times, vec![0, 300_000, 1_200_000, 2_100_000, 3_000_000, 3_600_000]);
        assert!(out[1..out.len() - 1].iter().all(|p| p.value == 0.0));
    }

    #[test]
    fn test_exactly_trigger_gap_not_filled() {
        let points = vec![ChartPoint::new(0, 1.0), ChartPoint::new(900_000, 2.0)];
        assert_eq!(filler().fill(points.clone()), points);
    }

    #[test]
    fn test_length_window() {
        let single = vec![ChartPoint::new(0, 1.0)];
        assert_eq!(filler().fill(single.clone()), single);

        let gap = 10 * FIVE_MIN;
        let long: Vec<ChartPoint> = (0..501).map(|i| ChartPoint::new(i * gap, 1.0)).collect();
        assert_eq!(filler().fill(long.clone()), long);

        let at_limit: Vec<ChartPoint> = (0..500).map(|i| ChartPoint::new(i * gap, 1.0)).collect();
        assert!(filler().fill(at_limit).len() > 500);
    }

    #[test]
    fn test_output_stays_ordered() {
        let points = vec![
            ChartPoint::new(0, 1.0),
            ChartPoint::new(100_000, 2.0),
            ChartPoint::new(5_000_000, 3.0),
            ChartPoint::new(5_100_000, 4.0),
        ];
        let out = filler().fill(points);
        assert!(out.windows(2).all(|w| w[0].time < w[1].time));
    }
}
