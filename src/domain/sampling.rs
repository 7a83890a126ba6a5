// Sampling strategy selection and uniform-stride reduction
use crate::domain::lttb::lttb;
use crate::domain::power::ChartPoint;

/// Reduction applied to a sorted series, chosen from its length alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingStrategy {
    /// Small enough to chart every sample.
    Identity,
    /// Keep every `stride`-th point starting at index 0.
    UniformStride { stride: usize },
    /// Shape-preserving reduction to `buckets` points.
    Lttb { buckets: usize },
}

impl SamplingStrategy {
    /// Pick a strategy for a series of `n` points.
    ///
    /// `small` is both the identity cut-off and the visual budget used to
    /// derive the stride; above `medium` the series goes through LTTB.
    pub fn select(n: usize, small: usize, medium: usize, lttb_buckets: usize) -> Self {
        if n <= small {
            SamplingStrategy::Identity
        } else if n <= medium {
            SamplingStrategy::UniformStride {
                stride: n.div_ceil(small.max(1)),
            }
        } else {
            SamplingStrategy::Lttb {
                buckets: lttb_buckets,
            }
        }
    }

    pub fn apply(self, points: Vec<ChartPoint>) -> Vec<ChartPoint> {
        match self {
            SamplingStrategy::Identity => points,
            SamplingStrategy::UniformStride { stride } => uniform_stride(points, stride),
            SamplingStrategy::Lttb { buckets } => lttb(points, buckets),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SamplingStrategy::Identity => "identity",
            SamplingStrategy::UniformStride { .. } => "uniform-stride",
            SamplingStrategy::Lttb { .. } => "lttb",
        }
    }
}

/// Keep indices divisible by `stride`. The last point is only kept when its
/// index happens to be a multiple of the stride.
pub fn uniform_stride(points: Vec<ChartPoint>, stride: usize) -> Vec<ChartPoint> {
    if stride <= 1 {
        return points;
    }
    points.into_iter().step_by(stride).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(n: usize) -> Vec<ChartPoint> {
        (0..n).map(|i| ChartPoint::new(i as i64 * 60_000, i as f64)).collect()
    }

    #[test]
    fn test_select_boundaries() {
        let pick = |n| SamplingStrategy::select(n, 1_000, 10_000, 1_000);
        assert_eq!(pick(0), SamplingStrategy::Identity);
        assert_eq!(pick(1_000), SamplingStrategy::Identity);
        assert_eq!(pick(1_001), SamplingStrategy::UniformStride { stride: 2 });
        assert_eq!(pick(2_000), SamplingStrategy::UniformStride { stride: 2 });
        assert_eq!(pick(2_001), SamplingStrategy::UniformStride { stride: 3 });
        assert_eq!(pick(10_000), SamplingStrategy::UniformStride { stride: 10 });
        assert_eq!(pick(10_001), SamplingStrategy::Lttb { buckets: 1_000 });
    }

    #[test]
    fn test_identity_passes_through() {
        let points = series(1_000);
        let out = SamplingStrategy::select(points.len(), 1_000, 10_000, 1_000).apply(points.clone());
        assert_eq!(out, points);
    }

    #[test]
    fn test_uniform_stride_keeps_first_not_last() {
        let points = series(1_500);
        let out = uniform_stride(points.clone(), 2);
        assert_eq!(out.len(), 750);
        assert_eq!(out[0], points[0]);
        assert_eq!(out[1], points[2]);
        assert_ne!(out[out.len() - 1], points[1_499]);
    }

    #[test]
    fn test_uniform_stride_bounded_by_budget() {
        for n in [1_001, 3_333, 7_777, 10_000] {
            let strategy = SamplingStrategy::select(n, 1_000, 10_000, 1_000);
            let out = strategy.apply(series(n));
            assert!(out.len() <= 1_000, "n={n} gave {}", out.len());
            assert!(out.windows(2).all(|w| w[0].time < w[1].time));
        }
    }

    #[test]
    fn test_large_series_goes_through_lttb() {
        let out = SamplingStrategy::select(25_000, 1_000, 10_000, 1_000).apply(series(25_000));
        assert_eq!(out.len(), 1_000);
    }
}
