// Largest-Triangle-Three-Buckets downsampling
use crate::domain::power::ChartPoint;

/// Reduce `points` to exactly `threshold` points using LTTB.
///
/// The first and last input points are always kept. Inputs that already fit
/// (`len <= threshold`) are returned untouched, as are degenerate thresholds
/// below three where there is no interior bucket to choose from.
///
/// Each interior bucket is scored against its own first point and its own
/// centroid. Time (ms) and value (W) enter the area on their raw scales.
pub fn lttb(points: Vec<ChartPoint>, threshold: usize) -> Vec<ChartPoint> {
    let n = points.len();
    if n <= threshold || threshold < 3 {
        return points;
    }

    let bucket_size = (n - 2) as f64 / (threshold - 2) as f64;
    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(points[0]);

    for i in 0..threshold - 2 {
        let (start, end) = bucket_bounds(i, bucket_size);
        let bucket = &points[start.min(n)..end.min(n)];
        let Some(&anchor) = bucket.first() else {
            continue;
        };

        // The final bucket overhangs the array; its centroid is still taken
        // over the nominal width.
        let (avg_x, avg_y) = centroid(bucket, end - start);

        let mut max_area = -1.0;
        let mut selected = anchor;
        for candidate in bucket {
            let area = triangle_area(anchor, *candidate, avg_x, avg_y);
            if area > max_area {
                max_area = area;
                selected = *candidate;
            }
        }

        sampled.push(selected);
    }

    sampled.push(points[n - 1]);
    sampled
}

/// Index range `[floor((i+1)*size)+1, floor((i+2)*size)+1)`, unclamped.
fn bucket_bounds(i: usize, bucket_size: f64) -> (usize, usize) {
    let start = ((i + 1) as f64 * bucket_size).floor() as usize + 1;
    let end = ((i + 2) as f64 * bucket_size).floor() as usize + 1;
    (start, end)
}

fn centroid(bucket: &[ChartPoint], width: usize) -> (f64, f64) {
    let width = width.max(1) as f64;
    let (sum_x, sum_y) = bucket
        .iter()
        .fold((0.0, 0.0), |(x, y), p| (x + p.time as f64, y + p.value));
    (sum_x / width, sum_y / width)
}

fn triangle_area(a: ChartPoint, b: ChartPoint, cx: f64, cy: f64) -> f64 {
    let (ax, ay) = (a.time as f64, a.value);
    let (bx, by) = (b.time as f64, b.value);
    ((ax - cx) * (by - ay) - (ax - bx) * (cy - ay)).abs() * 0.5
}
