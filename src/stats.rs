use crate::ranking::Scored;
use serde::Serialize;

/// Descriptive statistics of a sample. All fields are zero for an empty
/// sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub size: usize,
    pub maximum: f64,
    pub minimum: f64,
    pub mean: f64,
    pub median: f64,
}

impl Statistics {
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let size = sorted.len();
        let median = if size % 2 == 1 {
            sorted[size / 2]
        } else {
            (sorted[size / 2 - 1] + sorted[size / 2]) / 2.0
        };
        Self {
            size,
            maximum: sorted[size - 1],
            minimum: sorted[0],
            mean: sorted.iter().sum::<f64>() / size as f64,
            median,
        }
    }
}

pub fn statistics<I>(items: I) -> Statistics
where
    I: IntoIterator,
    I::Item: Scored,
{
    let values = items
        .into_iter()
        .map(|i| i.rank_score())
        .collect::<Vec<_>>();
    Statistics::from_values(&values)
}

/// Upper bound on the number of histogram bins.
pub const MAX_BINS: usize = 100;

/// Count values in `ceil(scale)` bins of equal width covering `[0, scale]`,
/// using at most [`MAX_BINS`] bins. The last bin includes the scale itself;
/// values out of range are ignored.
pub fn histogram(values: &[f64], scale: f64) -> Vec<usize> {
    if !(scale > 0.0 && scale.is_finite()) {
        return Vec::new();
    }
    let bins = scale.ceil().min(MAX_BINS as f64) as usize;
    let width = scale / bins as f64;
    let mut counts = vec![0; bins];
    for &v in values {
        if (0.0..=scale).contains(&v) {
            let bin = ((v / width) as usize).min(bins - 1);
            counts[bin] += 1;
        }
    }
    counts
}
