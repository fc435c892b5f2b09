use serde::Serialize;

pub const DEFAULT_BINS: usize = 10;

/// Equal-width binning of a numeric column.
///
/// Bins are half-open `[edge, next_edge)` except the last, which also takes
/// the maximum value. A column with a single distinct value is spread over
/// `value - 0.5 .. value + 0.5`; an empty column gets empty bins over `0..1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn from_values(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);

        let (mut lo, mut hi) = values
            .iter()
            .fold(None, |acc: Option<(f64, f64)>, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((0.0, 1.0));

        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let mut edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();
        edges[bins] = hi;

        let mut counts = vec![0usize; bins];
        for &value in values {
            let mut idx = (((value - lo) / width).floor() as usize).min(bins - 1);
            // correct for rounding right at a bin edge
            if idx + 1 < bins && value >= edges[idx + 1] {
                idx += 1;
            } else if idx > 0 && value < edges[idx] {
                idx -= 1;
            }
            counts[idx] += 1;
        }

        Self { edges, counts }
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn range(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_equal_bins() {
        let hist = Histogram::from_values(&[10.0, 30.0, 40.0], DEFAULT_BINS);

        assert_eq!(hist.bins(), 10);
        assert_eq!(hist.edges.len(), 11);
        assert_eq!(hist.range(), (10.0, 40.0));
        assert_eq!(hist.total(), 3);
        assert_eq!(hist.counts[0], 1);
        assert_eq!(hist.counts[6], 1);
        assert_eq!(hist.counts[9], 1);
    }

    #[test]
    fn test_max_lands_in_last_bin() {
        let hist = Histogram::from_values(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], 5);
        assert_eq!(hist.counts, vec![1, 1, 1, 1, 2]);
    }

    #[test]
    fn test_single_value() {
        let hist = Histogram::from_values(&[5.0, 5.0], DEFAULT_BINS);
        assert_eq!(hist.range(), (4.5, 5.5));
        assert_eq!(hist.total(), 2);
        assert_eq!(hist.max_count(), 2);
    }

    #[test]
    fn test_empty_values() {
        let hist = Histogram::from_values(&[], DEFAULT_BINS);
        assert_eq!(hist.range(), (0.0, 1.0));
        assert_eq!(hist.counts, vec![0; 10]);
    }
}
