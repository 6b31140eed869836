use serde::Serialize;

use crate::error::DatasetError;
use crate::record::Metric;
use crate::record::Movie;

pub const DEFAULT_BIN_COUNT: usize = 20;

/// A contiguous sub-range of a metric's domain with the items falling into it.
///
/// Bins are half-open, `[range_start, range_end)`, except the last bin of a
/// histogram which also contains its `range_end`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin<T> {
    pub range_start: f64,
    pub range_end: f64,
    pub members: Vec<T>,
}

impl<T> HistogramBin<T> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.range_end - self.range_start
    }
}

/// Partitions `values` into `bin_count` uniform bins over their observed range.
pub fn histogram(
    values: &[f64],
    bin_count: usize,
) -> Result<Vec<HistogramBin<f64>>, DatasetError> {
    histogram_by(values.iter().copied(), bin_count, |value| *value)
}

/// Bins the records on one of their numeric fields, keeping the records as
/// bin members.
pub fn metric_histogram<'a, I>(
    records: I,
    metric: Metric,
    bin_count: usize,
) -> Result<Vec<HistogramBin<&'a Movie>>, DatasetError>
where
    I: IntoIterator<Item = &'a Movie>,
{
    histogram_by(records, bin_count, |movie| metric.value(movie))
}

/// Partitions `items` into `bin_count` uniform bins over the observed range
/// of `value`.
///
/// Every item lands in exactly one bin and items keep their input order
/// within a bin. When all values are equal to `v` the domain is widened to
/// `[v, v + 1]`, or further when `1` is too small for the magnitude of `v`,
/// so every item falls into the first bin.
pub fn histogram_by<T, I, F>(
    items: I,
    bin_count: usize,
    value: F,
) -> Result<Vec<HistogramBin<T>>, DatasetError>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> f64,
{
    if bin_count == 0 {
        return Err(DatasetError::InvalidCount { count: bin_count });
    }

    let items: Vec<(f64, T)> = items
        .into_iter()
        .map(|item| (value(&item), item))
        .collect();

    if let Some(position) = items.iter().position(|(value, _)| !value.is_finite()) {
        return Err(DatasetError::NonFiniteValue { position });
    }

    let domain = Domain::observed(items.iter().map(|(value, _)| *value), bin_count)
        .ok_or(DatasetError::EmptyDataset)?;
    let edges = domain.edges(bin_count);

    let mut bins: Vec<HistogramBin<T>> = edges
        .windows(2)
        .map(|range| HistogramBin {
            range_start: range[0],
            range_end: range[1],
            members: Vec::new(),
        })
        .collect();

    for (value, item) in items {
        bins[bin_index(&edges, value)].members.push(item);
    }

    log::debug!(
        "binned values over [{}, {}] into {bin_count} bins",
        domain.start,
        domain.end
    );

    Ok(bins)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Domain {
    start: f64,
    end: f64,
}

impl Domain {
    fn observed<I>(values: I, bin_count: usize) -> Option<Domain>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter();
        let first = values.next()?;

        let (min, max) = values.fold((first, first), |(min, max), value| {
            (min.min(value), max.max(value))
        });

        if max > min {
            return Some(Domain {
                start: min,
                end: max,
            });
        }

        // At least 1, and wide enough that the first interior edge lies above `min`.
        let step = (min.abs() * f64::EPSILON * 2.0 * bin_count as f64).max(1.0);
        let end = min + step;

        if end.is_finite() {
            Some(Domain { start: min, end })
        } else {
            Some(Domain {
                start: min - step,
                end: min,
            })
        }
    }

    /// Returns the `bin_count + 1` bin boundaries, non-decreasing, starting
    /// exactly at the domain start and ending exactly at the domain end.
    fn edges(&self, bin_count: usize) -> Vec<f64> {
        let span = self.end - self.start;
        let count = bin_count as f64;

        (0..=bin_count)
            .map(|i| {
                if i == 0 {
                    return self.start;
                }
                if i == bin_count {
                    return self.end;
                }

                let offset = span * i as f64;
                let edge = if offset.is_finite() {
                    self.start + offset / count
                } else {
                    self.start + (self.end / count - self.start / count) * i as f64
                };

                edge.min(self.end)
            })
            .collect()
    }
}

/// The bin containing `value`: the number of interior edges not above it.
#[inline]
fn bin_index(edges: &[f64], value: f64) -> usize {
    let last = edges.len() - 2;
    let interior = &edges[1..=last];

    interior.partition_point(|edge| *edge <= value).min(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::tests::movie;

    fn counts<T>(bins: &[HistogramBin<T>]) -> Vec<usize> {
        bins.iter().map(HistogramBin::len).collect()
    }

    #[test]
    fn identical_values_fill_the_first_bin() {
        let bins = histogram(&[1.0, 1.0, 1.0], 20).unwrap();

        assert_eq!(20, bins.len());
        assert_eq!(3, bins.iter().map(HistogramBin::len).sum::<usize>());
        assert_eq!(3, bins[0].len());
        assert_eq!(1.0, bins[0].range_start);
        assert_eq!(2.0, bins[19].range_end);
    }

    #[test]
    fn bins_cover_the_observed_range() {
        let bins = histogram(&[0.0, 2.5, 5.0, 7.5, 10.0], 4).unwrap();

        assert_eq!(0.0, bins[0].range_start);
        assert_eq!(10.0, bins[3].range_end);
        assert_eq!(vec![1, 1, 1, 2], counts(&bins));

        for pair in bins.windows(2) {
            assert_eq!(pair[0].range_end, pair[1].range_start);
        }
    }

    #[test]
    fn interior_boundary_belongs_to_the_upper_bin() {
        let bins = histogram(&[0.0, 5.0, 10.0], 2).unwrap();

        assert_eq!(vec![0.0], bins[0].members);
        assert_eq!(vec![5.0, 10.0], bins[1].members);
    }

    #[test]
    fn bins_cover_a_range_wider_than_f64_max() {
        let values = [-1.0e308, 0.0, 1.0e308];

        let bins = histogram(&values, 4).unwrap();

        assert_eq!(-1.0e308, bins[0].range_start);
        assert_eq!(1.0e308, bins[3].range_end);
        assert_eq!(vec![-1.0e308], bins[0].members);
        assert_eq!(vec![1.0e308], bins[3].members);
        assert_eq!(3, bins.iter().map(HistogramBin::len).sum::<usize>());

        for pair in bins.windows(2) {
            assert!(pair[0].range_start < pair[0].range_end);
            assert_eq!(pair[0].range_end, pair[1].range_start);
        }
        for bin in &bins {
            for value in &bin.members {
                assert!(bin.range_start <= *value && *value <= bin.range_end);
            }
        }
    }

    #[test]
    fn identical_large_values_get_a_non_empty_domain() {
        let bins = histogram(&[1.0e17, 1.0e17], 20).unwrap();

        assert_eq!(1.0e17, bins[0].range_start);
        assert!(bins[19].range_end > bins[0].range_start);
        assert!(bins[0].range_end > bins[0].range_start);
        assert_eq!(vec![1.0e17, 1.0e17], bins[0].members);
    }

    #[test]
    fn identical_values_at_f64_max_stay_finite() {
        let bins = histogram(&[f64::MAX], 3).unwrap();

        assert!(bins[0].range_start < f64::MAX);
        assert_eq!(f64::MAX, bins[2].range_end);
        assert_eq!(vec![f64::MAX], bins[2].members);
    }

    #[test]
    fn members_keep_input_order() {
        let bins = histogram(&[3.0, 1.0, 2.0, 9.0], 2).unwrap();

        assert_eq!(vec![3.0, 1.0, 2.0], bins[0].members);
    }

    #[test]
    fn empty_input_fails() {
        assert!(matches!(histogram(&[], 20), Err(DatasetError::EmptyDataset)));
    }

    #[test]
    fn zero_bins_fail() {
        assert!(matches!(
            histogram(&[1.0], 0),
            Err(DatasetError::InvalidCount { count: 0 })
        ));
    }

    #[test]
    fn non_finite_value_fails() {
        assert!(matches!(
            histogram(&[1.0, f64::NAN], 5),
            Err(DatasetError::NonFiniteValue { position: 1 })
        ));
    }

    #[test]
    fn bin_records_by_metric() {
        let records = vec![
            movie(1, 8.0, &["Drama"], &[]),
            movie(2, 6.0, &["Comedy"], &[]),
            movie(3, 9.0, &["Drama"], &[]),
        ];

        let bins = metric_histogram(&records, Metric::Rating, 3).unwrap();

        assert_eq!(vec![1, 0, 2], counts(&bins));
        assert_eq!(2, bins[0].members[0].rank);
        assert_eq!(vec![1, 3], bins[2].members.iter().map(|m| m.rank).collect::<Vec<_>>());
    }
}
