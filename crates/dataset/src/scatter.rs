use serde::Serialize;

use crate::error::DatasetError;
use crate::record::Metric;
use crate::record::Movie;

/// The smallest and largest value of a metric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

/// Returns the extent of the finite values, or `None` when there are none.
pub fn extent<I>(values: I) -> Option<Extent>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold(None, |extent, value| match extent {
            None => Some(Extent {
                min: value,
                max: value,
            }),
            Some(Extent { min, max }) => Some(Extent {
                min: min.min(value),
                max: max.max(value),
            }),
        })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint<'a> {
    pub x: f64,
    pub y: f64,
    pub title: &'a str,
}

/// The records projected onto two metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scatter<'a> {
    pub x_metric: Metric,
    pub y_metric: Metric,
    pub points: Vec<ScatterPoint<'a>>,
    pub x_extent: Extent,
    pub y_extent: Extent,
}

/// Projects every record onto the `(x, y)` metric pair, in input order.
pub fn scatter<'a, I>(records: I, x: Metric, y: Metric) -> Result<Scatter<'a>, DatasetError>
where
    I: IntoIterator<Item = &'a Movie>,
{
    let points: Vec<ScatterPoint<'a>> = records
        .into_iter()
        .map(|movie| ScatterPoint {
            x: x.value(movie),
            y: y.value(movie),
            title: &movie.title,
        })
        .collect();

    let x_extent = extent(points.iter().map(|p| p.x)).ok_or(DatasetError::EmptyDataset)?;
    let y_extent = extent(points.iter().map(|p| p.y)).ok_or(DatasetError::EmptyDataset)?;

    Ok(Scatter {
        x_metric: x,
        y_metric: y,
        points,
        x_extent,
        y_extent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::tests::movie;

    #[test]
    fn project_records_onto_metrics() {
        let records = vec![
            movie(1, 8.0, &["Drama"], &[]),
            movie(2, 6.0, &["Comedy"], &[]),
        ];

        let scatter = scatter(&records, Metric::Year, Metric::Rating).unwrap();

        assert_eq!(2, scatter.points.len());
        assert_eq!((1991.0, 8.0), (scatter.points[0].x, scatter.points[0].y));
        assert_eq!("Movie 2", scatter.points[1].title);
        assert_eq!(Extent { min: 1991.0, max: 1992.0 }, scatter.x_extent);
        assert_eq!(Extent { min: 6.0, max: 8.0 }, scatter.y_extent);
    }

    #[test]
    fn empty_collection_has_no_scatter() {
        let records: Vec<Movie> = Vec::new();

        assert!(matches!(
            scatter(&records, Metric::Year, Metric::Rating),
            Err(DatasetError::EmptyDataset)
        ));
    }

    #[test]
    fn extent_skips_non_finite_values() {
        assert_eq!(None, extent(Vec::new()));
        assert_eq!(
            Some(Extent { min: -1.0, max: 3.0 }),
            extent(vec![3.0, f64::NAN, -1.0])
        );
    }
}
