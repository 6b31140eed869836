use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::DatasetError;
use crate::record::Metric;
use crate::record::Movie;

const SORT_ORDER_DELIMITER: char = '-';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[inline]
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(format!(
                "\"{s}\" is not a sort direction; expected asc or desc"
            )),
        }
    }
}

/// A metric together with the direction to sort it in, written as
/// `<metric>-<direction>`, e.g. `rating-desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortOrder {
    pub metric: Metric,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(metric: Metric, direction: SortDirection) -> Self {
        Self { metric, direction }
    }

    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a Movie>
    where
        I: IntoIterator<Item = &'a Movie>,
    {
        sort_by_metric(records, self.metric, self.direction)
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SORT_ORDER_DELIMITER}{}", self.metric, self.direction)
    }
}

impl FromStr for SortOrder {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DatasetError::InvalidSortKey { key: s.to_owned() };

        let (key, direction) = s.rsplit_once(SORT_ORDER_DELIMITER).ok_or_else(invalid)?;
        let metric = key.parse::<Metric>()?;
        let direction = direction.parse::<SortDirection>().map_err(|_| invalid())?;

        Ok(Self { metric, direction })
    }
}

/// Sorts the records on the numeric field named `key`.
///
/// The input is left untouched and records with equal keys keep their
/// relative order.
pub fn sort_by<'a, I>(
    records: I,
    key: &str,
    direction: SortDirection,
) -> Result<Vec<&'a Movie>, DatasetError>
where
    I: IntoIterator<Item = &'a Movie>,
{
    let metric = key.parse::<Metric>()?;
    Ok(sort_by_metric(records, metric, direction))
}

pub fn sort_by_metric<'a, I>(
    records: I,
    metric: Metric,
    direction: SortDirection,
) -> Vec<&'a Movie>
where
    I: IntoIterator<Item = &'a Movie>,
{
    let mut sorted: Vec<&Movie> = records.into_iter().collect();

    // Reverse the comparison, not the output: ties stay in input order.
    sorted.sort_by(|a, b| direction.apply(metric.value(a).total_cmp(&metric.value(b))));

    sorted
}
