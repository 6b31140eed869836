use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::DatasetError;

/// A normalized movie entry.
///
/// Every numeric field holds a valid, finite number. Records are never
/// mutated once normalized; the transformations borrow them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub rank: u32,
    pub title: String,
    pub year: i32,
    pub duration: u32,
    pub rating: f64,
    pub votes: u64,
    pub genres: Vec<String>,
    #[serde(default)]
    pub directors: Vec<String>,
    #[serde(default)]
    pub writers: Vec<String>,
    #[serde(default)]
    pub actors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Movie {
    /// Returns the value of the given numeric field.
    #[inline]
    pub fn metric(&self, metric: Metric) -> f64 {
        metric.value(self)
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

/// A numeric field of a [`Movie`] that can be sorted on, binned or plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Rank,
    Year,
    Duration,
    Rating,
    Votes,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Rank,
        Metric::Year,
        Metric::Duration,
        Metric::Rating,
        Metric::Votes,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Rank => "rank",
            Metric::Year => "year",
            Metric::Duration => "duration",
            Metric::Rating => "rating",
            Metric::Votes => "votes",
        }
    }

    /// A human readable axis label.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Rank => "Rank",
            Metric::Year => "Year",
            Metric::Duration => "Duration (minutes)",
            Metric::Rating => "Rating",
            Metric::Votes => "Votes",
        }
    }

    #[inline]
    pub fn value(self, movie: &Movie) -> f64 {
        match self {
            Metric::Rank => f64::from(movie.rank),
            Metric::Year => f64::from(movie.year),
            Metric::Duration => f64::from(movie.duration),
            Metric::Rating => movie.rating,
            Metric::Votes => movie.votes as f64,
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.name() == s)
            .ok_or_else(|| DatasetError::InvalidSortKey { key: s.to_owned() })
    }
}
