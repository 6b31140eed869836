use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::DatasetError;
use crate::record::Movie;

/// A multi-valued field of a [`Movie`] whose entries are used as group keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupField {
    #[default]
    Directors,
    Writers,
    Actors,
    Genres,
}

impl GroupField {
    pub const ALL: [GroupField; 4] = [
        GroupField::Directors,
        GroupField::Writers,
        GroupField::Actors,
        GroupField::Genres,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GroupField::Directors => "directors",
            GroupField::Writers => "writers",
            GroupField::Actors => "actors",
            GroupField::Genres => "genres",
        }
    }

    /// The singular noun for one group, e.g. `Director`.
    pub fn label(self) -> &'static str {
        match self {
            GroupField::Directors => "Director",
            GroupField::Writers => "Writer",
            GroupField::Actors => "Actor",
            GroupField::Genres => "Genre",
        }
    }

    #[inline]
    pub fn values(self, movie: &Movie) -> &[String] {
        match self {
            GroupField::Directors => &movie.directors,
            GroupField::Writers => &movie.writers,
            GroupField::Actors => &movie.actors,
            GroupField::Genres => &movie.genres,
        }
    }
}

impl Display for GroupField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GroupField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GroupField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| {
                format!("\"{s}\" is not a group field; expected directors, writers, actors or genres")
            })
    }
}

/// The movies sharing one group key together with their average rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupAggregate<'a> {
    pub name: String,
    pub average_rating: f64,
    pub movie_count: usize,
    pub movies: Vec<&'a Movie>,
}

#[derive(Debug, Default)]
struct GroupStats<'a> {
    total_rating: f64,
    movies: Vec<&'a Movie>,
}

/// Returns the `count` groups with the highest average rating.
///
/// Groups are ranked by average rating, then by movie count (both
/// descending), then by name. A record listing several values in `field`
/// contributes to each of their groups.
pub fn top_groups<'a, I>(
    records: I,
    field: GroupField,
    count: usize,
) -> Result<Vec<GroupAggregate<'a>>, DatasetError>
where
    I: IntoIterator<Item = &'a Movie>,
{
    if count == 0 {
        return Err(DatasetError::InvalidCount { count });
    }

    let mut records = records.into_iter().peekable();
    if records.peek().is_none() {
        return Err(DatasetError::EmptyDataset);
    }

    let mut groups = ranked_groups(records, field);
    groups.truncate(count);

    Ok(groups)
}

/// Aggregates every group of `field` and ranks them the way [`top_groups`] does.
pub fn ranked_groups<'a, I>(records: I, field: GroupField) -> Vec<GroupAggregate<'a>>
where
    I: IntoIterator<Item = &'a Movie>,
{
    let mut stats: HashMap<&'a str, GroupStats<'a>> = HashMap::new();

    for movie in records {
        for name in field.values(movie) {
            let group = match stats.entry(name.as_str()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => entry.insert(GroupStats::default()),
            };

            group.total_rating += movie.rating;
            group.movies.push(movie);
        }
    }

    let mut groups: Vec<GroupAggregate<'a>> = stats
        .into_iter()
        .map(|(name, stats)| GroupAggregate {
            name: name.to_owned(),
            average_rating: stats.total_rating / stats.movies.len() as f64,
            movie_count: stats.movies.len(),
            movies: stats.movies,
        })
        .collect();

    groups.sort_by(rank);

    log::debug!("aggregated {} groups by {field}", groups.len());

    groups
}

fn rank(a: &GroupAggregate<'_>, b: &GroupAggregate<'_>) -> Ordering {
    b.average_rating
        .total_cmp(&a.average_rating)
        .then_with(|| b.movie_count.cmp(&a.movie_count))
        .then_with(|| a.name.cmp(&b.name))
}
