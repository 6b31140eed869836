use std::collections::HashSet;

use crate::record::Movie;

/// The distinct genres of a dataset, iterated in the order they first appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreSet {
    genres: Vec<String>,
}

impl GenreSet {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.genres.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    pub fn contains(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

impl<'a> IntoIterator for &'a GenreSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.genres.iter()
    }
}

/// Scans the records once and collects every genre they list.
pub fn genre_set<'a, I>(records: I) -> GenreSet
where
    I: IntoIterator<Item = &'a Movie>,
{
    let mut seen: HashSet<&str> = HashSet::new();
    let mut genres = Vec::new();

    for movie in records {
        for genre in &movie.genres {
            if seen.insert(genre.as_str()) {
                genres.push(genre.clone());
            }
        }
    }

    GenreSet { genres }
}
