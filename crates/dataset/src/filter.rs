use crate::record::Movie;

/// Keeps the records listing `genre` among their genres, in input order.
///
/// An unset or empty genre keeps every record.
pub fn filter_by_genre<'a, I>(records: I, genre: Option<&str>) -> Vec<&'a Movie>
where
    I: IntoIterator<Item = &'a Movie>,
{
    GenreFilter::new(genre.map(str::to_owned)).apply(records)
}

/// A genre selection that can be applied to any number of record collections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreFilter {
    genre: Option<String>,
}

impl GenreFilter {
    pub fn new(genre: Option<String>) -> Self {
        let genre = genre.filter(|g| !g.is_empty());
        Self { genre }
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    #[inline]
    pub fn matches(&self, movie: &Movie) -> bool {
        match self.genre {
            Some(ref genre) => movie.has_genre(genre),
            None => true,
        }
    }

    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a Movie>
    where
        I: IntoIterator<Item = &'a Movie>,
    {
        records.into_iter().filter(|movie| self.matches(movie)).collect()
    }
}
