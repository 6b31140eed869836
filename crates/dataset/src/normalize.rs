use std::collections::HashSet;

use crate::error::MalformedRecordError;
use crate::raw::ACTORS_KEY;
use crate::raw::DIRECTORS_KEY;
use crate::raw::DURATION_KEY;
use crate::raw::FieldReader;
use crate::raw::GENRES_KEY;
use crate::raw::IMAGE_KEY;
use crate::raw::RANK_KEY;
use crate::raw::RATING_KEY;
use crate::raw::RawRecord;
use crate::raw::TITLE_KEY;
use crate::raw::VOTES_KEY;
use crate::raw::WRITERS_KEY;
use crate::raw::YEAR_KEY;
use crate::record::Movie;

/// Converts raw records into [`Movie`]s, keeping their order and count.
///
/// Fails on the first record with a missing required field or a value that
/// cannot be read as a number; nothing is dropped or defaulted.
pub fn normalize(records: &[RawRecord]) -> Result<Vec<Movie>, MalformedRecordError> {
    let movies = records
        .iter()
        .enumerate()
        .map(|(index, record)| Movie::from_raw(record, index))
        .collect::<Result<Vec<Movie>, MalformedRecordError>>()?;

    warn_duplicate_ranks(&movies);
    log::debug!("normalized {} records", movies.len());

    Ok(movies)
}

impl Movie {
    pub(crate) fn from_raw(
        record: &RawRecord,
        index: usize,
    ) -> Result<Movie, MalformedRecordError> {
        let fields = FieldReader::new(record, index);

        Ok(Movie {
            rank: fields.integer(RANK_KEY)?,
            title: fields.non_empty_string(TITLE_KEY)?,
            year: fields.integer(YEAR_KEY)?,
            duration: fields.integer(DURATION_KEY)?,
            rating: fields.number(RATING_KEY)?,
            votes: fields.integer(VOTES_KEY)?,
            genres: fields.non_empty_string_list(GENRES_KEY)?,
            directors: fields.optional_string_list(DIRECTORS_KEY)?,
            writers: fields.optional_string_list(WRITERS_KEY)?,
            actors: fields.optional_string_list(ACTORS_KEY)?,
            image: fields.optional_string(IMAGE_KEY)?,
        })
    }
}

fn warn_duplicate_ranks(movies: &[Movie]) {
    let mut seen = HashSet::with_capacity(movies.len());

    for movie in movies {
        if !seen.insert(movie.rank) {
            log::warn!("rank {} is used by more than one record", movie.rank);
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use serde_json::json;

    use super::*;

    fn raw(value: Value) -> RawRecord {
        serde_json::from_value(value).unwrap()
    }

    fn shawshank() -> Value {
        json!({
            "rank": "1",
            "title": "The Shawshank Redemption",
            "year": "1994",
            "duration": "142",
            "rating": "9.3",
            "votes": "2800000",
            "genres": ["Drama"],
            "directors": ["Frank Darabont"],
            "writers": ["Stephen King", "Frank Darabont"],
            "actors": ["Tim Robbins", "Morgan Freeman"],
            "image": "https://example.org/shawshank.jpg"
        })
    }

    #[test]
    fn normalize_text_fields_to_numbers() {
        let movies = normalize(&[raw(shawshank())]).unwrap();

        assert_eq!(1, movies.len());

        let movie = &movies[0];
        assert_eq!(1, movie.rank);
        assert_eq!(1994, movie.year);
        assert_eq!(142, movie.duration);
        assert_eq!(9.3, movie.rating);
        assert_eq!(2_800_000, movie.votes);
        assert_eq!(vec!["Drama"], movie.genres);
        assert_eq!(vec!["Stephen King", "Frank Darabont"], movie.writers);
        assert_eq!(
            Some("https://example.org/shawshank.jpg"),
            movie.image.as_deref()
        );
    }

    #[test]
    fn keep_order_and_count() {
        let mut second = shawshank();
        second["rank"] = json!(2);
        second["title"] = json!("The Godfather");

        let movies = normalize(&[raw(shawshank()), raw(second)]).unwrap();

        assert_eq!(vec![1, 2], movies.iter().map(|m| m.rank).collect::<Vec<_>>());
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize(&[raw(shawshank())]).unwrap();
        let raw_again = once.iter().map(RawRecord::from).collect::<Vec<_>>();
        let twice = normalize(&raw_again).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn reject_empty_numeric_text() {
        let mut value = shawshank();
        value["votes"] = json!("");

        let error = normalize(&[raw(shawshank()), raw(value)]).unwrap_err();

        assert_eq!(
            MalformedRecordError::InvalidNumber {
                index: 1,
                field: "votes",
                value: String::new(),
            },
            error
        );
    }

    #[test]
    fn reject_non_numeric_text() {
        let mut value = shawshank();
        value["year"] = json!("nineteen ninety-four");

        let error = normalize(&[raw(value)]).unwrap_err();

        assert_eq!("year", error.field());
    }

    #[test]
    fn reject_missing_required_field() {
        let mut value = shawshank();
        value.as_object_mut().unwrap().remove("rating");

        let error = normalize(&[raw(value)]).unwrap_err();

        assert_eq!(
            MalformedRecordError::MissingField {
                index: 0,
                field: "rating",
            },
            error
        );
    }

    #[test]
    fn reject_empty_title_and_genres() {
        let mut no_title = shawshank();
        no_title["title"] = json!("  ");
        let mut no_genres = shawshank();
        no_genres["genres"] = json!([]);

        assert!(matches!(
            normalize(&[raw(no_title)]),
            Err(MalformedRecordError::EmptyField { field: "title", .. })
        ));
        assert!(matches!(
            normalize(&[raw(no_genres)]),
            Err(MalformedRecordError::EmptyField { field: "genres", .. })
        ));
    }

    #[test]
    fn absent_people_lists_are_empty() {
        let mut value = shawshank();
        let object = value.as_object_mut().unwrap();
        object.remove("directors");
        object.remove("writers");
        object.remove("actors");
        object.remove("image");

        let movies = normalize(&[raw(value)]).unwrap();

        assert!(movies[0].directors.is_empty());
        assert!(movies[0].writers.is_empty());
        assert!(movies[0].actors.is_empty());
        assert_eq!(None, movies[0].image);
    }

    #[test]
    fn reject_genres_of_wrong_type() {
        let mut value = shawshank();
        value["genres"] = json!("Drama");

        assert_eq!(
            Err(MalformedRecordError::UnexpectedType {
                index: 0,
                field: "genres",
            }),
            normalize(&[raw(value)])
        );
    }
}
