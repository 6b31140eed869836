use cinevis_dataset::Movie;
use cinevis_dataset::SortOrder;
use serde::Serialize;

use crate::error::Result;
use crate::render::OutputStream;
use crate::render::Render;
use crate::template::COLLECTION_TEMPLATE;
use crate::template::TemplateEngine;

const LIST_SEPARATOR: &str = ", ";
const SHOWN_ACTORS: usize = 6;

/// The grid of movie cards, already filtered and sorted.
#[derive(Debug, Serialize)]
pub struct CollectionView {
    count: usize,
    genre: Option<String>,
    sort: Option<String>,
    cards: Vec<Card>,
}

#[derive(Debug, Serialize)]
struct Card {
    title: String,
    image: Option<String>,
    rank: u32,
    rating: f64,
    votes: u64,
    duration: u32,
    year: i32,
    genres: String,
    directors: String,
    writers: String,
    actors: String,
}

impl From<&Movie> for Card {
    fn from(movie: &Movie) -> Self {
        let mut actors = movie
            .actors
            .iter()
            .take(SHOWN_ACTORS)
            .map(String::as_str)
            .collect::<Vec<&str>>()
            .join(LIST_SEPARATOR);

        if movie.actors.len() > SHOWN_ACTORS {
            actors.push_str("...");
        }

        Self {
            title: movie.title.clone(),
            image: movie.image.clone(),
            rank: movie.rank,
            rating: movie.rating,
            votes: movie.votes,
            duration: movie.duration,
            year: movie.year,
            genres: movie.genres.join(LIST_SEPARATOR),
            directors: movie.directors.join(LIST_SEPARATOR),
            writers: movie.writers.join(LIST_SEPARATOR),
            actors,
        }
    }
}

impl CollectionView {
    /// Builds the grid from records in display order.
    pub fn new(
        movies: &[&Movie],
        genre: Option<&str>,
        sort: Option<SortOrder>,
    ) -> CollectionView {
        Self {
            count: movies.len(),
            genre: genre.filter(|g| !g.is_empty()).map(str::to_owned),
            sort: sort.map(|order| order.to_string()),
            cards: movies.iter().map(|movie| Card::from(*movie)).collect(),
        }
    }

    /// The number of movies shown.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the grid shows no movie at all.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Render for CollectionView {
    fn render<O>(&self, output: &mut O) -> Result<()>
    where
        O: OutputStream,
    {
        let templates = TemplateEngine::new()?;
        let body = templates.render(COLLECTION_TEMPLATE, self)?;

        output.write(&body)
    }
}

#[cfg(test)]
mod tests {
    use cinevis_dataset::Metric;
    use cinevis_dataset::SortDirection;

    use super::*;

    fn movie(rank: u32, title: &str, actors: usize) -> Movie {
        Movie {
            rank,
            title: title.to_owned(),
            year: 1999,
            duration: 136,
            rating: 8.7,
            votes: 2_000_000,
            genres: vec![String::from("Action"), String::from("Sci-Fi")],
            directors: vec![String::from("Lana Wachowski"), String::from("Lilly Wachowski")],
            writers: Vec::new(),
            actors: (1..=actors).map(|i| format!("Actor {i}")).collect(),
            image: Some(String::from("matrix.jpg")),
        }
    }

    #[test]
    fn card_truncates_actor_list() {
        let card = Card::from(&movie(1, "The Matrix", 8));

        assert_eq!(
            "Actor 1, Actor 2, Actor 3, Actor 4, Actor 5, Actor 6...",
            card.actors
        );
        assert_eq!("Action, Sci-Fi", card.genres);
    }

    #[test]
    fn card_keeps_short_actor_list() {
        let card = Card::from(&movie(1, "The Matrix", 2));

        assert_eq!("Actor 1, Actor 2", card.actors);
    }

    #[test]
    fn render_cards_with_escaped_titles() {
        let first = movie(1, "The Matrix", 2);
        let second = movie(2, "Tom & Jerry", 0);
        let view = CollectionView::new(
            &[&first, &second],
            Some("Action"),
            Some(SortOrder::new(Metric::Rank, SortDirection::Ascending)),
        );
        let mut output = String::new();

        view.render(&mut output).unwrap();

        assert_eq!(2, view.len());
        assert!(output.contains("Showing 2 movies in the <strong>Action</strong> genre"));
        assert!(output.contains("sorted by <strong>rank-asc</strong>"));
        assert!(output.contains(r#"<div class="movie-title">The Matrix</div>"#));
        assert!(output.contains("Tom &amp; Jerry"));
        assert!(output.contains(r#"<img src="matrix.jpg""#));
        assert!(output.contains("136 minutes"));
    }
}
