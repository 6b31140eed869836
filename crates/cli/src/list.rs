use cinevis_dataset::Movie;
use cinevis_dataset::filter_by_genre;
use cinevis_dataset::sort_by;

use crate::cli::ListArgs;
use crate::error::CliError;
use crate::source::load_movies;

const TITLE_WIDTH: usize = 40;

pub(crate) fn list(args: ListArgs) -> Result<(), CliError> {
    let movies = load_movies(&args.source)?;
    let selected = select(&movies, &args)?;

    println!("{}", header());
    for movie in &selected {
        println!("{}", row(movie));
    }
    println!("{} of {} movies", selected.len(), movies.len());

    Ok(())
}

fn select<'a>(movies: &'a [Movie], args: &ListArgs) -> Result<Vec<&'a Movie>, CliError> {
    let mut selected = filter_by_genre(movies, args.genre.as_deref());

    if let Some(ref key) = args.by {
        selected = sort_by(selected, key, args.direction.into())?;
    }

    if let Some(limit) = args.limit {
        selected.truncate(limit);
    }

    Ok(selected)
}

fn header() -> String {
    format!(
        "{:>5}  {:<TITLE_WIDTH$}  {:>4}  {:>5}  {:>6}  {:>9}  {}",
        "Rank", "Title", "Year", "Min", "Rating", "Votes", "Genres"
    )
}

fn row(movie: &Movie) -> String {
    format!(
        "{:>5}  {:<TITLE_WIDTH$}  {:>4}  {:>5}  {:>6.1}  {:>9}  {}",
        movie.rank,
        truncate(&movie.title, TITLE_WIDTH),
        movie.year,
        movie.duration,
        movie.rating,
        movie.votes,
        movie.genres.join(", ")
    )
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }

    let mut truncated: String = text.chars().take(width - 3).collect();
    truncated.push_str("...");
    truncated
}
