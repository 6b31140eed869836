use cinevis_dataset::genre_set;

use crate::cli::GenresArgs;
use crate::error::CliError;
use crate::source::load_movies;

pub(crate) fn genres(args: GenresArgs) -> Result<(), CliError> {
    let movies = load_movies(&args.source)?;
    let genres = genre_set(&movies);

    println!("{} genres across {} movies:", genres.len(), movies.len());
    for genre in &genres {
        println!("  {genre}");
    }

    Ok(())
}
