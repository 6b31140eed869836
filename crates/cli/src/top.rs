use cinevis_dataset::GroupAggregate;
use cinevis_dataset::GroupField;
use cinevis_dataset::filter_by_genre;
use cinevis_dataset::top_groups;

use crate::cli::TopArgs;
use crate::error::CliError;
use crate::source::load_movies;

pub(crate) fn top(args: TopArgs) -> Result<(), CliError> {
    let movies = load_movies(&args.source)?;
    let selected = filter_by_genre(&movies, args.genre.as_deref());
    let field = GroupField::from(args.field);

    let groups = top_groups(selected, field, args.count)?;

    if groups.is_empty() {
        println!("No movie lists any {field}.");
        return Ok(());
    }

    println!("Top {} {field} by average rating:", groups.len());
    for (i, group) in groups.iter().enumerate() {
        println!("{}", group_line(i + 1, group));
    }

    Ok(())
}

fn group_line(position: usize, group: &GroupAggregate<'_>) -> String {
    format!(
        "{position:>3}. {name:<32} {average:.4}  ({count} movies)",
        name = group.name,
        average = group.average_rating,
        count = group.movie_count
    )
}
