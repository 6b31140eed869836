use cinevis_vis::ReportLayout;
use cinevis_vis::ReportOptions;

use crate::cli::PathExt;
use crate::cli::ReportArgs;
use crate::error::CliError;
use crate::source::load_movies;

pub(crate) fn report(args: ReportArgs) -> Result<(), CliError> {
    let output_path = args.output_path.clone().or_current_dir()?;

    println!(
        "cinevis reads the movie dataset and generates a visual report in: `{}`",
        output_path.display()
    );

    let movies = load_movies(&args.source)?;
    let options = report_options(args);

    let layout = ReportLayout::init(&output_path)?;
    let report = layout.generate_report(&movies, &options)?;

    println!(
        "The report of {} movies is ready; open `{}`",
        movies.len(),
        report.index.display()
    );

    Ok(())
}

fn report_options(args: ReportArgs) -> ReportOptions {
    ReportOptions {
        genre: args.genre.filter(|g| !g.is_empty()),
        sort: args.sort,
        histogram_metric: args.histogram_metric.into(),
        bin_count: args.bins,
        x_metric: args.x_metric.into(),
        y_metric: args.y_metric.into(),
        group_field: args.group_field.into(),
        top_count: args.top,
    }
}
