use cinevis_dataset::HistogramBin;
use cinevis_dataset::Metric;
use cinevis_dataset::Movie;
use cinevis_dataset::filter_by_genre;
use cinevis_dataset::histogram::metric_histogram;

use crate::cli::HistogramArgs;
use crate::error::CliError;
use crate::source::load_movies;

pub(crate) fn histogram(args: HistogramArgs) -> Result<(), CliError> {
    let movies = load_movies(&args.source)?;
    let selected = filter_by_genre(&movies, args.genre.as_deref());
    let metric = Metric::from(args.metric);

    let bins = metric_histogram(selected.iter().copied(), metric, args.bins)?;

    println!("{} of {} movies binned on {metric}:", selected.len(), movies.len());
    let last = bins.len().saturating_sub(1);
    for (i, bin) in bins.iter().enumerate() {
        println!("{}", bin_line(bin, i == last));
    }

    Ok(())
}

fn bin_line(bin: &HistogramBin<&Movie>, closed: bool) -> String {
    let end = if closed { ']' } else { ')' };
    let range = format!("[{}, {}{end}", round(bin.range_start), round(bin.range_end));

    format!("{range:<24}{:>6}", bin.len())
}

fn round(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
