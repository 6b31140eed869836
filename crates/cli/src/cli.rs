use std::env;
use std::path::PathBuf;

use cinevis_dataset::DEFAULT_BIN_COUNT;
use cinevis_dataset::GroupField;
use cinevis_dataset::Metric;
use cinevis_dataset::SortDirection;
use cinevis_dataset::SortOrder;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

use crate::error::CliError;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Log debug diagnostics to stderr. `RUST_LOG` takes precedence.
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate a static HTML report of the movie dataset.
    Report(ReportArgs),
    /// Print every genre of the dataset in first-seen order.
    Genres(GenresArgs),
    /// Print the movies of the dataset, optionally filtered and sorted.
    List(ListArgs),
    /// Print the distribution of a numeric field over uniform bins.
    Histogram(HistogramArgs),
    /// Print the groups with the highest average rating.
    Top(TopArgs),
}

/// Where the dataset is read from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub(crate) struct SourceArgs {
    /// Read the dataset from a JSON file.
    #[arg(short, long, value_parser(parse_file))]
    pub(crate) path: Option<PathBuf>,

    /// Download the dataset from a URL serving the JSON document.
    #[arg(short, long)]
    pub(crate) url: Option<String>,
}

#[derive(Args)]
pub(crate) struct ReportArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,

    /// Specify the path where the report will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_dir))]
    pub(crate) output_path: Option<PathBuf>,

    /// Show only movies of this genre in the grid and the histogram.
    #[arg(short, long)]
    pub(crate) genre: Option<String>,

    /// Sort the movie grid, written as `<field>-<asc|desc>`, e.g. `rating-desc`.
    #[arg(short, long, value_parser(parse_sort_order))]
    pub(crate) sort: Option<SortOrder>,

    /// The field binned by the histogram.
    #[arg(short = 'm', long, value_enum, default_value_t = MetricArg::Year)]
    pub(crate) histogram_metric: MetricArg,

    /// The number of histogram bins.
    #[arg(short, long, default_value_t = DEFAULT_BIN_COUNT)]
    pub(crate) bins: usize,

    /// The horizontal field of the scatter plot.
    #[arg(short, long, value_enum, default_value_t = MetricArg::Year)]
    pub(crate) x_metric: MetricArg,

    /// The vertical field of the scatter plot.
    #[arg(short, long, value_enum, default_value_t = MetricArg::Rating)]
    pub(crate) y_metric: MetricArg,

    /// The field whose values are ranked by average rating.
    #[arg(short = 'f', long, value_enum, default_value_t = GroupFieldArg::Directors)]
    pub(crate) group_field: GroupFieldArg,

    /// How many groups the bar chart shows.
    #[arg(short = 'n', long, default_value_t = 10)]
    pub(crate) top: usize,
}

#[derive(Args)]
pub(crate) struct GenresArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

#[derive(Args)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,

    /// Keep only movies of this genre.
    #[arg(short, long)]
    pub(crate) genre: Option<String>,

    /// Sort on this numeric field: rank, year, duration, rating or votes.
    #[arg(short, long)]
    pub(crate) by: Option<String>,

    /// The sort direction.
    #[arg(short, long, value_enum, default_value_t = DirectionArg::Asc)]
    pub(crate) direction: DirectionArg,

    /// Print at most this many movies.
    #[arg(short, long)]
    pub(crate) limit: Option<usize>,
}

#[derive(Args)]
pub(crate) struct HistogramArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,

    /// The field to bin.
    #[arg(short, long, value_enum, default_value_t = MetricArg::Year)]
    pub(crate) metric: MetricArg,

    /// The number of bins.
    #[arg(short, long, default_value_t = DEFAULT_BIN_COUNT)]
    pub(crate) bins: usize,

    /// Keep only movies of this genre.
    #[arg(short, long)]
    pub(crate) genre: Option<String>,
}

#[derive(Args)]
pub(crate) struct TopArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,

    /// The field whose values are ranked.
    #[arg(short, long, value_enum, default_value_t = GroupFieldArg::Directors)]
    pub(crate) field: GroupFieldArg,

    /// How many groups to print.
    #[arg(short = 'n', long, default_value_t = 10)]
    pub(crate) count: usize,

    /// Keep only movies of this genre.
    #[arg(short, long)]
    pub(crate) genre: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum MetricArg {
    Rank,
    Year,
    Duration,
    Rating,
    Votes,
}

impl From<MetricArg> for Metric {
    fn from(metric: MetricArg) -> Self {
        match metric {
            MetricArg::Rank => Metric::Rank,
            MetricArg::Year => Metric::Year,
            MetricArg::Duration => Metric::Duration,
            MetricArg::Rating => Metric::Rating,
            MetricArg::Votes => Metric::Votes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum GroupFieldArg {
    Directors,
    Writers,
    Actors,
    Genres,
}

impl From<GroupFieldArg> for GroupField {
    fn from(field: GroupFieldArg) -> Self {
        match field {
            GroupFieldArg::Directors => GroupField::Directors,
            GroupFieldArg::Writers => GroupField::Writers,
            GroupFieldArg::Actors => GroupField::Actors,
            GroupFieldArg::Genres => GroupField::Genres,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum DirectionArg {
    Asc,
    Desc,
}

impl From<DirectionArg> for SortDirection {
    fn from(direction: DirectionArg) -> Self {
        match direction {
            DirectionArg::Asc => SortDirection::Ascending,
            DirectionArg::Desc => SortDirection::Descending,
        }
    }
}

fn parse_file(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_file() {
        return Err(format!("The `{}` path must point to a file.", path.display()));
    }

    Ok(path)
}

fn parse_dir(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}

fn parse_sort_order(order: &str) -> Result<SortOrder, String> {
    order.parse::<SortOrder>().map_err(|error| error.to_string())
}

pub(crate) trait PathExt {
    fn or_current_dir(self) -> Result<PathBuf, CliError>;
}

impl PathExt for Option<PathBuf> {
    fn or_current_dir(self) -> Result<PathBuf, CliError> {
        if let Some(path) = self {
            Ok(path)
        } else {
            env::current_dir().map_err(|e| CliError::Path(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_command() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_report_defaults() {
        let cli = Cli::try_parse_from([
            "cinevis",
            "report",
            "--url",
            "https://example.com/movies.json",
        ])
        .unwrap();

        let Commands::Report(args) = cli.command else {
            panic!("expected the report command");
        };

        assert_eq!(Some("https://example.com/movies.json"), args.source.url.as_deref());
        assert!(args.source.path.is_none());
        assert!(args.sort.is_none());
        assert_eq!(MetricArg::Year, args.histogram_metric);
        assert_eq!(20, args.bins);
        assert_eq!(GroupFieldArg::Directors, args.group_field);
        assert_eq!(10, args.top);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_sort_order_argument() {
        let cli = Cli::try_parse_from([
            "cinevis",
            "report",
            "-u",
            "https://example.com/movies.json",
            "--sort",
            "rating-desc",
            "-v",
        ])
        .unwrap();

        let Commands::Report(args) = cli.command else {
            panic!("expected the report command");
        };

        assert_eq!(
            Some(SortOrder::new(Metric::Rating, SortDirection::Descending)),
            args.sort
        );
        assert!(cli.verbose);
    }

    #[test]
    fn reject_unknown_sort_key() {
        let result = Cli::try_parse_from([
            "cinevis",
            "report",
            "-u",
            "https://example.com/movies.json",
            "--sort",
            "budget-asc",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn source_is_required() {
        assert!(Cli::try_parse_from(["cinevis", "genres"]).is_err());
    }

    #[test]
    fn path_and_url_are_exclusive() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let result = Cli::try_parse_from([
            "cinevis",
            "genres",
            "--path",
            path,
            "--url",
            "https://example.com/movies.json",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn parse_top_arguments() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from([
            "cinevis", "top", "--path", path, "--field", "actors", "-n", "3",
        ])
        .unwrap();

        let Commands::Top(args) = cli.command else {
            panic!("expected the top command");
        };

        assert_eq!(GroupField::Actors, GroupField::from(args.field));
        assert_eq!(3, args.count);
        assert_eq!(Some(file.path()), args.source.path.as_deref());
    }

    #[test]
    fn path_must_point_to_a_file() {
        let dir = tempfile::tempdir().unwrap();

        assert!(parse_file(dir.path().to_str().unwrap()).is_err());
        assert!(parse_dir(dir.path().to_str().unwrap()).is_ok());
    }
}
