//! The report directory and the generation of its pages.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use chrono::SecondsFormat;
use chrono::Utc;
use cinevis_dataset::DEFAULT_BIN_COUNT;
use cinevis_dataset::DatasetError;
use cinevis_dataset::GroupField;
use cinevis_dataset::Metric;
use cinevis_dataset::Movie;
use cinevis_dataset::SortOrder;
use cinevis_dataset::filter_by_genre;
use cinevis_dataset::genre_set;
use cinevis_dataset::histogram::metric_histogram;
use cinevis_dataset::scatter::scatter;
use cinevis_dataset::top_groups;
use serde::Serialize;

use crate::error::Result;
use crate::render::Page;
use crate::render::Render;
use crate::render::STYLESHEET;
use crate::render::output::OutputFile;
use crate::template::INDEX_TEMPLATE;
use crate::template::TemplateEngine;
use crate::view::CollectionView;
use crate::view::CorrelationView;
use crate::view::DistributionView;
use crate::view::TopGroupsView;
use crate::view::ViewKind;

/// Every parameter of a report.
///
/// The genre filter applies to the collection and the distribution; the
/// correlation and top groups views always cover the whole dataset. A genre
/// without movies leaves the distribution empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Only movies of this genre are shown in the grid and the histogram.
    pub genre: Option<String>,
    /// The order of the movie grid; input order when unset.
    pub sort: Option<SortOrder>,
    /// The metric binned by the histogram.
    pub histogram_metric: Metric,
    /// The number of histogram bins.
    pub bin_count: usize,
    /// The horizontal metric of the scatter plot.
    pub x_metric: Metric,
    /// The vertical metric of the scatter plot.
    pub y_metric: Metric,
    /// The field whose values are ranked by average rating.
    pub group_field: GroupField,
    /// How many groups the bar chart shows.
    pub top_count: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            genre: None,
            sort: None,
            histogram_metric: Metric::Year,
            bin_count: DEFAULT_BIN_COUNT,
            x_metric: Metric::Year,
            y_metric: Metric::Rating,
            group_field: GroupField::Directors,
            top_count: 10,
        }
    }
}

/// The report directory is structured as follows:
///
/// ./cinevis/index.html
///
/// ./cinevis/views/collection.html
/// ./cinevis/views/correlation.html
/// ./cinevis/views/distribution.html
/// ./cinevis/views/top_groups.html
///
/// The __index__ file is the entry point of the report and links every view.
pub struct ReportLayout {
    root_path: PathBuf,
    index_file_path: PathBuf,
    views_path: PathBuf,
}

/// The files written by [`ReportLayout::generate_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The entry page.
    pub index: PathBuf,
    /// The view pages, in navigation order.
    pub views: Vec<PathBuf>,
}

#[derive(Serialize)]
struct IndexContext<'a> {
    stylesheet: &'static str,
    views: Vec<ViewLink>,
    movie_count: usize,
    genre_count: usize,
    generated_at: String,
    parameters: Vec<Parameter>,
    genres: Vec<&'a str>,
}

#[derive(Serialize)]
struct ViewLink {
    file_name: &'static str,
    title: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
struct Parameter {
    name: &'static str,
    value: String,
}

impl ReportLayout {
    const MAIN_DIR_NAME: &str = "cinevis";
    const VIEWS_DIR_NAME: &str = "views";
    const INDEX_FILE_NAME: &str = "index.html";

    /// Creates the report directories under `path`. Existing report files are
    /// overwritten by [`ReportLayout::generate_report`].
    pub fn init(path: &Path) -> Result<ReportLayout> {
        let root_path = path.join(Self::MAIN_DIR_NAME);
        let index_file_path = root_path.join(Self::INDEX_FILE_NAME);
        let views_path = root_path.join(Self::VIEWS_DIR_NAME);

        fs::create_dir_all(&views_path)?;

        Ok(Self {
            root_path,
            index_file_path,
            views_path,
        })
    }

    /// The `cinevis` directory holding the report.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Renders every view of `movies` and the index page linking them.
    pub fn generate_report(&self, movies: &[Movie], options: &ReportOptions) -> Result<Report> {
        let genre = options.genre.as_deref().filter(|g| !g.is_empty());
        let selected = filter_by_genre(movies, genre);
        log::debug!(
            "{} of {} movies selected for genre {:?}",
            selected.len(),
            movies.len(),
            genre
        );

        let shown = match options.sort {
            Some(order) => order.apply(selected.iter().copied()),
            None => selected.clone(),
        };
        let collection = CollectionView::new(&shown, genre, options.sort);

        let bins = match metric_histogram(
            selected.iter().copied(),
            options.histogram_metric,
            options.bin_count,
        ) {
            Ok(bins) => bins,
            Err(DatasetError::EmptyDataset) => Vec::new(),
            Err(error) => return Err(error.into()),
        };
        let distribution = DistributionView::new(&bins, options.histogram_metric, genre);

        let points = scatter(movies, options.x_metric, options.y_metric)?;
        let correlation = CorrelationView::new(&points);

        let groups = top_groups(movies, options.group_field, options.top_count)?;
        let ranking = TopGroupsView::new(&groups, options.group_field, options.top_count);

        let views = vec![
            self.write_view(ViewKind::Collection, &collection)?,
            self.write_view(ViewKind::Correlation, &correlation)?,
            self.write_view(ViewKind::Distribution, &distribution)?,
            self.write_view(ViewKind::TopGroups, &ranking)?,
        ];

        let index = self.write_index(movies, options)?;

        Ok(Report { index, views })
    }

    fn write_view<V: Render>(&self, kind: ViewKind, view: &V) -> Result<PathBuf> {
        let mut file = OutputFile::create(&self.views_path.join(kind.file_name()))?;
        Page::new(kind, view).render(&mut file)?;
        file.finish()
    }

    fn write_index(&self, movies: &[Movie], options: &ReportOptions) -> Result<PathBuf> {
        let genres = genre_set(movies);
        let context = IndexContext {
            stylesheet: STYLESHEET,
            views: ViewKind::ALL
                .into_iter()
                .map(|kind| ViewLink {
                    file_name: kind.file_name(),
                    title: kind.title(),
                    description: kind.description(),
                })
                .collect(),
            movie_count: movies.len(),
            genre_count: genres.len(),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            parameters: parameters(options),
            genres: genres.iter().collect(),
        };

        let templates = TemplateEngine::new()?;
        let text = templates.render(INDEX_TEMPLATE, &context)?;

        fs::write(&self.index_file_path, text)?;
        log::info!("wrote `{}`", self.index_file_path.display());

        Ok(self.index_file_path.clone())
    }
}

fn parameters(options: &ReportOptions) -> Vec<Parameter> {
    vec![
        Parameter {
            name: "Genre",
            value: options.genre.clone().unwrap_or_else(|| String::from("all")),
        },
        Parameter {
            name: "Sort order",
            value: options
                .sort
                .map_or_else(|| String::from("dataset order"), |order| order.to_string()),
        },
        Parameter {
            name: "Histogram",
            value: format!("{} in {} bins", options.histogram_metric, options.bin_count),
        },
        Parameter {
            name: "Scatter plot",
            value: format!("{} against {}", options.x_metric, options.y_metric),
        },
        Parameter {
            name: "Top groups",
            value: format!("{} {}", options.top_count, options.group_field),
        },
    ]
}

#[cfg(test)]
mod tests {
    use cinevis_dataset::SortDirection;

    use super::*;

    fn movie(rank: u32, title: &str, genre: &str, director: &str, rating: f64) -> Movie {
        Movie {
            rank,
            title: title.to_owned(),
            year: 1990 + rank as i32,
            duration: 100 + rank,
            rating,
            votes: 1000 * u64::from(rank),
            genres: vec![genre.to_owned()],
            directors: vec![director.to_owned()],
            writers: Vec::new(),
            actors: Vec::new(),
            image: None,
        }
    }

    fn movies() -> Vec<Movie> {
        vec![
            movie(1, "Alpha", "Drama", "Kurosawa", 8.5),
            movie(2, "Beta", "Comedy", "Wilder", 7.5),
            movie(3, "Gamma", "Drama", "Kurosawa", 8.0),
        ]
    }

    #[test]
    fn generate_report_writes_every_page() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ReportLayout::init(dir.path()).unwrap();
        let options = ReportOptions {
            genre: Some(String::from("Drama")),
            sort: Some(SortOrder::new(Metric::Rating, SortDirection::Ascending)),
            bin_count: 2,
            ..ReportOptions::default()
        };

        let report = layout.generate_report(&movies(), &options).unwrap();

        assert_eq!(dir.path().join("cinevis").join("index.html"), report.index);
        assert_eq!(4, report.views.len());
        for view in &report.views {
            assert!(view.is_file(), "{} is missing", view.display());
        }

        let index = fs::read_to_string(&report.index).unwrap();
        assert!(index.contains("3 movies across 2 genres."));
        assert!(index.contains(r#"<a href="views/top_groups.html">"#));
        assert!(index.contains("Drama, Comedy"));

        let views = layout.root_path().join("views");
        let collection = fs::read_to_string(views.join("collection.html")).unwrap();
        let gamma = collection.find("Gamma").unwrap();
        let alpha = collection.find("Alpha").unwrap();
        assert!(gamma < alpha);
        assert!(!collection.contains("Beta"));

        let ranking = fs::read_to_string(views.join("top_groups.html")).unwrap();
        assert!(ranking.contains("Movies directed by Kurosawa (8.2500)"));
        assert!(ranking.contains(r#""x":[8.25,7.5]"#));
    }

    #[test]
    fn generate_report_for_genre_without_movies() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ReportLayout::init(dir.path()).unwrap();
        let options = ReportOptions {
            genre: Some(String::from("Western")),
            ..ReportOptions::default()
        };

        let report = layout.generate_report(&movies(), &options).unwrap();

        assert_eq!(4, report.views.len());
        let views = layout.root_path().join("views");
        let distribution = fs::read_to_string(views.join("distribution.html")).unwrap();
        assert!(distribution.contains("No movie of the <strong>Western</strong> genre to bin."));
        let ranking = fs::read_to_string(views.join("top_groups.html")).unwrap();
        assert!(ranking.contains("Movies directed by Kurosawa"));
    }

    #[test]
    fn generate_report_rejects_zero_bins_for_empty_genre() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ReportLayout::init(dir.path()).unwrap();
        let options = ReportOptions {
            genre: Some(String::from("Western")),
            bin_count: 0,
            ..ReportOptions::default()
        };

        let result = layout.generate_report(&movies(), &options);

        assert!(result.is_err());
    }

    #[test]
    fn generate_report_rejects_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ReportLayout::init(dir.path()).unwrap();

        let result = layout.generate_report(&[], &ReportOptions::default());

        assert!(result.is_err());
    }

    #[test]
    fn default_options() {
        let options = ReportOptions::default();

        assert_eq!(Metric::Year, options.histogram_metric);
        assert_eq!(20, options.bin_count);
        assert_eq!(GroupField::Directors, options.group_field);
        assert_eq!(10, options.top_count);
        assert!(options.sort.is_none());
    }
}
