use cinevis_dataset::Dataset;
use cinevis_dataset::Movie;

use crate::cli::SourceArgs;
use crate::error::CliError;
use crate::fetch::DatasetClient;

/// Reads the dataset from the file or URL given on the command line and
/// normalizes its records.
pub(crate) fn load_movies(source: &SourceArgs) -> Result<Vec<Movie>, CliError> {
    let dataset = match (&source.path, &source.url) {
        (Some(path), _) => Dataset::from_path(path)?,
        (None, Some(url)) => DatasetClient::new()?.fetch(url)?,
        (None, None) => {
            return Err(CliError::Path(String::from(
                "either a dataset path or a dataset URL is required",
            )));
        }
    };

    let movies = dataset.normalize()?;
    log::debug!("normalized {} movies", movies.len());

    Ok(movies)
}
