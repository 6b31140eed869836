//! Loading, normalization and aggregation of movie datasets.
//!
//! The transformations are pure functions over borrowed [`Movie`] records:
//! every parameter (genre, sort key, metric, bin count, group count) is passed
//! explicitly and nothing is read from ambient state.

mod normalize;

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod genres;
pub mod histogram;
pub mod raw;
pub mod record;
pub mod scatter;
pub mod sort;

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

pub use crate::aggregate::GroupAggregate;
pub use crate::aggregate::GroupField;
pub use crate::aggregate::top_groups;
pub use crate::error::DatasetError;
pub use crate::error::MalformedRecordError;
pub use crate::filter::filter_by_genre;
pub use crate::genres::GenreSet;
pub use crate::genres::genre_set;
pub use crate::histogram::DEFAULT_BIN_COUNT;
pub use crate::histogram::HistogramBin;
pub use crate::histogram::histogram;
pub use crate::normalize::normalize;
pub use crate::raw::RawRecord;
pub use crate::record::Metric;
pub use crate::record::Movie;
pub use crate::sort::SortDirection;
pub use crate::sort::SortOrder;
pub use crate::sort::sort_by;

/// A dataset as read from its JSON source: an array of raw records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<RawRecord>,
}

impl Dataset {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let records: Vec<RawRecord> = serde_json::from_reader(reader)?;
        log::debug!("read {} raw records", records.len());

        Ok(Self { records })
    }

    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path)?;
        log::debug!("reading dataset from `{}`", path.display());

        Self::from_reader(BufReader::new(file))
    }

    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<RawRecord> = serde_json::from_str(json)?;

        Ok(Self { records })
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Normalizes every raw record; see [`normalize`].
    pub fn normalize(&self) -> Result<Vec<Movie>, DatasetError> {
        normalize(&self.records).map_err(DatasetError::from)
    }
}

impl From<Vec<RawRecord>> for Dataset {
    fn from(records: Vec<RawRecord>) -> Self {
        Self::new(records)
    }
}
