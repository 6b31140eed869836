use std::convert::From;
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io;
use std::sync::Arc;

/// The error type for loading and transforming a movie dataset.
///
/// Errors originate from reading the dataset, deserializing JSON, normalizing
/// raw records and from invalid parameters passed to the transformations.
#[derive(Debug, Clone)]
pub enum DatasetError {
    /// A [`std::io::Error`] encountered while reading the dataset.
    Io(Arc<io::Error>),

    /// A [`serde_json::Error`] encountered while deserializing the dataset.
    Json(Arc<serde_json::Error>),

    /// A raw record could not be normalized.
    MalformedRecord(MalformedRecordError),

    /// The requested sort key is not one of the numeric fields.
    InvalidSortKey { key: String },

    /// The collection to bin or aggregate is empty.
    EmptyDataset,

    /// A bin count or group count that is not positive.
    InvalidCount { count: usize },

    /// A value handed to the binner is NaN or infinite.
    NonFiniteValue { position: usize },
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let dataset_error = "dataset error:";

        match self {
            DatasetError::Io(error) => write!(f, "{dataset_error} I/O error: {error}"),
            DatasetError::Json(error) => {
                write!(f, "{dataset_error} JSON deserialization error: {error}")
            }
            DatasetError::MalformedRecord(error) => write!(f, "{dataset_error} {error}"),
            DatasetError::InvalidSortKey { key } => write!(
                f,
                "{dataset_error} \"{key}\" is not a sort key; expected one of rank, year, duration, rating, votes"
            ),
            DatasetError::EmptyDataset => {
                write!(f, "{dataset_error} the collection contains no records")
            }
            DatasetError::InvalidCount { count } => {
                write!(f, "{dataset_error} the count must be positive, got {count}")
            }
            DatasetError::NonFiniteValue { position } => write!(
                f,
                "{dataset_error} the value at position {position} is not a finite number"
            ),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DatasetError::Io(error) => Some(error),
            DatasetError::Json(error) => Some(error),
            DatasetError::MalformedRecord(error) => Some(error),
            DatasetError::InvalidSortKey { .. } => None,
            DatasetError::EmptyDataset => None,
            DatasetError::InvalidCount { .. } => None,
            DatasetError::NonFiniteValue { .. } => None,
        }
    }
}

impl From<io::Error> for DatasetError {
    fn from(error: io::Error) -> Self {
        DatasetError::Io(Arc::new(error))
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(error: serde_json::Error) -> Self {
        DatasetError::Json(Arc::new(error))
    }
}

impl From<MalformedRecordError> for DatasetError {
    fn from(error: MalformedRecordError) -> Self {
        DatasetError::MalformedRecord(error)
    }
}

/// The error type for normalizing a raw record into a [`Movie`](crate::record::Movie).
///
/// `index` is the zero-based position of the record in the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedRecordError {
    /// A required field is absent.
    MissingField { index: usize, field: &'static str },

    /// The field was found, but not with the expected JSON type.
    UnexpectedType { index: usize, field: &'static str },

    /// The field holds text or a number that is not a valid value for it.
    InvalidNumber {
        index: usize,
        field: &'static str,
        value: String,
    },

    /// A field that must not be empty is empty.
    EmptyField { index: usize, field: &'static str },
}

impl MalformedRecordError {
    /// Returns the position of the offending record.
    pub fn index(&self) -> usize {
        match *self {
            MalformedRecordError::MissingField { index, .. }
            | MalformedRecordError::UnexpectedType { index, .. }
            | MalformedRecordError::InvalidNumber { index, .. }
            | MalformedRecordError::EmptyField { index, .. } => index,
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &'static str {
        match *self {
            MalformedRecordError::MissingField { field, .. }
            | MalformedRecordError::UnexpectedType { field, .. }
            | MalformedRecordError::InvalidNumber { field, .. }
            | MalformedRecordError::EmptyField { field, .. } => field,
        }
    }
}

impl Display for MalformedRecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let malformed_record = "malformed record";

        match *self {
            MalformedRecordError::MissingField { index, field } => write!(
                f,
                "{malformed_record} #{index}: the \"{field}\" field is missing"
            ),
            MalformedRecordError::UnexpectedType { index, field } => write!(
                f,
                "{malformed_record} #{index}: the \"{field}\" field was found, but not with the expected type"
            ),
            MalformedRecordError::InvalidNumber {
                index,
                field,
                ref value,
            } => write!(
                f,
                "{malformed_record} #{index}: the \"{field}\" field value \"{value}\" is not a valid number"
            ),
            MalformedRecordError::EmptyField { index, field } => write!(
                f,
                "{malformed_record} #{index}: the \"{field}\" field must not be empty"
            ),
        }
    }
}

impl Error for MalformedRecordError {}
