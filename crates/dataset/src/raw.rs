use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::error::MalformedRecordError;
use crate::record::Movie;

pub(crate) const RANK_KEY: &str = "rank";
pub(crate) const TITLE_KEY: &str = "title";
pub(crate) const YEAR_KEY: &str = "year";
pub(crate) const DURATION_KEY: &str = "duration";
pub(crate) const RATING_KEY: &str = "rating";
pub(crate) const VOTES_KEY: &str = "votes";
pub(crate) const GENRES_KEY: &str = "genres";
pub(crate) const DIRECTORS_KEY: &str = "directors";
pub(crate) const WRITERS_KEY: &str = "writers";
pub(crate) const ACTORS_KEY: &str = "actors";
pub(crate) const IMAGE_KEY: &str = "image";

/// A dataset entry as it was read, before any field is validated.
///
/// Numeric fields may hold JSON numbers or text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: Map<String, Value>,
}

impl RawRecord {
    pub fn new(fields: Map<String, Value>) -> RawRecord {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl From<&Movie> for RawRecord {
    fn from(movie: &Movie) -> Self {
        let mut fields = Map::with_capacity(11);

        fields.insert(RANK_KEY.to_owned(), json!(movie.rank));
        fields.insert(TITLE_KEY.to_owned(), json!(movie.title));
        fields.insert(YEAR_KEY.to_owned(), json!(movie.year));
        fields.insert(DURATION_KEY.to_owned(), json!(movie.duration));
        fields.insert(RATING_KEY.to_owned(), json!(movie.rating));
        fields.insert(VOTES_KEY.to_owned(), json!(movie.votes));
        fields.insert(GENRES_KEY.to_owned(), json!(movie.genres));
        fields.insert(DIRECTORS_KEY.to_owned(), json!(movie.directors));
        fields.insert(WRITERS_KEY.to_owned(), json!(movie.writers));
        fields.insert(ACTORS_KEY.to_owned(), json!(movie.actors));

        if let Some(ref image) = movie.image {
            fields.insert(IMAGE_KEY.to_owned(), json!(image));
        }

        Self { fields }
    }
}

/// Typed access to the fields of a [`RawRecord`] at a known dataset position.
pub(crate) struct FieldReader<'a> {
    record: &'a RawRecord,
    index: usize,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(record: &'a RawRecord, index: usize) -> FieldReader<'a> {
        Self { record, index }
    }

    fn required(&self, field: &'static str) -> Result<&'a Value, MalformedRecordError> {
        match self.record.get(field) {
            None | Some(Value::Null) => Err(MalformedRecordError::MissingField {
                index: self.index,
                field,
            }),
            Some(value) => Ok(value),
        }
    }

    fn invalid_number(&self, field: &'static str, value: String) -> MalformedRecordError {
        MalformedRecordError::InvalidNumber {
            index: self.index,
            field,
            value,
        }
    }

    fn unexpected_type(&self, field: &'static str) -> MalformedRecordError {
        MalformedRecordError::UnexpectedType {
            index: self.index,
            field,
        }
    }

    /// Reads a finite number stored either as a JSON number or as text.
    pub(crate) fn number(&self, field: &'static str) -> Result<f64, MalformedRecordError> {
        let number = match self.required(field)? {
            Value::Number(number) => number
                .as_f64()
                .ok_or_else(|| self.invalid_number(field, number.to_string()))?,
            Value::String(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| self.invalid_number(field, text.clone()))?,
            _ => return Err(self.unexpected_type(field)),
        };

        if number.is_finite() {
            Ok(number)
        } else {
            Err(self.invalid_number(field, number.to_string()))
        }
    }

    /// Reads a whole number that fits into `T`.
    ///
    /// Integer numbers and integer text are read exactly; an integral float
    /// such as `142.0` is accepted as well.
    pub(crate) fn integer<T>(&self, field: &'static str) -> Result<T, MalformedRecordError>
    where
        T: TryFrom<i128>,
    {
        let exact = match self.required(field)? {
            Value::Number(number) => number
                .as_i64()
                .map(i128::from)
                .or_else(|| number.as_u64().map(i128::from)),
            Value::String(text) => text.trim().parse::<i128>().ok(),
            _ => return Err(self.unexpected_type(field)),
        };

        let integer = match exact {
            Some(integer) => integer,
            None => self.integral_float(field)?,
        };

        T::try_from(integer).map_err(|_| self.invalid_number(field, integer.to_string()))
    }

    fn integral_float(&self, field: &'static str) -> Result<i128, MalformedRecordError> {
        let number = self.number(field)?;

        if number.fract() != 0.0 || number < i128::MIN as f64 || number >= i128::MAX as f64 {
            return Err(self.invalid_number(field, number.to_string()));
        }

        Ok(number as i128)
    }

    pub(crate) fn string(&self, field: &'static str) -> Result<String, MalformedRecordError> {
        match self.required(field)? {
            Value::String(text) => Ok(text.clone()),
            _ => Err(self.unexpected_type(field)),
        }
    }

    pub(crate) fn non_empty_string(
        &self,
        field: &'static str,
    ) -> Result<String, MalformedRecordError> {
        let text = self.string(field)?;

        if text.trim().is_empty() {
            Err(MalformedRecordError::EmptyField {
                index: self.index,
                field,
            })
        } else {
            Ok(text)
        }
    }

    pub(crate) fn optional_string(
        &self,
        field: &'static str,
    ) -> Result<Option<String>, MalformedRecordError> {
        match self.record.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(_) => Err(self.unexpected_type(field)),
        }
    }

    pub(crate) fn string_list(
        &self,
        field: &'static str,
    ) -> Result<Vec<String>, MalformedRecordError> {
        self.list(self.required(field)?, field)
    }

    pub(crate) fn non_empty_string_list(
        &self,
        field: &'static str,
    ) -> Result<Vec<String>, MalformedRecordError> {
        let list = self.string_list(field)?;

        if list.is_empty() {
            Err(MalformedRecordError::EmptyField {
                index: self.index,
                field,
            })
        } else {
            Ok(list)
        }
    }

    /// Reads a list of strings, treating an absent field as an empty list.
    pub(crate) fn optional_string_list(
        &self,
        field: &'static str,
    ) -> Result<Vec<String>, MalformedRecordError> {
        match self.record.get(field) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => self.list(value, field),
        }
    }

    fn list(
        &self,
        value: &Value,
        field: &'static str,
    ) -> Result<Vec<String>, MalformedRecordError> {
        let Value::Array(items) = value else {
            return Err(self.unexpected_type(field));
        };

        items
            .iter()
            .map(|item| match item {
                Value::String(text) => Ok(text.clone()),
                _ => Err(self.unexpected_type(field)),
            })
            .collect()
    }
}
