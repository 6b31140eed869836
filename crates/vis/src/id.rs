use std::fmt::Display;
use std::fmt::Formatter;

use serde::Serialize;

/// The id of a chart element within one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub(crate) struct Id(u64);

impl Display for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "chart{}", self.0)
    }
}

/// Hands out increasing ids, so a page rendered twice gets the same ids.
#[derive(Debug, Default)]
pub(crate) struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub(crate) fn next(&mut self) -> Id {
        self.last += 1;
        Id(self.last)
    }
}
