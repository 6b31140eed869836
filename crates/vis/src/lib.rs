//! Renders a movie dataset as a static HTML report.
//!
//! A report is a directory holding an index page and one page per view: the
//! movie grid, a scatter plot, a histogram and the top groups bar chart. The
//! charts are drawn in the browser by [Plotly] from JSON specs embedded in the
//! pages.
//!
//! [Plotly]: https://plotly.com/javascript/

#![warn(missing_docs)]

pub(crate) mod chart;
pub(crate) mod id;
pub(crate) mod template;

pub mod error;
pub mod layout;
pub mod render;
pub mod view;

pub use crate::layout::Report;
pub use crate::layout::ReportLayout;
pub use crate::layout::ReportOptions;
