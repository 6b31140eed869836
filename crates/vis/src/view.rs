//! The four report views, each built from the output of one transformation.

mod collection;
mod correlation;
mod distribution;
mod top_groups;

use serde::Serialize;

use crate::chart::Chart;
use crate::error::Result;
use crate::render::OutputStream;
use crate::render::Render;
use crate::render::script_json;

pub use crate::view::collection::CollectionView;
pub use crate::view::correlation::CorrelationView;
pub use crate::view::distribution::DistributionView;
pub use crate::view::top_groups::TopGroupsView;

/// Identifies a view page of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    /// The filterable, sortable grid of movie cards.
    Collection,
    /// The scatter plot of two metrics.
    Correlation,
    /// The histogram of one metric.
    Distribution,
    /// The bar chart of the best rated groups.
    TopGroups,
}

impl ViewKind {
    /// Every view, in navigation order.
    pub const ALL: [ViewKind; 4] = [
        ViewKind::Collection,
        ViewKind::Correlation,
        ViewKind::Distribution,
        ViewKind::TopGroups,
    ];

    /// The page file name inside the views directory.
    pub fn file_name(self) -> &'static str {
        match self {
            ViewKind::Collection => "collection.html",
            ViewKind::Correlation => "correlation.html",
            ViewKind::Distribution => "distribution.html",
            ViewKind::TopGroups => "top_groups.html",
        }
    }

    /// The page heading.
    pub fn title(self) -> &'static str {
        match self {
            ViewKind::Collection => "Collection",
            ViewKind::Correlation => "Correlation",
            ViewKind::Distribution => "Distribution",
            ViewKind::TopGroups => "Top groups",
        }
    }

    /// A one line summary shown on the index page.
    pub fn description(self) -> &'static str {
        match self {
            ViewKind::Collection => "every movie as a card, filtered by genre and sorted",
            ViewKind::Correlation => "one metric plotted against another",
            ViewKind::Distribution => "how one metric is distributed across the movies",
            ViewKind::TopGroups => "the best rated directors, writers, actors or genres",
        }
    }
}

impl Render for Chart {
    fn render<O>(&self, output: &mut O) -> Result<()>
    where
        O: OutputStream,
    {
        let id = self.id;
        let traces = script_json(&self.traces)?;
        let layout = script_json(&self.layout)?;

        output.write(&format!(
            r#"
                <div>
                    <div id="{id}"></div>
                    <script>
                        Plotly.newPlot(document.getElementById("{id}"), {traces}, {layout});
                    </script>
                </div>
            "#,
        ))
    }
}
