use cinevis_dataset::HistogramBin;
use cinevis_dataset::Metric;
use cinevis_dataset::Movie;

use crate::chart::Axis;
use crate::chart::Chart;
use crate::chart::Layout;
use crate::chart::Trace;
use crate::error::Result;
use crate::id::IdSequence;
use crate::render::OutputStream;
use crate::render::Render;
use crate::render::escape_html;

/// A histogram of one metric over the (optionally genre filtered) records.
#[derive(Debug)]
pub struct DistributionView {
    metric: Metric,
    genre: Option<String>,
    rows: Vec<BinRow>,
    chart: Chart,
}

#[derive(Debug)]
struct BinRow {
    range: String,
    count: usize,
}

impl DistributionView {
    /// Builds the histogram from bins computed over `metric`.
    pub fn new(
        bins: &[HistogramBin<&Movie>],
        metric: Metric,
        genre: Option<&str>,
    ) -> DistributionView {
        let mut ids = IdSequence::default();
        let last = bins.len().saturating_sub(1);

        let rows: Vec<BinRow> = bins
            .iter()
            .enumerate()
            .map(|(i, bin)| BinRow {
                range: bin_range(bin, i == last),
                count: bin.len(),
            })
            .collect();

        let centers = bins
            .iter()
            .map(|bin| bin.range_start + bin.width() / 2.0)
            .collect();
        let heights = bins.iter().map(|bin| bin.len() as f64).collect();
        let widths = bins.iter().map(HistogramBin::width).collect();
        let text = rows
            .iter()
            .map(|row| format!("Count: {}<br>{}", row.count, row.range))
            .collect();

        let layout = Layout::new(Axis::new(metric.label()), Axis::new("Movies")).bar_gap(0.05);

        Self {
            metric,
            genre: genre.filter(|g| !g.is_empty()).map(str::to_owned),
            rows,
            chart: Chart::new(ids.next(), Trace::columns(centers, heights, widths, text), layout),
        }
    }
}

fn bin_range<T>(bin: &HistogramBin<T>, closed: bool) -> String {
    let end = if closed { ']' } else { ')' };
    format!("[{}, {}{end}", round(bin.range_start), round(bin.range_end))
}

/// Rounds a bin boundary for display.
fn round(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

impl Render for DistributionView {
    fn render<O>(&self, output: &mut O) -> Result<()>
    where
        O: OutputStream,
    {
        if self.rows.is_empty() {
            let notice = match self.genre {
                Some(ref genre) => format!(
                    "<p>No movie of the <strong>{}</strong> genre to bin.</p>",
                    escape_html(genre)
                ),
                None => String::from("<p>No movie to bin.</p>"),
            };
            return output.write(&notice);
        }

        let total: usize = self.rows.iter().map(|row| row.count).sum();
        let genre = match self.genre {
            Some(ref genre) => format!(" in the <strong>{}</strong> genre", escape_html(genre)),
            None => String::new(),
        };

        output.write(&format!(
            r#"<p class="parameters">{total} movies{genre}, <strong>{metric}</strong> in {bins} bins.</p>"#,
            metric = self.metric,
            bins = self.rows.len(),
        ))?;

        self.chart.render(output)?;

        output.write("<table><tr><th>Range</th><th>Movies</th></tr>")?;
        for row in &self.rows {
            output.write(&format!(
                "<tr><td>{range}</td><td>{count}</td></tr>",
                range = row.range,
                count = row.count
            ))?;
        }
        output.write("</table>")
    }
}
