use cinevis_dataset::Metric;
use cinevis_dataset::scatter::Scatter;

use crate::chart::Axis;
use crate::chart::Chart;
use crate::chart::Layout;
use crate::chart::Trace;
use crate::error::Result;
use crate::id::IdSequence;
use crate::render::OutputStream;
use crate::render::Render;
use crate::render::escape_html;

/// A scatter plot of one metric against another.
#[derive(Debug)]
pub struct CorrelationView {
    x_metric: Metric,
    y_metric: Metric,
    count: usize,
    chart: Chart,
}

impl CorrelationView {
    /// Builds the plot from the projected records.
    pub fn new(scatter: &Scatter<'_>) -> CorrelationView {
        let mut ids = IdSequence::default();

        let (xs, ys): (Vec<f64>, Vec<f64>) = scatter.points.iter().map(|p| (p.x, p.y)).unzip();
        let text = scatter
            .points
            .iter()
            .map(|p| {
                format!(
                    "{title}<br>{x_metric}: {x}<br>{y_metric}: {y}",
                    title = escape_html(p.title),
                    x_metric = scatter.x_metric,
                    x = p.x,
                    y_metric = scatter.y_metric,
                    y = p.y,
                )
            })
            .collect();

        let layout = Layout::new(
            Axis::for_metric(scatter.x_metric, scatter.x_extent),
            Axis::for_metric(scatter.y_metric, scatter.y_extent),
        );

        Self {
            x_metric: scatter.x_metric,
            y_metric: scatter.y_metric,
            count: scatter.points.len(),
            chart: Chart::new(ids.next(), Trace::scatter(xs, ys, text), layout),
        }
    }
}

impl Render for CorrelationView {
    fn render<O>(&self, output: &mut O) -> Result<()>
    where
        O: OutputStream,
    {
        output.write(&format!(
            r#"<p class="parameters">{count} movies, <strong>{x}</strong> against <strong>{y}</strong>.</p>"#,
            count = self.count,
            x = self.x_metric,
            y = self.y_metric,
        ))?;

        self.chart.render(output)
    }
}

#[cfg(test)]
mod tests {
    use cinevis_dataset::Movie;
    use cinevis_dataset::scatter::scatter;

    use super::*;

    fn movie(title: &str, year: i32, rating: f64) -> Movie {
        Movie {
            rank: 1,
            title: title.to_owned(),
            year,
            duration: 120,
            rating,
            votes: 100,
            genres: vec![String::from("Drama")],
            directors: Vec::new(),
            writers: Vec::new(),
            actors: Vec::new(),
            image: None,
        }
    }

    #[test]
    fn render_scatter_plot() {
        let records = vec![movie("Ran", 1985, 8.2), movie("Ikiru", 1952, 8.3)];
        let scatter = scatter(&records, Metric::Year, Metric::Rating).unwrap();
        let mut output = String::new();

        CorrelationView::new(&scatter).render(&mut output).unwrap();

        assert!(
            output.contains("2 movies, <strong>year</strong> against <strong>rating</strong>.")
        );
        assert!(output.contains(r#"<div id="chart1"></div>"#));
        assert!(output.contains(r#""x":[1985.0,1952.0]"#));
        assert!(output.contains("Ikiru<br>year: 1952<br>rating: 8.3"));
    }
}
