use cinevis_dataset::GroupAggregate;
use cinevis_dataset::GroupField;

use crate::chart::Axis;
use crate::chart::Chart;
use crate::chart::Layout;
use crate::chart::Trace;
use crate::error::Result;
use crate::id::IdSequence;
use crate::render::OutputStream;
use crate::render::Render;
use crate::render::escape_html;

// The bars start just below the lowest average so small differences stay visible.
const AXIS_START_OFFSET: f64 = 0.01;

/// A horizontal bar chart of the best rated groups with their movies.
#[derive(Debug)]
pub struct TopGroupsView {
    field: GroupField,
    requested: usize,
    groups: Vec<GroupMovies>,
    chart: Chart,
}

#[derive(Debug)]
struct GroupMovies {
    name: String,
    average_rating: f64,
    movies: Vec<String>,
}

impl TopGroupsView {
    /// Builds the chart from ranked aggregates; `requested` is the count that
    /// was asked for.
    pub fn new(
        groups: &[GroupAggregate<'_>],
        field: GroupField,
        requested: usize,
    ) -> TopGroupsView {
        let mut ids = IdSequence::default();

        let averages: Vec<f64> = groups.iter().map(|g| g.average_rating).collect();
        let names = groups.iter().map(|g| g.name.clone()).collect();
        let text = groups
            .iter()
            .map(|g| {
                format!(
                    "<b>{name}</b><br>Avg. Rating: {average:.4}<br>Movies: {count}",
                    name = escape_html(&g.name),
                    average = g.average_rating,
                    count = g.movie_count,
                )
            })
            .collect();

        let mut x_axis = Axis::new("Average Rating");
        let min = averages.iter().copied().reduce(f64::min);
        let max = averages.iter().copied().reduce(f64::max);
        if let (Some(min), Some(max)) = (min, max) {
            x_axis = x_axis.range((min - AXIS_START_OFFSET).max(0.0), max);
        }

        let layout = Layout::new(x_axis, Axis::categories(field.label())).left_margin(180);

        let groups = groups
            .iter()
            .map(|g| GroupMovies {
                name: g.name.clone(),
                average_rating: g.average_rating,
                movies: g
                    .movies
                    .iter()
                    .map(|m| format!("{} ({}) - Rating: {}", m.title, m.year, m.rating))
                    .collect(),
            })
            .collect();

        Self {
            field,
            requested,
            groups,
            chart: Chart::new(ids.next(), Trace::bars(averages, names, text), layout),
        }
    }
}

fn caption(field: GroupField, name: &str) -> String {
    match field {
        GroupField::Directors => format!("Movies directed by {name}"),
        GroupField::Writers => format!("Movies written by {name}"),
        GroupField::Actors => format!("Movies featuring {name}"),
        GroupField::Genres => format!("{name} movies"),
    }
}

impl Render for TopGroupsView {
    fn render<O>(&self, output: &mut O) -> Result<()>
    where
        O: OutputStream,
    {
        output.write(&format!(
            r#"<p class="parameters">Top {shown} of {requested} requested {field} by average rating.</p>"#,
            shown = self.groups.len(),
            requested = self.requested,
            field = self.field,
        ))?;

        if self.groups.is_empty() {
            return output.write("<p>No movie lists a value for this field.</p>");
        }

        self.chart.render(output)?;

        for group in &self.groups {
            output.write(&format!(
                "<details><summary>{caption} ({average:.4})</summary><ul>",
                caption = escape_html(&caption(self.field, &group.name)),
                average = group.average_rating,
            ))?;

            for movie in &group.movies {
                output.write(&format!("<li>{}</li>", escape_html(movie)))?;
            }

            output.write("</ul></details>")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cinevis_dataset::Movie;
    use cinevis_dataset::top_groups;

    use super::*;

    fn movie(title: &str, rating: f64, directors: &[&str]) -> Movie {
        Movie {
            rank: 1,
            title: title.to_owned(),
            year: 2001,
            duration: 100,
            rating,
            votes: 10,
            genres: vec![String::from("Drama")],
            directors: directors.iter().map(|d| d.to_string()).collect(),
            writers: Vec::new(),
            actors: Vec::new(),
            image: None,
        }
    }

    #[test]
    fn render_bars_and_movie_lists() {
        let records = vec![
            movie("First", 8.0, &["A"]),
            movie("Second", 6.0, &["A", "B & C"]),
        ];
        let groups = top_groups(&records, GroupField::Directors, 2).unwrap();
        let mut output = String::new();

        TopGroupsView::new(&groups, GroupField::Directors, 2)
            .render(&mut output)
            .unwrap();

        assert!(output.contains("Top 2 of 2 requested directors by average rating."));
        assert!(output.contains(r#""x":[7.0,6.0]"#));
        assert!(output.contains(r#""range":[5.99,7.0]"#));
        assert!(output.contains("Avg. Rating: 7.0000"));
        assert!(output.contains("<summary>Movies directed by B &amp; C (6.0000)</summary>"));
        assert!(output.contains("<li>First (2001) - Rating: 8</li>"));
    }

    #[test]
    fn render_notice_without_groups() {
        let mut output = String::new();

        TopGroupsView::new(&[], GroupField::Writers, 5)
            .render(&mut output)
            .unwrap();

        assert!(output.contains("No movie lists a value for this field."));
    }
}
