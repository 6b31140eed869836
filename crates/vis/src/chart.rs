mod axes;

use serde::Serialize;

use crate::id::Id;

pub(crate) use crate::chart::axes::Axis;

const BAR_COLOR: &str = "#69b3a2";
const POINT_COLOR: &str = "red";

/// A Plotly chart: the element it is drawn into, its traces and its layout.
#[derive(Serialize, Debug)]
pub(crate) struct Chart {
    pub(crate) id: Id,
    pub(crate) traces: Vec<Trace>,
    pub(crate) layout: Layout,
}

impl Chart {
    pub(crate) fn new(id: Id, trace: Trace, layout: Layout) -> Chart {
        Self {
            id,
            traces: vec![trace],
            layout,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub(crate) enum Datum {
    Number(f64),
    Text(String),
}

#[derive(Serialize, Debug)]
pub(crate) struct Trace {
    #[serde(rename = "type")]
    kind: TraceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    orientation: Option<Orientation>,
    x: Vec<Datum>,
    y: Vec<Datum>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    width: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    text: Vec<String>,
    #[serde(rename = "hoverinfo")]
    hover_info: HoverInfo,
    #[serde(rename = "textposition", skip_serializing_if = "Option::is_none")]
    text_position: Option<TextPosition>,
    marker: Marker,
}

impl Trace {
    /// Points at `(x, y)`, each labelled by its hover text.
    pub(crate) fn scatter(xs: Vec<f64>, ys: Vec<f64>, text: Vec<String>) -> Trace {
        Self {
            kind: TraceKind::Scatter,
            mode: Some(Mode::Markers),
            orientation: None,
            x: numbers(xs),
            y: numbers(ys),
            width: Vec::new(),
            text,
            hover_info: HoverInfo::Text,
            text_position: None,
            marker: Marker {
                color: POINT_COLOR,
                size: Some(4),
            },
        }
    }

    /// Vertical bars centered on `centers` with the given widths.
    pub(crate) fn columns(
        centers: Vec<f64>,
        heights: Vec<f64>,
        widths: Vec<f64>,
        text: Vec<String>,
    ) -> Trace {
        Self {
            kind: TraceKind::Bar,
            mode: None,
            orientation: None,
            x: numbers(centers),
            y: numbers(heights),
            width: widths,
            text,
            hover_info: HoverInfo::Text,
            text_position: Some(TextPosition::None),
            marker: Marker {
                color: BAR_COLOR,
                size: None,
            },
        }
    }

    /// Horizontal bars, one per category.
    pub(crate) fn bars(values: Vec<f64>, categories: Vec<String>, text: Vec<String>) -> Trace {
        Self {
            kind: TraceKind::Bar,
            mode: None,
            orientation: Some(Orientation::Horizontal),
            x: numbers(values),
            y: categories.into_iter().map(Datum::Text).collect(),
            width: Vec::new(),
            text,
            hover_info: HoverInfo::Text,
            text_position: Some(TextPosition::None),
            marker: Marker {
                color: BAR_COLOR,
                size: None,
            },
        }
    }
}

fn numbers(values: Vec<f64>) -> Vec<Datum> {
    values.into_iter().map(Datum::Number).collect()
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TraceKind {
    Scatter,
    Bar,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Mode {
    Markers,
}

#[derive(Serialize, Debug)]
pub(crate) enum Orientation {
    #[serde(rename = "h")]
    Horizontal,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "lowercase")]
pub(crate) enum HoverInfo {
    Text,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TextPosition {
    None,
}

#[derive(Serialize, Debug)]
pub(crate) struct Marker {
    color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<u32>,
}

#[derive(Serialize, Debug)]
pub(crate) struct Margin {
    #[serde(rename = "t")]
    top: u32,
    #[serde(rename = "r")]
    right: u32,
    #[serde(rename = "b")]
    bottom: u32,
    #[serde(rename = "l")]
    left: u32,
}

#[derive(Serialize, Debug)]
pub(crate) struct Layout {
    #[serde(rename = "xaxis")]
    x_axis: Axis,
    #[serde(rename = "yaxis")]
    y_axis: Axis,
    width: u32,
    height: u32,
    margin: Margin,
    #[serde(rename = "showlegend")]
    show_legend: bool,
    #[serde(rename = "hovermode")]
    hover_mode: HoverMode,
    #[serde(rename = "bargap", skip_serializing_if = "Option::is_none")]
    bar_gap: Option<f64>,
}

impl Layout {
    pub(crate) fn new(x_axis: Axis, y_axis: Axis) -> Self {
        Self {
            x_axis,
            y_axis,
            width: 800,
            height: 400,
            margin: Margin {
                top: 20,
                right: 30,
                bottom: 50,
                left: 60,
            },
            show_legend: false,
            hover_mode: HoverMode::Closest,
            bar_gap: None,
        }
    }

    pub(crate) fn bar_gap(mut self, gap: f64) -> Self {
        self.bar_gap = Some(gap);
        self
    }

    /// Widens the left margin for long category labels.
    pub(crate) fn left_margin(mut self, left: u32) -> Self {
        self.margin.left = left;
        self
    }
}

#[derive(Serialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub(crate) enum HoverMode {
    #[default]
    Closest,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serialize_horizontal_bars() {
        let trace = Trace::bars(
            vec![8.5, 7.25],
            vec![String::from("A"), String::from("B")],
            vec![String::from("a"), String::from("b")],
        );

        let value = serde_json::to_value(&trace).unwrap();

        assert_eq!(json!("bar"), value["type"]);
        assert_eq!(json!("h"), value["orientation"]);
        assert_eq!(json!([8.5, 7.25]), value["x"]);
        assert_eq!(json!(["A", "B"]), value["y"]);
        assert_eq!(json!("#69b3a2"), value["marker"]["color"]);
        assert!(value.get("mode").is_none());
        assert!(value.get("width").is_none());
    }

    #[test]
    fn serialize_scatter_points() {
        let trace = Trace::scatter(vec![1994.0], vec![9.3], vec![String::from("Shawshank")]);

        let value = serde_json::to_value(&trace).unwrap();

        assert_eq!(json!("scatter"), value["type"]);
        assert_eq!(json!("markers"), value["mode"]);
        assert_eq!(json!(["Shawshank"]), value["text"]);
        assert_eq!(json!("text"), value["hoverinfo"]);
    }
}
