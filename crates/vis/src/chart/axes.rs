use cinevis_dataset::Metric;
use cinevis_dataset::scatter::Extent;
use serde::Serialize;
use serde::Serializer;

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum AxisType {
    #[default]
    Linear,
    Category,
}

#[derive(Debug, Default, Clone, Copy)]
pub(crate) enum AutoRange {
    #[default]
    On,
    Off,
    Reversed,
}

impl Serialize for AutoRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AutoRange::On => serializer.serialize_bool(true),
            AutoRange::Off => serializer.serialize_bool(false),
            AutoRange::Reversed => serializer.serialize_str("reversed"),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct AxisTitle {
    text: String,
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct Axis {
    title: AxisTitle,
    #[serde(rename = "type")]
    kind: AxisType,
    #[serde(rename = "autorange")]
    auto_range: AutoRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<[f64; 2]>,
    #[serde(rename = "showgrid")]
    show_grid: bool,
    #[serde(rename = "zeroline")]
    zero_line: bool,
    #[serde(rename = "automargin")]
    auto_margin: bool,
}

impl Axis {
    pub(crate) fn new(title: impl Into<String>) -> Self {
        Self {
            title: AxisTitle { text: title.into() },
            kind: AxisType::Linear,
            auto_range: AutoRange::On,
            range: None,
            show_grid: true,
            zero_line: false,
            auto_margin: true,
        }
    }

    /// A linear axis spanning the observed extent of a metric, padded by 5%
    /// on each side so points on the boundary stay visible.
    pub(crate) fn for_metric(metric: Metric, extent: Extent) -> Self {
        let span = extent.max - extent.min;
        let padding = if span > 0.0 { span * 0.05 } else { 0.5 };

        Self::new(metric.label()).range(extent.min - padding, extent.max + padding)
    }

    /// An axis listing one category per entry, first entry on top.
    pub(crate) fn categories(title: impl Into<String>) -> Self {
        Self {
            kind: AxisType::Category,
            auto_range: AutoRange::Reversed,
            show_grid: false,
            ..Self::new(title)
        }
    }

    pub(crate) fn range(mut self, start: f64, end: f64) -> Self {
        self.range = Some([start, end]);
        self.auto_range = AutoRange::Off;
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn metric_axis_is_padded() {
        let axis = Axis::for_metric(Metric::Rating, Extent { min: 0.0, max: 10.0 });

        assert_eq!(
            json!({
                "title": { "text": "Rating" },
                "type": "linear",
                "autorange": false,
                "range": [-0.5, 10.5],
                "showgrid": true,
                "zeroline": false,
                "automargin": true
            }),
            serde_json::to_value(&axis).unwrap()
        );
    }

    #[test]
    fn category_axis_is_reversed() {
        let axis = serde_json::to_value(Axis::categories("Director")).unwrap();

        assert_eq!(json!("category"), axis["type"]);
        assert_eq!(json!("reversed"), axis["autorange"]);
    }
}
