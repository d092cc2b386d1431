//! Inline SVG bar charts.
//!
//! Charts are rendered server-side into a string and embedded in the page.
//! Bars are always ordered from the largest value to the smallest.

use askama::Template;

use crate::utils::format::format_decimal;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 360.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 130.0;
const BAR_COLOR: &str = "#2563eb";

/// One bar of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// A bar placed on the canvas, coordinates already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedBar {
    pub label: String,
    pub value: String,
    pub x: String,
    pub y: String,
    pub width: String,
    pub height: String,
    pub center: String,
    pub value_y: String,
}

/// A vertical bar chart sorted descending by value.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    title: String,
    value_label: String,
    decimals: usize,
    bars: Vec<Bar>,
}

#[derive(Template)]
#[template(path = "chart.svg", escape = "html")]
struct ChartTemplate<'a> {
    title: &'a str,
    value_label: &'a str,
    width: f64,
    height: f64,
    title_x: f64,
    axis_y: String,
    margin_left: f64,
    margin_top: f64,
    baseline: String,
    label_y: String,
    x_end: f64,
    color: &'static str,
    bars: Vec<PlacedBar>,
}

impl BarChart {
    /// Builds a chart from `(label, value)` pairs, largest value first.
    ///
    /// Equal values keep their input order.
    pub fn descending<I, L>(title: impl Into<String>, value_label: impl Into<String>, data: I) -> Self
    where
        I: IntoIterator<Item = (L, f64)>,
        L: Into<String>,
    {
        let mut bars: Vec<Bar> = data
            .into_iter()
            .map(|(label, value)| Bar {
                label: label.into(),
                value,
            })
            .collect();
        bars.sort_by(|a, b| b.value.total_cmp(&a.value));

        Self {
            title: title.into(),
            value_label: value_label.into(),
            decimals: 0,
            bars,
        }
    }

    /// Number of decimals printed above each bar.
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    fn chart_height() -> f64 {
        HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn baseline() -> f64 {
        MARGIN_TOP + Self::chart_height()
    }

    /// Positions every bar; the tallest bar fills the plot height.
    pub fn layout(&self) -> Vec<PlacedBar> {
        let chart_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let baseline = Self::baseline();

        let max_value = self
            .bars
            .iter()
            .map(|b| b.value)
            .fold(0.0_f64, f64::max);
        let scale = if max_value > 0.0 {
            Self::chart_height() / max_value
        } else {
            0.0
        };

        let slot = if self.bars.is_empty() {
            chart_width
        } else {
            chart_width / self.bars.len() as f64
        };

        self.bars
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                let height = bar.value.max(0.0) * scale;
                let x = MARGIN_LEFT + i as f64 * slot + slot * 0.1;
                let y = baseline - height;

                PlacedBar {
                    label: bar.label.clone(),
                    value: format_decimal(bar.value, self.decimals),
                    x: format!("{x:.1}"),
                    y: format!("{y:.1}"),
                    width: format!("{:.1}", slot * 0.8),
                    height: format!("{height:.1}"),
                    center: format!("{:.1}", x + slot * 0.4),
                    value_y: format!("{:.1}", y - 4.0),
                }
            })
            .collect()
    }

    /// Renders the chart as a standalone `<svg>` element.
    ///
    /// # Errors
    ///
    /// Returns the template error if rendering fails.
    pub fn to_svg(&self) -> askama::Result<String> {
        let baseline = Self::baseline();

        ChartTemplate {
            title: &self.title,
            value_label: &self.value_label,
            width: WIDTH,
            height: HEIGHT,
            title_x: WIDTH / 2.0,
            axis_y: format!("{:.1}", MARGIN_TOP + Self::chart_height() / 2.0),
            margin_left: MARGIN_LEFT,
            margin_top: MARGIN_TOP,
            baseline: format!("{baseline:.1}"),
            label_y: format!("{:.1}", baseline + 12.0),
            x_end: WIDTH - MARGIN_RIGHT,
            color: BAR_COLOR,
            bars: self.layout(),
        }
        .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> BarChart {
        BarChart::descending(
            "Vétérinaires actifs",
            "Effectif",
            vec![("NT", 4.0), ("QC", 3212.0), ("ON", 5386.0), ("YK", 34.0)],
        )
    }

    #[test]
    fn test_bars_sorted_descending() {
        let chart = chart();
        let labels: Vec<&str> = chart.bars().iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["ON", "QC", "YK", "NT"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let chart = BarChart::descending("t", "v", vec![("a", 1.0), ("b", 2.0), ("c", 1.0)]);
        let labels: Vec<&str> = chart.bars().iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_layout_scales_to_tallest_bar() {
        let placed = chart().layout();

        assert_eq!(placed.len(), 4);
        assert_eq!(placed[0].label, "ON");
        assert_eq!(placed[0].y, format!("{MARGIN_TOP:.1}"));
        assert_eq!(placed[0].value, "5 386");
        let xs: Vec<f64> = placed.iter().map(|b| b.x.parse().unwrap()).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_svg_contains_one_rect_per_bar() {
        let svg = chart().to_svg().unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<rect").count(), 4);
        assert!(svg.contains("5 386"));
        assert!(svg.contains("Vétérinaires actifs"));
    }

    #[test]
    fn test_decimals_applied_to_labels() {
        let svg = BarChart::descending("Ratio", "Ratio", vec![("QC", 3212.0 / 942.0)])
            .with_decimals(2)
            .to_svg()
            .unwrap();
        assert!(svg.contains(">3.41<"));
    }

    #[test]
    fn test_labels_are_escaped() {
        let svg = BarChart::descending("A & B", "<v>", vec![("x\"y", 1.0)])
            .to_svg()
            .unwrap();
        assert!(svg.contains("A &amp; B"));
        assert!(svg.contains("&lt;v&gt;"));
        assert!(!svg.contains("A & B"));
        assert!(!svg.contains("<v>"));
        assert!(!svg.contains("x\"y"));
    }

    #[test]
    fn test_empty_and_zero_charts_render() {
        let empty = BarChart::descending("vide", "v", Vec::<(String, f64)>::new())
            .to_svg()
            .unwrap();
        assert_eq!(empty.matches("<rect").count(), 0);

        let zero = BarChart::descending("zéro", "v", vec![("a", 0.0)])
            .to_svg()
            .unwrap();
        assert!(zero.contains(r#"height="0.0""#));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        assert_eq!(chart().to_svg().unwrap(), chart().to_svg().unwrap());
    }
}
