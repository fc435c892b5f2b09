pub mod histogram;
pub mod layout;
pub mod to_bar_chart;
pub mod to_histogram;
pub mod to_scatter;

pub use histogram::Histogram;

use serde::{Deserialize, Serialize};

/// The chart views the pipeline can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Revenue distribution in ten equal-width bins
    Histogram,
    /// Number of movies per genre
    #[value(name = "bar")]
    GenreBar,
    /// Revenue against release year
    Scatter,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Histogram, ChartKind::GenreBar, ChartKind::Scatter];

    /// Output file name inside the static directory
    pub fn file_name(&self) -> &'static str {
        match self {
            ChartKind::Histogram => "revenue_histogram.svg",
            ChartKind::GenreBar => "genre_bar_chart.svg",
            ChartKind::Scatter => "scatter_year_revenue.svg",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Histogram => "Histogram: Revenue distribution",
            ChartKind::GenreBar => "Bar chart: Movie genre vs count",
            ChartKind::Scatter => "Scatter plot: Year vs Revenue",
        }
    }
}

/// Shared template rendering for the chart exporters
pub mod renderer {
    use serde_json::{json, Value};

    use super::layout::{self, PlotArea, Tick};
    use crate::errors::ChartResult;

    pub fn render_template(template: &str, context: &Value) -> ChartResult<String> {
        let handlebars = crate::common::get_handlebars();
        Ok(handlebars.render_template(template, context)?)
    }

    /// Canvas, plot area, titles and axes common to every chart template.
    pub fn create_frame_context(
        title: &str,
        x_label: &str,
        y_label: &str,
        plot: &PlotArea,
        x_ticks: Vec<Tick>,
        y_ticks: Vec<Tick>,
    ) -> Value {
        json!({
            "title": title,
            "x_label": x_label,
            "y_label": y_label,
            "width": layout::px(layout::WIDTH),
            "height": layout::px(layout::HEIGHT),
            "center_x": layout::px(plot.left + plot.width() / 2.0),
            "plot": {
                "left": layout::px(plot.left),
                "top": layout::px(plot.top),
                "right": layout::px(plot.right),
                "bottom": layout::px(plot.bottom),
                "width": layout::px(plot.width()),
                "height": layout::px(plot.height()),
                "middle_y": layout::px(plot.top + plot.height() / 2.0),
                "tick_label_x": layout::px(plot.left - 8.0),
                "tick_label_y": layout::px(plot.bottom + 20.0),
                "tick_end_x": layout::px(plot.left - 5.0),
                "tick_end_y": layout::px(plot.bottom + 5.0),
            },
            "x_axis_label_y": layout::px(layout::HEIGHT - 15.0),
            "y_axis_label_x": layout::px(25.0),
            "x_ticks": x_ticks,
            "y_ticks": y_ticks,
        })
    }

    /// Merge chart-specific keys into a frame context.
    pub fn extend_context(mut frame: Value, extra: Value) -> Value {
        if let (Some(frame_map), Value::Object(extra_map)) = (frame.as_object_mut(), extra) {
            frame_map.extend(extra_map);
        }
        frame
    }
}
