use serde_json::json;

use super::layout::{self, LinearScale, PlotArea};
use super::renderer;
use super::ChartKind;
use crate::errors::ChartResult;

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((0.0, 1.0))
}

/// Render `(year, revenue)` points with a grid behind them.
pub fn render(points: &[(f64, f64)]) -> ChartResult<String> {
    let plot = PlotArea::default();

    let (x_min, x_max) = bounds(points.iter().map(|p| p.0));
    let (y_min, y_max) = bounds(points.iter().map(|p| p.1));
    let x_scale = LinearScale::new(
        layout::padded_domain(x_min, x_max, 0.05),
        (plot.left, plot.right),
    );
    let y_scale = LinearScale::new(
        layout::padded_domain(y_min, y_max, 0.05),
        (plot.bottom, plot.top),
    );

    let circles: Vec<_> = points
        .iter()
        .map(|&(x, y)| {
            json!({
                "cx": layout::px(x_scale.map(x)),
                "cy": layout::px(y_scale.map(y)),
                "x": layout::format_number(x),
                "y": layout::format_number(y),
            })
        })
        .collect();

    let frame = renderer::create_frame_context(
        ChartKind::Scatter.title(),
        "Year",
        "Revenue (Millions)",
        &plot,
        layout::axis_ticks(&x_scale, 8),
        layout::axis_ticks(&y_scale, 6),
    );
    let context = renderer::extend_context(frame, json!({ "points": circles }));

    renderer::render_template(&get_template(), &context)
}

pub fn get_template() -> String {
    include_str!("to_scatter.hbs").to_string()
}
