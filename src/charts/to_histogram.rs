use serde_json::json;

use super::histogram::Histogram;
use super::layout::{self, LinearScale, PlotArea};
use super::renderer;
use super::ChartKind;
use crate::errors::ChartResult;

pub fn render(histogram: &Histogram) -> ChartResult<String> {
    let plot = PlotArea::default();

    let (lo, hi) = histogram.range();
    let x_scale = LinearScale::new(
        layout::padded_domain(lo, hi, 0.02),
        (plot.left, plot.right),
    );
    let y_scale = LinearScale::new(
        (0.0, layout::count_axis_max(histogram.max_count())),
        (plot.bottom, plot.top),
    );

    let bars: Vec<_> = histogram
        .counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let x0 = x_scale.map(histogram.edges[i]);
            let x1 = x_scale.map(histogram.edges[i + 1]);
            let y = y_scale.map(count as f64);
            json!({
                "x": layout::px(x0),
                "y": layout::px(y),
                "width": layout::px(x1 - x0),
                "height": layout::px(plot.bottom - y),
                "count": count,
                "from": layout::format_number(histogram.edges[i]),
                "to": layout::format_number(histogram.edges[i + 1]),
            })
        })
        .collect();

    let frame = renderer::create_frame_context(
        ChartKind::Histogram.title(),
        "Revenue (Millions)",
        "Frequency",
        &plot,
        layout::axis_ticks(&x_scale, 8),
        layout::axis_ticks(&y_scale, 6),
    );
    let context = renderer::extend_context(frame, json!({ "bars": bars }));

    renderer::render_template(&get_template(), &context)
}

pub fn get_template() -> String {
    include_str!("to_histogram.hbs").to_string()
}
