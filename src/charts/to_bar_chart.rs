use indexmap::IndexMap;
use serde_json::json;

use super::layout::{self, LinearScale, PlotArea};
use super::renderer;
use super::ChartKind;
use crate::errors::ChartResult;

/// Render category counts as vertical bars in the order given.
pub fn render(counts: &IndexMap<String, usize>) -> ChartResult<String> {
    // rotated genre labels need room under the axis
    let plot = PlotArea::with_bottom_margin(160.0);

    let max_count = counts.values().copied().max().unwrap_or(0);
    let y_scale = LinearScale::new(
        (0.0, layout::count_axis_max(max_count)),
        (plot.bottom, plot.top),
    );

    let band = if counts.is_empty() {
        plot.width()
    } else {
        plot.width() / counts.len() as f64
    };

    let bars: Vec<_> = counts
        .iter()
        .enumerate()
        .map(|(i, (label, &count))| {
            let x = plot.left + band * i as f64 + band * 0.25;
            let center = plot.left + band * (i as f64 + 0.5);
            let y = y_scale.map(count as f64);
            json!({
                "label": label,
                "count": count,
                "x": layout::px(x),
                "y": layout::px(y),
                "width": layout::px(band * 0.5),
                "height": layout::px(plot.bottom - y),
                "label_x": layout::px(center),
                "label_y": layout::px(plot.bottom + 12.0),
            })
        })
        .collect();

    let frame = renderer::create_frame_context(
        ChartKind::GenreBar.title(),
        "Genre",
        "Count",
        &plot,
        Vec::new(),
        layout::axis_ticks(&y_scale, 6),
    );
    let context = renderer::extend_context(frame, json!({ "bars": bars }));

    renderer::render_template(&get_template(), &context)
}

pub fn get_template() -> String {
    include_str!("to_bar_chart.hbs").to_string()
}
