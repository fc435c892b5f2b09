//! HTML pages, rendered from handlebars templates.

use axum::response::Html;
use serde_json::json;

use crate::database::entities::records;
use crate::services::ChartOutput;

fn render(template: &str, context: &serde_json::Value) -> Result<Html<String>, handlebars::RenderError> {
    let handlebars = crate::common::get_handlebars();
    Ok(Html(handlebars.render_template(template, context)?))
}

pub fn index(records: &[records::Model]) -> Result<Html<String>, handlebars::RenderError> {
    render(include_str!("templates/index.hbs"), &json!({ "records": records }))
}

pub fn update(record: &records::Model) -> Result<Html<String>, handlebars::RenderError> {
    render(include_str!("templates/update.hbs"), &json!({ "record": record }))
}

pub fn database(lines: &[String]) -> Result<Html<String>, handlebars::RenderError> {
    render(include_str!("templates/database.hbs"), &json!({ "data_list": lines }))
}

pub fn chart(output: &ChartOutput) -> Result<Html<String>, handlebars::RenderError> {
    render(
        include_str!("templates/chart.hbs"),
        &json!({
            "title": output.kind.title(),
            "chart_url": output.url,
            "plotted": output.plotted,
        }),
    )
}
