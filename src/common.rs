use handlebars::{handlebars_helper, Handlebars};
use serde_json::Value;

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write `content` to `path`, creating parent directories and replacing any
/// existing file.
pub fn write_string_to_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn get_handlebars() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();

    handlebars_helper!(isempty: |v: Value| match v {
        Value::Array(items) => items.is_empty(),
        Value::Null => true,
        _ => false,
    });
    handlebars.register_helper("isempty", Box::new(isempty));

    handlebars
}
