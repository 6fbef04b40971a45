use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Two-column `key | value` table; scalars render as a single row.
fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let rows: Vec<(String, String)> = match serde_json::to_value(value)? {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| (key, value_to_cell(&value)))
            .collect(),
        scalar => vec![(String::from("value"), value_to_cell(&scalar))],
    };

    let key_width = rows
        .iter()
        .map(|(key, _)| key.len())
        .max()
        .unwrap_or(0)
        .max("key".len());

    let mut out = format!("{:<key_width$}  value\n", "key");
    out.push_str(&"-".repeat(key_width + 7));
    for (key, value) in rows {
        out.push('\n');
        out.push_str(&format!("{key:<key_width$}  {value}"));
    }
    Ok(out)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
