use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, table_options()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T, options: table::TableOptions) -> anyhow::Result<String> {
    match serde_json::to_value(value)? {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            // Nested arrays of objects (e.g. feature cards) get their own table below.
            let mut rows = Vec::with_capacity(map.len());
            let mut sections = Vec::new();
            for (key, value) in map {
                match value {
                    Value::Array(items) if items.iter().all(Value::is_object) && !items.is_empty() => {
                        sections.push(format!("\n{key}:\n{}", render_array_table(&items, options)));
                    }
                    Value::Null => {}
                    other => rows.push(vec![key, value_to_cell(&other)]),
                }
            }
            let mut out = table::render_table(&["key", "value"], &rows, options);
            for section in sections {
                out.push_str(&section);
            }
            Ok(out)
        }
        scalar => Ok(table::render_table(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
            options,
        )),
    }
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, options);
    }

    // Column order follows the first appearance of each key.
    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::{render, render_table, table::TableOptions};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Verdict {
        label: &'static str,
        confidence: f64,
    }

    #[derive(Serialize)]
    struct Card {
        title: &'static str,
        available: bool,
    }

    #[derive(Serialize)]
    struct Page {
        user: &'static str,
        features: Vec<Card>,
    }

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn json_render_is_valid_json() {
        let out = render(
            &Verdict {
                label: "FAKE",
                confidence: 81.5,
            },
            OutputFormat::Json,
        )
        .expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["label"], "FAKE");
        assert_eq!(parsed["confidence"], 81.5);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(
            &Verdict {
                label: "TRUE",
                confidence: 90.0,
            },
            OutputFormat::Raw,
        )
        .expect("raw render should work");
        assert!(!out.contains('\n'));
        assert!(out.contains("\"label\":\"TRUE\""));
    }

    #[test]
    fn object_renders_as_key_value_rows() {
        let out = render_table(
            &Verdict {
                label: "TRUE",
                confidence: 90.0,
            },
            PLAIN,
        )
        .expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("key"));
        assert!(lines.iter().any(|line| line.starts_with("label") && line.contains("TRUE")));
    }

    #[test]
    fn nested_object_arrays_render_as_sections() {
        let page = Page {
            user: "ada@example.com",
            features: vec![
                Card {
                    title: "Text Analysis",
                    available: true,
                },
                Card {
                    title: "Real-time News",
                    available: false,
                },
            ],
        };
        let out = render_table(&page, PLAIN).expect("table render should work");

        assert!(out.contains("ada@example.com"));
        assert!(out.contains("features:"));
        let section = out.split("features:").nth(1).expect("section present");
        let header = section.lines().nth(1).expect("section header");
        assert!(header.contains("title") && header.contains("available"));
        assert!(section.contains("Real-time News"));
    }
}
