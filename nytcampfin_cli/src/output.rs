use std::io::Write;

use anyhow::Result;
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::Table;

/// Column used when results are bare scalars rather than objects.
const VALUE_COLUMN: &str = "value";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to JSON.
    pub fn parse(name: &str) -> Self {
        match name {
            "table" => OutputFormat::Table,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Json,
        }
    }
}

// -- Row builders --

/// Scalar-valued keys across all result objects, in first-seen order.
/// Nested arrays and objects don't fit a cell and are left out.
fn columns(results: &[Value]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for result in results {
        if let Value::Object(map) = result {
            for (key, value) in map {
                if is_scalar(value) && !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
    }
    if columns.is_empty() && results.iter().any(is_scalar) {
        columns.push(VALUE_COLUMN.to_string());
    }
    columns
}

fn build_rows(results: &[Value], columns: &[String]) -> Vec<Vec<String>> {
    results
        .iter()
        .map(|result| match result {
            Value::Object(map) => columns.iter().map(|c| cell_text(map.get(c))).collect(),
            scalar => columns
                .iter()
                .map(|c| {
                    if c == VALUE_COLUMN {
                        cell_text(Some(scalar))
                    } else {
                        String::new()
                    }
                })
                .collect(),
        })
        .collect()
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(_) => String::new(),
    }
}

fn build_table(results: &[Value]) -> Table {
    let columns = columns(results);
    let mut builder = Builder::default();
    builder.push_record(columns.clone());
    for row in build_rows(results, &columns) {
        builder.push_record(row);
    }
    builder.build()
}

// -- Printers --

pub fn print_results(results: &[Value], format: &OutputFormat) -> Result<()> {
    if results.is_empty() && *format != OutputFormat::Json {
        eprintln!("No results.");
        return Ok(());
    }
    match format {
        OutputFormat::Json => print_json(&Value::Array(results.to_vec())),
        OutputFormat::Table => println!("{}", build_table(results)),
        OutputFormat::Markdown => {
            let mut table = build_table(results);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => write_csv(std::io::stdout(), results)?,
    }
    Ok(())
}

/// Prints a single detail record; JSON output keeps it an object.
pub fn print_one(value: &Value, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(value);
            Ok(())
        }
        _ => print_results(std::slice::from_ref(value), format),
    }
}

pub fn print_json(data: &Value) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

// -- CSV output --

fn write_csv<W: Write>(writer: W, results: &[Value]) -> Result<()> {
    let columns = columns(results);
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&columns)?;
    for row in build_rows(results, &columns) {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn load_filings_fixture() -> Vec<Value> {
        let json_str = include_str!("../../nytcampfin_api/tests/fixtures/filings_today.json");
        let resp: Value = serde_json::from_str(json_str).unwrap();
        resp["results"].as_array().unwrap().clone()
    }

    #[test]
    fn format_names() {
        assert_eq!(OutputFormat::parse("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::parse("csv"), OutputFormat::Csv);
        assert_eq!(OutputFormat::parse("md"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("xml"), OutputFormat::Json);
    }

    #[test]
    fn columns_union_of_scalar_keys() {
        let results = vec![
            json!({"id": "C1", "name": "A", "links": {"self": "/c1"}}),
            json!({"id": "C2", "party": "DEM"}),
        ];
        assert_eq!(columns(&results), vec!["id", "name", "party"]);
    }

    #[test]
    fn columns_for_bare_scalars() {
        let results = vec![json!("F3"), json!("F24")];
        assert_eq!(columns(&results), vec![VALUE_COLUMN]);
        assert_eq!(
            build_rows(&results, &columns(&results)),
            vec![vec!["F3".to_string()], vec!["F24".to_string()]]
        );
    }

    #[test]
    fn rows_fill_missing_cells_with_blanks() {
        let results = vec![
            json!({"id": "C1", "amount": 2500.5, "amended": false}),
            json!({"id": "C2", "amount": null}),
        ];
        let columns = columns(&results);
        let rows = build_rows(&results, &columns);
        let cell = |row: usize, name: &str| {
            let idx = columns.iter().position(|c| c == name).unwrap();
            rows[row][idx].clone()
        };
        assert_eq!(columns.len(), 3);
        assert_eq!(cell(0, "amended"), "false");
        assert_eq!(cell(0, "amount"), "2500.5");
        assert_eq!(cell(0, "id"), "C1");
        assert_eq!(cell(1, "amended"), "");
        assert_eq!(cell(1, "amount"), "");
        assert_eq!(cell(1, "id"), "C2");
    }

    #[test]
    fn table_contains_fixture_values() {
        let table = build_table(&load_filings_fixture()).to_string();
        assert!(table.contains("OBAMA FOR AMERICA"));
        assert!(table.contains("800124"));
        assert!(table.contains("form_type"));
    }

    #[test]
    fn markdown_table_uses_pipes() {
        let mut table = build_table(&load_filings_fixture());
        table.with(Style::markdown());
        let rendered = table.to_string();
        assert!(rendered.starts_with('|'));
        assert!(rendered.contains("ROMNEY FOR PRESIDENT INC."));
    }

    #[test]
    fn csv_has_header_and_one_line_per_result() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &load_filings_fixture()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("committee_name"));
        assert!(lines[1].contains("OBAMA FOR AMERICA"));
    }
}
