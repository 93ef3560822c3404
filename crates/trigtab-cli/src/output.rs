//! Terminal output for fetched tables.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::Table;
use serde_json::Value;

use trigtab_core::EventTable;

/// Cell text for terminal and CSV output: strings unquoted, everything else
/// in JSON form.
pub fn cell_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Formats an event table for the terminal.
pub fn format_table(table: &EventTable) -> Table {
    let mut out = Table::new();
    out.load_preset(UTF8_FULL_CONDENSED);
    out.set_header(table.column_names().iter());
    for row in table.rows() {
        out.add_row(row.iter().map(cell_to_string));
    }
    out
}

/// Writes an event table as CSV.
pub fn write_csv<W: std::io::Write>(table: &EventTable, writer: W) -> anyhow::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(table.column_names())?;
    for row in table.rows() {
        csv.write_record(row.iter().map(cell_to_string))?;
    }
    csv.flush()?;
    Ok(())
}

/// Serializes an event table as pretty JSON records.
pub fn to_json(table: &EventTable) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&table.to_records())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> EventTable {
        EventTable::new(
            vec!["id".to_string(), "snr".to_string(), "label".to_string()],
            vec![
                vec![json!(1), json!(7.5), json!("Blip")],
                vec![json!(2), json!(12.0), json!("Low, Frequency")],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_cell_to_string_unquotes_strings() {
        assert_eq!(cell_to_string(&json!("Blip")), "Blip");
        assert_eq!(cell_to_string(&json!(7.5)), "7.5");
        assert_eq!(cell_to_string(&json!(null)), "null");
    }

    #[test]
    fn test_format_table_has_header_and_rows() {
        let rendered = format_table(&table()).to_string();
        assert!(rendered.contains("snr"));
        assert!(rendered.contains("Blip"));
    }

    #[test]
    fn test_write_csv_quotes_embedded_commas() {
        let mut buf = Vec::new();
        write_csv(&table(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("id,snr,label\n"));
        assert!(text.contains("\"Low, Frequency\""));
    }

    #[test]
    fn test_to_json_records() {
        let json = to_json(&table()).unwrap();
        let parsed: Vec<serde_json::Map<String, Value>> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].get("label"), Some(&json!("Blip")));
    }
}
