use crate::error::Result;
use crate::types::{EmailSummaryRow, ProcessingResult};
use serde::Serialize;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn write_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    std::fs::write(path, to_json(value)?)?;
    Ok(())
}

pub fn summary_rows(result: &ProcessingResult) -> Vec<EmailSummaryRow> {
    result.emails.iter().map(EmailSummaryRow::from).collect()
}

/// Markdown table of the first `max_rows` rows.
pub fn render_table_rows<T>(rows: &[T], max_rows: usize) -> String
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        return "(no rows)".to_string();
    }
    Table::new(slice).with(Style::markdown()).to_string()
}

pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    eprintln!("{}\n", render_table_rows(rows, max_rows));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_json_omits_month_and_count() {
        let json = to_json(&ProcessingResult::failure("boom")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["message"], "boom");
        assert!(value.get("month").is_none());
        assert!(value.get("total_emails").is_none());
        assert_eq!(value["emails"], serde_json::json!([]));
    }

    #[test]
    fn test_render_table_rows() {
        let rows = vec![EmailSummaryRow {
            consultant: "López, Ana".to_string(),
            language: "es".to_string(),
            projects: 1,
            total: "USD 90.00".to_string(),
        }];
        let table = render_table_rows(&rows, 10);
        assert!(table.contains("| Consultant"));
        assert!(table.contains("USD 90.00"));
        assert_eq!(render_table_rows::<EmailSummaryRow>(&[], 10), "(no rows)");
    }
}
