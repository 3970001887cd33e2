use crate::aggregate::aggregate;
use crate::config::EmailConfig;
use crate::error::{InvoiceError, Result};
use crate::loader::{normalize, Normalized, Table, ELIGIBLE_STATUS, STATUS_COLUMN};
use crate::locale::month_name;
use crate::render::render_email;
use crate::types::ProcessingResult;

/// Run the whole batch: normalize, aggregate, render one email per
/// consultant. Faults never escape; they come back as a failed result.
pub fn process_table(table: &Table, config: &EmailConfig) -> ProcessingResult {
    tracing::debug!("Columns: {:?}", table.headers());
    match run(table, config) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Processing failed: {}", e);
            ProcessingResult::failure(failure_message(&e))
        }
    }
}

/// Parse CSV text and process it. Malformed CSV becomes a failed result.
pub fn process_csv_str(content: &str, config: &EmailConfig) -> ProcessingResult {
    tracing::debug!("CSV content length: {}", content.len());
    match Table::from_csv_str(content) {
        Ok(table) => process_table(&table, config),
        Err(e) => {
            tracing::error!("Could not parse CSV: {}", e);
            ProcessingResult::failure(failure_message(&e))
        }
    }
}

fn failure_message(e: &InvoiceError) -> String {
    match e {
        InvoiceError::SchemaError { .. } => e.to_string(),
        _ => format!("Error procesando CSV: {}", e),
    }
}

fn run(table: &Table, config: &EmailConfig) -> Result<ProcessingResult> {
    let (month, records) = match normalize(table)? {
        Normalized::Eligible { month, records, .. } => (month, records),
        Normalized::NoEligibleRecords { statuses } => {
            tracing::warn!("No {} records among {} rows", ELIGIBLE_STATUS, table.len());
            return Ok(ProcessingResult::failure(format!(
                "No se encontraron consultores {}. {} values: {}",
                ELIGIBLE_STATUS,
                STATUS_COLUMN,
                serde_json::to_string(&statuses)?
            )));
        }
    };
    let month = month_name(month);

    let emails = aggregate(&records)
        .iter()
        .map(|(consultant, projects)| {
            tracing::debug!(
                "Rendering email for {} ({} projects)",
                consultant,
                projects.len()
            );
            render_email(consultant, projects, month, config)
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::info!("Generated {} emails for {}", emails.len(), month);
    Ok(ProcessingResult {
        success: true,
        message: format!("Se generaron {} emails para {}", emails.len(), month),
        month: Some(month.to_string()),
        total_emails: Some(emails.len()),
        emails,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_csv_is_a_failed_result() {
        // Invalid UTF-8 in a data row.
        let table = Table::from_reader(&b"Employee Status\n\xff\xfe\n"[..]);
        let result = match table {
            Ok(t) => process_table(&t, &EmailConfig::default()),
            Err(e) => ProcessingResult::failure(failure_message(&e)),
        };
        assert!(!result.success);
        assert!(result.message.starts_with("Error procesando CSV"));
        assert!(result.emails.is_empty());
    }

    #[test]
    fn test_schema_message_is_not_wrapped() {
        let result = process_csv_str("Consultant\nA\n", &EmailConfig::default());
        assert!(!result.success);
        assert!(result
            .message
            .starts_with("Columna 'Employee Status' no encontrada"));
    }
}
