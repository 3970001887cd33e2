use crate::error::{InvoiceError, Result};
use crate::locale::FALLBACK_MONTH;
use crate::types::{CleanRecord, RawRow};
use crate::util::{non_empty, parse_date_safe, parse_f64_safe};
use chrono::Datelike;
use csv::{ReaderBuilder, StringRecord};
use indexmap::IndexMap;
use std::io;

/// Column that must be present for a batch to be processed at all.
pub const STATUS_COLUMN: &str = "Employee Status";

/// Employee status of consultants that invoice through this workflow.
pub const ELIGIBLE_STATUS: &str = "AFNM";

const ACTIVITY_SEPARATOR: &str = " : ";
const ACTIVITY_PLACEHOLDER: &str = "Activity";

/// Count of each employee status value, most frequent first.
pub type StatusDistribution = IndexMap<String, usize>;

/// An in-memory timesheet export: a header row plus string cells.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            headers: StringRecord::from(headers),
            records: rows.into_iter().map(StringRecord::from).collect(),
        }
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = rdr.headers()?.clone();
        let records = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { headers, records })
    }

    pub fn from_csv_str(content: &str) -> Result<Self> {
        Self::from_reader(content.as_bytes())
    }

    pub fn headers(&self) -> Vec<String> {
        self.headers.iter().map(str::to_string).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows keyed by header name. Columns absent from the header, and cells
    /// missing from short rows, come through as `None`.
    pub fn raw_rows(&self) -> impl Iterator<Item = Result<RawRow>> + '_ {
        let width = self.headers.len();
        self.records.iter().map(move |record| {
            if record.len() >= width {
                return record
                    .deserialize::<RawRow>(Some(&self.headers))
                    .map_err(InvoiceError::from);
            }
            let mut padded = record.clone();
            while padded.len() < width {
                padded.push_field("");
            }
            padded
                .deserialize::<RawRow>(Some(&self.headers))
                .map_err(InvoiceError::from)
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub total_rows: usize,
    pub eligible_rows: usize,
    pub unparsed_dates: usize,
    pub numeric_fallbacks: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    Eligible {
        month: u32,
        records: Vec<CleanRecord>,
        report: LoadReport,
    },
    /// Nothing passed the eligibility filter. Not a fault.
    NoEligibleRecords { statuses: StatusDistribution },
}

/// Validate the table, resolve the reporting month and coerce every
/// eligible row into a [`CleanRecord`].
pub fn normalize(table: &Table) -> Result<Normalized> {
    if !table.has_column(STATUS_COLUMN) {
        return Err(InvoiceError::SchemaError {
            column: STATUS_COLUMN.to_string(),
            available: table.headers(),
        });
    }

    let rows = table.raw_rows().collect::<Result<Vec<_>>>()?;
    let statuses = status_distribution(&rows);
    tracing::debug!("Employee Status values: {:?}", statuses);

    let mut report = LoadReport {
        total_rows: rows.len(),
        ..LoadReport::default()
    };
    let month = reporting_month(&rows, &mut report);

    let mut records = Vec::new();
    for row in rows
        .iter()
        .filter(|r| r.employee_status.as_deref() == Some(ELIGIBLE_STATUS))
    {
        let (record, fallbacks) = clean_row(row);
        report.numeric_fallbacks += fallbacks;
        records.push(record);
    }
    report.eligible_rows = records.len();
    tracing::info!("{} {} records found", report.eligible_rows, ELIGIBLE_STATUS);

    if records.is_empty() {
        return Ok(Normalized::NoEligibleRecords { statuses });
    }
    if report.unparsed_dates > 0 || report.numeric_fallbacks > 0 {
        tracing::debug!(
            "Fallbacks applied: {} unparsed dates, {} numeric cells",
            report.unparsed_dates,
            report.numeric_fallbacks
        );
    }

    Ok(Normalized::Eligible {
        month,
        records,
        report,
    })
}

/// Most frequent month among parseable dates; smallest month wins a tie.
fn reporting_month(rows: &[RawRow], report: &mut LoadReport) -> u32 {
    let mut counts = [0usize; 13];
    for row in rows {
        match parse_date_safe(row.date.as_deref()) {
            Some(d) => counts[d.month() as usize] += 1,
            None => report.unparsed_dates += 1,
        }
    }
    let mut best: Option<(u32, usize)> = None;
    for month in 1..=12u32 {
        let c = counts[month as usize];
        if c > 0 && best.map_or(true, |(_, bc)| c > bc) {
            best = Some((month, c));
        }
    }
    best.map(|(m, _)| m).unwrap_or(FALLBACK_MONTH)
}

fn status_distribution(rows: &[RawRow]) -> StatusDistribution {
    let mut statuses = StatusDistribution::new();
    for status in rows.iter().filter_map(|r| r.employee_status.as_deref()) {
        *statuses.entry(status.to_string()).or_insert(0) += 1;
    }
    statuses.sort_by(|_, a, _, b| b.cmp(a));
    statuses
}

/// Last segment of a composite label like `"Task : Coding"`.
pub fn activity_label(raw: Option<&str>) -> String {
    match non_empty(raw) {
        Some(label) => label
            .rsplit(ACTIVITY_SEPARATOR)
            .next()
            .unwrap_or(label)
            .to_string(),
        None => ACTIVITY_PLACEHOLDER.to_string(),
    }
}

fn trimmed(s: Option<&str>) -> String {
    s.map(str::trim).unwrap_or_default().to_string()
}

fn clean_row(row: &RawRow) -> (CleanRecord, usize) {
    let mut fallbacks = 0usize;
    let mut number = |cell: Option<&str>| match parse_f64_safe(cell) {
        Some(v) => v,
        None => {
            if non_empty(cell).is_some() {
                fallbacks += 1;
            }
            0.0
        }
    };
    let rate = number(row.rate.as_deref());
    let hours = number(row.hours.as_deref());
    let cost = number(row.cost.as_deref());

    let record = CleanRecord {
        consultant: trimmed(row.consultant.as_deref()),
        project_code: trimmed(row.project_code.as_deref()),
        internal_id: trimmed(row.internal_id.as_deref()),
        activity: activity_label(row.activity.as_deref()),
        rate,
        hours,
        cost,
        currency: trimmed(row.currency.as_deref()),
    };
    (record, fallbacks)
}
