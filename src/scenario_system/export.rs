//! JSON and flat CSV renderings of a [`ScenarioReport`].

use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use crate::errors::ReportError;
use crate::scenario_system::report::ScenarioReport;

/// One `field,value` row of the flat export. Nested keys are joined with `.`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatRecord {
    pub field: String,
    pub value: String,
}

pub fn to_json(report: &ScenarioReport) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn write_json<W: Write>(report: &ScenarioReport, writer: W) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

pub fn to_records(report: &ScenarioReport) -> Result<Vec<FlatRecord>, ReportError> {
    let document = serde_json::to_value(report)?;
    let mut records = Vec::new();
    flatten_into(&document, String::new(), &mut records);
    Ok(records)
}

fn child_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn flatten_into(value: &Value, prefix: String, records: &mut Vec<FlatRecord>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_into(nested, child_key(&prefix, key), records);
            }
        }
        Value::Array(items) => {
            for (index, nested) in items.iter().enumerate() {
                flatten_into(nested, child_key(&prefix, &index.to_string()), records);
            }
        }
        Value::Null => records.push(FlatRecord {
            field: prefix,
            value: String::new(),
        }),
        Value::String(text) => records.push(FlatRecord {
            field: prefix,
            value: text.clone(),
        }),
        other => records.push(FlatRecord {
            field: prefix,
            value: other.to_string(),
        }),
    }
}

pub fn write_csv<W: Write>(report: &ScenarioReport, writer: W) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in to_records(report)? {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}
