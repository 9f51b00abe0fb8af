//! Plain-text and JSON views of a chain.
//!
//! Renderers only read records; they never compute digests.

use std::fmt::Write;

use medchain_core::{ChainIntegrity, Record, RecordStatus};
use serde::Serialize;

/// Output format for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonView<'a> {
    records: Vec<JsonRecord<'a>>,
    intact: bool,
    first_broken: Option<usize>,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    #[serde(flatten)]
    record: &'a Record,
    status: RecordStatus,
}

/// Render records, their statuses and the overall verdict.
pub fn render(
    view: &[(Record, RecordStatus)],
    integrity: &ChainIntegrity,
    format: Format,
) -> serde_json::Result<String> {
    match format {
        Format::Text => Ok(render_text(view, integrity)),
        Format::Json => render_json(view, integrity),
    }
}

/// One block per record, followed by the verdict line.
pub fn render_text(view: &[(Record, RecordStatus)], integrity: &ChainIntegrity) -> String {
    if view.is_empty() {
        return "No records yet.\n".to_string();
    }

    let mut out = String::new();
    for (record, status) in view {
        let marker = match status {
            RecordStatus::Intact => "ok",
            RecordStatus::Broken => "BROKEN",
        };
        // Writing into a String cannot fail.
        let _ = writeln!(out, "Record #{} [{}]", record.index(), marker);
        let _ = writeln!(out, "  timestamp:     {}", record.timestamp());
        let _ = writeln!(out, "  patient id:    {}", record.patient_id());
        let _ = writeln!(out, "  record:        {}", record.record_data());
        let _ = writeln!(out, "  previous hash: {}", record.previous_hash());
        let _ = writeln!(out, "  hash:          {}", record.hash());
    }

    match integrity.first_broken() {
        None => out.push_str("Chain intact.\n"),
        Some(k) => {
            let _ = writeln!(out, "Chain broken from record #{}.", k);
        }
    }
    out
}

/// Pretty-printed JSON document with every record and the verdict.
pub fn render_json(
    view: &[(Record, RecordStatus)],
    integrity: &ChainIntegrity,
) -> serde_json::Result<String> {
    let doc = JsonView {
        records: view
            .iter()
            .map(|(record, status)| JsonRecord {
                record,
                status: *status,
            })
            .collect(),
        intact: integrity.is_intact(),
        first_broken: integrity.first_broken(),
    };
    serde_json::to_string_pretty(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use medchain_core::Chain;

    fn tampered_view() -> (Vec<(Record, RecordStatus)>, ChainIntegrity) {
        let mut chain = Chain::new();
        chain.append_at("P1", "blood pressure 120/80", 1700000000000);
        chain.append_at("P2", "glucose 90", 1700000001000);
        chain.tamper_at(0, "blood pressure 999/999", 1700000002000).unwrap();

        let view = chain
            .records()
            .iter()
            .cloned()
            .zip(chain.record_statuses())
            .collect();
        (view, chain.verify())
    }

    #[test]
    fn test_text_empty() {
        assert_eq!(render_text(&[], &ChainIntegrity::Intact), "No records yet.\n");
    }

    #[test]
    fn test_text_marks_broken_records() {
        let (view, integrity) = tampered_view();
        let text = render_text(&view, &integrity);

        assert!(text.contains("Record #0 [ok]"));
        assert!(text.contains("Record #1 [BROKEN]"));
        assert!(text.contains("record:        blood pressure 999/999"));
        assert!(text.ends_with("Chain broken from record #1.\n"));
    }

    #[test]
    fn test_json_document() {
        let (view, integrity) = tampered_view();
        let json = render(&view, &integrity, Format::Json).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(doc["intact"], false);
        assert_eq!(doc["firstBroken"], 1);
        assert_eq!(doc["records"][0]["patientId"], "P1");
        assert_eq!(doc["records"][0]["status"], "intact");
        assert_eq!(doc["records"][1]["status"], "broken");
        assert_eq!(
            doc["records"][1]["previousHash"],
            "45ad55c7b24e4ab9f943efe091313b577271b44e60139344fb956c9a923c9919"
        );
    }
}
