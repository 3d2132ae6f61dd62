//! CSV export of ranking results.
//!
//! Column ordering is stable and part of the output contract; downstream
//! spreadsheets key off the header names.

use rankx_core::{DuplicateRecord, ScoredCandidate};

/// Column order of the ranked-candidates table
pub const RANKED_COLUMNS: [&str; 10] = [
    "Rank",
    "Candidate ID",
    "Name",
    "Email",
    "Phone",
    "Similarity Score",
    "Status",
    "Status Class",
    "AI Summary",
    "Source",
];

/// Column order of the duplicate report
pub const DUPLICATE_COLUMNS: [&str; 5] = ["Type", "Candidate ID", "Name", "Email", "Reason"];

/// Render the ranked table as CSV, header included.
///
/// Similarity scores are written with four decimal places.
#[must_use]
pub fn ranked_to_csv(rows: &[ScoredCandidate]) -> String {
    let mut out = String::new();
    write_row(&mut out, &RANKED_COLUMNS);

    for row in rows {
        write_row(
            &mut out,
            &[
                &row.rank.to_string(),
                &row.id,
                &row.name,
                &row.email,
                &row.phone,
                &format!("{:.4}", row.similarity),
                row.status.label(),
                row.status.tier_class(),
                &row.summary,
                &row.source.to_string(),
            ],
        );
    }
    out
}

/// Render the duplicate report as CSV, header included.
#[must_use]
pub fn duplicates_to_csv(records: &[DuplicateRecord]) -> String {
    let mut out = String::new();
    write_row(&mut out, &DUPLICATE_COLUMNS);

    for record in records {
        write_row(
            &mut out,
            &[
                record.kind.label(),
                &record.candidate_id,
                &record.name,
                &record.email,
                &record.reason,
            ],
        );
    }
    out
}

fn write_row(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_field(field));
    }
    out.push('\n');
}

/// RFC 4180 quoting: wrap fields containing the delimiter, quotes, or
/// line breaks, doubling any embedded quotes.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankx_core::{DuplicateKind, MatchStatus, Source};

    fn row(rank: usize, id: &str, name: &str, score: f32) -> ScoredCandidate {
        ScoredCandidate {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", id.to_lowercase()),
            phone: "555-0100".to_string(),
            text: "resume text".to_string(),
            source: Source::File,
            similarity: score,
            status: MatchStatus::Good,
            rank,
            summary: String::new(),
        }
    }

    #[test]
    fn test_header_order_is_stable() {
        let csv = ranked_to_csv(&[]);
        assert_eq!(
            csv,
            "Rank,Candidate ID,Name,Email,Phone,Similarity Score,Status,Status Class,AI Summary,Source\n"
        );
    }

    #[test]
    fn test_row_formatting() {
        let csv = ranked_to_csv(&[row(1, "File_1", "Jane Doe", 0.73256)]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "1,File_1,Jane Doe,file_1@example.com,555-0100,0.7326,Good,good,,file"
        );
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut r = row(1, "File_1", "Doe, Jane", 0.5);
        r.summary = "Strong \"systems\" background".to_string();
        let csv = ranked_to_csv(&[r]);
        assert!(csv.contains("\"Doe, Jane\""));
        assert!(csv.contains("\"Strong \"\"systems\"\" background\""));
    }

    #[test]
    fn test_duplicate_report_csv() {
        let records = vec![DuplicateRecord {
            kind: DuplicateKind::EmailDuplicate,
            candidate_id: "File_2".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            reason: "Same email as candidate File_1".to_string(),
        }];
        let csv = duplicates_to_csv(&records);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Type,Candidate ID,Name,Email,Reason");
        assert_eq!(
            lines[1],
            "email_duplicate,File_2,Jane Doe,jane@example.com,Same email as candidate File_1"
        );
    }
}
