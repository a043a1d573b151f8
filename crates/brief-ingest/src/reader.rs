//! CSV reading for the briefing dataset.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use brief_model::{DocumentRecord, Priority};

use crate::error::{IngestError, Result};
use crate::schema::ColumnIndex;

/// Load the briefing dataset from a CSV file.
///
/// Validates the schema before converting any row; on any error the
/// caller's current document set must stay untouched, which holds
/// trivially because nothing is returned until the whole file parses.
pub fn load_documents(path: &Path) -> Result<Vec<DocumentRecord>> {
    let file = std::fs::File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let documents = parse_documents(file)?;
    tracing::info!(
        path = %path.display(),
        documents = documents.len(),
        "loaded briefing dataset"
    );
    Ok(documents)
}

/// Parse a briefing dataset from any reader.
///
/// Same contract as [`load_documents`]; used for stdin import and tests.
pub fn parse_documents<R: Read>(reader: R) -> Result<Vec<DocumentRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| IngestError::Malformed {
            message: e.to_string(),
        })?
        .clone();

    // Strip a UTF-8 BOM from the first header cell, trim the rest.
    let columns: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let header = if idx == 0 {
                header.trim_start_matches('\u{feff}')
            } else {
                header
            };
            header.trim().to_string()
        })
        .collect();

    let index = ColumnIndex::locate(&columns)?;

    let mut documents = Vec::new();
    let mut seen_titles: HashSet<String> = HashSet::new();

    for record in csv_reader.records() {
        let record = record.map_err(|e| IngestError::Malformed {
            message: e.to_string(),
        })?;

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        let title = field(index.title);
        if !seen_titles.insert(title.to_string()) {
            return Err(IngestError::DuplicateTitle {
                title: title.to_string(),
            });
        }

        documents.push(DocumentRecord::new(
            title,
            field(index.summary),
            field(index.key_takeaway),
            field(index.action_required),
            Priority::parse_lenient(field(index.priority)),
            field(index.audience),
            field(index.dependencies),
        ));
    }

    if documents.is_empty() {
        return Err(IngestError::EmptyDataset);
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brief_model::Dependencies;

    const HEADER: &str = "File Name,Summary,Key Takeaway,Decision or Action Required,Priority Level,Audience,Dependencies";

    #[test]
    fn test_parse_single_document() {
        let data = format!(
            "{HEADER}\nSecurity Framework,Security overview.,Exceeds standards.,Sign off.,High,\"Tech Leaders, Executive Board\",None\n"
        );
        let documents = parse_documents(data.as_bytes()).unwrap();
        assert_eq!(documents.len(), 1);
        let doc = &documents[0];
        assert_eq!(doc.title, "Security Framework");
        assert_eq!(doc.priority, Priority::High);
        assert_eq!(doc.audience, vec!["Tech Leaders", "Executive Board"]);
        assert_eq!(doc.dependencies, Dependencies::None);
    }

    #[test]
    fn test_parse_skips_blank_rows() {
        let data = format!("{HEADER}\nDoc A,s,k,a,High,Finance,None\n,,,,,,\nDoc B,s,k,a,Medium,Finance,None\n");
        let documents = parse_documents(data.as_bytes()).unwrap();
        assert_eq!(documents.len(), 2);
    }

    #[test]
    fn test_parse_missing_column_rejected() {
        let data = "File Name,Summary,Key Takeaway,Decision or Action Required,Priority Level,Audience\nDoc,s,k,a,High,Finance\n";
        let result = parse_documents(data.as_bytes());
        match result {
            Err(IngestError::MissingColumns { missing }) => {
                assert_eq!(missing, vec!["Dependencies"]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_duplicate_title_rejected() {
        let data = format!("{HEADER}\nDoc,s,k,a,High,Finance,None\nDoc,s,k,a,Low,Finance,None\n");
        let result = parse_documents(data.as_bytes());
        assert!(matches!(result, Err(IngestError::DuplicateTitle { title }) if title == "Doc"));
    }

    #[test]
    fn test_parse_header_only_is_empty_dataset() {
        let data = format!("{HEADER}\n");
        assert!(matches!(
            parse_documents(data.as_bytes()),
            Err(IngestError::EmptyDataset)
        ));
    }

    #[test]
    fn test_parse_strips_bom() {
        let data = format!("\u{feff}{HEADER}\nDoc,s,k,a,High,Finance,None\n");
        let documents = parse_documents(data.as_bytes()).unwrap();
        assert_eq!(documents[0].title, "Doc");
    }

    #[test]
    fn test_parse_unknown_priority_is_lenient() {
        let data = format!("{HEADER}\nDoc,s,k,a,Urgent,Finance,None\n");
        let documents = parse_documents(data.as_bytes()).unwrap();
        assert_eq!(documents[0].priority, Priority::Unspecified);
    }
}
