//! File-level import behavior.

use std::io::Write;

use brief_ingest::{IngestError, load_documents};
use brief_model::Priority;
use tempfile::NamedTempFile;

fn write_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn load_documents_from_file() {
    let file = write_temp_csv(
        "File Name,Summary,Key Takeaway,Decision or Action Required,Priority Level,Audience,Dependencies\n\
         Platform Roadmap,Deployment timeline.,Phased rollout works.,Approve budget.,Critical,\"Finance, Executive Board\",Budget approval\n\
         Security Framework,Security overview.,Exceeds standards.,Sign off.,High,\"Security Team, Tech Leaders\",None\n",
    );

    let documents = load_documents(file.path()).unwrap();
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].title, "Platform Roadmap");
    assert_eq!(documents[0].priority, Priority::Critical);
    assert_eq!(documents[1].audience, vec!["Security Team", "Tech Leaders"]);
}

#[test]
fn load_documents_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_documents(&dir.path().join("absent.csv"));
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn load_documents_rejects_missing_dependencies_column() {
    let file = write_temp_csv(
        "File Name,Summary,Key Takeaway,Decision or Action Required,Priority Level,Audience\n\
         Doc,s,k,a,High,Finance\n",
    );

    let result = load_documents(file.path());
    match result {
        Err(IngestError::MissingColumns { missing }) => {
            assert_eq!(missing, vec!["Dependencies"]);
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}
