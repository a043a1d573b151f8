//! Briefing dataset ingestion.
//!
//! This crate reads the tabular briefing dataset (CSV) into
//! [`DocumentRecord`](brief_model::DocumentRecord) values, validating the
//! schema up front so a bad import never partially replaces a loaded set.
//!
//! # Contract
//!
//! - The full required column set must be present (exact, case- and
//!   spelling-sensitive header match) before any row is converted.
//! - Multi-value fields (audience, dependencies) are normalized here,
//!   once, at the boundary.
//! - Fully empty rows are skipped; duplicate titles reject the import.
//!
//! # Example
//!
//! ```ignore
//! use brief_ingest::load_documents;
//!
//! let documents = load_documents(Path::new("briefings.csv"))?;
//! ```

mod error;
mod reader;
mod schema;

pub use error::{IngestError, Result};
pub use reader::{load_documents, parse_documents};
pub use schema::{ColumnIndex, REQUIRED_COLUMNS};
