use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// Two documents in one set share a title. Titles join per-document
    /// user state, so a loaded set must keep them unique.
    #[error("duplicate document title: {title}")]
    DuplicateTitle { title: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
