pub mod annotation;
pub mod criteria;
pub mod error;
pub mod priority;
pub mod record;

pub use annotation::Annotation;
pub use criteria::FilterCriteria;
pub use error::{ModelError, Result};
pub use priority::Priority;
pub use record::{Dependencies, DocumentRecord, split_multi_value};
