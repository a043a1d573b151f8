//! Briefing Desk session state.
//!
//! The reactive core of the dashboard, kept free of any rendering
//! concern:
//!
//! - [`Library`]: the loaded document set and its derived audience index
//! - [`apply_filters`]: the pure filter engine
//! - [`Workbench`]: write-through bookmark/progress/annotation manager
//! - [`Session`]: explicit application state with reducer-style
//!   [`Action`] transitions
//!
//! Every mutation of filter criteria, bookmarks, or progress is followed
//! by re-running the filter engine against current inputs; there is no
//! cached view to go stale.

mod filter;
mod library;
mod session;
mod workbench;

pub use filter::apply_filters;
pub use library::Library;
pub use session::{Action, Phase, Session, SessionError};
pub use workbench::{OPEN_PROGRESS_FLOOR, Workbench};
