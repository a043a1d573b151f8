//! Library surface of the briefdesk CLI.
//!
//! Only the logging setup is exposed; everything else lives in the
//! binary.

pub mod logging;
