//! Assistant stub over the briefing document set.
//!
//! This is deliberately not a dialogue system: replies come from
//! case-insensitive substring matching against document titles and
//! summaries. The simulated latency of an external assistant call is
//! modeled as an explicit async task ([`Assistant::spawn`]) instead of an
//! implicit timer, so delivery order is a visible contract: queries are
//! answered one at a time, delay-triggered in submission order, with no
//! cancellation or coalescing.

mod message;
mod responder;
mod task;

pub use message::{ChatMessage, Role};
pub use responder::{FALLBACK_REPLY, GREETING, respond};
pub use task::{Assistant, AssistantHandle, DEFAULT_REPLY_DELAY};
