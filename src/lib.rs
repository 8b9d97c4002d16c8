//! # chatscrub
//!
//! Read a line-oriented chat transcript, run a caller-ordered chain of
//! message-level transformations, and write the conversation as a JSON
//! document.
//!
//! ## Overview
//!
//! The transcript format is a header line holding the conversation name,
//! followed by `<epoch_seconds> <senderId> <content...>` lines. The
//! pipeline offers:
//!
//! - keeping only messages from a sender ([`filters::UserFilter`])
//! - keeping only messages containing a keyword ([`filters::KeywordFilter`])
//! - redacting a blacklisted word ([`filters::BlacklistFilter`])
//! - redacting phone/card numbers ([`filters::NumberFilter`])
//! - obfuscating sender ids ([`filters::ObfuscateIdFilter`])
//! - attaching a per-sender activity report ([`report::ActivityReport`])
//!
//! ## Quick Start
//!
//! ```rust
//! use chatscrub::export::to_json;
//! use chatscrub::pipeline::{apply_steps, parse_steps};
//! use chatscrub::transcript::parse_transcript;
//!
//! fn main() -> chatscrub::Result<()> {
//!     let convo = parse_transcript(
//!         "My Conversation\n\
//!          1448470901 bob Hello there!\n\
//!          1448470906 bob I'm good thanks, do you like pie?\n",
//!     )?;
//!
//!     let steps = parse_steps(&["-key".into(), "pie".into()])?;
//!     let filtered = apply_steps(convo, &steps);
//!
//!     let json = to_json(&filtered)?;
//!     assert!(json.contains("pie"));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`message`] — [`Message`] value type
//! - [`conversation`] — [`Conversation`] container
//! - [`transcript`] — parsing boundary (text → [`Conversation`])
//! - [`filters`] — [`Filter`](filters::Filter) trait and the concrete filters
//! - [`report`] — [`ActivityReport`](report::ActivityReport) aggregation
//! - [`pipeline`] — [`Step`](pipeline::Step) parsing and application
//! - [`export`] — JSON output boundary (and read-back for verification)
//! - [`error`] — unified error type ([`ChatscrubError`], [`Result`])
//! - [`cli`] — clap argument surface (feature `cli`)

#[cfg(feature = "cli")]
pub mod cli;
pub mod conversation;
pub mod error;
pub mod export;
pub mod filters;
pub mod message;
pub mod pipeline;
pub mod report;
pub mod transcript;

// Re-export the main types at the crate root for convenience
pub use conversation::Conversation;
pub use error::{ChatscrubError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatscrub::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ChatscrubError, Result};
    pub use crate::export::{from_json, read_json, to_json, write_json};
    pub use crate::filters::{
        BlacklistFilter, Filter, KeywordFilter, NumberFilter, ObfuscateIdFilter, UserFilter,
        REDACTED,
    };
    pub use crate::pipeline::{apply_steps, parse_steps, Step};
    pub use crate::report::{attach_report, ActivityReport};
    pub use crate::transcript::{parse_transcript, read_transcript};
    pub use crate::{Conversation, Message};
}
