//! Message-level conversation transforms.
//!
//! Every filter exposes the same capability through the [`Filter`] trait:
//! take a [`Conversation`], return a new one. Filters are pure transforms —
//! stateless after construction apart from their parameters — so applying
//! them is a plain left-to-right fold (see [`crate::pipeline`]).
//!
//! | Filter | Effect on messages |
//! |--------|--------------------|
//! | [`UserFilter`] | keeps messages whose sender matches (case-insensitive substring) |
//! | [`KeywordFilter`] | keeps messages whose content contains the keyword (case-sensitive) |
//! | [`BlacklistFilter`] | rewrites content, replacing a word with [`REDACTED`] |
//! | [`NumberFilter`] | rewrites content, replacing phone/card-shaped digit runs with [`REDACTED`] |
//! | [`ObfuscateIdFilter`] | rewrites sender ids to `User1`, `User2`, ... |
//!
//! The first two may shrink the message sequence; the other three never
//! change its length or order.

mod blacklist;
mod keyword;
mod number;
mod obfuscate;
mod user;

pub use blacklist::BlacklistFilter;
pub use keyword::KeywordFilter;
pub use number::NumberFilter;
pub use obfuscate::ObfuscateIdFilter;
pub use user::UserFilter;

use crate::Conversation;

/// Placeholder substituted for redacted content.
///
/// The marker is fixed regardless of what was replaced, so output length
/// leaks nothing about the original text.
pub const REDACTED: &str = "*redacted*";

/// A pure transform from one conversation to another.
///
/// Implementations must preserve the conversation name and the relative
/// order of whatever messages they keep, and must never leave a
/// conversation partially transformed.
pub trait Filter {
    /// Short human-readable name, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Applies this filter, producing the derived conversation.
    fn transform(&self, conversation: Conversation) -> Conversation;
}
