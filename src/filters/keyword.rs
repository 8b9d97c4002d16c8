//! Filter messages by content keyword.

use crate::Conversation;
use crate::filters::Filter;

/// Keeps messages whose content contains the configured keyword.
///
/// Matching is plain case-sensitive substring containment, not whole-word:
/// `-key pie` keeps a message containing `pies`, and does not keep one
/// containing only `Pie`.
///
/// # Example
///
/// ```
/// use chatscrub::filters::{Filter, KeywordFilter};
/// use chatscrub::transcript::parse_transcript;
///
/// let convo = parse_transcript("c\n1 bob do you like pie?\n2 mike no idea\n")?;
/// let filtered = KeywordFilter::new("pie").transform(convo);
///
/// assert_eq!(filtered.len(), 1);
/// # Ok::<(), chatscrub::ChatscrubError>(())
/// ```
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    keyword: String,
}

impl KeywordFilter {
    /// Creates a filter for the given keyword.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }

    /// Returns the keyword this filter matches on.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

impl Filter for KeywordFilter {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn transform(&self, conversation: Conversation) -> Conversation {
        let kept = conversation
            .messages
            .iter()
            .filter(|m| m.content.contains(&self.keyword))
            .cloned()
            .collect();
        conversation.with_messages(kept)
    }
}
