//! Replace sender ids with synthetic opaque identifiers.

use std::collections::{HashMap, HashSet};

use crate::Conversation;
use crate::filters::Filter;

/// Rewrites every sender id to a synthetic `User1`, `User2`, ... id.
///
/// Synthetic ids are assigned in order of each sender's first appearance.
/// Within one `transform` call the mapping is consistent (the same original
/// id always yields the same synthetic id) and injective (distinct
/// originals never collide). Candidates that already occur as real sender
/// ids in the input are skipped, so no output id ever equals an input id.
///
/// The mapping lives and dies inside a single `transform` call; it is never
/// persisted or shared, so separate invocations are independent.
///
/// # Example
///
/// ```
/// use chatscrub::filters::{Filter, ObfuscateIdFilter};
/// use chatscrub::transcript::parse_transcript;
///
/// let convo = parse_transcript("c\n1 bob hi\n2 angus yo\n3 bob again\n")?;
/// let obfuscated = ObfuscateIdFilter::new().transform(convo);
///
/// let ids: Vec<&str> = obfuscated.messages.iter().map(|m| m.sender_id.as_str()).collect();
/// assert_eq!(ids, vec!["User1", "User2", "User1"]);
/// # Ok::<(), chatscrub::ChatscrubError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObfuscateIdFilter;

impl ObfuscateIdFilter {
    /// Creates the filter.
    pub fn new() -> Self {
        Self
    }
}

impl Filter for ObfuscateIdFilter {
    fn name(&self) -> &'static str {
        "obfuscate"
    }

    fn transform(&self, conversation: Conversation) -> Conversation {
        let originals: HashSet<String> = conversation
            .messages
            .iter()
            .map(|m| m.sender_id.clone())
            .collect();

        let mut mapping: HashMap<String, String> = HashMap::new();
        let mut next = 1u64;

        let rewritten = conversation
            .messages
            .iter()
            .map(|m| {
                let synthetic = mapping.entry(m.sender_id.clone()).or_insert_with(|| {
                    loop {
                        let candidate = format!("User{next}");
                        next += 1;
                        if !originals.contains(&candidate) {
                            break candidate;
                        }
                    }
                });
                m.with_sender_id(synthetic.clone())
            })
            .collect();

        conversation.with_messages(rewritten)
    }
}
