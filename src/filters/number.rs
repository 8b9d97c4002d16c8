//! Redact phone and payment-card numbers from message content.

use regex::Regex;

use crate::Conversation;
use crate::filters::{Filter, REDACTED};

/// Digit count below which a run is considered an incidental number.
const MIN_DIGITS: usize = 7;

/// Digit count above which a run no longer looks like a phone or card
/// number.
const MAX_DIGITS: usize = 16;

/// Replaces phone/card-shaped digit runs in message content with
/// [`REDACTED`].
///
/// A candidate run is a sequence of ASCII digits, optionally with a single
/// space or hyphen between neighbouring digits (`4111 1111 1111 1111`,
/// `0118-999-881-999`). A run is redacted when its total digit count is
/// between 7 and 16 inclusive; shorter runs (`room 42`) and longer ones are
/// left untouched. Messages are never removed.
///
/// # Example
///
/// ```
/// use chatscrub::filters::{Filter, NumberFilter};
/// use chatscrub::transcript::parse_transcript;
///
/// let convo = parse_transcript("c\n1 bob call 4111111111111111 now\n")?;
/// let scrubbed = NumberFilter::new().transform(convo);
///
/// assert_eq!(scrubbed.messages[0].content, "call *redacted* now");
/// # Ok::<(), chatscrub::ChatscrubError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NumberFilter {
    runs: Regex,
}

impl NumberFilter {
    /// Creates the filter, compiling its detection pattern once.
    pub fn new() -> Self {
        // Matches a maximal digit run with optional single separators.
        // The pattern itself puts no upper bound on length; the digit-count
        // window is enforced in `scrub` because the regex crate has no
        // look-around to anchor run boundaries.
        let runs = Regex::new(r"[0-9](?:[ \-]?[0-9])*").expect("digit-run pattern is valid");
        Self { runs }
    }

    fn scrub(&self, content: &str) -> String {
        self.runs
            .replace_all(content, |caps: &regex::Captures<'_>| {
                let run = &caps[0];
                let digits = run.chars().filter(char::is_ascii_digit).count();
                if (MIN_DIGITS..=MAX_DIGITS).contains(&digits) {
                    REDACTED.to_string()
                } else {
                    run.to_string()
                }
            })
            .into_owned()
    }
}

impl Default for NumberFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for NumberFilter {
    fn name(&self) -> &'static str {
        "numbers"
    }

    fn transform(&self, conversation: Conversation) -> Conversation {
        let scrubbed = conversation
            .messages
            .iter()
            .map(|m| {
                let content = self.scrub(&m.content);
                if content == m.content {
                    m.clone()
                } else {
                    m.with_content(content)
                }
            })
            .collect();
        conversation.with_messages(scrubbed)
    }
}
