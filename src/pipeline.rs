//! Pipeline step parsing and application.
//!
//! The pipeline is a strict left-to-right fold: steps are parsed from the
//! raw CLI tokens in the order given, and each step must fully transform
//! the conversation before the next one runs. Filters are pure functions of
//! the conversation, so there is no shared state between steps beyond the
//! threaded [`Conversation`] value.
//!
//! # Example
//!
//! ```
//! use chatscrub::pipeline::{apply_steps, parse_steps};
//! use chatscrub::transcript::parse_transcript;
//!
//! let convo = parse_transcript("c\n1 bob I like pie\n2 mike me too\n")?;
//! let steps = parse_steps(&["-key".into(), "pie".into(), "-obf".into()])?;
//! let out = apply_steps(convo, &steps);
//!
//! assert_eq!(out.len(), 1);
//! assert_eq!(out.messages[0].sender_id, "User1");
//! # Ok::<(), chatscrub::ChatscrubError>(())
//! ```

use crate::error::{ChatscrubError, Result};
use crate::filters::{
    BlacklistFilter, Filter, KeywordFilter, NumberFilter, ObfuscateIdFilter, UserFilter,
};
use crate::report::attach_report;
use crate::Conversation;

/// One requested pipeline operation.
///
/// `User`, `Keyword` and `Blacklist` carry the argument their flag
/// consumed; the remaining steps take none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `-user <id>`: keep messages whose sender matches.
    User(String),
    /// `-key <word>`: keep messages whose content contains the keyword.
    Keyword(String),
    /// `-hidewords <word>`: redact the word from content.
    Blacklist(String),
    /// `-hidenum`: redact phone/card numbers from content.
    HideNumbers,
    /// `-obf`: obfuscate sender ids.
    Obfuscate,
    /// `-report`: attach per-sender message counts.
    Report,
}

impl Step {
    /// Applies this step, producing the next conversation.
    pub fn apply(&self, conversation: Conversation) -> Conversation {
        match self {
            Step::User(sender) => UserFilter::new(sender).transform(conversation),
            Step::Keyword(word) => KeywordFilter::new(word.clone()).transform(conversation),
            Step::Blacklist(word) => BlacklistFilter::new(word.clone()).transform(conversation),
            Step::HideNumbers => NumberFilter::new().transform(conversation),
            Step::Obfuscate => ObfuscateIdFilter::new().transform(conversation),
            Step::Report => attach_report(conversation),
        }
    }

    /// One-line confirmation printed after the step runs, naming the
    /// step's actual argument.
    pub fn confirmation(&self) -> String {
        match self {
            Step::User(sender) => format!("Messages not from '{sender}' filtered out."),
            Step::Keyword(word) => format!("Messages not containing '{word}' filtered out."),
            Step::Blacklist(word) => format!("Blacklisted word '{word}' redacted."),
            Step::HideNumbers => "Card and phone numbers redacted.".to_string(),
            Step::Obfuscate => "Sender ids obfuscated.".to_string(),
            Step::Report => "Activity report added.".to_string(),
        }
    }
}

/// Parses raw CLI tokens into an ordered step list.
///
/// Recognized flags: `-user <id>`, `-key <word>`, `-hidewords <word>`,
/// `-hidenum`, `-obf`, `-report`. Flags apply in the order encountered.
/// Unrecognized tokens are skipped one at a time and never consume the
/// token after them.
///
/// # Errors
///
/// [`ChatscrubError::MissingArgument`] when a flag that requires a value is
/// the last token.
pub fn parse_steps(tokens: &[String]) -> Result<Vec<Step>> {
    let mut steps = Vec::new();
    let mut iter = tokens.iter();

    while let Some(token) = iter.next() {
        let step = match token.as_str() {
            "-user" => Step::User(take_argument(&mut iter, token)?),
            "-key" => Step::Keyword(take_argument(&mut iter, token)?),
            "-hidewords" => Step::Blacklist(take_argument(&mut iter, token)?),
            "-hidenum" => Step::HideNumbers,
            "-obf" => Step::Obfuscate,
            "-report" => Step::Report,
            _ => continue,
        };
        steps.push(step);
    }

    Ok(steps)
}

fn take_argument<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<String> {
    iter.next()
        .cloned()
        .ok_or_else(|| ChatscrubError::missing_argument(flag))
}

/// Applies every step in order, threading the conversation forward.
pub fn apply_steps(conversation: Conversation, steps: &[Step]) -> Conversation {
    steps
        .iter()
        .fold(conversation, |convo, step| step.apply(convo))
}
