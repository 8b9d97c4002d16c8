//! Transcript parsing boundary.
//!
//! Reads the line-oriented transcript format into a [`Conversation`]:
//!
//! ```text
//! <conversation name>
//! <epoch_seconds> <senderId> <content...>
//! <epoch_seconds> <senderId> <content...>
//! ```
//!
//! Line 1 is the conversation name and must exist (it may be blank). Each
//! message line splits into exactly three fields on the first two single
//! spaces; the content field is the verbatim remainder of the line and may
//! itself contain spaces. A header with no message lines is a valid, empty
//! conversation.
//!
//! # Example
//!
//! ```
//! use chatscrub::transcript::parse_transcript;
//!
//! let convo = parse_transcript(
//!     "My Conversation\n\
//!      1448470901 bob Hello there!\n\
//!      1448470905 mike how are you?\n",
//! )?;
//!
//! assert_eq!(convo.name, "My Conversation");
//! assert_eq!(convo.messages[1].sender_id, "mike");
//! assert_eq!(convo.messages[1].content, "how are you?");
//! # Ok::<(), chatscrub::ChatscrubError>(())
//! ```

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{ChatscrubError, Result};
use crate::{Conversation, Message};

/// Reads and parses the transcript at `path`.
///
/// # Errors
///
/// - [`ChatscrubError::InputNotFound`] when the path does not exist
/// - [`ChatscrubError::Io`] for any other read failure
/// - the [`parse_transcript`] errors for malformed content
pub fn read_transcript(path: &Path) -> Result<Conversation> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ChatscrubError::input_not_found(path),
        _ => ChatscrubError::Io(e),
    })?;
    parse_transcript(&content)
}

/// Parses transcript text into a [`Conversation`].
///
/// # Errors
///
/// - [`ChatscrubError::MissingHeader`] when the input has no lines at all
/// - [`ChatscrubError::MalformedLine`] when a message line has fewer than
///   three space-separated fields
/// - [`ChatscrubError::InvalidTimestamp`] when the timestamp field is not a
///   valid non-negative epoch offset
pub fn parse_transcript(input: &str) -> Result<Conversation> {
    let mut lines = input.lines();

    let name = lines.next().ok_or(ChatscrubError::MissingHeader)?;

    let mut messages = Vec::new();

    for (idx, line) in lines.enumerate() {
        // Header is line 1, so message lines start at 2.
        let line_no = idx + 2;
        messages.push(parse_message_line(line, line_no)?);
    }

    Ok(Conversation::new(name, messages))
}

/// Parses one `<epoch_seconds> <senderId> <content...>` line.
fn parse_message_line(line: &str, line_no: usize) -> Result<Message> {
    let mut fields = line.splitn(3, ' ');

    let (Some(raw_ts), Some(sender), Some(content)) =
        (fields.next(), fields.next(), fields.next())
    else {
        return Err(ChatscrubError::malformed_line(line_no, line));
    };

    let epoch: u64 = raw_ts
        .parse()
        .map_err(|_| ChatscrubError::invalid_timestamp(line_no, raw_ts))?;

    Message::from_epoch(epoch, sender, content)
        .ok_or_else(|| ChatscrubError::invalid_timestamp(line_no, raw_ts))
}
