//! JSON output boundary.
//!
//! Serializes a [`Conversation`] to the wire format and reads it back:
//!
//! ```json
//! {
//!   "name": "My Conversation",
//!   "messages": [
//!     { "timestamp": 1448470901, "senderId": "bob", "content": "Hello there!" }
//!   ],
//!   "report": { "bob": 1 }
//! }
//! ```
//!
//! Timestamps are integer epoch seconds; `report` only appears when a
//! report step ran. The read-back half exists so exported documents can be
//! loaded and verified without re-parsing a transcript.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use crate::error::{ChatscrubError, Result};
use crate::Conversation;

/// Serializes the conversation to a pretty-printed JSON string.
pub fn to_json(conversation: &Conversation) -> Result<String> {
    Ok(serde_json::to_string_pretty(conversation)?)
}

/// Writes the conversation as JSON to `path`.
///
/// # Errors
///
/// [`ChatscrubError::OutputWrite`] when the file cannot be created or
/// written.
pub fn write_json(conversation: &Conversation, path: &Path) -> Result<()> {
    let json = to_json(conversation)?;
    let mut file = File::create(path).map_err(|e| ChatscrubError::output_write(path, e))?;
    file.write_all(json.as_bytes())
        .map_err(|e| ChatscrubError::output_write(path, e))?;
    Ok(())
}

/// Parses a conversation from exported JSON text.
pub fn from_json(input: &str) -> Result<Conversation> {
    Ok(serde_json::from_str(input)?)
}

/// Reads a conversation back from a JSON file written by [`write_json`].
///
/// # Errors
///
/// [`ChatscrubError::InputNotFound`] when the path does not exist,
/// [`ChatscrubError::Json`] when the document does not match the wire
/// format.
pub fn read_json(path: &Path) -> Result<Conversation> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ChatscrubError::input_not_found(path),
        _ => ChatscrubError::Io(e),
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
