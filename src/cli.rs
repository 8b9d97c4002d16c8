//! Command-line interface definition using clap.
//!
//! The surface is `chatscrub <input> <output> [<flag> [<arg>]]...`. The two
//! paths are ordinary positionals; everything after them is captured
//! verbatim (hyphens included) and handed to
//! [`pipeline::parse_steps`](crate::pipeline::parse_steps), which owns the
//! flag vocabulary and its ignore-unknown policy.

use clap::Parser;

/// Export a chat transcript to JSON, with optional filtering, redaction
/// and sender obfuscation.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatscrub")]
#[command(version, about, long_about = None)]
#[command(after_help = "PIPELINE FLAGS (applied in the order given):
    -user <id>        keep messages whose sender matches <id> (case-insensitive)
    -key <word>       keep messages whose content contains <word>
    -hidewords <word> replace <word> in content with *redacted*
    -hidenum          replace phone/card numbers with *redacted*
    -obf              replace sender ids with User1, User2, ...
    -report           attach per-sender message counts

EXAMPLES:
    chatscrub chat.txt chat.json
    chatscrub chat.txt chat.json -key pie
    chatscrub chat.txt chat.json -user bob -hidenum -report
    chatscrub chat.txt chat.json -hidewords secret -obf")]
pub struct Args {
    /// Path to the input transcript
    pub input: String,

    /// Path to the output JSON document
    pub output: String,

    /// Pipeline steps, applied in the order given
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub steps: Vec<String>,
}
