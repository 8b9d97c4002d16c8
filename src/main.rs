//! # chatscrub CLI
//!
//! Command-line interface for the chatscrub library.

use std::path::Path;
use std::process;

use clap::Parser as ClapParser;

use chatscrub::cli::Args;
use chatscrub::export::write_json;
use chatscrub::pipeline::parse_steps;
use chatscrub::transcript::read_transcript;
use chatscrub::ChatscrubError;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatscrubError> {
    let args = <Args as ClapParser>::parse();

    println!("🧹 chatscrub v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", args.output);
    println!();

    // Parse the step list up front so a malformed flag fails before any I/O.
    let steps = parse_steps(&args.steps)?;

    let mut conversation = read_transcript(Path::new(&args.input))?;
    let original_count = conversation.len();
    println!("⏳ Read {} messages", original_count);

    for step in &steps {
        conversation = step.apply(conversation);
        println!("   {}", step.confirmation());
    }

    write_json(&conversation, Path::new(&args.output))?;

    println!();
    println!(
        "✅ Conversation exported from '{}' to '{}'",
        args.input, args.output
    );
    println!();
    println!("📊 Summary:");
    println!("   Original:  {} messages", original_count);
    println!("   Exported:  {} messages", conversation.len());
    if conversation.report.is_some() {
        println!("   Report:    attached");
    }

    Ok(())
}
