use colored::*;

use crate::models::NotificationMessage;

/// Print a message for `--dry-run`: the JSON payload, then a readable view.
pub fn print_preview(message: &NotificationMessage, webhook_url: &str) {
    println!("{}", format!("Dry run: not posting to {}", webhook_url).yellow());
    match serde_json::to_string_pretty(message) {
        Ok(json) => println!("{}", json),
        Err(e) => println!("{}", format!("(payload could not be serialized: {})", e).red()),
    }

    println!("{}", "─".repeat(60).dimmed());
    println!("{}", message.text.bold());
    for attachment in &message.attachments {
        println!("  {} {}", "▌".yellow(), attachment.title.bold());
        println!("    {}", attachment.text.dimmed());
    }
    println!("{}", "─".repeat(60).dimmed());
}
