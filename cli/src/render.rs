//! Plain-text rendering of API results for stdout.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use wire::{Channel, Note, ProgressRecord, SessionUser, VideoCatalog};

pub fn catalog(catalog: &VideoCatalog) -> String {
    let mut out = String::new();
    for channel in &catalog.channels {
        out.push_str(&channel_block(channel));
    }
    out
}

fn channel_block(channel: &Channel) -> String {
    let mut out = format!("{} <{}>\n", channel.name, channel.url);
    if !channel.topics.is_empty() {
        let _ = writeln!(out, "  Topics: {}", channel.topics_label());
    }
    for video in &channel.videos {
        let _ = writeln!(out, "  - {} ({})", video.title, video.embed_url());
    }
    out
}

pub fn notes(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes yet.\n".to_owned();
    }
    let mut out = String::new();
    for note in notes {
        let _ = writeln!(out, "[{}] {}", note.id, note.title);
        for line in note.content.lines() {
            let _ = writeln!(out, "    {line}");
        }
    }
    out
}

pub fn progress(record: &ProgressRecord) -> String {
    let rank = record.rank.as_deref().unwrap_or("—");
    format!("Completed: {}\nRank: {rank}\n", record.completed)
}

/// Session payloads are shown as returned, pretty-printed.
pub fn session(user: &SessionUser) -> Result<String, serde_json::Error> {
    let mut rendered = serde_json::to_string_pretty(user.raw())?;
    rendered.push('\n');
    Ok(rendered)
}
