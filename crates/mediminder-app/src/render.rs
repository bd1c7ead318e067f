//! Plain-text rendering for the terminal front end.

use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use mediminder_core::{DashboardSummary, Message, Notification, ScheduledDose};

/// Column width used for chat bubbles.
pub const WRAP_WIDTH: usize = 72;

/// Wrap text on spaces to fit `width` display columns.
///
/// Emoji and other wide characters count as two columns. A single word wider
/// than `width` gets a line of its own rather than being split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for line in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in line.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);
            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };

            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }

        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// One chat bubble: icon, local time, wrapped text.
pub fn format_message(message: &Message) -> String {
    let time = message.timestamp.with_timezone(&chrono::Local).format("%H:%M:%S");
    let who = if message.is_user() { "You" } else { "Assistant" };

    let mut out = String::new();
    writeln!(out, "{} {} [{}]", message.icon(), who, time).ok();
    for line in wrap_words(&message.text, WRAP_WIDTH) {
        writeln!(out, "    {}", line).ok();
    }
    out
}

/// Typing indicator shown while a reply is pending.
pub fn format_composing(pending: usize) -> String {
    if pending > 1 {
        format!("🤖 Assistant is typing... ({} replies pending)", pending)
    } else {
        "🤖 Assistant is typing...".to_string()
    }
}

/// Numbered checklist, 1-based to match `/take N`.
pub fn format_checklist(doses: &[ScheduledDose]) -> String {
    if doses.is_empty() {
        return "No medications scheduled today.\n".to_string();
    }

    let mut out = String::new();
    for (i, dose) in doses.iter().enumerate() {
        let mark = if dose.is_taken() { "[x]" } else { "[ ]" };
        writeln!(
            out,
            "{:>2}. {} {} {:<14} ({})",
            i + 1,
            mark,
            dose.time_label(),
            dose.name,
            dose.condition
        )
        .ok();
    }
    out
}

/// Text progress bar for a percentage.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Dashboard cards as text.
pub fn format_summary(summary: &DashboardSummary) -> String {
    let mut out = String::new();
    writeln!(out, "🔥 {} Day Streak!", summary.streak_days).ok();
    writeln!(
        out,
        "Today's Progress: {}/{} {} {:.0}%",
        summary.taken,
        summary.total,
        progress_bar(summary.completion_rate, 20),
        summary.completion_rate
    )
    .ok();
    match &summary.next_reminder {
        Some(next) => writeln!(out, "Next Reminder: {} at {}", next.name, next.time).ok(),
        None => writeln!(out, "Next Reminder: all done for today").ok(),
    };
    out
}

/// Toast-style line for a notification.
pub fn format_notification(notification: &Notification) -> String {
    format!("🔔 {} {}", notification.title(), notification.description())
}

/// The quick-question list, numbered.
pub fn format_quick_questions(questions: &[&str]) -> String {
    let mut out = String::from("Quick Questions:\n");
    for (i, q) in questions.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, q).ok();
    }
    out
}
