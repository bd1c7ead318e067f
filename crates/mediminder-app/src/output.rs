//! Front-end output: human text or JSON lines.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::json;

use mediminder_core::{DashboardSummary, MarkOutcome, Message, Notification, ScheduledDose};

use crate::render;

/// How events are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// JSON event types that can be emitted.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonEventType {
    Message,
    Composing,
    Notification,
    Doses,
    Summary,
    DoseMark,
    QuickQuestions,
    Help,
    Error,
}

/// A JSON event to be written as one line.
#[derive(Debug, Clone, Serialize)]
pub struct JsonEvent {
    pub event: JsonEventType,
    pub timestamp: String,
    pub data: serde_json::Value,
}

impl JsonEvent {
    /// Create a new JSON event with the current timestamp.
    pub fn new(event: JsonEventType, data: serde_json::Value) -> Self {
        Self {
            event,
            timestamp: chrono::Utc::now().to_rfc3339(),
            data,
        }
    }
}

/// Writes front-end events in the chosen mode.
pub struct Output<W: Write> {
    mode: OutputMode,
    writer: W,
}

impl Output<io::Stdout> {
    pub fn stdout(mode: OutputMode) -> Self {
        Self::new(mode, io::stdout())
    }
}

impl<W: Write> Output<W> {
    pub fn new(mode: OutputMode, writer: W) -> Self {
        Self { mode, writer }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn message(&mut self, message: &Message) -> io::Result<()> {
        match self.mode {
            OutputMode::Human => self.text(&render::format_message(message)),
            OutputMode::Json => self.json(JsonEventType::Message, json!(message)),
        }
    }

    pub fn composing(&mut self, pending: usize) -> io::Result<()> {
        match self.mode {
            OutputMode::Human => self.text(&format!("{}\n", render::format_composing(pending))),
            OutputMode::Json => self.json(JsonEventType::Composing, json!({ "pending": pending })),
        }
    }

    pub fn notification(&mut self, notification: &Notification) -> io::Result<()> {
        match self.mode {
            OutputMode::Human => {
                self.text(&format!("{}\n", render::format_notification(notification)))
            }
            OutputMode::Json => self.json(
                JsonEventType::Notification,
                json!({
                    "notification": notification,
                    "title": notification.title(),
                    "description": notification.description(),
                }),
            ),
        }
    }

    pub fn doses(&mut self, doses: &[ScheduledDose]) -> io::Result<()> {
        match self.mode {
            OutputMode::Human => self.text(&render::format_checklist(doses)),
            OutputMode::Json => self.json(JsonEventType::Doses, json!(doses)),
        }
    }

    pub fn summary(&mut self, summary: &DashboardSummary) -> io::Result<()> {
        match self.mode {
            OutputMode::Human => self.text(&render::format_summary(summary)),
            OutputMode::Json => self.json(JsonEventType::Summary, json!(summary)),
        }
    }

    /// Report a mark-taken request. `index` is 0-based; humans see 1-based.
    pub fn dose_mark(&mut self, outcome: &MarkOutcome) -> io::Result<()> {
        match self.mode {
            OutputMode::Human => {
                let line = match outcome {
                    // The notification carries the user-facing text.
                    MarkOutcome::Taken { .. } => return Ok(()),
                    MarkOutcome::AlreadyTaken { index } => {
                        format!("Dose {} is already marked taken.\n", index + 1)
                    }
                    MarkOutcome::OutOfRange { index, len } => {
                        format!("No dose {} (today has {}).\n", index + 1, len)
                    }
                };
                self.text(&line)
            }
            OutputMode::Json => {
                let data = match outcome {
                    MarkOutcome::Taken { index, name } => {
                        json!({ "result": "taken", "index": index, "name": name })
                    }
                    MarkOutcome::AlreadyTaken { index } => {
                        json!({ "result": "already_taken", "index": index })
                    }
                    MarkOutcome::OutOfRange { index, len } => {
                        json!({ "result": "out_of_range", "index": index, "len": len })
                    }
                };
                self.json(JsonEventType::DoseMark, data)
            }
        }
    }

    pub fn quick_questions(&mut self, questions: &[&str]) -> io::Result<()> {
        match self.mode {
            OutputMode::Human => self.text(&render::format_quick_questions(questions)),
            OutputMode::Json => self.json(JsonEventType::QuickQuestions, json!(questions)),
        }
    }

    pub fn help(&mut self, text: &str) -> io::Result<()> {
        match self.mode {
            OutputMode::Human => self.text(text),
            OutputMode::Json => self.json(JsonEventType::Help, json!({ "text": text })),
        }
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        match self.mode {
            OutputMode::Human => self.text(&format!("error: {}\n", message)),
            OutputMode::Json => self.json(JsonEventType::Error, json!({ "message": message })),
        }
    }

    fn text(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    fn json(&mut self, event: JsonEventType, data: serde_json::Value) -> io::Result<()> {
        let line = serde_json::to_string(&JsonEvent::new(event, data))?;
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediminder_core::MessageId;

    fn json_lines(out: Output<Vec<u8>>) -> Vec<serde_json::Value> {
        String::from_utf8(out.into_inner())
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_json_message_event() {
        let mut out = Output::new(OutputMode::Json, Vec::new());
        out.message(&Message::user(MessageId::new(2), "diet tips"))
            .unwrap();

        let events = json_lines(out);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["event"], "message");
        assert_eq!(events[0]["data"]["text"], "diet tips");
        assert_eq!(events[0]["data"]["sender"], "user");
    }

    #[test]
    fn test_json_dose_mark_out_of_range() {
        let mut out = Output::new(OutputMode::Json, Vec::new());
        out.dose_mark(&MarkOutcome::OutOfRange { index: 5, len: 3 })
            .unwrap();

        let events = json_lines(out);
        assert_eq!(events[0]["event"], "dose_mark");
        assert_eq!(events[0]["data"]["result"], "out_of_range");
        assert_eq!(events[0]["data"]["len"], 3);
    }

    #[test]
    fn test_human_dose_mark_is_one_based() {
        let mut out = Output::new(OutputMode::Human, Vec::new());
        out.dose_mark(&MarkOutcome::AlreadyTaken { index: 0 }).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, "Dose 1 is already marked taken.\n");
    }

    #[test]
    fn test_human_taken_prints_nothing() {
        let mut out = Output::new(OutputMode::Human, Vec::new());
        out.dose_mark(&MarkOutcome::Taken {
            index: 1,
            name: "Metformin".to_string(),
        })
        .unwrap();
        assert!(out.into_inner().is_empty());
    }
}
