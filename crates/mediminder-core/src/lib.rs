//! MediMinder Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - Async runtimes or timers
//! - Terminal/UI rendering
//! - Persistence
//!
//! It holds the intent classifier and the dose adherence state machine,
//! plus the message and notification types the app layer passes around.

pub mod adherence;
pub mod classifier;
pub mod dashboard;
pub mod dose;
pub mod error;
pub mod ids;
pub mod message;
pub mod notification;
pub mod status;

// Re-export commonly used types
pub use adherence::{AdherenceTracker, MarkOutcome};
pub use classifier::{classify, Intent, IntentClassifier, Topic, QUICK_QUESTIONS};
pub use dashboard::{DashboardAggregator, DashboardSummary, NextReminder, Streak};
pub use dose::ScheduledDose;
pub use error::CoreError;
pub use ids::{MessageId, MessageIdSequence, SessionId};
pub use message::Message;
pub use notification::Notification;
pub use status::{Category, DoseStatus, Sender};
