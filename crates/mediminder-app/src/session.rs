//! Chat session controller.
//!
//! `submit` appends the user message right away and queues a reply that comes
//! due after the configured latency. The caller's event loop drives
//! [`SessionController::next_reply`], which waits for the oldest queued reply,
//! classifies its input and appends the assistant message. Replies resolve in
//! submission order, so every user message precedes its own reply and replies
//! never overtake each other.

use std::collections::VecDeque;
use std::time::Duration;

use tokio::time::{self, Instant};
use tracing::{debug, info};

use mediminder_core::{
    IntentClassifier, Message, MessageId, MessageIdSequence, Notification, SessionId,
};

use crate::{Config, Notifier};

/// A reply waiting for its timer.
#[derive(Debug)]
struct PendingReply {
    input: String,
    due: Instant,
}

/// Owns one conversation's message log.
#[derive(Debug)]
pub struct SessionController {
    id: SessionId,
    classifier: IntentClassifier,
    messages: Vec<Message>,
    ids: MessageIdSequence,
    pending: VecDeque<PendingReply>,
    reply_latency: Duration,
    notifier: Notifier,
}

impl SessionController {
    pub fn new(config: &Config, notifier: Notifier) -> Self {
        let mut session = Self {
            id: SessionId::generate(),
            classifier: IntentClassifier::new(),
            messages: Vec::new(),
            ids: MessageIdSequence::new(),
            pending: VecDeque::new(),
            reply_latency: config.reply_latency,
            notifier,
        };
        if config.greeting {
            let id = session.ids.next_id();
            session.messages.push(Message::greeting(id));
            debug!(session_id = %session.id, "Session opened with greeting");
        }
        session
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Append a user message and schedule its reply.
    ///
    /// Blank input is ignored and returns `None`.
    pub fn submit(&mut self, text: &str) -> Option<MessageId> {
        if text.trim().is_empty() {
            debug!(session_id = %self.id, "Ignoring blank submission");
            return None;
        }

        let id = self.ids.next_id();
        self.messages.push(Message::user(id, text));
        self.pending.push_back(PendingReply {
            input: text.to_string(),
            due: Instant::now() + self.reply_latency,
        });

        info!(
            session_id = %self.id,
            message_id = %id,
            pending = self.pending.len(),
            "User message submitted"
        );
        Some(id)
    }

    /// True while at least one reply is queued.
    pub fn is_composing(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    /// The log, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Wait for the oldest queued reply and append it.
    ///
    /// Returns `None` immediately when nothing is queued. Cancel safe: the
    /// reply is only dequeued after its timer fires.
    pub async fn next_reply(&mut self) -> Option<&Message> {
        let due = self.pending.front()?.due;
        time::sleep_until(due).await;
        let pending = self.pending.pop_front()?;
        self.append_reply(pending)
    }

    /// Resolve every queued reply. Returns how many were appended.
    pub async fn drain(&mut self) -> usize {
        let mut appended = 0;
        while self.next_reply().await.is_some() {
            appended += 1;
        }
        appended
    }

    fn append_reply(&mut self, pending: PendingReply) -> Option<&Message> {
        let intent = self.classifier.classify(&pending.input);
        let id = self.ids.next_id();
        self.messages.push(Message::assistant(id, intent.text, intent.category));

        info!(
            session_id = %self.id,
            message_id = %id,
            topic = ?intent.topic,
            category = %intent.category,
            "Assistant reply ready"
        );
        self.notifier.notify(Notification::reply_ready(id));
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediminder_core::{Category, Sender};
    use tokio::sync::broadcast::error::TryRecvError;

    fn quiet_config() -> Config {
        Config::default().with_greeting(false)
    }

    #[test]
    fn test_greeting_is_first_message() {
        let (notifier, _rx) = Notifier::new(8);
        let session = SessionController::new(&Config::default(), notifier);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].id, MessageId::new(1));
        assert_eq!(session.messages()[0].category, Some(Category::Info));
        assert!(!session.is_composing());
    }

    #[test]
    fn test_blank_submission_is_ignored() {
        let (notifier, mut rx) = Notifier::new(8);
        let mut session = SessionController::new(&quiet_config(), notifier);

        assert_eq!(session.submit(""), None);
        assert_eq!(session.submit("  \t\n"), None);
        assert!(session.messages().is_empty());
        assert!(!session.is_composing());
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_headache_help_appends_user_then_assistant() {
        let (notifier, _rx) = Notifier::new(8);
        let mut session = SessionController::new(&quiet_config(), notifier);

        session.submit("headache help");
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::User);
        assert!(session.is_composing());

        let start = Instant::now();
        let reply = session.next_reply().await.cloned().unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1500));

        assert_eq!(reply.sender, Sender::Assistant);
        assert_eq!(reply.category, Some(Category::Suggestion));
        assert!(!session.is_composing());

        let senders: Vec<Sender> = session.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::User, Sender::Assistant]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_waits_for_latency() {
        let (notifier, _rx) = Notifier::new(8);
        let mut session = SessionController::new(&quiet_config(), notifier);
        session.submit("diabetes");

        time::advance(Duration::from_millis(1000)).await;
        let early = time::timeout(Duration::from_millis(100), session.next_reply()).await;
        assert!(early.is_err());
        assert_eq!(session.messages().len(), 1);
        assert!(session.is_composing());

        assert!(session.next_reply().await.is_some());
        assert_eq!(session.messages().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_back_to_back_submissions_keep_order() {
        let (notifier, _rx) = Notifier::new(8);
        let mut session = SessionController::new(&quiet_config(), notifier);

        session.submit("blood sugar question");
        session.submit("chest pain");
        assert_eq!(session.pending_replies(), 2);

        assert_eq!(session.drain().await, 2);
        let log = session.messages();
        assert_eq!(log.len(), 4);

        assert_eq!(log[0].text, "blood sugar question");
        assert_eq!(log[1].text, "chest pain");
        assert_eq!(log[2].category, Some(Category::Suggestion));
        assert_eq!(log[3].category, Some(Category::Warning));
        assert!(!session.is_composing());
    }

    // Ids come from the session's own counter. Deriving them from the log
    // length at submit time would hand both overlapping replies the same id.
    #[tokio::test(start_paused = true)]
    async fn test_overlapping_submissions_get_distinct_ids() {
        let (notifier, _rx) = Notifier::new(8);
        let mut session = SessionController::new(&Config::default(), notifier);

        session.submit("exercise");
        session.submit("food");
        session.drain().await;

        let ids: Vec<u64> = session.messages().iter().map(|m| m.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_ready_fires_once_per_reply() {
        let (notifier, mut rx) = Notifier::new(8);
        let mut session = SessionController::new(&quiet_config(), notifier);

        session.submit("migraine");
        session.submit("hello");
        session.drain().await;

        let first = rx.try_recv().unwrap();
        let second = rx.try_recv().unwrap();
        assert_eq!(first, Notification::reply_ready(session.messages()[2].id));
        assert_eq!(second, Notification::reply_ready(session.messages()[3].id));
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn test_next_reply_without_pending_returns_none() {
        let (notifier, _rx) = Notifier::new(8);
        let mut session = SessionController::new(&quiet_config(), notifier);
        assert!(session.next_reply().await.is_none());
        assert_eq!(session.drain().await, 0);
    }
}
