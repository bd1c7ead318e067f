//! Dose adherence state machine.
//!
//! Each dose moves pending → taken exactly once. There is no undo and no
//! missed state. Marking a taken dose or an unknown index does nothing and
//! reports why, so a double tap or a stale row index never surfaces as an
//! error.

use crate::{CoreError, Notification, ScheduledDose};

/// Result of a mark-taken request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkOutcome {
    /// The dose flipped from pending to taken.
    Taken { index: usize, name: String },
    /// The dose was already taken; nothing changed.
    AlreadyTaken { index: usize },
    /// No dose at that index; nothing changed.
    OutOfRange { index: usize, len: usize },
}

impl MarkOutcome {
    /// True only for the call that actually changed state.
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Taken { .. })
    }

    /// Notification to raise, if any.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            Self::Taken { name, .. } => Some(Notification::dose_taken(name.clone())),
            _ => None,
        }
    }
}

/// Owns today's dose list.
#[derive(Debug, Clone, Default)]
pub struct AdherenceTracker {
    doses: Vec<ScheduledDose>,
    initialized: bool,
}

impl AdherenceTracker {
    /// An empty tracker waiting for the day's schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// A tracker initialized with `doses`.
    pub fn with_schedule(doses: Vec<ScheduledDose>) -> Result<Self, CoreError> {
        let mut tracker = Self::new();
        tracker.initialize(doses)?;
        Ok(tracker)
    }

    /// Set the day's doses. Allowed once.
    pub fn initialize(&mut self, doses: Vec<ScheduledDose>) -> Result<(), CoreError> {
        if self.initialized {
            return Err(CoreError::AlreadyInitialized(self.doses.len()));
        }
        for dose in &doses {
            dose.validate()?;
        }
        self.doses = doses;
        self.initialized = true;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Mark the dose at `index` as taken.
    pub fn mark_taken(&mut self, index: usize) -> MarkOutcome {
        let len = self.doses.len();
        let Some(dose) = self.doses.get_mut(index) else {
            return MarkOutcome::OutOfRange { index, len };
        };
        if dose.take() {
            MarkOutcome::Taken {
                index,
                name: dose.name.clone(),
            }
        } else {
            MarkOutcome::AlreadyTaken { index }
        }
    }

    /// Read-only view of today's doses.
    pub fn doses(&self) -> &[ScheduledDose] {
        &self.doses
    }

    pub fn taken_count(&self) -> usize {
        self.doses.iter().filter(|d| d.is_taken()).count()
    }

    pub fn total(&self) -> usize {
        self.doses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dose::default_schedule;
    use crate::DoseStatus;

    fn three_pending() -> AdherenceTracker {
        AdherenceTracker::with_schedule(vec![
            ScheduledDose::at("Aspirin", "09:00", "Heart").unwrap(),
            ScheduledDose::at("Metformin", "12:00", "Diabetes").unwrap(),
            ScheduledDose::at("Lisinopril", "18:00", "Blood Pressure").unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_mark_taken_transitions_once() {
        let mut tracker = three_pending();

        let first = tracker.mark_taken(1);
        assert_eq!(
            first,
            MarkOutcome::Taken {
                index: 1,
                name: "Metformin".to_string()
            }
        );
        assert!(first.notification().is_some());

        let second = tracker.mark_taken(1);
        assert_eq!(second, MarkOutcome::AlreadyTaken { index: 1 });
        assert!(!second.is_transition());
        assert!(second.notification().is_none());

        assert_eq!(tracker.doses()[1].status(), DoseStatus::Taken);
        assert_eq!(tracker.taken_count(), 1);
    }

    #[test]
    fn test_double_mark_equals_single_mark() {
        let mut once = three_pending();
        let mut twice = three_pending();
        once.mark_taken(0);
        twice.mark_taken(0);
        twice.mark_taken(0);
        assert_eq!(once.doses(), twice.doses());
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut tracker = three_pending();
        let before = tracker.doses().to_vec();
        let outcome = tracker.mark_taken(3);
        assert_eq!(outcome, MarkOutcome::OutOfRange { index: 3, len: 3 });
        assert!(outcome.notification().is_none());
        assert_eq!(tracker.doses(), before.as_slice());
    }

    #[test]
    fn test_initialize_only_once() {
        let mut tracker = AdherenceTracker::new();
        assert!(!tracker.is_initialized());
        tracker.initialize(default_schedule()).unwrap();
        let err = tracker.initialize(Vec::new()).unwrap_err();
        assert!(matches!(err, CoreError::AlreadyInitialized(3)));
        assert_eq!(tracker.total(), 3);
    }

    #[test]
    fn test_initialize_rejects_invalid_dose() {
        let mut tracker = AdherenceTracker::new();
        let bad = ScheduledDose::at("", "08:00", "Heart").unwrap();
        assert!(tracker.initialize(vec![bad]).is_err());
        assert!(!tracker.is_initialized());
    }
}
