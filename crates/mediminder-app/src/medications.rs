//! Medication checklist service.

use tracing::{debug, info};

use mediminder_core::{AdherenceTracker, DashboardAggregator, MarkOutcome, ScheduledDose, Streak};

use crate::{AppError, Notifier};

/// Today's doses plus the notifications that go with marking them.
#[derive(Debug)]
pub struct MedicationService {
    tracker: AdherenceTracker,
    streak: Streak,
    notifier: Notifier,
}

impl MedicationService {
    pub fn new(
        schedule: Vec<ScheduledDose>,
        streak: Streak,
        notifier: Notifier,
    ) -> Result<Self, AppError> {
        let tracker = AdherenceTracker::with_schedule(schedule)?;
        info!(
            doses = tracker.total(),
            taken = tracker.taken_count(),
            streak_days = streak.days(),
            "Medication schedule loaded"
        );
        Ok(Self {
            tracker,
            streak,
            notifier,
        })
    }

    /// Mark a dose taken; notifies only when the dose actually flips.
    pub fn mark_taken(&mut self, index: usize) -> MarkOutcome {
        let outcome = self.tracker.mark_taken(index);
        match &outcome {
            MarkOutcome::Taken { name, .. } => {
                info!(index, dose = %name, taken = self.tracker.taken_count(), "Dose marked taken");
            }
            MarkOutcome::AlreadyTaken { .. } => {
                debug!(index, "Dose already taken");
            }
            MarkOutcome::OutOfRange { len, .. } => {
                debug!(index, len, "No dose at index");
            }
        }
        if let Some(notification) = outcome.notification() {
            self.notifier.notify(notification);
        }
        outcome
    }

    pub fn doses(&self) -> &[ScheduledDose] {
        self.tracker.doses()
    }

    pub fn dashboard(&self) -> DashboardAggregator<'_> {
        DashboardAggregator::new(&self.tracker, self.streak)
    }
}
