//! Derived adherence metrics for the dashboard.

use serde::{Deserialize, Serialize};

use crate::{AdherenceTracker, ScheduledDose};

/// Consecutive days of adherence.
///
/// Maintained by a day-rollover process outside this crate; read-only here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Streak(u32);

impl Streak {
    pub fn new(days: u32) -> Self {
        Self(days)
    }

    pub fn days(&self) -> u32 {
        self.0
    }
}

/// Read-only view over the tracker's doses.
#[derive(Debug, Clone, Copy)]
pub struct DashboardAggregator<'a> {
    doses: &'a [ScheduledDose],
    streak: Streak,
}

impl<'a> DashboardAggregator<'a> {
    pub fn new(tracker: &'a AdherenceTracker, streak: Streak) -> Self {
        Self::from_doses(tracker.doses(), streak)
    }

    pub fn from_doses(doses: &'a [ScheduledDose], streak: Streak) -> Self {
        Self { doses, streak }
    }

    /// Percentage of today's doses taken, in [0, 100]. Zero when there are none.
    pub fn completion_rate(&self) -> f64 {
        let total = self.doses.len();
        if total == 0 {
            return 0.0;
        }
        100.0 * self.taken() as f64 / total as f64
    }

    pub fn taken(&self) -> usize {
        self.doses.iter().filter(|d| d.is_taken()).count()
    }

    pub fn total(&self) -> usize {
        self.doses.len()
    }

    pub fn streak(&self) -> Streak {
        self.streak
    }

    /// Earliest pending dose, for the "next reminder" card.
    pub fn next_reminder(&self) -> Option<&'a ScheduledDose> {
        self.doses
            .iter()
            .filter(|d| !d.is_taken())
            .min_by_key(|d| d.scheduled_time)
    }

    /// Snapshot of everything the dashboard cards show.
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            taken: self.taken(),
            total: self.total(),
            completion_rate: self.completion_rate(),
            streak_days: self.streak.days(),
            next_reminder: self.next_reminder().map(|d| NextReminder {
                name: d.name.clone(),
                time: d.time_label(),
            }),
        }
    }
}

/// Serializable dashboard snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub taken: usize,
    pub total: usize,
    pub completion_rate: f64,
    pub streak_days: u32,
    pub next_reminder: Option<NextReminder>,
}

/// The next dose due.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextReminder {
    pub name: String,
    pub time: String,
}
