//! Scheduled dose type.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::{CoreError, DoseStatus};

/// One medication instance scheduled for today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledDose {
    /// Medication name.
    pub name: String,

    /// Time of day the dose is due.
    #[serde(rename = "time", with = "hhmm")]
    pub scheduled_time: NaiveTime,

    /// Free-text condition label (e.g. "Heart", "Diabetes").
    pub condition: String,

    /// Whether the dose has been taken. Only the tracker flips this.
    #[serde(default)]
    taken: bool,
}

impl ScheduledDose {
    /// Create a pending dose.
    pub fn new(
        name: impl Into<String>,
        scheduled_time: NaiveTime,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            scheduled_time,
            condition: condition.into(),
            taken: false,
        }
    }

    /// Create a pending dose from an "HH:MM" time string.
    pub fn at(
        name: impl Into<String>,
        time: &str,
        condition: impl Into<String>,
    ) -> Result<Self, CoreError> {
        Ok(Self::new(name, parse_time(time)?, condition))
    }

    /// Builder method for a dose already taken when the day's list is loaded.
    pub fn already_taken(mut self) -> Self {
        self.taken = true;
        self
    }

    pub fn is_taken(&self) -> bool {
        self.taken
    }

    pub fn status(&self) -> DoseStatus {
        if self.taken {
            DoseStatus::Taken
        } else {
            DoseStatus::Pending
        }
    }

    /// Flip pending → taken. Returns false if it was already taken.
    pub(crate) fn take(&mut self) -> bool {
        if self.taken {
            return false;
        }
        self.taken = true;
        true
    }

    /// Display form of the scheduled time, e.g. "09:00".
    pub fn time_label(&self) -> String {
        self.scheduled_time.format("%H:%M").to_string()
    }

    /// Reject entries the checklist can't render.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidDose(format!(
                "dose at {} has an empty name",
                self.time_label()
            )));
        }
        Ok(())
    }
}

/// Parse "HH:MM" (or "HH:MM:SS").
pub fn parse_time(value: &str) -> Result<NaiveTime, CoreError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| CoreError::InvalidTime {
            value: value.to_string(),
        })
}

/// The default list for "today".
pub fn default_schedule() -> Vec<ScheduledDose> {
    vec![
        ScheduledDose::new("Aspirin", hm(9, 0), "Heart").already_taken(),
        ScheduledDose::new("Metformin", hm(12, 0), "Diabetes"),
        ScheduledDose::new("Lisinopril", hm(18, 0), "Blood Pressure"),
    ]
}

fn hm(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap_or_default()
}

mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(serde::de::Error::custom)
    }
}
