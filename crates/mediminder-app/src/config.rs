//! Application configuration.

use std::path::Path;
use std::time::Duration;

use mediminder_core::dose::default_schedule;
use mediminder_core::{ScheduledDose, Streak};

use crate::AppError;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Simulated delay before the assistant reply lands.
    pub reply_latency: Duration,

    /// Streak days, as reported by the day-rollover process.
    pub streak: Streak,

    /// Open each session with the assistant greeting.
    pub greeting: bool,

    /// Buffered notifications per subscriber before it lags.
    pub notification_capacity: usize,

    /// Today's doses.
    pub schedule: Vec<ScheduledDose>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reply_latency: Duration::from_millis(1500),
            streak: Streak::new(7),
            greeting: true,
            notification_capacity: 64,
            schedule: default_schedule(),
        }
    }
}

impl Config {
    /// Builder method to set the reply latency.
    pub fn with_reply_latency(mut self, latency: Duration) -> Self {
        self.reply_latency = latency;
        self
    }

    /// Builder method to set the streak.
    pub fn with_streak(mut self, days: u32) -> Self {
        self.streak = Streak::new(days);
        self
    }

    /// Builder method to toggle the greeting.
    pub fn with_greeting(mut self, greeting: bool) -> Self {
        self.greeting = greeting;
        self
    }

    /// Builder method to replace today's schedule.
    pub fn with_schedule(mut self, schedule: Vec<ScheduledDose>) -> Self {
        self.schedule = schedule;
        self
    }

    /// Sanity-check values that came from the command line.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.notification_capacity == 0 {
            return Err(AppError::InvalidConfig(
                "notification capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load a schedule from a JSON array of `{name, time, condition, taken?}`.
pub fn load_schedule(path: &Path) -> Result<Vec<ScheduledDose>, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|source| AppError::ScheduleRead {
        path: path.to_path_buf(),
        source,
    })?;
    let doses: Vec<ScheduledDose> =
        serde_json::from_str(&raw).map_err(|source| AppError::ScheduleParse {
            path: path.to_path_buf(),
            source,
        })?;
    for dose in &doses {
        dose.validate()?;
    }
    Ok(doses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.reply_latency, Duration::from_millis(1500));
        assert_eq!(config.streak.days(), 7);
        assert!(config.greeting);
        assert_eq!(config.schedule.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_schedule() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"name": "Atorvastatin", "time": "21:00", "condition": "Cholesterol"}},
                {{"name": "Levothyroxine", "time": "07:30", "condition": "Thyroid", "taken": true}}
            ]"#
        )
        .unwrap();

        let doses = load_schedule(file.path()).unwrap();
        assert_eq!(doses.len(), 2);
        assert_eq!(doses[0].time_label(), "21:00");
        assert!(doses[1].is_taken());
    }

    #[test]
    fn test_load_schedule_bad_time() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "X", "time": "late", "condition": "Y"}}]"#).unwrap();
        let err = load_schedule(file.path()).unwrap_err();
        assert!(matches!(err, AppError::ScheduleParse { .. }));
    }

    #[test]
    fn test_load_schedule_missing_file() {
        let err = load_schedule(Path::new("/nonexistent/schedule.json")).unwrap_err();
        assert!(matches!(err, AppError::ScheduleRead { .. }));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = Config {
            notification_capacity: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));
    }
}
