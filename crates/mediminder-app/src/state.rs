//! Shared application state.

use mediminder_core::Notification;
use tokio::sync::broadcast;

use crate::{AppError, Config, MedicationService, Notifier, SessionController};

/// Everything one running app owns.
#[derive(Debug)]
pub struct AppState {
    /// Chat session with the assistant.
    pub session: SessionController,

    /// Today's medication checklist.
    pub medications: MedicationService,

    notifier: Notifier,
}

impl AppState {
    /// Build the state and return the first notification subscriber.
    pub fn new(config: &Config) -> Result<(Self, broadcast::Receiver<Notification>), AppError> {
        config.validate()?;
        let (notifier, rx) = Notifier::new(config.notification_capacity);
        let medications =
            MedicationService::new(config.schedule.clone(), config.streak, notifier.clone())?;
        let session = SessionController::new(config, notifier.clone());
        Ok((
            Self {
                session,
                medications,
                notifier,
            },
            rx,
        ))
    }

    /// Another subscriber to the notification stream.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.notifier.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_defaults() {
        let (state, _rx) = AppState::new(&Config::default()).unwrap();
        assert_eq!(state.session.messages().len(), 1);
        assert_eq!(state.medications.doses().len(), 3);
    }

    #[test]
    fn test_new_rejects_blank_dose_name() {
        let schedule = vec![mediminder_core::ScheduledDose::at(" ", "08:00", "Heart").unwrap()];
        let config = Config::default().with_schedule(schedule);
        assert!(matches!(AppState::new(&config), Err(AppError::Core(_))));
    }
}
