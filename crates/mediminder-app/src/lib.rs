//! MediMinder application layer.
//!
//! Wires the pure domain types from `mediminder-core` into the pieces a front
//! end drives: the chat session with its simulated reply latency, the
//! medication checklist, and the notification stream.

pub mod config;
pub mod error;
pub mod medications;
pub mod notifier;
pub mod output;
pub mod render;
pub mod session;
pub mod state;

pub use config::Config;
pub use error::AppError;
pub use medications::MedicationService;
pub use notifier::Notifier;
pub use session::SessionController;
pub use state::AppState;
