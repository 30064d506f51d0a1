//! Charforge shell: terminal wizard over the domain and the character store.

pub mod app;
pub mod config;
pub mod wizard;

pub use app::Shell;
pub use config::AppConfig;
pub use wizard::{WizardEvent, WizardState};
