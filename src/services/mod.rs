//! Stateful services behind the site.
//!
//! - `theme_service`: dark/light flag with persistence and system preference
//! - `storage`: durable key-value backends
//! - `preference`: ambient color scheme probes
//! - `contact_service`: contact form validation and submission state machine
//! - `email_relay`: outbound transactional email client

pub mod contact_service;
pub mod email_relay;
pub mod preference;
pub mod storage;
pub mod theme_service;

pub use contact_service::{
    is_valid_email, ContactField, ContactForm, ContactService, ContactSnapshot, SubmissionStatus,
    SubmitOutcome, REVERT_AFTER,
};
pub use email_relay::{EmailJsClient, EmailRelay, TemplateParams};
pub use preference::{ManualPreference, PreferenceProbe, SystemPreference};
pub use storage::{FileStorage, MemoryStorage, ThemeStorage};
pub use theme_service::{
    watch_system_preference, PreferenceWatcher, SharedThemeStore, ThemeSource, ThemeStore,
    ThemeView, DEFAULT_PREFERENCE_POLL, LEGACY_THEME_KEY, THEME_STORAGE_KEY,
};
