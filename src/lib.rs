//! Core of a personal portfolio site.
//!
//! The page itself is static content; the stateful parts live here:
//! - a theme store holding the dark/light flag, persisted across sessions
//!   and aware of the system color scheme
//! - a contact flow that validates a message and relays it through EmailJS
//!
//! Static content tables and view-models for the interactive pieces are in
//! [`domain`] and [`ui`].

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod ui;

pub use app::{App, SiteApp};
pub use config::{EmailJsConfig, SiteConfig};
pub use error::{ConfigError, ContactError, RelayError, StorageError};
