//! Ambient light/dark preference of the operating environment.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Source of the platform's "prefers dark color scheme" signal.
pub trait PreferenceProbe: Send + Sync {
    /// Returns `Some(true)` for dark, `Some(false)` for light, `None` if the
    /// platform does not report a preference.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Reads the desktop color scheme through `dark-light`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPreference;

impl PreferenceProbe for SystemPreference {
    fn prefers_dark(&self) -> Option<bool> {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => Some(true),
            Ok(dark_light::Mode::Light) => Some(false),
            Ok(dark_light::Mode::Unspecified) => None,
            Err(err) => {
                tracing::debug!("color scheme detection failed: {}", err);
                None
            }
        }
    }
}

const UNSET: u8 = 0;
const LIGHT: u8 = 1;
const DARK: u8 = 2;

/// A preference set by hand. Clones share the value, so a test can flip it
/// while a store holds another clone.
#[derive(Debug, Clone, Default)]
pub struct ManualPreference {
    value: Arc<AtomicU8>,
}

impl ManualPreference {
    /// Creates a probe reporting `value`.
    pub fn new(value: Option<bool>) -> Self {
        let probe = Self::default();
        probe.set(value);
        probe
    }

    /// Changes the reported preference.
    pub fn set(&self, value: Option<bool>) {
        let raw = match value {
            None => UNSET,
            Some(false) => LIGHT,
            Some(true) => DARK,
        };
        self.value.store(raw, Ordering::SeqCst);
    }
}

impl PreferenceProbe for ManualPreference {
    fn prefers_dark(&self) -> Option<bool> {
        match self.value.load(Ordering::SeqCst) {
            DARK => Some(true),
            LIGHT => Some(false),
            _ => None,
        }
    }
}
