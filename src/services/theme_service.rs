//! Theme store: the single owner of the dark/light flag.
//!
//! Every mutation goes through [`ThemeStore::set_theme`] or
//! [`ThemeStore::toggle_theme`], which
//! - update the in-memory flag,
//! - persist it under [`THEME_STORAGE_KEY`] (and the legacy [`LEGACY_THEME_KEY`]),
//! - publish it on the root marker channel that views subscribe to via
//!   [`ThemeView`].
//!
//! Storage failures never reach the caller: reads fall back to the ambient
//! preference, writes are logged and the in-memory value still applies.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::StorageError;
use crate::services::preference::PreferenceProbe;
use crate::services::storage::ThemeStorage;

/// Key holding the persisted store state.
pub const THEME_STORAGE_KEY: &str = "theme-storage";

/// Key holding the plain `"dark"` / `"light"` marker written alongside.
pub const LEGACY_THEME_KEY: &str = "theme";

/// Default interval for polling the system color scheme.
pub const DEFAULT_PREFERENCE_POLL: Duration = Duration::from_secs(2);

/// Persisted shape: `{"state":{"darkMode":b,"isDarkMode":b},"version":0}`.
///
/// Both flags are kept in sync on every write; older builds read either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct PersistedTheme {
    state: PersistedState,
    #[serde(default)]
    version: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState {
    #[serde(default)]
    dark_mode: bool,
    #[serde(default)]
    is_dark_mode: bool,
}

impl PersistedTheme {
    fn new(is_dark: bool) -> Self {
        Self {
            state: PersistedState {
                dark_mode: is_dark,
                is_dark_mode: is_dark,
            },
            version: 0,
        }
    }

    fn is_dark(&self) -> bool {
        self.state.dark_mode || self.state.is_dark_mode
    }
}

/// Parses a persisted value. Accepts the JSON store format and the bare
/// `"dark"` / `"light"` strings very old builds wrote. Anything else is
/// treated as absent.
fn parse_persisted(raw: &str) -> Option<bool> {
    if let Ok(persisted) = serde_json::from_str::<PersistedTheme>(raw) {
        return Some(persisted.is_dark());
    }

    match raw.trim().trim_matches('"') {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

/// Where the value applied by [`ThemeStore::initialize`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// An explicit choice found in storage.
    Persisted,
    /// The platform's color scheme preference.
    Ambient,
    /// Neither was available; light.
    Default,
}

/// Read-only view of the theme flag for rendering code.
#[derive(Debug, Clone)]
pub struct ThemeView {
    rx: watch::Receiver<bool>,
}

impl ThemeView {
    /// Returns whether dark mode is active.
    pub fn is_dark(&self) -> bool {
        *self.rx.borrow()
    }

    /// Returns the class the document root carries, if any.
    pub fn root_class(&self) -> Option<&'static str> {
        self.is_dark().then_some("dark")
    }

    /// Waits for the next change and returns the new flag. Returns `None`
    /// once the store is gone.
    pub async fn changed(&mut self) -> Option<bool> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}

/// Owner of the theme flag.
pub struct ThemeStore<S: ThemeStorage, P: PreferenceProbe> {
    storage: Arc<S>,
    preference: Arc<P>,
    is_dark: bool,
    root: watch::Sender<bool>,
}

impl<S: ThemeStorage, P: PreferenceProbe> ThemeStore<S, P> {
    /// Creates a store in light mode. Call [`initialize`](Self::initialize)
    /// once at startup.
    pub fn new(storage: Arc<S>, preference: Arc<P>) -> Self {
        let (root, _) = watch::channel(false);
        Self {
            storage,
            preference,
            is_dark: false,
            root,
        }
    }

    /// Returns the current flag.
    pub fn theme(&self) -> bool {
        self.is_dark
    }

    /// Returns a read-only view that follows every change.
    pub fn view(&self) -> ThemeView {
        ThemeView {
            rx: self.root.subscribe(),
        }
    }

    /// Overwrites the flag, persists it and updates the root marker.
    pub fn set_theme(&mut self, is_dark: bool) {
        self.apply(is_dark);
        self.persist(is_dark);
    }

    /// Flips the flag and returns the new value.
    pub fn toggle_theme(&mut self) -> bool {
        let next = !self.theme();
        self.set_theme(next);
        next
    }

    /// Resolves the startup value: persisted choice, then ambient
    /// preference, then light.
    ///
    /// Only an explicit persisted choice is written back. A value derived
    /// from the ambient preference stays unpersisted so later preference
    /// changes keep applying until the visitor picks a theme.
    ///
    /// The store does not subscribe to preference changes itself. Long-lived
    /// hosts call [`watch_system_preference`] (or
    /// `App::follow_system_preference`) after this; one-shot commands skip it.
    pub fn initialize(&mut self) -> ThemeSource {
        if let Some(is_dark) = self.load_persisted() {
            self.set_theme(is_dark);
            tracing::debug!(is_dark, "theme restored from storage");
            return ThemeSource::Persisted;
        }

        match self.preference.prefers_dark() {
            Some(is_dark) => {
                self.apply(is_dark);
                tracing::debug!(is_dark, "theme taken from system preference");
                ThemeSource::Ambient
            }
            None => {
                self.apply(false);
                ThemeSource::Default
            }
        }
    }

    /// Handles an ambient preference change. Ignored while an explicit
    /// choice is persisted. Returns whether the flag was applied.
    pub fn on_preference_changed(&mut self, prefers_dark: bool) -> bool {
        if self.has_explicit_choice() {
            tracing::debug!("ignoring system preference change, explicit choice stored");
            return false;
        }
        self.apply(prefers_dark);
        true
    }

    /// Returns whether storage holds an explicit choice.
    pub fn has_explicit_choice(&self) -> bool {
        matches!(
            self.storage.get(THEME_STORAGE_KEY),
            Ok(Some(raw)) if parse_persisted(&raw).is_some()
        )
    }

    /// Forgets the explicit choice and follows the ambient preference again.
    pub fn clear_choice(&mut self) {
        for key in [THEME_STORAGE_KEY, LEGACY_THEME_KEY] {
            if let Err(err) = self.storage.remove(key) {
                tracing::warn!("failed to clear stored theme: {}", err);
            }
        }
        let is_dark = self.preference.prefers_dark().unwrap_or(false);
        self.apply(is_dark);
    }

    fn apply(&mut self, is_dark: bool) {
        self.is_dark = is_dark;
        self.root.send_replace(is_dark);
    }

    fn load_persisted(&self) -> Option<bool> {
        match self.storage.get(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => {
                let parsed = parse_persisted(&raw);
                if parsed.is_none() {
                    tracing::warn!("stored theme is unreadable, falling back to system preference");
                }
                parsed
            }
            Ok(None) => None,
            Err(err) => {
                tracing::warn!("failed to read stored theme: {}", err);
                None
            }
        }
    }

    fn persist(&self, is_dark: bool) {
        if let Err(err) = self.write_persisted(is_dark) {
            tracing::warn!("failed to persist theme: {}", err);
        }
    }

    fn write_persisted(&self, is_dark: bool) -> Result<(), StorageError> {
        let json = serde_json::to_string(&PersistedTheme::new(is_dark))?;
        self.storage.set(THEME_STORAGE_KEY, &json)?;

        let legacy = if is_dark { "dark" } else { "light" };
        self.storage.set(LEGACY_THEME_KEY, legacy)
    }
}

/// Theme store shared with background tasks.
pub type SharedThemeStore<S, P> = Arc<Mutex<ThemeStore<S, P>>>;

/// Background task forwarding ambient preference changes to a store.
/// Stops when dropped.
pub struct PreferenceWatcher {
    handle: JoinHandle<()>,
}

impl PreferenceWatcher {
    /// Stops polling.
    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for PreferenceWatcher {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Polls `probe` every `interval` and forwards changes to the store.
///
/// The store decides whether to apply them; an explicit choice always wins.
pub fn watch_system_preference<S, P, Q>(
    store: SharedThemeStore<S, P>,
    probe: Arc<Q>,
    interval: Duration,
) -> PreferenceWatcher
where
    S: ThemeStorage + 'static,
    P: PreferenceProbe + 'static,
    Q: PreferenceProbe + 'static,
{
    let mut last = probe.prefers_dark();
    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let current = probe.prefers_dark();
            if current == last {
                continue;
            }
            last = current;

            let Some(prefers_dark) = current else {
                continue;
            };
            let Ok(mut guard) = store.lock() else {
                tracing::warn!("theme store poisoned, stopping preference watcher");
                break;
            };
            guard.on_preference_changed(prefers_dark);
        }
    });

    PreferenceWatcher { handle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::preference::ManualPreference;
    use crate::services::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn store_with(
        storage: &MemoryStorage,
        preference: Option<bool>,
    ) -> ThemeStore<MemoryStorage, ManualPreference> {
        ThemeStore::new(
            Arc::new(storage.clone()),
            Arc::new(ManualPreference::new(preference)),
        )
    }

    /// Storage that fails every operation.
    struct BrokenStorage;

    impl ThemeStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("private mode".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("private mode".to_string()))
        }
    }

    #[test]
    fn set_theme_is_idempotent() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage, None);

        store.set_theme(true);
        let once = (store.theme(), storage.get(THEME_STORAGE_KEY).unwrap());
        store.set_theme(true);
        let twice = (store.theme(), storage.get(THEME_STORAGE_KEY).unwrap());

        assert_eq!(once, twice);
        assert!(store.theme());
    }

    #[test]
    fn toggle_inverts_previous_value() {
        for b in [false, true] {
            let mut store = store_with(&MemoryStorage::new(), None);
            store.set_theme(b);
            assert_eq!(store.toggle_theme(), !b);
            assert_eq!(store.theme(), !b);
        }
    }

    #[test]
    fn persisted_value_survives_reload() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage, Some(false));
        store.set_theme(true);
        drop(store);

        let mut reloaded = store_with(&storage, Some(false));
        assert_eq!(reloaded.initialize(), ThemeSource::Persisted);
        assert!(reloaded.theme());
    }

    #[test]
    fn ambient_preference_used_without_stored_value() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage, Some(true));

        assert_eq!(store.initialize(), ThemeSource::Ambient);
        assert!(store.theme());
        assert!(!store.has_explicit_choice());
    }

    #[test]
    fn defaults_to_light() {
        let mut store = store_with(&MemoryStorage::new(), None);
        assert_eq!(store.initialize(), ThemeSource::Default);
        assert!(!store.theme());
    }

    #[test]
    fn explicit_choice_overrides_ambient_change() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage, Some(true));
        store.set_theme(false);

        assert!(!store.on_preference_changed(true));
        assert!(!store.theme());
    }

    #[test]
    fn ambient_change_applies_without_explicit_choice() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage, Some(false));
        store.initialize();

        assert!(store.on_preference_changed(true));
        assert!(store.theme());
        assert_eq!(storage.get(THEME_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn writes_both_flags_and_legacy_marker() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage, None);
        store.set_theme(true);

        let raw = storage.get(THEME_STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["state"]["darkMode"], serde_json::json!(true));
        assert_eq!(value["state"]["isDarkMode"], serde_json::json!(true));
        assert_eq!(storage.get(LEGACY_THEME_KEY).unwrap().as_deref(), Some("dark"));

        store.toggle_theme();
        let raw = storage.get(THEME_STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["state"]["darkMode"], serde_json::json!(false));
        assert_eq!(value["state"]["isDarkMode"], serde_json::json!(false));
        assert_eq!(storage.get(LEGACY_THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn parses_older_formats() {
        assert_eq!(
            parse_persisted(r#"{"state":{"darkMode":false,"isDarkMode":true},"version":0}"#),
            Some(true)
        );
        assert_eq!(parse_persisted(r#"{"state":{"darkMode":true}}"#), Some(true));
        assert_eq!(parse_persisted(r#"{"state":{}}"#), Some(false));
        assert_eq!(parse_persisted("dark"), Some(true));
        assert_eq!(parse_persisted("\"light\""), Some(false));
        assert_eq!(parse_persisted("{not json"), None);
    }

    #[test]
    fn corrupted_value_falls_back_to_ambient() {
        let storage = MemoryStorage::new();
        storage.set(THEME_STORAGE_KEY, "{oops").unwrap();

        let mut store = store_with(&storage, Some(true));
        assert_eq!(store.initialize(), ThemeSource::Ambient);
        assert!(store.theme());
    }

    #[test]
    fn broken_storage_keeps_in_memory_value() {
        let mut store = ThemeStore::new(
            Arc::new(BrokenStorage),
            Arc::new(ManualPreference::new(Some(true))),
        );

        assert_eq!(store.initialize(), ThemeSource::Ambient);
        assert!(store.theme());

        store.set_theme(false);
        assert!(!store.theme());
        assert!(store.toggle_theme());
    }

    #[test]
    fn write_failure_surfaces_as_storage_error() {
        let store = ThemeStore::new(
            Arc::new(BrokenStorage),
            Arc::new(ManualPreference::new(None)),
        );
        assert!(matches!(
            store.write_persisted(true),
            Err(StorageError::Unavailable(_))
        ));

        let storage = MemoryStorage::new();
        let store = store_with(&storage, None);
        store.write_persisted(true).unwrap();
        assert_eq!(storage.get(LEGACY_THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn view_follows_root_marker() {
        let mut store = store_with(&MemoryStorage::new(), None);
        let view = store.view();
        assert!(!view.is_dark());
        assert_eq!(view.root_class(), None);

        store.set_theme(true);
        assert!(view.is_dark());
        assert_eq!(view.root_class(), Some("dark"));
    }

    #[tokio::test]
    async fn view_notifies_on_change() {
        let mut store = store_with(&MemoryStorage::new(), None);
        let mut view = store.view();

        store.toggle_theme();
        assert_eq!(view.changed().await, Some(true));

        drop(store);
        assert_eq!(view.changed().await, None);
    }

    #[test]
    fn clear_choice_returns_to_ambient() {
        let storage = MemoryStorage::new();
        let mut store = store_with(&storage, Some(true));
        store.set_theme(false);

        store.clear_choice();
        assert!(store.theme());
        assert!(!store.has_explicit_choice());
        assert_eq!(storage.get(LEGACY_THEME_KEY).unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn watcher_forwards_changes_until_choice_is_made() {
        let storage = MemoryStorage::new();
        let probe = ManualPreference::new(Some(false));
        let mut store = ThemeStore::new(Arc::new(storage.clone()), Arc::new(probe.clone()));
        store.initialize();
        let shared = Arc::new(Mutex::new(store));

        let watcher =
            watch_system_preference(shared.clone(), Arc::new(probe.clone()), Duration::from_secs(1));

        probe.set(Some(true));
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(shared.lock().unwrap().theme());

        shared.lock().unwrap().set_theme(false);
        probe.set(Some(false));
        tokio::time::sleep(Duration::from_secs(1)).await;
        probe.set(Some(true));
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(!shared.lock().unwrap().theme());

        watcher.stop();
    }
}
