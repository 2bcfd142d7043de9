//! The single owner of the light/dark preference.

use std::fmt;

use tracing::{debug, warn};

use crate::root::PresentationRoot;
use crate::storage::Storage;

use super::adaptive::InitialPreference;
use super::error::ThemeError;
use super::preference::ThemePreference;

/// Storage key the browser build used for the preference.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Configuration for a [`ThemePreferenceStore`].
///
/// # Example
///
/// ```rust
/// use narrativenet::{InitialPreference, StoreConfig};
///
/// let config = StoreConfig::default()
///     .with_storage_key("narrativenet-theme")
///     .with_initial(InitialPreference::FollowSystem);
/// assert_eq!(config.storage_key, "narrativenet-theme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Name of the persisted slot.
    pub storage_key: String,
    /// Fallback used when the slot is empty or unrecognized.
    pub initial: InitialPreference,
}

impl StoreConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_initial(mut self, initial: InitialPreference) -> Self {
        self.initial = initial;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            initial: InitialPreference::default(),
        }
    }
}

/// Handle returned by [`ThemePreferenceStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(ThemePreference)>;

/// Source of truth for the light/dark preference.
///
/// The store reads the persisted slot once on creation, then owns the value.
/// Every mutation goes through [`set_current`](Self::set_current) (or
/// [`toggle`](Self::toggle)), which writes the slot, swaps the marker on
/// the presentation root, and notifies subscribers, in that order.
///
/// # Example
///
/// ```rust
/// use narrativenet::{DocumentRoot, MemoryStorage, PresentationRoot, ThemePreference, ThemePreferenceStore};
///
/// let mut store = ThemePreferenceStore::new(MemoryStorage::new(), DocumentRoot::new());
/// assert_eq!(store.get_current(), ThemePreference::Light);
///
/// store.toggle().unwrap();
/// assert_eq!(store.get_current(), ThemePreference::Dark);
/// assert!(store.root().has_marker("dark"));
/// assert!(!store.root().has_marker("light"));
/// ```
pub struct ThemePreferenceStore<S, R> {
    config: StoreConfig,
    storage: S,
    root: R,
    current: ThemePreference,
    applied: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<S: Storage, R: PresentationRoot> ThemePreferenceStore<S, R> {
    /// Creates a store over the default `"theme"` slot.
    pub fn new(storage: S, root: R) -> Self {
        Self::with_config(storage, root, StoreConfig::default())
    }

    /// Creates a store with explicit configuration.
    ///
    /// The root is not touched until the first [`get_current`](Self::get_current)
    /// or mutation.
    pub fn with_config(storage: S, root: R, config: StoreConfig) -> Self {
        let current = load(&storage, &config);
        debug!(preference = %current, key = %config.storage_key, "theme preference loaded");
        Self {
            config,
            storage,
            root,
            current,
            applied: false,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns the current preference.
    ///
    /// The first call after creation (or after [`attach`](Self::attach))
    /// applies the value to the presentation root. Later calls leave the
    /// root alone.
    pub fn get_current(&mut self) -> ThemePreference {
        if !self.applied {
            self.apply_to_root();
        }
        self.current
    }

    /// Returns the current preference without touching the root.
    pub fn peek(&self) -> ThemePreference {
        self.current
    }

    /// Sets the preference.
    ///
    /// Setting the value the store already holds changes nothing: the slot
    /// is not written and subscribers are not notified. Otherwise the slot
    /// is written, the root marker swapped, and subscribers notified.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] if the slot write fails. The new value
    /// is still in effect for this session (root and subscribers are updated);
    /// it just will not survive a reload.
    pub fn set_current(&mut self, next: ThemePreference) -> Result<(), ThemeError> {
        if next == self.current {
            if !self.applied {
                self.apply_to_root();
            }
            return Ok(());
        }

        let previous = self.current;
        self.current = next;
        debug!(from = %previous, to = %next, "theme preference changed");

        let persisted = self.storage.set_item(&self.config.storage_key, next.as_str());
        if let Err(err) = &persisted {
            warn!(error = %err, "failed to persist theme preference");
        }

        self.apply_to_root();
        self.notify();

        persisted.map_err(ThemeError::from)
    }

    /// Parses and sets a preference given by name.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidPreferenceValue`] without changing
    /// anything if `raw` is not `"light"` or `"dark"`.
    pub fn set_current_str(&mut self, raw: &str) -> Result<ThemePreference, ThemeError> {
        let next: ThemePreference = raw.parse()?;
        self.set_current(next)?;
        Ok(next)
    }

    /// Flips the preference and returns the new value.
    pub fn toggle(&mut self) -> Result<ThemePreference, ThemeError> {
        let next = self.current.toggled();
        self.set_current(next)?;
        Ok(next)
    }

    /// Re-reads the persisted slot, as a page reload would.
    ///
    /// The resolved value is applied to the root, and subscribers are
    /// notified if it differs from what the store held.
    pub fn reload(&mut self) -> ThemePreference {
        let loaded = load(&self.storage, &self.config);
        let changed = loaded != self.current;
        self.current = loaded;
        self.applied = false;
        self.get_current();
        if changed {
            self.notify();
        }
        self.current
    }

    /// Clears the persisted slot and returns to the initial default.
    pub fn reset(&mut self) -> Result<ThemePreference, ThemeError> {
        self.storage.remove_item(&self.config.storage_key)?;
        let initial = self.config.initial.resolve();
        let changed = initial != self.current;
        self.current = initial;
        debug!(preference = %initial, "theme preference reset");

        if changed || !self.applied {
            self.apply_to_root();
        }
        if changed {
            self.notify();
        }
        Ok(initial)
    }

    /// Swaps in a new presentation root and returns the old one.
    ///
    /// The next [`get_current`](Self::get_current) applies the value to the
    /// new root.
    pub fn attach(&mut self, root: R) -> R {
        self.applied = false;
        std::mem::replace(&mut self.root, root)
    }

    /// Registers a callback run after every change, with the new value.
    ///
    /// Callbacks run synchronously in subscription order, after the slot and
    /// root have been updated.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(ThemePreference) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    /// Puts exactly the current marker on the root.
    fn apply_to_root(&mut self) {
        let current = self.current;
        let result = ThemePreference::ALL
            .into_iter()
            .filter(|pref| *pref != current)
            .try_for_each(|stale| self.root.remove_marker(stale.marker()))
            .and_then(|()| self.root.add_marker(current.marker()));

        match result {
            Ok(()) => self.applied = true,
            Err(err) => debug!(preference = %current, "{err}; skipping marker update"),
        }
    }

    fn notify(&mut self) {
        let current = self.current;
        for (_, listener) in self.listeners.iter_mut() {
            listener(current);
        }
    }
}

impl<S, R> fmt::Debug for ThemePreferenceStore<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemePreferenceStore")
            .field("config", &self.config)
            .field("current", &self.current)
            .field("applied", &self.applied)
            .field("subscribers", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

/// Reads the slot, falling back to the configured initial preference.
fn load<S: Storage>(storage: &S, config: &StoreConfig) -> ThemePreference {
    match storage.get_item(&config.storage_key) {
        Ok(Some(raw)) => match raw.parse() {
            Ok(pref) => pref,
            Err(err) => {
                debug!("{err}; using initial preference");
                config.initial.resolve()
            }
        },
        Ok(None) => config.initial.resolve(),
        Err(err) => {
            warn!(error = %err, "failed to read theme preference; using initial preference");
            config.initial.resolve()
        }
    }
}
