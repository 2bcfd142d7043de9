//! # NarrativeNet - light/dark theme preference for the NarrativeNet UI
//!
//! The preference is a two-variant value owned by a single
//! [`ThemePreferenceStore`]. The store persists it in a named slot of a
//! [`Storage`], marks the [`PresentationRoot`] with `light` or `dark`, and
//! notifies subscribers so every consumer re-renders with the same value.
//!
//! ## Quick Start
//!
//! ```rust
//! use narrativenet::{DocumentRoot, MemoryStorage, ThemePreference, ThemePreferenceStore};
//!
//! let mut store = ThemePreferenceStore::new(MemoryStorage::new(), DocumentRoot::new());
//! assert_eq!(store.get_current(), ThemePreference::Light);
//!
//! store.toggle().unwrap();
//! assert_eq!(store.root().class_attr(), "dark");
//! ```
//!
//! ## Persistence
//!
//! [`MemoryStorage`] starts empty on every run. [`FileStorage`] keeps a JSON
//! object on disk, so a new store over the same file picks up where the last
//! one left off:
//!
//! ```rust
//! use narrativenet::{DetachedRoot, FileStorage, ThemePreference, ThemePreferenceStore};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("storage.json");
//!
//! let mut store = ThemePreferenceStore::new(FileStorage::new(&path), DetachedRoot);
//! store.set_current(ThemePreference::Dark).unwrap();
//!
//! let mut reopened = ThemePreferenceStore::new(FileStorage::new(&path), DetachedRoot);
//! assert_eq!(reopened.get_current(), ThemePreference::Dark);
//! ```
//!
//! ## Rendering
//!
//! Views implement [`ThemedView`] and render HTML through a [`Renderer`].
//! Templates pick classes with the `cls` filter, which resolves a semantic
//! name from the [`ClassTheme`] for the preference being rendered.
//! [`Screen`] mounts views on a store and keeps their output current.
//!
//! ## Unreadable values
//!
//! A slot holding anything but `"light"` or `"dark"`, or storage that cannot
//! be read, falls back to the configured [`InitialPreference`] (`light` by
//! default). Nothing is fatal: a missing presentation root only skips the
//! marker update.

mod render;
mod root;
mod storage;
mod theme;
mod util;

pub use render::{
    BookCard, Frame, HeroBanner, NavBar, NavLink, Page, Recommendations, Renderer, Screen,
    ThemeToggle, ThemedView, SYNOPSIS_PREVIEW_WIDTH,
};
pub use root::{DetachedRoot, DocumentRoot, PresentationRoot, RootUnavailable};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use theme::{
    reset_theme_detector, set_theme_detector, ClassPair, ClassTheme, InitialPreference,
    ParsePreferenceError, StoreConfig, SubscriptionId, ThemeError, ThemePreference,
    ThemePreferenceStore, DEFAULT_STORAGE_KEY, MISSING_CLASS_INDICATOR,
};
pub use util::truncate_to_width;
