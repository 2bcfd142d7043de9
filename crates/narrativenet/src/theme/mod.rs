//! Light/dark theme preference.
//!
//! This module provides:
//!
//! - [`ThemePreference`]: the two-variant light/dark value
//! - [`ThemePreferenceStore`]: the single owner that persists the value,
//!   marks the presentation root, and notifies subscribers
//! - [`InitialPreference`]: what to use when nothing valid is persisted
//! - [`ClassTheme`]: utility classes per mode, looked up by semantic name
//! - [`ThemeError`]: failures surfaced by the store

mod adaptive;
mod classes;
mod error;
mod preference;
mod store;

pub use adaptive::{reset_theme_detector, set_theme_detector, InitialPreference};
pub use classes::{ClassPair, ClassTheme, MISSING_CLASS_INDICATOR};
pub use error::ThemeError;
pub use preference::{ParsePreferenceError, ThemePreference};
pub use store::{StoreConfig, SubscriptionId, ThemePreferenceStore, DEFAULT_STORAGE_KEY};
