//! Initial preference selection, optionally following the OS color mode.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::preference::ThemePreference;

/// What the store falls back to when the persisted slot is empty or holds
/// an unrecognized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialPreference {
    /// Always start from the given preference.
    Fixed(ThemePreference),
    /// Ask the system detector which mode the user prefers.
    FollowSystem,
}

impl InitialPreference {
    /// Resolves to a concrete preference.
    pub fn resolve(self) -> ThemePreference {
        match self {
            InitialPreference::Fixed(pref) => pref,
            InitialPreference::FollowSystem => detect_system_preference(),
        }
    }
}

impl Default for InitialPreference {
    fn default() -> Self {
        InitialPreference::Fixed(ThemePreference::Light)
    }
}

type ThemeDetector = fn() -> ThemePreference;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used by [`InitialPreference::FollowSystem`].
///
/// This is useful for testing or when the host knows better than the OS.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Restores the OS-backed detector.
pub fn reset_theme_detector() {
    set_theme_detector(os_theme_detector);
}

pub(crate) fn detect_system_preference() -> ThemePreference {
    let detector = THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    (*detector)()
}

fn os_theme_detector() -> ThemePreference {
    match detect_os_theme() {
        OsThemeMode::Dark => ThemePreference::Dark,
        OsThemeMode::Light => ThemePreference::Light,
    }
}
