//! Class collections keyed by semantic name.

use std::collections::HashMap;

use super::preference::ThemePreference;

/// Rendered in place of a class name that the theme does not define.
pub const MISSING_CLASS_INDICATOR: &str = "(!?)";

/// Utility classes for one element, per preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPair {
    light: String,
    dark: String,
}

impl ClassPair {
    pub fn new(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self {
            light: light.into(),
            dark: dark.into(),
        }
    }

    /// The same classes regardless of preference.
    pub fn fixed(classes: impl Into<String>) -> Self {
        let classes = classes.into();
        Self {
            light: classes.clone(),
            dark: classes,
        }
    }

    pub fn resolve(&self, preference: ThemePreference) -> &str {
        match preference {
            ThemePreference::Light => &self.light,
            ThemePreference::Dark => &self.dark,
        }
    }
}

/// A named collection of class pairs used when rendering views.
///
/// Views never branch on the preference to pick classes; they ask the
/// theme for a semantic name and get the classes for the current mode.
///
/// # Example
///
/// ```rust
/// use narrativenet::{ClassTheme, ThemePreference};
///
/// let theme = ClassTheme::new()
///     .add("shell", "bg-white", "bg-black")
///     .add_fixed("title", "font-Quicksand text-2xl");
///
/// assert_eq!(theme.resolve("shell", ThemePreference::Dark), Some("bg-black"));
/// assert_eq!(theme.resolve("title", ThemePreference::Dark), Some("font-Quicksand text-2xl"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassTheme {
    classes: HashMap<String, ClassPair>,
}

impl ClassTheme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds classes that differ between light and dark mode.
    pub fn add(mut self, name: &str, light: &str, dark: &str) -> Self {
        self.classes
            .insert(name.to_string(), ClassPair::new(light, dark));
        self
    }

    /// Adds classes shared by both modes.
    pub fn add_fixed(mut self, name: &str, classes: &str) -> Self {
        self.classes
            .insert(name.to_string(), ClassPair::fixed(classes));
        self
    }

    pub fn get(&self, name: &str) -> Option<&ClassPair> {
        self.classes.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Returns the classes for `name` in the given mode.
    pub fn resolve(&self, name: &str, preference: ThemePreference) -> Option<&str> {
        self.get(name).map(|pair| pair.resolve(preference))
    }

    /// Like [`resolve`](Self::resolve), but unknown names yield
    /// [`MISSING_CLASS_INDICATOR`] so the gap shows up in the markup.
    pub fn resolve_or_indicator(&self, name: &str, preference: ThemePreference) -> &str {
        self.resolve(name, preference)
            .unwrap_or(MISSING_CLASS_INDICATOR)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// The classes used by the NarrativeNet home page.
    pub fn narrativenet() -> Self {
        Self::new()
            .add(
                "app_shell",
                "w-full h-dvh box-border scroll-smooth bg-white",
                "w-full h-dvh box-border scroll-smooth bg-black",
            )
            .add(
                "nav_bar",
                "w-full h-[67px] bg-bg-nav box-border flex justify-around",
                "w-full h-[67px] bg-gray-900 box-border flex justify-around",
            )
            .add(
                "nav_brand",
                "text-black font-Quicksand font-medium text-2xl",
                "text-white font-Quicksand font-medium text-2xl",
            )
            .add(
                "nav_link",
                "text-black font-Quicksand font-normal text-xl",
                "text-white font-Quicksand font-normal text-xl",
            )
            .add(
                "search_button",
                "btn btn-circle bg-gray-300",
                "btn btn-circle bg-gray-700",
            )
            .add_fixed(
                "search_input",
                "input input-bordered w-48 font-Quicksand",
            )
            .add_fixed(
                "toggle",
                "toggle toggle-warning [--tglbg:white] bg-gray-700 border-black",
            )
            .add(
                "sun_icon",
                "text-white text-2xl animate-fadeIn duration-200",
                "text-black text-2xl animate-fadeIn duration-200",
            )
            .add(
                "moon_icon",
                "text-text-light text-2xl animate-fadeIn duration-200",
                "text-white text-2xl animate-fadeIn duration-200",
            )
            .add(
                "hero",
                "flex flex-col items-center gap-4 text-black",
                "flex flex-col items-center gap-4 text-white",
            )
            .add(
                "card",
                "w-[30%] bg-red-800 flex gap-1",
                "w-[30%] bg-red-950 flex gap-1",
            )
            .add_fixed(
                "card_title",
                "text-left font-Quicksand font-semibold text-white text-2xl",
            )
            .add(
                "card_body",
                "text-gray-100",
                "text-gray-300",
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_resolves_per_mode() {
        let theme = ClassTheme::new().add("bg", "bg-white", "bg-black");
        assert_eq!(theme.resolve("bg", ThemePreference::Light), Some("bg-white"));
        assert_eq!(theme.resolve("bg", ThemePreference::Dark), Some("bg-black"));
    }

    #[test]
    fn test_fixed_is_mode_independent() {
        let theme = ClassTheme::new().add_fixed("title", "text-2xl");
        for pref in ThemePreference::ALL {
            assert_eq!(theme.resolve("title", pref), Some("text-2xl"));
        }
    }

    #[test]
    fn test_unknown_name_uses_indicator() {
        let theme = ClassTheme::new();
        assert_eq!(theme.resolve("nope", ThemePreference::Light), None);
        assert_eq!(
            theme.resolve_or_indicator("nope", ThemePreference::Light),
            MISSING_CLASS_INDICATOR
        );
    }

    #[test]
    fn test_later_add_replaces_earlier() {
        let theme = ClassTheme::new()
            .add("bg", "a", "b")
            .add_fixed("bg", "c");
        assert_eq!(theme.len(), 1);
        assert_eq!(theme.resolve("bg", ThemePreference::Dark), Some("c"));
    }

    #[test]
    fn test_default_is_empty() {
        assert!(ClassTheme::default().is_empty());
    }

    #[test]
    fn test_narrativenet_theme_darkens_shell() {
        let theme = ClassTheme::narrativenet();
        let light = theme.resolve("app_shell", ThemePreference::Light).unwrap();
        let dark = theme.resolve("app_shell", ThemePreference::Dark).unwrap();
        assert!(light.contains("bg-white"));
        assert!(dark.contains("bg-black"));
    }
}
