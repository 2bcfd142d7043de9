//! MiniJinja filter registration.

use minijinja::{Environment, State};

use crate::theme::{ClassTheme, ThemePreference};

/// Registers all built-in filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>, classes: ClassTheme) {
    // Resolves a semantic class name for the preference in the render
    // context's `theme` variable.
    // Usage: <div class="{{ "app_shell" | cls }}">
    env.add_filter("cls", move |state: &State, name: String| -> String {
        let preference = current_preference(state);
        classes.resolve_or_indicator(&name, preference).to_string()
    });
}

fn current_preference(state: &State) -> ThemePreference {
    state
        .lookup("theme")
        .and_then(|value| value.as_str().and_then(|s| s.parse().ok()))
        .unwrap_or_default()
}
