//! Views mounted on a preference store.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use minijinja::Error;
use tracing::warn;

use super::renderer::Renderer;
use super::views::ThemedView;
use crate::root::PresentationRoot;
use crate::storage::Storage;
use crate::theme::{SubscriptionId, ThemePreference, ThemePreferenceStore};

/// The latest output of every mounted view.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub preference: ThemePreference,
    /// `(view name, html)` in mount order.
    pub outputs: Vec<(String, String)>,
    /// Number of render passes, including the initial one.
    pub passes: usize,
    /// Error from the most recent pass, if it failed. Outputs keep the
    /// previous pass in that case.
    pub error: Option<String>,
}

impl Frame {
    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs
            .iter()
            .find(|(view, _)| view == name)
            .map(|(_, html)| html.as_str())
    }
}

/// A set of views kept in sync with a [`ThemePreferenceStore`].
///
/// Mounting renders every view once and subscribes to the store. From then
/// on, a change made through the store, wherever it is issued, re-renders
/// all mounted views with the new value.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use narrativenet::{
///     ClassTheme, DocumentRoot, HeroBanner, MemoryStorage, Renderer, Screen, ThemePreference,
///     ThemePreferenceStore, ThemeToggle, ThemedView,
/// };
///
/// let mut store = ThemePreferenceStore::new(MemoryStorage::new(), DocumentRoot::new());
/// let renderer = Rc::new(Renderer::new(ClassTheme::narrativenet()).unwrap());
/// let views: Vec<Box<dyn ThemedView>> = vec![Box::new(ThemeToggle), Box::new(HeroBanner::default())];
/// let screen = Screen::mount(&mut store, renderer, views).unwrap();
///
/// store.toggle().unwrap();
/// assert_eq!(screen.frame().preference, ThemePreference::Dark);
/// assert!(screen.frame().output("theme-toggle").unwrap().contains(" checked"));
/// ```
pub struct Screen {
    frame: Rc<RefCell<Frame>>,
    subscription: SubscriptionId,
}

impl Screen {
    /// Renders `views` for the store's current value and subscribes to it.
    ///
    /// # Errors
    ///
    /// Returns the first render error of the initial pass; nothing is
    /// subscribed in that case.
    pub fn mount<S, R>(
        store: &mut ThemePreferenceStore<S, R>,
        renderer: Rc<Renderer>,
        views: Vec<Box<dyn ThemedView>>,
    ) -> Result<Self, Error>
    where
        S: Storage,
        R: PresentationRoot,
    {
        let preference = store.get_current();
        let outputs = render_all(&renderer, &views, preference)?;
        let frame = Rc::new(RefCell::new(Frame {
            preference,
            outputs,
            passes: 1,
            error: None,
        }));

        let sink = Rc::clone(&frame);
        let subscription = store.subscribe(move |preference| {
            let result = render_all(&renderer, &views, preference);
            let mut frame = sink.borrow_mut();
            frame.preference = preference;
            frame.passes += 1;
            match result {
                Ok(outputs) => {
                    frame.outputs = outputs;
                    frame.error = None;
                }
                Err(err) => {
                    warn!(error = %err, "re-render after theme change failed");
                    frame.error = Some(err.to_string());
                }
            }
        });

        Ok(Self {
            frame,
            subscription,
        })
    }

    /// Borrows the latest frame.
    pub fn frame(&self) -> Ref<'_, Frame> {
        self.frame.borrow()
    }

    /// Stops following the store. Returns `false` if already unsubscribed.
    pub fn unmount<S, R>(self, store: &mut ThemePreferenceStore<S, R>) -> bool
    where
        S: Storage,
        R: PresentationRoot,
    {
        store.unsubscribe(self.subscription)
    }
}

fn render_all(
    renderer: &Renderer,
    views: &[Box<dyn ThemedView>],
    preference: ThemePreference,
) -> Result<Vec<(String, String)>, Error> {
    views
        .iter()
        .map(|view| Ok((view.name().to_string(), view.render(renderer, preference)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::views::{HeroBanner, NavBar, ThemeToggle};
    use crate::root::DocumentRoot;
    use crate::storage::MemoryStorage;
    use crate::theme::ClassTheme;

    fn renderer() -> Rc<Renderer> {
        Rc::new(Renderer::new(ClassTheme::narrativenet()).unwrap())
    }

    struct Broken;

    impl ThemedView for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn render(&self, renderer: &Renderer, preference: ThemePreference) -> Result<String, Error> {
            match preference {
                ThemePreference::Light => Ok("ok".to_string()),
                ThemePreference::Dark => renderer.render("missing.html", preference, &()),
            }
        }
    }

    #[test]
    fn test_mount_renders_current_value() {
        let storage = MemoryStorage::new().with_item("theme", "dark");
        let mut store = ThemePreferenceStore::new(storage, DocumentRoot::new());
        let screen = Screen::mount(&mut store, renderer(), vec![Box::new(ThemeToggle)]).unwrap();

        let frame = screen.frame();
        assert_eq!(frame.preference, ThemePreference::Dark);
        assert_eq!(frame.passes, 1);
        assert!(frame.output("theme-toggle").unwrap().contains(" checked"));
        assert_eq!(store.root().class_attr(), "dark");
    }

    #[test]
    fn test_all_screens_follow_one_toggle() {
        let mut store = ThemePreferenceStore::new(MemoryStorage::new(), DocumentRoot::new());
        let renderer = renderer();
        let nav = Screen::mount(&mut store, Rc::clone(&renderer), vec![Box::new(NavBar::default())]).unwrap();
        let hero = Screen::mount(&mut store, Rc::clone(&renderer), vec![Box::new(HeroBanner::default())]).unwrap();

        store.toggle().unwrap();

        assert_eq!(nav.frame().preference, ThemePreference::Dark);
        assert_eq!(hero.frame().preference, ThemePreference::Dark);
        assert!(nav.frame().output("navbar").unwrap().contains(" checked"));
        assert!(hero.frame().output("hero").unwrap().contains("text-white"));
    }

    #[test]
    fn test_unmounted_screen_stops_updating() {
        let mut store = ThemePreferenceStore::new(MemoryStorage::new(), DocumentRoot::new());
        let screen = Screen::mount(&mut store, renderer(), vec![Box::new(ThemeToggle)]).unwrap();
        let frame = Rc::clone(&screen.frame);

        assert!(screen.unmount(&mut store));
        store.toggle().unwrap();

        assert_eq!(frame.borrow().preference, ThemePreference::Light);
        assert_eq!(frame.borrow().passes, 1);
    }

    #[test]
    fn test_failed_pass_keeps_previous_output() {
        let mut store = ThemePreferenceStore::new(MemoryStorage::new(), DocumentRoot::new());
        let screen = Screen::mount(&mut store, renderer(), vec![Box::new(Broken)]).unwrap();

        store.toggle().unwrap();

        let frame = screen.frame();
        assert_eq!(frame.passes, 2);
        assert_eq!(frame.output("broken"), Some("ok"));
        assert!(frame.error.is_some());
    }

    #[test]
    fn test_initial_render_error_is_returned() {
        let storage = MemoryStorage::new().with_item("theme", "dark");
        let mut store = ThemePreferenceStore::new(storage, DocumentRoot::new());
        let result = Screen::mount(&mut store, renderer(), vec![Box::new(Broken)]);

        assert!(result.is_err());
        assert_eq!(store.subscriber_count(), 0);
    }
}
