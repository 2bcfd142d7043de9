//! HTML rendering of theme-dependent views.
//!
//! - [`Renderer`]: minijinja environment with the built-in templates and the
//!   `cls` filter
//! - [`ThemedView`] and the home page views that implement it
//! - [`Screen`]: views mounted on a store, re-rendered on every change

mod filters;
mod renderer;
mod screen;
mod views;

pub use renderer::Renderer;
pub use screen::{Frame, Screen};
pub use views::{
    BookCard, HeroBanner, NavBar, NavLink, Page, Recommendations, ThemeToggle, ThemedView,
    SYNOPSIS_PREVIEW_WIDTH,
};
