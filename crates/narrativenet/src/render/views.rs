//! Theme-dependent views of the NarrativeNet home page.
//!
//! Every view is a consumer of the preference: it receives the value to
//! render for and never reads storage itself. Mount views on a store with
//! [`Screen`](super::Screen) to have them re-rendered on every change.

use minijinja::Error;
use serde::Serialize;

use super::renderer::Renderer;
use crate::theme::ThemePreference;
use crate::util::truncate_to_width;

/// Display width of a collapsed card synopsis.
pub const SYNOPSIS_PREVIEW_WIDTH: usize = 72;

/// Something that renders differently in light and dark mode.
pub trait ThemedView {
    /// Identifies the view's output in a [`Screen`](super::Screen) frame.
    fn name(&self) -> &str;

    fn render(&self, renderer: &Renderer, preference: ThemePreference) -> Result<String, Error>;
}

impl<V: ThemedView + ?Sized> ThemedView for Box<V> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn render(&self, renderer: &Renderer, preference: ThemePreference) -> Result<String, Error> {
        (**self).render(renderer, preference)
    }
}

#[derive(Serialize)]
struct ToggleContext {
    checked: bool,
    next: ThemePreference,
}

impl ToggleContext {
    fn new(preference: ThemePreference) -> Self {
        Self {
            checked: preference.is_dark(),
            next: preference.toggled(),
        }
    }
}

/// The sun/checkbox/moon switch. Checked in dark mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeToggle;

impl ThemedView for ThemeToggle {
    fn name(&self) -> &str {
        "theme-toggle"
    }

    fn render(&self, renderer: &Renderer, preference: ThemePreference) -> Result<String, Error> {
        renderer.render("toggle.html", preference, &ToggleContext::new(preference))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// The top navigation bar, with the theme toggle at its right edge.
#[derive(Debug, Clone, Serialize)]
pub struct NavBar {
    pub brand: String,
    pub logo: String,
    pub links: Vec<NavLink>,
    /// Whether the search box is shown next to the search button.
    pub search_open: bool,
}

impl NavBar {
    pub fn with_search_open(mut self, open: bool) -> Self {
        self.search_open = open;
        self
    }
}

impl Default for NavBar {
    fn default() -> Self {
        Self {
            brand: "NarrativeNet".to_string(),
            logo: "/icons/logo.svg".to_string(),
            links: vec![NavLink::new("browse", "/browse")],
            search_open: false,
        }
    }
}

#[derive(Serialize)]
struct NavBarContext<'a> {
    #[serde(flatten)]
    nav: &'a NavBar,
    #[serde(flatten)]
    toggle: ToggleContext,
}

impl ThemedView for NavBar {
    fn name(&self) -> &str {
        "navbar"
    }

    fn render(&self, renderer: &Renderer, preference: ThemePreference) -> Result<String, Error> {
        let ctx = NavBarContext {
            nav: self,
            toggle: ToggleContext::new(preference),
        };
        renderer.render("navbar.html", preference, &ctx)
    }
}

/// The hero banner under the navigation bar.
#[derive(Debug, Clone, Serialize)]
pub struct HeroBanner {
    pub headline: String,
    pub tagline: String,
}

impl Default for HeroBanner {
    fn default() -> Self {
        Self {
            headline: "Welcome to NarrativeNet".to_string(),
            tagline: "Manga, light novels and web novels, all in one place.".to_string(),
        }
    }
}

impl ThemedView for HeroBanner {
    fn name(&self) -> &str {
        "hero"
    }

    fn render(&self, renderer: &Renderer, preference: ThemePreference) -> Result<String, Error> {
        renderer.render("hero.html", preference, self)
    }
}

/// One recommended book.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookCard {
    pub title: String,
    pub synopsis: String,
    pub image: String,
    pub rating: f32,
    pub views: u64,
    /// Collapsed cards show a truncated synopsis.
    pub expanded: bool,
}

impl BookCard {
    /// The synopsis as displayed: full when expanded, truncated otherwise.
    pub fn displayed_synopsis(&self) -> String {
        if self.expanded {
            self.synopsis.clone()
        } else {
            truncate_to_width(&self.synopsis, SYNOPSIS_PREVIEW_WIDTH)
        }
    }

    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }
}

#[derive(Serialize)]
struct CardContext<'a> {
    title: &'a str,
    synopsis: String,
    image: &'a str,
    rating: String,
    views: u64,
    expanded: bool,
}

impl<'a> From<&'a BookCard> for CardContext<'a> {
    fn from(card: &'a BookCard) -> Self {
        Self {
            title: &card.title,
            synopsis: card.displayed_synopsis(),
            image: &card.image,
            rating: format!("{:.1}", card.rating),
            views: card.views,
            expanded: card.expanded,
        }
    }
}

/// The recommendation card list.
#[derive(Debug, Clone)]
pub struct Recommendations {
    pub cards: Vec<BookCard>,
}

impl Recommendations {
    pub fn new(cards: Vec<BookCard>) -> Self {
        Self { cards }
    }

    /// Expands or collapses every card.
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        for card in &mut self.cards {
            card.expanded = expanded;
        }
        self
    }
}

impl Default for Recommendations {
    fn default() -> Self {
        Self::new(vec![BookCard {
            title: "Romance and Dummy Book 3".to_string(),
            synopsis: "Experience a tale of love and passion as two hearts entwine amidst \
                       the challenges of life. Can they overcome the obstacles and find \
                       true happiness?"
                .to_string(),
            image: "/images/th.jpeg".to_string(),
            rating: 4.5,
            views: 1200,
            expanded: false,
        }])
    }
}

#[derive(Serialize)]
struct RecommendationsContext<'a> {
    cards: Vec<CardContext<'a>>,
}

impl ThemedView for Recommendations {
    fn name(&self) -> &str {
        "recommendations"
    }

    fn render(&self, renderer: &Renderer, preference: ThemePreference) -> Result<String, Error> {
        let ctx = RecommendationsContext {
            cards: self.cards.iter().map(CardContext::from).collect(),
        };
        renderer.render("recommendations.html", preference, &ctx)
    }
}

/// The whole home page inside the app shell.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub navbar: NavBar,
    pub hero: HeroBanner,
    pub recommendations: Recommendations,
    /// Class attribute for `<html>`. `None` omits the attribute, as for a
    /// detached root.
    pub root_class: Option<String>,
}

impl Page {
    pub fn with_root_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.root_class = (!class.is_empty()).then_some(class);
        self
    }
}

#[derive(Serialize)]
struct PageContext<'a> {
    title: &'a str,
    root_class: Option<&'a str>,
    navbar: String,
    hero: String,
    recommendations: String,
}

impl ThemedView for Page {
    fn name(&self) -> &str {
        "page"
    }

    fn render(&self, renderer: &Renderer, preference: ThemePreference) -> Result<String, Error> {
        let ctx = PageContext {
            title: &self.navbar.brand,
            root_class: self.root_class.as_deref(),
            navbar: self.navbar.render(renderer, preference)?,
            hero: self.hero.render(renderer, preference)?,
            recommendations: self.recommendations.render(renderer, preference)?,
        };
        renderer.render("page.html", preference, &ctx)
    }
}
