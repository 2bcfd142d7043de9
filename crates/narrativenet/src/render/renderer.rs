//! Pre-compiled template renderer.

use minijinja::{context, Environment, Error, Value};
use serde::Serialize;

use super::filters::register_filters;
use crate::theme::{ClassTheme, ThemePreference};

/// Templates for the built-in views, registered by [`Renderer::new`].
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("toggle.html", include_str!("../../templates/toggle.html")),
    ("navbar.html", include_str!("../../templates/navbar.html")),
    ("hero.html", include_str!("../../templates/hero.html")),
    (
        "recommendations.html",
        include_str!("../../templates/recommendations.html"),
    ),
    ("page.html", include_str!("../../templates/page.html")),
];

/// A renderer with pre-registered templates.
///
/// Templates are compiled once. Every render receives the preference it
/// should render for; it is exposed to templates as `theme` and drives the
/// `cls` filter.
///
/// # Example
///
/// ```rust
/// use narrativenet::{ClassTheme, Renderer, ThemePreference};
/// use serde::Serialize;
///
/// let classes = ClassTheme::new().add("box", "bg-white", "bg-black");
/// let mut renderer = Renderer::new(classes).unwrap();
/// renderer.add_template("box.html", r#"<div class="{{ "box" | cls }}">{{ label }}</div>"#).unwrap();
///
/// #[derive(Serialize)]
/// struct Data { label: String }
///
/// let html = renderer
///     .render("box.html", ThemePreference::Dark, &Data { label: "hi".into() })
///     .unwrap();
/// assert_eq!(html, r#"<div class="bg-black">hi</div>"#);
/// ```
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer with the built-in view templates.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to compile.
    pub fn new(classes: ClassTheme) -> Result<Self, Error> {
        let mut env = Environment::new();
        register_filters(&mut env, classes);
        for &(name, source) in BUILTIN_TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    /// Registering an existing name replaces it.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered template for `preference`.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails.
    pub fn render<T: Serialize>(
        &self,
        name: &str,
        preference: ThemePreference,
        data: &T,
    ) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(context! { theme => preference, ..Value::from_serialize(data) })
    }
}
