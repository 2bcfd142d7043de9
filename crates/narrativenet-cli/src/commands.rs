//! Command-line definition and command handlers.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use console::style;
use narrativenet::{
    ClassTheme, DetachedRoot, DocumentRoot, FileStorage, InitialPreference, NavBar, Page,
    PresentationRoot, Recommendations, Renderer, StoreConfig, ThemePreference,
    ThemePreferenceStore, ThemedView,
};
use tracing::info;

type HostStore = ThemePreferenceStore<FileStorage, Box<dyn PresentationRoot>>;

#[derive(Debug, Parser)]
#[command(name = "narrativenet", version, about = "Show, change and render the NarrativeNet theme preference")]
pub struct Cli {
    /// JSON file holding the persisted preference
    #[arg(
        long,
        global = true,
        env = "NARRATIVENET_STATE_FILE",
        default_value = "narrativenet-storage.json"
    )]
    pub state_file: PathBuf,

    /// Use the OS color mode when no preference is saved
    #[arg(long, global = true)]
    pub follow_system: bool,

    /// Run without a presentation root (markers are not applied)
    #[arg(long, global = true)]
    pub detached: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current preference
    Show,
    /// Set the preference to light or dark
    Set {
        /// "light" or "dark"
        preference: String,
    },
    /// Switch between light and dark
    Toggle,
    /// Forget the saved preference
    Reset,
    /// Print the home page as HTML for the current preference
    Render {
        /// Show full card synopses
        #[arg(long)]
        expanded: bool,
        /// Show the search box in the navigation bar
        #[arg(long)]
        search: bool,
    },
}

impl Cli {
    fn store_config(&self) -> StoreConfig {
        let initial = if self.follow_system {
            InitialPreference::FollowSystem
        } else {
            InitialPreference::default()
        };
        StoreConfig::default().with_initial(initial)
    }

    fn open_store(&self) -> HostStore {
        let root: Box<dyn PresentationRoot> = if self.detached {
            Box::new(DetachedRoot)
        } else {
            Box::new(DocumentRoot::new())
        };
        ThemePreferenceStore::with_config(
            FileStorage::new(&self.state_file),
            root,
            self.store_config(),
        )
    }
}

/// Runs the selected command and returns what should be printed.
pub fn run(cli: &Cli) -> Result<String> {
    let mut store = cli.open_store();

    match &cli.command {
        Command::Show => Ok(describe(store.get_current())),
        Command::Set { preference } => {
            let pref = store
                .set_current_str(preference)
                .with_context(|| format!("could not set theme to '{preference}'"))?;
            info!(preference = %pref, file = %cli.state_file.display(), "theme preference saved");
            Ok(describe(pref))
        }
        Command::Toggle => {
            let pref = store.toggle().context("could not save toggled theme")?;
            info!(preference = %pref, file = %cli.state_file.display(), "theme preference toggled");
            Ok(describe(pref))
        }
        Command::Reset => {
            let pref = store.reset().context("could not clear saved theme")?;
            Ok(describe(pref))
        }
        Command::Render { expanded, search } => render_page(&mut store, *expanded, *search),
    }
}

fn render_page(store: &mut HostStore, expanded: bool, search: bool) -> Result<String> {
    let preference = store.get_current();
    let renderer =
        Renderer::new(ClassTheme::narrativenet()).context("failed to load page templates")?;

    let page = Page {
        navbar: NavBar::default().with_search_open(search),
        recommendations: Recommendations::default().with_expanded(expanded),
        ..Page::default()
    }
    .with_root_class(store.root().theme_markers().join(" "));

    page.render(&renderer, preference)
        .context("failed to render page")
}

fn describe(preference: ThemePreference) -> String {
    let name = match preference {
        ThemePreference::Light => style(preference).black().on_white(),
        ThemePreference::Dark => style(preference).white().on_black(),
    };
    format!("theme: {}", name.bold())
}
