//! # Application State
//!
//! Core state for pawlist. Domain logic only, no TUI types. Presentation
//! state (cursor, scroll offsets, toasts) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Vec<Dog>             // fixed seed list
//! ├── navigator: Navigator          // list / detail screen + selection
//! ├── title: String                 // shown in the title bar
//! ├── adopt_message: String         // toast text for the adopt button
//! └── status_message: String        // last thing that happened
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use log::debug;

use crate::core::catalog::{Dog, seed_catalog};
use crate::core::config::ResolvedConfig;
use crate::core::observable::{Observable, SubscriptionId};

/// Which screen is active. The selected dog lives inside `Detail`, so a
/// selection exists exactly when the detail screen is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    List,
    Detail(Dog),
}

impl Screen {
    pub fn on_detail_screen(&self) -> bool {
        matches!(self, Screen::Detail(_))
    }

    pub fn selected(&self) -> Option<&Dog> {
        match self {
            Screen::List => None,
            Screen::Detail(dog) => Some(dog),
        }
    }
}

/// Owns the screen selector and notifies subscribers when it changes.
#[derive(Debug, Default)]
pub struct Navigator {
    screen: Observable<Screen>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        self.screen.get()
    }

    pub fn on_detail_screen(&self) -> bool {
        self.screen().on_detail_screen()
    }

    pub fn selected(&self) -> Option<&Dog> {
        self.screen().selected()
    }

    /// Show `dog` on the detail screen, replacing any current selection.
    pub fn select(&mut self, dog: Dog) {
        debug!("navigate: select {}", dog.name);
        self.screen.set(Screen::Detail(dog));
    }

    /// Drop the selection and return to the list.
    pub fn clear_selection(&mut self) {
        debug!("navigate: clear selection");
        self.screen.set(Screen::List);
    }

    /// Handle a back request. Returns true if it was consumed in-app
    /// (detail → list), false if the caller should apply its default
    /// behaviour. Going back also clears the selection.
    pub fn go_back(&mut self) -> bool {
        if !self.on_detail_screen() {
            debug!("navigate: back on list screen, not handled");
            return false;
        }
        debug!("navigate: back to list");
        self.screen.set(Screen::List);
        true
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&Screen) + 'static) -> SubscriptionId {
        self.screen.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.screen.unsubscribe(id)
    }

    /// Number of screen changes published so far.
    pub fn version(&self) -> u64 {
        self.screen.version()
    }
}

pub struct App {
    pub catalog: Vec<Dog>,
    pub navigator: Navigator,
    pub title: String,
    pub adopt_message: String,
    pub status_message: String,
}

impl App {
    pub fn new(title: String, adopt_message: String) -> Self {
        Self {
            catalog: seed_catalog(),
            navigator: Navigator::new(),
            title,
            adopt_message,
            status_message: String::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.title.clone(), config.adopt_message.clone())
    }
}
