//! # Actions
//!
//! Everything that can happen in pawlist becomes an `Action`.
//! User presses Enter on a row? That's `Action::Open(index)`.
//! User presses Esc? That's `Action::Back`.
//!
//! `update()` takes the current state and an action, mutates the state,
//! and returns an `Effect` describing what the adapter should do next.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open the catalog entry at this index on the detail screen.
    Open(usize),
    /// "Adopt" button on the detail screen.
    Adopt,
    /// "See others" button on the detail screen.
    SeeOthers,
    /// Platform back signal.
    Back,
    Quit,
}

/// Side effects the adapter must carry out after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Show a transient acknowledgement.
    Toast(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Open(index) => {
            let Some(dog) = app.catalog.get(index).cloned() else {
                warn!(
                    "Ignoring open of index {} (catalog has {} entries)",
                    index,
                    app.catalog.len()
                );
                return Effect::None;
            };
            app.status_message = format!("Viewing {}", dog.name);
            app.navigator.select(dog);
            Effect::None
        }
        Action::Adopt => {
            let Some(name) = app.navigator.selected().map(|d| d.name.clone()) else {
                debug!("Adopt outside the detail screen, ignoring");
                return Effect::None;
            };
            info!("Adopt requested for {}", name);
            app.status_message = format!("Adopted {}", name);
            app.navigator.clear_selection();
            Effect::Toast(app.adopt_message.clone())
        }
        Action::SeeOthers => {
            if !app.navigator.on_detail_screen() {
                return Effect::None;
            }
            app.status_message.clear();
            app.navigator.clear_selection();
            Effect::None
        }
        Action::Back => {
            if app.navigator.go_back() {
                app.status_message.clear();
                Effect::None
            } else {
                info!("Back on the list screen, exiting");
                Effect::Quit
            }
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Screen;
    use crate::test_support::test_app;

    #[test]
    fn test_open_selects_catalog_entry() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Open(2)), Effect::None);
        assert_eq!(
            app.navigator.selected().map(|d| d.name.as_str()),
            Some("gunner1")
        );
        assert_eq!(app.status_message, "Viewing gunner1");
    }

    #[test]
    fn test_open_out_of_range_is_ignored() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Open(12)), Effect::None);
        assert_eq!(*app.navigator.screen(), Screen::List);
        assert_eq!(app.navigator.version(), 0);
    }

    #[test]
    fn test_adopt_toasts_and_returns_to_list() {
        let mut app = test_app();
        update(&mut app, Action::Open(0));
        let effect = update(&mut app, Action::Adopt);
        assert_eq!(effect, Effect::Toast("Belong to you!".to_string()));
        assert_eq!(*app.navigator.screen(), Screen::List);
        assert_eq!(app.status_message, "Adopted bronx1");
    }

    #[test]
    fn test_adopt_on_list_does_nothing() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Adopt), Effect::None);
        assert_eq!(app.navigator.version(), 0);
    }

    #[test]
    fn test_see_others_returns_to_list() {
        let mut app = test_app();
        update(&mut app, Action::Open(5));
        assert_eq!(update(&mut app, Action::SeeOthers), Effect::None);
        assert!(!app.navigator.on_detail_screen());
    }

    #[test]
    fn test_back_from_detail_is_handled() {
        let mut app = test_app();
        update(&mut app, Action::Open(1));
        assert_eq!(update(&mut app, Action::Back), Effect::None);
        assert_eq!(*app.navigator.screen(), Screen::List);
    }

    #[test]
    fn test_back_on_list_quits() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Back), Effect::Quit);
        assert_eq!(*app.navigator.screen(), Screen::List);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
