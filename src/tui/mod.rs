//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop never polls core state for changes. It subscribes to the
//! navigator once at startup; every screen change flips a shared dirty flag
//! that the loop checks before drawing. Terminal events and animation ticks
//! (scroll-to-top, toast expiry) also request a frame.
//!
//! - **Animating** (scroll-to-top or screen fade running): draws every ~60ms.
//! - **Toast visible**: wakes every ~100ms to notice expiry.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info};
use std::cell::Cell;
use std::io::{self, stdout};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Screen};
use crate::tui::component::EventHandler;
use crate::tui::components::{DetailEvent, DetailState, DogListState, ListEvent, ToastState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core navigation state)
pub struct TuiState {
    pub dog_list: DogListState,
    pub detail: DetailState,
    /// Visible acknowledgement (None = hidden)
    pub toast: Option<ToastState>,
    toast_duration: Duration,
    scroll_animation: bool,
    /// Dimmed frames left after a screen change (0 = fully drawn)
    fade_frames: u8,
}

/// Frames a newly shown screen stays dimmed before it is drawn at full strength.
const FADE_FRAMES: u8 = 3;

impl TuiState {
    pub fn new(config: &ResolvedConfig, row_count: usize) -> Self {
        Self {
            dog_list: DogListState::new(row_count),
            detail: DetailState::new(),
            toast: None,
            toast_duration: Duration::from_millis(config.toast_ms),
            scroll_animation: config.scroll_animation,
            fade_frames: 0,
        }
    }

    pub fn show_toast(&mut self, message: String, now: Instant) {
        self.toast = Some(ToastState::new(message, now, self.toast_duration));
    }

    /// React to a published screen change.
    pub fn on_screen_change(&mut self, on_detail: bool) {
        if self.scroll_animation {
            self.fade_frames = FADE_FRAMES;
        }
        if on_detail {
            self.detail = DetailState::new();
        } else {
            self.dog_list.begin_scroll_to_top(self.scroll_animation);
        }
    }

    /// Advance timers. Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.dog_list.tick();
        if self.fade_frames > 0 {
            self.fade_frames -= 1;
            changed = true;
        }
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            debug!("Toast expired");
            self.toast = None;
            changed = true;
        }
        changed
    }

    /// True while the active screen is still fading in.
    pub fn is_fading(&self) -> bool {
        self.fade_frames > 0
    }

    fn poll_timeout(&self) -> Duration {
        if self.dog_list.is_animating() || self.is_fading() {
            Duration::from_millis(60)
        } else if self.toast.is_some() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(500)
        }
    }
}

/// Flags written by the navigator subscription and drained by the loop.
#[derive(Clone, Default)]
struct ScreenSignals {
    dirty: Rc<Cell<bool>>,
    /// Latest screen seen by the subscription, if it changed since last drain.
    changed_to_detail: Rc<Cell<Option<bool>>>,
}

impl ScreenSignals {
    fn subscriber(&self) -> impl FnMut(&Screen) + 'static {
        let signals = self.clone();
        move |screen| {
            signals.dirty.set(true);
            signals.changed_to_detail.set(Some(screen.on_detail_screen()));
        }
    }

    fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    fn take_screen_change(&self) -> Option<bool> {
        self.changed_to_detail.take()
    }

    /// Reset presentation state for a screen change published since the
    /// last call. Must run before the next event is routed.
    fn apply_screen_change(&self, tui: &mut TuiState) {
        if let Some(on_detail) = self.take_screen_change() {
            tui.on_screen_change(on_detail);
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Route one input event. Returns true when the app should exit.
fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent, now: Instant) -> bool {
    let action = match event {
        TuiEvent::Resize => return false,
        TuiEvent::ForceQuit | TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Back => Some(Action::Back),
        _ if app.navigator.on_detail_screen() => {
            tui.detail.handle_event(&event).map(|detail_event| match detail_event {
                DetailEvent::Adopt => Action::Adopt,
                DetailEvent::SeeOthers => Action::SeeOthers,
            })
        }
        _ => tui
            .dog_list
            .handle_event(&event)
            .map(|ListEvent::Open(index)| Action::Open(index)),
    };

    let Some(action) = action else {
        return false;
    };
    match update(app, action) {
        Effect::None => false,
        Effect::Toast(message) => {
            tui.show_toast(message, now);
            false
        }
        Effect::Quit => true,
    }
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&config, app.catalog.len());

    let signals = ScreenSignals::default();
    app.navigator.subscribe(signals.subscriber());

    let mut terminal = ratatui::try_init()?;
    let result = event_loop(&mut terminal, &mut app, &mut tui, &signals);
    ratatui::restore();
    info!("Exiting after {} screen changes", app.navigator.version());
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    signals: &ScreenSignals,
) -> io::Result<()> {
    let _terminal_mode_guard = TerminalModeGuard::new()?;
    let mut needs_redraw = true; // Force first frame

    loop {
        if signals.take_dirty() {
            needs_redraw = true;
        }
        if tui.tick(Instant::now()) {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let mut next = poll_event_timeout(tui.poll_timeout())?;
        while let Some(event) = next {
            // Cursor moves and scrolling change presentation state only,
            // so they don't go through the navigator subscription
            needs_redraw = true;
            if dispatch(app, tui, event, Instant::now()) {
                return Ok(());
            }
            // Later events in this batch must see the new screen's state
            signals.apply_screen_change(tui);
            next = poll_event_immediate()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use crate::tui::components::detail::DetailButton;

    fn setup() -> (App, TuiState, ScreenSignals) {
        let mut app = test_app();
        let tui = TuiState::new(&ResolvedConfig::default(), app.catalog.len());
        let signals = ScreenSignals::default();
        app.navigator.subscribe(signals.subscriber());
        (app, tui, signals)
    }

    #[test]
    fn test_enter_opens_highlighted_dog() {
        let (mut app, mut tui, signals) = setup();
        let now = Instant::now();
        assert!(!dispatch(&mut app, &mut tui, TuiEvent::CursorDown, now));
        assert!(!signals.take_dirty());

        assert!(!dispatch(&mut app, &mut tui, TuiEvent::Submit, now));
        assert_eq!(
            app.navigator.selected().map(|d| d.name.as_str()),
            Some("edison1")
        );
        assert!(signals.take_dirty());
        assert_eq!(signals.take_screen_change(), Some(true));
        assert_eq!(signals.take_screen_change(), None);
    }

    #[test]
    fn test_back_on_list_exits() {
        let (mut app, mut tui, signals) = setup();
        assert!(dispatch(&mut app, &mut tui, TuiEvent::Back, Instant::now()));
        assert!(!signals.take_dirty());
    }

    #[test]
    fn test_back_on_detail_returns_to_list() {
        let (mut app, mut tui, signals) = setup();
        let now = Instant::now();
        dispatch(&mut app, &mut tui, TuiEvent::Submit, now);
        assert!(!dispatch(&mut app, &mut tui, TuiEvent::Back, now));
        assert!(!app.navigator.on_detail_screen());
        assert_eq!(signals.take_screen_change(), Some(false));
    }

    #[test]
    fn test_adopt_shows_toast_until_expiry() {
        let (mut app, mut tui, _signals) = setup();
        let now = Instant::now();
        dispatch(&mut app, &mut tui, TuiEvent::Submit, now);
        assert!(!dispatch(&mut app, &mut tui, TuiEvent::InputChar('a'), now));

        assert!(!app.navigator.on_detail_screen());
        assert_eq!(
            tui.toast.as_ref().map(|t| t.message.as_str()),
            Some("Belong to you!")
        );

        assert!(!tui.tick(now + Duration::from_millis(10)));
        assert!(tui.tick(now + Duration::from_secs(60)));
        assert!(tui.toast.is_none());
    }

    #[test]
    fn test_detail_keys_ignored_on_list() {
        let (mut app, mut tui, _signals) = setup();
        assert!(!dispatch(&mut app, &mut tui, TuiEvent::InputChar('a'), Instant::now()));
        assert!(tui.toast.is_none());
        assert!(!app.navigator.on_detail_screen());
    }

    #[test]
    fn test_see_others_button_via_focus() {
        let (mut app, mut tui, _signals) = setup();
        let now = Instant::now();
        dispatch(&mut app, &mut tui, TuiEvent::Submit, now);
        tui.on_screen_change(true);
        dispatch(&mut app, &mut tui, TuiEvent::FocusNext, now);
        dispatch(&mut app, &mut tui, TuiEvent::Submit, now);
        assert!(!app.navigator.on_detail_screen());
        assert!(tui.toast.is_none());
    }

    #[test]
    fn test_entering_detail_resets_button_focus() {
        let (_app, mut tui, _signals) = setup();
        tui.detail.handle_event(&TuiEvent::FocusNext);
        tui.on_screen_change(true);
        assert_eq!(tui.detail.focus, DetailButton::Adopt);
    }

    #[test]
    fn test_batched_back_then_enter_opens_first_dog() {
        let (mut app, mut tui, signals) = setup();
        let now = Instant::now();
        for _ in 0..3 {
            dispatch(&mut app, &mut tui, TuiEvent::CursorDown, now);
        }
        dispatch(&mut app, &mut tui, TuiEvent::Submit, now);
        signals.apply_screen_change(&mut tui);
        assert_eq!(
            app.navigator.selected().map(|d| d.name.as_str()),
            Some("lucas1")
        );

        // Esc and Enter drained in one batch, as the event loop does it
        for event in [TuiEvent::Back, TuiEvent::Submit] {
            dispatch(&mut app, &mut tui, event, now);
            signals.apply_screen_change(&mut tui);
        }
        assert_eq!(
            app.navigator.selected().map(|d| d.name.as_str()),
            Some("bronx1")
        );
    }

    #[test]
    fn test_batched_reentry_focuses_adopt() {
        let (mut app, mut tui, signals) = setup();
        let now = Instant::now();
        for event in [
            TuiEvent::Submit,
            TuiEvent::FocusNext,
            TuiEvent::Back,
            TuiEvent::Submit,
            TuiEvent::Submit,
        ] {
            dispatch(&mut app, &mut tui, event, now);
            signals.apply_screen_change(&mut tui);
        }
        assert_eq!(
            tui.toast.as_ref().map(|t| t.message.as_str()),
            Some("Belong to you!")
        );
        assert_eq!(app.status_message, "Adopted bronx1");
    }

    #[test]
    fn test_screen_change_fades_in_over_ticks() {
        let (_app, mut tui, _signals) = setup();
        assert!(!tui.is_fading());
        tui.on_screen_change(true);
        assert!(tui.is_fading());
        assert_eq!(tui.poll_timeout(), Duration::from_millis(60));

        let now = Instant::now();
        for _ in 0..FADE_FRAMES {
            assert!(tui.tick(now));
        }
        assert!(!tui.is_fading());
        assert!(!tui.tick(now));
    }

    #[test]
    fn test_fade_disabled_with_scroll_animation_off() {
        let config = ResolvedConfig {
            scroll_animation: false,
            ..ResolvedConfig::default()
        };
        let mut tui = TuiState::new(&config, 12);
        tui.on_screen_change(false);
        assert!(!tui.is_fading());
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, mut tui, _signals) = setup();
        let now = Instant::now();
        assert!(dispatch(&mut app, &mut tui, TuiEvent::Quit, now));
        dispatch(&mut app, &mut tui, TuiEvent::Submit, now);
        assert!(dispatch(&mut app, &mut tui, TuiEvent::ForceQuit, now));
    }
}
