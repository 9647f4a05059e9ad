//! # TitleBar Component
//!
//! Top status bar: application name, the active screen and the latest
//! status message.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Dog list".into(), "Viewing bronx1".into());
//! title_bar.render(frame, area);
//! ```
//!
//! The text changes based on state:
//!
//! 1. **Status message**: `"pawlist · bronx1 | Viewing bronx1"`
//! 2. **Default**: `"pawlist · Dog list"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Name of the active screen
    pub screen_label: String,
    /// Last thing that happened (e.g., "Adopted bronx1")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(screen_label: String, status_message: String) -> Self {
        Self {
            screen_label,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                env!("CARGO_PKG_NAME"),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            Span::raw(self.screen_label.clone()),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::Gray),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
