//! # Toast Component
//!
//! A short acknowledgement floated near the bottom of the screen that
//! disappears on its own once its deadline passes.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

const TOAST_HEIGHT: u16 = 3;
/// Rows kept free between the toast and the bottom edge.
const BOTTOM_MARGIN: u16 = 2;

#[derive(Debug, Clone)]
pub struct ToastState {
    pub message: String,
    expires_at: Instant,
}

impl ToastState {
    pub fn new(message: String, now: Instant, duration: Duration) -> Self {
        Self {
            message,
            expires_at: now + duration,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

pub struct Toast<'a> {
    pub message: &'a str,
}

impl<'a> Toast<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Where the toast lands inside `area`: horizontally centered, just
    /// above the bottom margin, clipped to the area.
    pub fn placement(&self, area: Rect) -> Rect {
        let width = (self.message.width() as u16 + 4).min(area.width);
        let height = TOAST_HEIGHT.min(area.height);
        let x = area.x + (area.width - width) / 2;
        let y = area.y
            + area
                .height
                .saturating_sub(height + BOTTOM_MARGIN)
                .min(area.height - height);
        Rect::new(x, y, width, height)
    }
}

impl Component for Toast<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = self.placement(area);
        frame.render_widget(Clear, overlay);
        let paragraph = Paragraph::new(self.message)
            .style(Style::default().fg(Color::Black).bg(Color::LightYellow).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(Style::default().fg(Color::Yellow).bg(Color::LightYellow)));
        frame.render_widget(paragraph, overlay);
    }
}
