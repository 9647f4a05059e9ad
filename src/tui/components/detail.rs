//! # Detail Component
//!
//! The detail screen for one dog: a framed header image, the dog's name and
//! age, and two buttons.
//!
//! ```text
//! ┌ bronx1 ───────────────────────┐
//! │┌─────────────────────────────┐│
//! ││        o'')}____//          ││
//! │└─────────────────────────────┘│
//! │ name bronx1 · age 1           │
//! │┌─────────────────────────────┐│
//! ││     I want to adoption!     ││
//! │└─────────────────────────────┘│
//! │┌─────────────────────────────┐│
//! ││    I want to see others     ││
//! │└─────────────────────────────┘│
//! └───────────────────────────────┘
//! ```
//!
//! The dog is a prop, so the screen can only be drawn when the caller holds
//! one. Button rectangles from the last render are kept in `DetailState`
//! for mouse hit testing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::catalog::Dog;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::dog_row::avatar_style;
use crate::tui::event::TuiEvent;

pub const ADOPT_LABEL: &str = "I want to adoption!";
pub const SEE_OTHERS_LABEL: &str = "I want to see others";

const BUTTON_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailButton {
    #[default]
    Adopt,
    SeeOthers,
}

impl DetailButton {
    fn toggle(self) -> Self {
        match self {
            DetailButton::Adopt => DetailButton::SeeOthers,
            DetailButton::SeeOthers => DetailButton::Adopt,
        }
    }

    fn event(self) -> DetailEvent {
        match self {
            DetailButton::Adopt => DetailEvent::Adopt,
            DetailButton::SeeOthers => DetailEvent::SeeOthers,
        }
    }
}

/// Events emitted by the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    Adopt,
    SeeOthers,
}

#[derive(Debug, Default)]
pub struct DetailState {
    pub focus: DetailButton,
    header_rect: Rect,
    adopt_rect: Rect,
    see_others_rect: Rect,
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    fn hit_test(&self, column: u16, row: u16) -> Option<DetailEvent> {
        let position = Position { x: column, y: row };
        if self.adopt_rect.contains(position) {
            Some(DetailEvent::Adopt)
        } else if self.see_others_rect.contains(position) || self.header_rect.contains(position) {
            // Tapping the picture also goes back to the list
            Some(DetailEvent::SeeOthers)
        } else {
            None
        }
    }
}

impl EventHandler for DetailState {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        match event {
            TuiEvent::CursorUp
            | TuiEvent::CursorDown
            | TuiEvent::CursorLeft
            | TuiEvent::CursorRight
            | TuiEvent::FocusNext
            | TuiEvent::FocusPrev => {
                self.focus = self.focus.toggle();
                None
            }
            TuiEvent::Submit => Some(self.focus.event()),
            TuiEvent::InputChar('a') => Some(DetailEvent::Adopt),
            TuiEvent::InputChar('o') => Some(DetailEvent::SeeOthers),
            TuiEvent::MouseClick(column, row) => self.hit_test(*column, *row),
            _ => None,
        }
    }
}

/// Transient render wrapper for the detail screen.
pub struct DetailView<'a> {
    pub state: &'a mut DetailState,
    pub dog: &'a Dog,
}

impl<'a> DetailView<'a> {
    pub fn new(state: &'a mut DetailState, dog: &'a Dog) -> Self {
        Self { state, dog }
    }
}

impl Component for DetailView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(format!(" {} ", self.dog.name))
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let art = self.dog.avatar.art();
        let art_height = art.lines().count() as u16;

        let [header, _, caption, _, adopt, _, see_others, _] = Layout::vertical([
            Constraint::Length(art_height + 2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(inner);

        // Pad to a common width so centering keeps the art's columns aligned
        let art_width = art.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let art_lines: Vec<Line> = art
            .lines()
            .map(|l| Line::raw(format!("{l:<art_width$}")))
            .collect();
        let header_image = Paragraph::new(art_lines)
            .style(avatar_style(self.dog.avatar))
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
        frame.render_widget(header_image, header);

        let caption_line = Line::from(vec![
            Span::styled(
                format!("name {}", self.dog.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("age {}", self.dog.age)),
        ]);
        frame.render_widget(Paragraph::new(caption_line), caption);

        render_button(frame, adopt, ADOPT_LABEL, self.state.focus == DetailButton::Adopt);
        render_button(
            frame,
            see_others,
            SEE_OTHERS_LABEL,
            self.state.focus == DetailButton::SeeOthers,
        );

        self.state.header_rect = header;
        self.state.adopt_rect = adopt;
        self.state.see_others_rect = see_others;
    }
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let (text_style, border_style) = if focused {
        (
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Yellow),
        )
    } else {
        (Style::default().fg(Color::Gray), Style::default().fg(Color::DarkGray))
    };
    let button = Paragraph::new(label)
        .style(text_style)
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(border_style));
    frame.render_widget(button, area);
}
