//! # DogList Component
//!
//! The list screen: a bordered, vertically scrolling column of [`DogRow`]s.
//!
//! ## Architecture
//!
//! `DogList` is a transient component (created each frame) that wraps
//! `&'a mut DogListState` (persistent state) and the catalog (props).
//! The render pass records the viewport rectangle in the state so mouse
//! clicks and page movement can be resolved between frames.
//!
//! ## Scroll-to-top on entry
//!
//! Whenever the list screen becomes active again the viewport glides back
//! to the top, halving the remaining distance on each tick.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::Dog;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::dog_row::{DogRow, ROW_HEIGHT};
use crate::tui::event::TuiEvent;

/// Events emitted by the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    Open(usize),
}

/// Cursor and scroll state for the list screen.
/// Must be persisted in the parent TuiState.
pub struct DogListState {
    /// Highlighted row
    pub selected: usize,
    pub scroll_state: ScrollViewState,
    /// Content area from the last render (inside the border)
    pub viewport: Rect,
    row_count: usize,
    scrolling_to_top: bool,
}

impl DogListState {
    pub fn new(row_count: usize) -> Self {
        Self {
            selected: 0,
            scroll_state: ScrollViewState::default(),
            viewport: Rect::default(),
            row_count,
            scrolling_to_top: false,
        }
    }

    pub fn offset_y(&self) -> u16 {
        self.scroll_state.offset().y
    }

    fn content_height(&self) -> u16 {
        (self.row_count as u16).saturating_mul(ROW_HEIGHT)
    }

    fn set_offset_y(&mut self, y: u16) {
        self.scroll_state.set_offset(Position { x: 0, y });
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height().saturating_sub(self.viewport.height);
        if self.offset_y() > max_y {
            self.set_offset_y(max_y);
        }
    }

    /// Scroll the viewport so the highlighted row is fully visible.
    pub fn scroll_to_selected(&mut self) {
        if self.viewport.height == 0 {
            return;
        }
        let top = self.selected as u16 * ROW_HEIGHT;
        let bottom = top + ROW_HEIGHT;
        let offset = self.offset_y();
        if top < offset {
            self.set_offset_y(top);
        } else if bottom > offset + self.viewport.height {
            self.set_offset_y(bottom.saturating_sub(self.viewport.height));
        }
        self.clamp_scroll();
    }

    /// Reset the cursor and head back to the top, gliding if `animate`.
    pub fn begin_scroll_to_top(&mut self, animate: bool) {
        self.selected = 0;
        if animate && self.offset_y() > 0 {
            self.scrolling_to_top = true;
        } else {
            self.scrolling_to_top = false;
            self.set_offset_y(0);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.scrolling_to_top
    }

    /// Advance the scroll-to-top animation. Returns true if the offset moved.
    pub fn tick(&mut self) -> bool {
        if !self.scrolling_to_top {
            return false;
        }
        let y = self.offset_y();
        let next = y - (y / 2).max(1).min(y);
        self.set_offset_y(next);
        if next == 0 {
            self.scrolling_to_top = false;
        }
        next != y
    }

    /// Row index under a screen position, if any.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.viewport.contains(Position { x: column, y: row }) {
            return None;
        }
        let content_y = (row - self.viewport.y) + self.offset_y();
        let index = (content_y / ROW_HEIGHT) as usize;
        (index < self.row_count).then_some(index)
    }

    fn rows_per_page(&self) -> usize {
        (self.viewport.height / ROW_HEIGHT).max(1) as usize
    }

    fn move_cursor(&mut self, to: usize) {
        if self.row_count == 0 {
            return;
        }
        self.scrolling_to_top = false;
        self.selected = to.min(self.row_count - 1);
        self.scroll_to_selected();
    }
}

impl EventHandler for DogListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.move_cursor(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                self.move_cursor(self.selected + 1);
                None
            }
            TuiEvent::PageUp => {
                self.move_cursor(self.selected.saturating_sub(self.rows_per_page()));
                None
            }
            TuiEvent::PageDown => {
                self.move_cursor(self.selected + self.rows_per_page());
                None
            }
            TuiEvent::Home => {
                self.move_cursor(0);
                None
            }
            TuiEvent::End => {
                self.move_cursor(self.row_count.saturating_sub(1));
                None
            }
            TuiEvent::ScrollUp => {
                self.scrolling_to_top = false;
                self.set_offset_y(self.offset_y().saturating_sub(1));
                None
            }
            TuiEvent::ScrollDown => {
                self.scrolling_to_top = false;
                self.set_offset_y(self.offset_y() + 1);
                self.clamp_scroll();
                None
            }
            TuiEvent::Submit if self.row_count > 0 => Some(ListEvent::Open(self.selected)),
            TuiEvent::MouseClick(column, row) => {
                let index = self.row_at(*column, *row)?;
                self.selected = index;
                Some(ListEvent::Open(index))
            }
            _ => None,
        }
    }
}

/// Scrollable list of dogs. Created fresh each frame.
pub struct DogList<'a> {
    pub state: &'a mut DogListState,
    pub dogs: &'a [Dog],
    pub title: &'a str,
}

impl<'a> DogList<'a> {
    pub fn new(state: &'a mut DogListState, dogs: &'a [Dog], title: &'a str) -> Self {
        Self { state, dogs, title }
    }
}

impl Component for DogList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.state.row_count = self.dogs.len();
        self.state.viewport = inner;
        self.state.clamp_scroll();
        if inner.is_empty() {
            return;
        }

        let content_width = inner.width.saturating_sub(1); // -1 for scrollbar
        let mut scroll_view = ScrollView::new(Size::new(content_width, self.state.content_height()))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (index, dog) in self.dogs.iter().enumerate() {
            let row_rect = Rect::new(0, index as u16 * ROW_HEIGHT, content_width, ROW_HEIGHT);
            scroll_view.render_widget(DogRow::new(dog, index == self.state.selected), row_rect);
        }

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}
