//! # DogRow Component
//!
//! One entry on the list screen: a two-line thumbnail on the left, the
//! dog's name and age stacked on the right.
//!
//! ```text
//! ┊ o'')}__  name bronx1
//! ┊  `_/ _)  age 1
//! ```
//!
//! Rows are rendered into a `ScrollView` buffer rather than the frame, so
//! this is a plain ratatui `Widget` instead of a [`Component`].
//!
//! [`Component`]: crate::tui::component::Component

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::core::catalog::{Avatar, Dog};

/// Lines occupied by a row, including the gap below it.
pub const ROW_HEIGHT: u16 = 3;

const THUMBNAIL_GAP: &str = "  ";

pub struct DogRow<'a> {
    pub dog: &'a Dog,
    pub highlighted: bool,
}

impl<'a> DogRow<'a> {
    pub fn new(dog: &'a Dog, highlighted: bool) -> Self {
        Self { dog, highlighted }
    }

    fn lines(&self, width: u16) -> Vec<Line<'a>> {
        let [thumb_top, thumb_bottom] = self.dog.avatar.thumbnail();
        let marker = if self.highlighted { "▌ " } else { "  " };
        let thumb_style = avatar_style(self.dog.avatar);
        let (name_style, age_style) = if self.highlighted {
            (
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
                Style::default().fg(Color::Gray),
            )
        } else {
            (
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::DarkGray),
            )
        };

        let text_width = (width as usize)
            .saturating_sub(marker.width() + thumb_top.width() + THUMBNAIL_GAP.width());
        let name = truncate_to_width(&format!("name {}", self.dog.name), text_width);
        let age = truncate_to_width(&format!("age {}", self.dog.age), text_width);

        vec![
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(thumb_top, thumb_style),
                Span::raw(THUMBNAIL_GAP),
                Span::styled(name, name_style),
            ]),
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(thumb_bottom, thumb_style),
                Span::raw(THUMBNAIL_GAP),
                Span::styled(age, age_style),
            ]),
        ]
    }
}

impl Widget for DogRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(area.width);
        Paragraph::new(lines).render(area, buf);
    }
}

/// Accent color for each bundled image.
pub fn avatar_style(avatar: Avatar) -> Style {
    let color = match avatar {
        Avatar::Bronx => Color::LightYellow,
        Avatar::Edison => Color::LightCyan,
        Avatar::Gunner => Color::LightMagenta,
        Avatar::Lucas => Color::LightGreen,
    };
    Style::default().fg(color)
}

/// Cut `s` to at most `max_width` display columns, ending in "…" when cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_lines, sample_dog};

    #[test]
    fn test_row_shows_name_and_age() {
        let dog = sample_dog();
        let area = Rect::new(0, 0, 40, ROW_HEIGHT);
        let mut buf = Buffer::empty(area);

        DogRow::new(&dog, false).render(area, &mut buf);

        let lines = buffer_lines(&buf);
        assert!(lines[0].contains("name bronx1"));
        assert!(lines[1].contains("age 1"));
        assert!(lines[0].contains("o'')}__"));
        assert!(lines[2].trim().is_empty());
    }

    #[test]
    fn test_highlight_marker() {
        let dog = sample_dog();
        let area = Rect::new(0, 0, 40, ROW_HEIGHT);
        let mut buf = Buffer::empty(area);

        DogRow::new(&dog, true).render(area, &mut buf);

        assert!(buffer_lines(&buf)[0].starts_with('▌'));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("name bronx1", 20), "name bronx1");
        assert_eq!(truncate_to_width("name bronx1", 6), "name …");
        assert_eq!(truncate_to_width("name", 0), "");
    }

    #[test]
    fn test_narrow_row_truncates_name() {
        let dog = Dog::new("a-very-long-dog-name", 1, Avatar::Gunner);
        let row = DogRow::new(&dog, false);
        let lines = row.lines(20);
        let width: usize = lines[0].spans.iter().map(|s| s.content.width()).sum();
        assert!(width <= 20);
    }
}
