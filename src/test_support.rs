//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::catalog::{Avatar, Dog};
use crate::core::config::{DEFAULT_ADOPT_MESSAGE, DEFAULT_TITLE};
use crate::core::state::App;

/// Creates a test App with the default title and adopt message.
pub fn test_app() -> App {
    App::new(DEFAULT_TITLE.to_string(), DEFAULT_ADOPT_MESSAGE.to_string())
}

pub fn sample_dog() -> Dog {
    Dog::new("bronx1", 1, Avatar::Bronx)
}

/// Flattens a rendered buffer into one string per row.
pub fn buffer_lines(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
