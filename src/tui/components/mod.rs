//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: Top status bar with the active screen and status
//! - `DogRow`: One list entry (thumbnail, name, age)
//! - `Toast`: Transient acknowledgement overlay
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state and emit events:
//! - `DogList`: Scrollable list screen with a highlight cursor
//! - `DetailView`: Detail screen with two focusable buttons
//!
//! Each component file co-locates its state type, event type, rendering,
//! event handling and tests.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── title_bar.rs  (Top status bar)
//! ├── dog_row.rs    (Single list row)
//! ├── dog_list.rs   (List screen)
//! ├── detail.rs     (Detail screen)
//! └── toast.rs      (Transient message)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod detail;
pub mod dog_list;
pub mod dog_row;
pub mod toast;
pub use detail::{DetailEvent, DetailState, DetailView};
pub use dog_list::{DogList, DogListState, ListEvent};
pub use toast::{Toast, ToastState};
