use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{DetailView, DogList, TitleBar, Toast};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

const LIST_HINTS: &str = " ↑↓ Move  Enter Open  Esc Exit ";
const DETAIL_HINTS: &str = " ↑↓ Focus  Enter Press  a Adopt  o Others  Esc Back ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    // The detail screen only exists with a dog in hand
    let (screen_label, hints) = match app.navigator.screen() {
        Screen::List => {
            DogList::new(&mut tui.dog_list, &app.catalog, &app.title).render(frame, main_area);
            (app.title.clone(), LIST_HINTS)
        }
        Screen::Detail(dog) => {
            DetailView::new(&mut tui.detail, dog).render(frame, main_area);
            (dog.name.clone(), DETAIL_HINTS)
        }
    };
    if tui.is_fading() {
        frame
            .buffer_mut()
            .set_style(main_area, Style::default().add_modifier(Modifier::DIM));
    }

    TitleBar::new(screen_label, app.status_message.clone()).render(frame, title_area);
    frame.render_widget(
        Line::styled(hints, Style::default().fg(Color::DarkGray)).centered(),
        help_area,
    );

    if let Some(toast) = &tui.toast {
        Toast::new(&toast.message).render(frame, main_area);
    }
}
