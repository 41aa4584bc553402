use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::router::Router;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{HelpBar, TitleBar};

pub fn draw_ui(frame: &mut Frame, router: &Router, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let help_height = if tui.show_help { 1 } else { 0 };
    let layout = Layout::vertical([Length(1), Min(0), Length(help_height)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    let status = tui.status.borrow();
    TitleBar::new(router.path(), router.is_modal_presented(), &status).render(frame, title_area);
    drop(status);

    tui.coordinator.render(frame, main_area, router);

    if tui.show_help {
        HelpBar::new(router.is_at_root(), router.is_modal_presented()).render(frame, help_area);
    }
}
