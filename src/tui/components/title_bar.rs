//! # TitleBar Component
//!
//! Top bar showing where the user is and what just happened.
//!
//! ## Responsibilities
//!
//! - Breadcrumbs for the navigation path (`Home › Child One › Child Two`)
//! - A `[sheet]` marker while the modal is presented
//! - The last navigation change as a status message
//!
//! ## Design
//!
//! TitleBar is purely presentational: it receives everything as props and
//! has no internal state. The parent builds it fresh each frame:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(router.path(), router.is_modal_presented(), &status);
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Sheet + status**: `"Waypoint │ Home › Child One [sheet] │ sheet shown"`
//! 2. **Status only**: `"Waypoint │ Home › Child One │ pushed Child One"`
//! 3. **Default**: `"Waypoint │ Home"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::destination::Destination;
use crate::tui::component::Component;

const SEPARATOR: &str = " › ";

pub struct TitleBar<'a> {
    pub path: &'a [Destination],
    pub modal_presented: bool,
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(path: &'a [Destination], modal_presented: bool, status_message: &'a str) -> Self {
        Self {
            path,
            modal_presented,
            status_message,
        }
    }

    /// `Home › Child One › ...` for the current path.
    pub fn breadcrumbs(&self) -> String {
        std::iter::once("Home")
            .chain(self.path.iter().map(|d| d.title()))
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let dim = Style::default().fg(Color::DarkGray);
        let mut spans = vec![
            Span::styled(
                "Waypoint",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │ ", dim),
            Span::raw(self.breadcrumbs()),
        ];
        if self.modal_presented {
            spans.push(Span::styled(" [sheet]", Style::default().fg(Color::Magenta)));
        }
        if !self.status_message.is_empty() {
            spans.push(Span::styled(" │ ", dim));
            spans.push(Span::styled(self.status_message.to_string(), dim));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
