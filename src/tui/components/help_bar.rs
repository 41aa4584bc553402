//! # HelpBar Component
//!
//! Bottom line of key hints. Hints for keys that would do nothing in the
//! current state are left out, so the root never advertises "Back".

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct HelpBar {
    pub at_root: bool,
    pub modal_presented: bool,
}

impl HelpBar {
    pub fn new(at_root: bool, modal_presented: bool) -> Self {
        Self {
            at_root,
            modal_presented,
        }
    }

    /// `(key, description)` pairs for the current state.
    pub fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = vec![("↑↓", "Select"), ("Enter", "Open")];
        if self.modal_presented {
            hints.push(("Esc", "Dismiss"));
        } else if !self.at_root {
            hints.push(("Esc/←", "Back"));
            hints.push(("h", "Home"));
        }
        hints.push(("q", "Quit"));
        hints
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(Color::DarkGray);

        let mut spans = Vec::new();
        for (i, (key, desc)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled(format!(" {desc}"), desc_style));
        }
        frame.render_widget(Line::from(spans).centered(), area);
    }
}
