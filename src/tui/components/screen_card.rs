//! # Screen Card Component
//!
//! The visual body of every screen: a bordered card with a title, a few
//! lines of body text and a [`ButtonList`]. The coordinator stacks one card
//! per navigation layer; only the topmost one is `active`.
//!
//! ```text
//! ┌ Child Two ─────────────────┐
//! │ Two levels deep.           │
//! │                            │
//! │ › 1. Go to Grand Child     │
//! │   2. Back                  │
//! └────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::action::Action;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::button_list::{Button, ButtonList};
use crate::tui::event::TuiEvent;

pub struct ScreenCard {
    title: &'static str,
    body: &'static [&'static str],
    accent: Color,
    buttons: ButtonList,
    /// Prop: whether this card is the topmost, input-receiving layer.
    pub active: bool,
}

impl ScreenCard {
    pub fn new(
        title: &'static str,
        body: &'static [&'static str],
        accent: Color,
        buttons: Vec<Button>,
    ) -> Self {
        let mut buttons = ButtonList::new(buttons);
        buttons.accent = accent;
        Self {
            title,
            body,
            accent,
            buttons,
            active: true,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn buttons(&self) -> &[Button] {
        self.buttons.buttons()
    }

    pub fn selected(&self) -> usize {
        self.buttons.selected()
    }
}

impl EventHandler for ScreenCard {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        self.buttons.handle_event(event)
    }
}

impl Component for ScreenCard {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let border_style = if self.active {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" {} ", self.title))
            .title_style(border_style.add_modifier(Modifier::BOLD))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let body_style = if self.active {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let body: Vec<Line> = self.body.iter().map(|l| Line::from(*l)).collect();
        let body = Paragraph::new(body)
            .style(body_style)
            .wrap(Wrap { trim: true });
        let body_height = u16::try_from(body.line_count(inner.width)).unwrap_or(u16::MAX);

        let [body_area, _, buttons_area] = Layout::vertical([
            Constraint::Length(body_height),
            Constraint::Length(1), // Spacer
            Constraint::Min(0),
        ])
        .areas(inner);

        frame.render_widget(body, body_area);

        self.buttons.active = self.active;
        self.buttons.render(frame, buttons_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_text, test_terminal};

    fn card() -> ScreenCard {
        ScreenCard::new(
            "Sample",
            &["First line.", "Second line."],
            Color::Green,
            vec![Button::new("Back", Action::Pop)],
        )
    }

    #[test]
    fn test_render_shows_title_body_and_buttons() {
        let mut terminal = test_terminal(40, 8);
        let mut card = card();
        terminal.draw(|f| card.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains(" Sample "));
        assert!(text.contains("First line."));
        assert!(text.contains("Second line."));
        assert!(text.contains("1. Back"));
    }

    #[test]
    fn test_events_reach_buttons() {
        let mut card = card();
        assert_eq!(card.handle_event(&TuiEvent::Submit), Some(Action::Pop));
    }

    #[test]
    fn test_wrapped_body_keeps_every_row() {
        let mut terminal = test_terminal(20, 10);
        let mut card = ScreenCard::new(
            "Narrow",
            &["alpha beta gamma delta epsilon"],
            Color::Green,
            vec![Button::new("Back", Action::Pop)],
        );
        terminal.draw(|f| card.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("alpha beta gamma"));
        assert!(text.contains("delta epsilon"));
        assert!(text.contains("1. Back"));
    }

    #[test]
    fn test_render_in_tiny_area_does_not_panic() {
        let mut terminal = test_terminal(4, 2);
        let mut card = card();
        terminal.draw(|f| card.render(f, f.area())).unwrap();
    }
}
