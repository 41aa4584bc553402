//! # Button List Component
//!
//! A vertical menu of labelled buttons, each bound to a navigation
//! [`Action`]. Up/Down (or `k`/`j`) move the selection, Enter activates it,
//! and the digits `1`–`9` activate a button directly.
//!
//! Selection lives here, not in the router: it is presentation state and
//! survives only as long as the screen instance that owns it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};

use crate::core::action::Action;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: Action,
}

impl Button {
    pub const fn new(label: &'static str, action: Action) -> Self {
        Self { label, action }
    }
}

pub struct ButtonList {
    buttons: Vec<Button>,
    selected: usize,
    list_state: ListState,
    /// Prop: only the active screen shows its selection.
    pub active: bool,
    /// Prop: accent color for the selected button.
    pub accent: Color,
}

impl ButtonList {
    pub fn new(buttons: Vec<Button>) -> Self {
        let mut list_state = ListState::default();
        if !buttons.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            buttons,
            selected: 0,
            list_state,
            active: true,
            accent: Color::Cyan,
        }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.list_state.select(Some(index));
    }
}

impl EventHandler for ButtonList {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        if self.is_empty() {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                self.select((self.selected + 1).min(self.buttons.len() - 1));
                None
            }
            TuiEvent::Submit => self.buttons.get(self.selected).map(|b| b.action),
            TuiEvent::InputChar(c) => {
                let index = c.to_digit(10)?.checked_sub(1)? as usize;
                let action = self.buttons.get(index)?.action;
                self.select(index);
                Some(action)
            }
            _ => None,
        }
    }
}

impl Component for ButtonList {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .buttons
            .iter()
            .enumerate()
            .map(|(i, button)| {
                let is_selected = self.active && i == self.selected;
                let style = if is_selected {
                    Style::default()
                        .fg(self.accent)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if self.active {
                    Style::default().fg(Color::Gray)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let marker = if is_selected { "›" } else { " " };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{marker} {}. ", i + 1), style),
                    Span::styled(button.label, style),
                ]))
            })
            .collect();

        frame.render_stateful_widget(List::new(items), area, &mut self.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::destination::Destination;
    use crate::test_support::{buffer_text, test_terminal};

    fn three_buttons() -> ButtonList {
        ButtonList::new(vec![
            Button::new("Forward", Action::Push(Destination::ChildOne)),
            Button::new("Back", Action::Pop),
            Button::new("Home", Action::PopToRoot),
        ])
    }

    #[test]
    fn test_enter_activates_first_button_by_default() {
        let mut list = three_buttons();
        assert_eq!(
            list.handle_event(&TuiEvent::Submit),
            Some(Action::Push(Destination::ChildOne))
        );
    }

    #[test]
    fn test_cursor_moves_and_clamps() {
        let mut list = three_buttons();
        assert_eq!(list.handle_event(&TuiEvent::CursorUp), None);
        assert_eq!(list.selected(), 0);
        for _ in 0..5 {
            list.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(list.selected(), 2);
        assert_eq!(list.handle_event(&TuiEvent::Submit), Some(Action::PopToRoot));
    }

    #[test]
    fn test_digit_activates_directly() {
        let mut list = three_buttons();
        assert_eq!(list.handle_event(&TuiEvent::InputChar('2')), Some(Action::Pop));
        assert_eq!(list.selected(), 1);
    }

    #[test]
    fn test_out_of_range_digits_do_nothing() {
        let mut list = three_buttons();
        assert_eq!(list.handle_event(&TuiEvent::InputChar('0')), None);
        assert_eq!(list.handle_event(&TuiEvent::InputChar('9')), None);
        assert_eq!(list.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(list.selected(), 0);
    }

    #[test]
    fn test_empty_list_ignores_events() {
        let mut list = ButtonList::new(Vec::new());
        assert!(list.is_empty());
        assert_eq!(list.handle_event(&TuiEvent::Submit), None);
        assert_eq!(list.handle_event(&TuiEvent::CursorDown), None);
    }

    #[test]
    fn test_render_numbers_labels() {
        let mut terminal = test_terminal(30, 3);
        let mut list = three_buttons();
        terminal.draw(|f| list.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("1. Forward"));
        assert!(text.contains("2. Back"));
        assert!(text.contains("3. Home"));
        assert!(text.contains('›'));
    }

    #[test]
    fn test_inactive_render_hides_selection_marker() {
        let mut terminal = test_terminal(30, 3);
        let mut list = three_buttons();
        list.active = false;
        terminal.draw(|f| list.render(f, f.area())).unwrap();

        assert!(!buffer_text(&terminal).contains('›'));
    }
}
