//! # Coordinator
//!
//! Projects the [`Router`] onto the screen: the root card, one card per
//! path entry in order, then the sheet if presented.
//!
//! ```text
//! path = [ChildOne, ChildTwo], modal = Presented
//!
//! ┌ Home ──────────────────────────┐
//! │ ┌ Child One ───────────────────┤
//! │ │ ┌ Child Two ─────────────────┤
//! │ │ │       ┌ Sheet ──────┐      │
//! │ │ │       │ (active)    │      │
//! │ │ │       └─────────────┘      │
//! └─┴─┴────────────────────────────┘
//! ```
//!
//! The router holds identifiers only. The coordinator keeps one
//! [`ScreenCard`] per layer so presentation state (the selected button)
//! survives redraws, and reconciles those cards against the path before
//! every render and every event: the common prefix is kept, the rest is
//! rebuilt from [`screens::for_destination`].

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::action::Action;
use crate::core::destination::Destination;
use crate::core::router::Router;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::ScreenCard;
use crate::tui::event::TuiEvent;
use crate::tui::screens;

/// One rendered level of the navigation hierarchy, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Root,
    Screen(Destination),
    Modal,
}

pub struct Coordinator {
    root: ScreenCard,
    stack: Vec<(Destination, ScreenCard)>,
    sheet: Option<ScreenCard>,
    inset: u16,
}

impl Coordinator {
    pub fn new(inset: u16) -> Self {
        Self {
            root: screens::root(),
            stack: Vec::new(),
            sheet: None,
            inset,
        }
    }

    /// The layers `router` renders as, bottom to top.
    pub fn layers(router: &Router) -> Vec<Layer> {
        let mut layers = Vec::with_capacity(router.depth() + 2);
        layers.push(Layer::Root);
        layers.extend(router.path().iter().copied().map(Layer::Screen));
        if router.is_modal_presented() {
            layers.push(Layer::Modal);
        }
        layers
    }

    /// The layer that receives input.
    pub fn active_layer(router: &Router) -> Layer {
        if router.is_modal_presented() {
            Layer::Modal
        } else {
            router.top().map_or(Layer::Root, Layer::Screen)
        }
    }

    /// Brings the card stack in line with the router.
    pub fn sync(&mut self, router: &Router) {
        let path = router.path();
        let keep = self
            .stack
            .iter()
            .zip(path)
            .take_while(|((held, _), wanted)| held == *wanted)
            .count();
        if keep != self.stack.len() || keep != path.len() {
            debug!(
                "coordinator: keeping {} of {} cards, building {}",
                keep,
                self.stack.len(),
                path.len() - keep
            );
        }
        self.stack.truncate(keep);
        self.stack
            .extend(path[keep..].iter().map(|&d| (d, screens::for_destination(d))));

        match (router.is_modal_presented(), self.sheet.is_some()) {
            (true, false) => self.sheet = Some(screens::sheet()),
            (false, true) => self.sheet = None,
            _ => {}
        }

        let active = Self::active_layer(router);
        self.root.active = active == Layer::Root;
        let top = self.stack.len();
        for (i, (_, card)) in self.stack.iter_mut().enumerate() {
            card.active = active != Layer::Modal && i + 1 == top;
        }
        if let Some(sheet) = self.sheet.as_mut() {
            sheet.active = true;
        }
    }

    /// Translates an input event into a navigation request.
    ///
    /// Back and home are never requested at root, and never while the sheet
    /// covers the stack (Esc and Back dismiss the sheet instead).
    pub fn handle_event(&mut self, router: &Router, event: &TuiEvent) -> Option<Action> {
        self.sync(router);
        match event {
            TuiEvent::Quit | TuiEvent::ForceQuit => return Some(Action::Quit),
            TuiEvent::Resize => return None,
            TuiEvent::Escape | TuiEvent::Back if router.is_modal_presented() => {
                return Some(Action::DismissModal);
            }
            TuiEvent::Escape | TuiEvent::Back | TuiEvent::Home if router.is_at_root() => {
                return None;
            }
            TuiEvent::Escape | TuiEvent::Back => return Some(Action::Pop),
            TuiEvent::Home if router.is_modal_presented() => return None,
            TuiEvent::Home => return Some(Action::PopToRoot),
            _ => {}
        }
        self.active_card_mut()?.handle_event(event)
    }

    fn active_card_mut(&mut self) -> Option<&mut ScreenCard> {
        if let Some(sheet) = self.sheet.as_mut() {
            return Some(sheet);
        }
        Some(match self.stack.last_mut() {
            Some((_, card)) => card,
            None => &mut self.root,
        })
    }

    /// The card at `layer`'s position, if the coordinator holds one.
    pub fn card(&self, layer: Layer) -> Option<&ScreenCard> {
        match layer {
            Layer::Root => Some(&self.root),
            Layer::Screen(d) => self
                .stack
                .iter()
                .rev()
                .find(|(held, _)| *held == d)
                .map(|(_, card)| card),
            Layer::Modal => self.sheet.as_ref(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, router: &Router) {
        self.sync(router);

        self.root.render(frame, area);
        for (index, (_, card)) in self.stack.iter_mut().enumerate() {
            let depth = u16::try_from(index + 1).unwrap_or(u16::MAX);
            let card_area = stacked_rect(area, depth, self.inset);
            // Deeper cards only shrink further
            if card_area.is_empty() {
                break;
            }
            card.render(frame, card_area);
        }
        if let Some(sheet) = self.sheet.as_mut() {
            sheet.render(frame, centered_rect(60, 50, area));
        }
    }
}

/// The area of the card `depth` levels above the root: shifted right by
/// `inset` cells and down by one row per level.
pub fn stacked_rect(area: Rect, depth: u16, inset: u16) -> Rect {
    let dx = depth.saturating_mul(inset).min(area.width);
    let dy = depth.min(area.height);
    Rect {
        x: area.x + dx,
        y: area.y + dy,
        width: area.width - dx,
        height: area.height - dy,
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
