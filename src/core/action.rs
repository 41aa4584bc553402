//! # Actions
//!
//! Every navigation request a screen can make becomes an `Action`.
//! User picks "Go to Child Two"? That's `Action::Push(Destination::ChildTwo)`.
//! User dismisses the sheet and wants to go home? That's
//! `Action::DismissModalAndPopToRoot`.
//!
//! The `update()` function applies an action to the router and returns an
//! `Effect` telling the event loop whether anything beyond a redraw is needed.
//!
//! ```text
//! Router + Action  →  update()  →  Router' + Effect
//! ```
//!
//! Screens never touch the router directly, so every navigation can be
//! asserted with `update(&mut router, action)` alone.

use log::info;

use crate::core::destination::Destination;
use crate::core::router::Router;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Push(Destination),
    Pop,
    PopToRoot,
    ShowModal,
    DismissModal,
    /// Dismiss the sheet, then clear the stack. Order matters: the sheet
    /// goes first so nothing renders a sheet over an emptied stack.
    DismissModalAndPopToRoot,
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(router: &mut Router, action: Action) -> Effect {
    match action {
        Action::Push(destination) => router.push(destination),
        Action::Pop => {
            router.pop();
        }
        Action::PopToRoot => {
            router.pop_to_root();
        }
        Action::ShowModal => router.show_modal(),
        Action::DismissModal => router.dismiss_modal(),
        Action::DismissModalAndPopToRoot => {
            router.dismiss_modal();
            router.pop_to_root();
        }
        Action::Quit => {
            info!("Quit requested at depth {}", router.depth());
            return Effect::Quit;
        }
    }
    Effect::None
}
