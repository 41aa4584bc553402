//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::destination::Destination;
use crate::core::router::{Change, Router};

/// Creates a router already showing `path`.
pub fn router_at(path: &[Destination]) -> Router {
    Router::with_path(path.iter().copied())
}

/// Attaches a recording observer and hands back the shared log.
pub fn recorded_changes(mut router: Router) -> (Router, Rc<RefCell<Vec<Change>>>) {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    router.subscribe(move |change| sink.borrow_mut().push(change.clone()));
    (router, changes)
}

/// Creates a test terminal of the given size.
pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).unwrap()
}

/// Flattens the rendered buffer into one string, row by row.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}
