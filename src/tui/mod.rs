//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal and the [`Router`], renders
//! through the [`coordinator::Coordinator`], and turns key presses into
//! [`Action`](crate::core::action::Action)s for `core::update`.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//! key ─► TuiEvent ─► Coordinator::handle_event ─► Action ─► update(&mut router)
//!                                                                │
//!                        redraw ◄── observer (status, flag) ◄────┘
//! ```
//!
//! The loop only draws when something changed. Router observers set the
//! redraw flag and the status line; key events that only move a selection
//! set the flag directly.

pub mod component;
pub mod components;
pub mod coordinator;
pub mod event;
pub mod screens;
mod ui;

use log::{info, warn};
use std::cell::{Cell, RefCell};
use std::io::stdout;
use std::rc::Rc;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::core::action::{Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::destination::Destination;
use crate::core::router::{Change, Router, Snapshot};
use crate::core::snapshot;
use crate::tui::coordinator::Coordinator;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of the navigation state)
pub struct TuiState {
    pub coordinator: Coordinator,
    /// Last navigation change, shown in the title bar.
    pub status: Rc<RefCell<String>>,
    pub show_help: bool,
    pub needs_redraw: Rc<Cell<bool>>,
}

impl TuiState {
    pub fn new(inset: u16, show_help: bool) -> Self {
        Self {
            coordinator: Coordinator::new(inset),
            status: Rc::new(RefCell::new(String::from("Press Enter to navigate"))),
            show_help,
            needs_redraw: Rc::new(Cell::new(true)), // Force first frame
        }
    }

    /// Subscribes the status line and redraw flag to `router`.
    pub fn observe(&self, router: &mut Router) {
        let status = Rc::clone(&self.status);
        let needs_redraw = Rc::clone(&self.needs_redraw);
        router.subscribe(move |change| {
            *status.borrow_mut() = describe(change);
            needs_redraw.set(true);
        });
    }
}

/// Short status-line text for a change.
pub fn describe(change: &Change) -> String {
    match change {
        Change::Pushed(d) => format!("pushed {d}"),
        Change::Popped(d) => format!("popped {d}"),
        Change::PoppedToRoot { removed } => format!("back to root ({removed} popped)"),
        Change::ModalShown => "sheet shown".to_string(),
        Change::ModalDismissed => "sheet dismissed".to_string(),
        Change::Restored => "restored last session".to_string(),
    }
}

/// The state to open with: the saved snapshot when restoring, with an
/// explicit `--start` path taking precedence over the saved path.
pub fn initial_snapshot(config: &ResolvedConfig, start: &[Destination]) -> Snapshot {
    let mut initial = match (&config.state_path, config.restore) {
        (Some(path), true) => snapshot::load_or_default(path),
        _ => Snapshot::default(),
    };
    if !start.is_empty() {
        initial.path = start.to_vec();
    }
    initial
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

pub fn run(config: &ResolvedConfig, start: &[Destination]) -> std::io::Result<()> {
    let mut router = Router::new();
    let mut tui = TuiState::new(config.inset, config.show_help);
    tui.observe(&mut router);
    router.subscribe(|change| info!("navigation: {:?}", change));

    let initial = initial_snapshot(config, start);
    if initial != Snapshot::default() {
        router.restore(initial);
    }

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();
    if let Err(e) = &terminal_mode_guard {
        warn!("Failed to set terminal modes: {}", e);
    }

    let result = event_loop(&mut terminal, &mut router, &mut tui);

    if config.restore
        && let Some(path) = &config.state_path
        && let Err(e) = snapshot::save(path, &router.snapshot())
    {
        warn!("Failed to save navigation state: {}", e);
    }

    drop(terminal_mode_guard);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    router: &mut Router,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    loop {
        if tui.needs_redraw.replace(false) {
            terminal.draw(|f| ui::draw_ui(f, router, tui))?;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(IDLE_POLL);
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Selection moves and resizes redraw without touching the router
            tui.needs_redraw.set(true);
            if event == TuiEvent::Resize {
                continue;
            }
            if let Some(action) = tui.coordinator.handle_event(router, &event)
                && update(router, action) == Effect::Quit
            {
                return Ok(());
            }
        }
    }
}

/// Applies a scripted sequence of events without a terminal, returning
/// whether a quit was requested. Used by integration tests and demos.
pub fn replay(router: &mut Router, tui: &mut TuiState, events: &[TuiEvent]) -> bool {
    for event in events {
        if let Some(action) = tui.coordinator.handle_event(router, event)
            && update(router, action) == Effect::Quit
        {
            return true;
        }
    }
    false
}
