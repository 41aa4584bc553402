//! # Router
//!
//! The single source of navigation truth: a push stack of [`Destination`]s
//! and an independent modal flag.
//!
//! ```text
//! Router
//! ├── path: Vec<Destination>   // index 0 = closest to root
//! ├── modal: ModalState        // overlay above the stack top
//! ├── revision: u64            // bumped on every effective change
//! └── observers: Vec<Observer> // notified synchronously, in order
//! ```
//!
//! The router owns identifiers only, never screens. Screens read it through
//! a `&Router` handed to them by the coordinator; mutation goes through
//! `core::action::update`.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::destination::Destination;

/// Whether the modal sheet is presented above the current stack top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalState {
    #[default]
    Dismissed,
    Presented,
}

/// A state change, delivered to observers after it has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Pushed(Destination),
    Popped(Destination),
    PoppedToRoot { removed: usize },
    ModalShown,
    ModalDismissed,
    Restored,
}

/// Serializable copy of the router's navigation state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub path: Vec<Destination>,
    #[serde(default)]
    pub modal: ModalState,
}

type Observer = Box<dyn FnMut(&Change)>;

#[derive(Default)]
pub struct Router {
    path: Vec<Destination>,
    modal: ModalState,
    revision: u64,
    observers: Vec<Observer>,
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("path", &self.path)
            .field("modal", &self.modal)
            .field("revision", &self.revision)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a router already showing `path`. No observers exist yet, so
    /// nobody is notified.
    pub fn with_path(path: impl IntoIterator<Item = Destination>) -> Self {
        Self {
            path: path.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Registers an observer. Observers are called in subscription order.
    pub fn subscribe(&mut self, observer: impl FnMut(&Change) + 'static) {
        self.observers.push(Box::new(observer));
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    pub fn push(&mut self, destination: Destination) {
        self.path.push(destination);
        self.notify(Change::Pushed(destination));
    }

    /// Removes the top of the stack. Popping at root changes nothing and
    /// returns `None`.
    pub fn pop(&mut self) -> Option<Destination> {
        match self.path.pop() {
            Some(destination) => {
                self.notify(Change::Popped(destination));
                Some(destination)
            }
            None => {
                debug!("pop ignored: navigation path is already at root");
                None
            }
        }
    }

    /// Clears the path. Returns how many entries were removed.
    pub fn pop_to_root(&mut self) -> usize {
        let removed = self.path.len();
        if removed > 0 {
            self.path.clear();
            self.notify(Change::PoppedToRoot { removed });
        }
        removed
    }

    pub fn show_modal(&mut self) {
        if self.modal != ModalState::Presented {
            self.modal = ModalState::Presented;
            self.notify(Change::ModalShown);
        }
    }

    pub fn dismiss_modal(&mut self) {
        if self.modal != ModalState::Dismissed {
            self.modal = ModalState::Dismissed;
            self.notify(Change::ModalDismissed);
        }
    }

    /// Replaces path and modal state wholesale.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.path = snapshot.path;
        self.modal = snapshot.modal;
        self.notify(Change::Restored);
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn path(&self) -> &[Destination] {
        &self.path
    }

    pub fn top(&self) -> Option<Destination> {
        self.path.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn is_at_root(&self) -> bool {
        self.path.is_empty()
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn is_modal_presented(&self) -> bool {
        self.modal == ModalState::Presented
    }

    /// Monotonic counter of effective changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            path: self.path.clone(),
            modal: self.modal,
        }
    }

    fn notify(&mut self, change: Change) {
        self.revision += 1;
        debug!(
            "router r{}: {:?} (path={:?}, modal={:?})",
            self.revision, change, self.path, self.modal
        );
        for observer in &mut self.observers {
            observer(&change);
        }
    }
}
