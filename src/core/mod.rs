//! # Core Navigation Logic
//!
//! This module contains Waypoint's navigation state and the rules for
//! changing it. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Router (path+modal)  │
//!                    │  • Action (requests)    │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. No terminal.    │
//!                    └───────────┬─────────────┘
//!                                │ &Router
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │ Coordinator│
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`destination`]: The closed `Destination` enum
//! - [`router`]: The `Router`: push stack, modal flag, observers
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: Layered settings
//! - [`snapshot`]: Optional save/restore of the navigation state

pub mod action;
pub mod config;
pub mod destination;
pub mod router;
pub mod snapshot;

pub use action::{Action, Effect, update};
pub use destination::Destination;
pub use router::{Change, ModalState, Router, Snapshot};
