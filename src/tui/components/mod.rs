//! # TUI Components
//!
//! Building blocks the coordinator assembles into screens.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: breadcrumbs, sheet marker, last navigation change
//! - `HelpBar`: key hints for the current state
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state and emit navigation actions:
//! - `ButtonList`: selectable menu of buttons
//! - `ScreenCard`: titled card wrapping a `ButtonList`
//!
//! Components never read the router themselves. The parent passes in what
//! they need, which keeps them testable against a `TestBackend`.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── button_list.rs   (Selectable buttons → Action)
//! ├── screen_card.rs   (One screen's card)
//! ├── title_bar.rs     (Top bar)
//! └── help_bar.rs      (Bottom key hints)
//! ```

pub mod button_list;
mod help_bar;
pub mod screen_card;
mod title_bar;

pub use button_list::{Button, ButtonList};
pub use help_bar::HelpBar;
pub use screen_card::ScreenCard;
pub use title_bar::TitleBar;
