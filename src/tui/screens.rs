//! # Screens
//!
//! One constructor per layer the coordinator can show. [`for_destination`]
//! is the dispatch table from [`Destination`] to screen: an exhaustive
//! `match`, so adding a destination without a screen fails to compile.
//!
//! | Screen      | Buttons                                          |
//! |-------------|--------------------------------------------------|
//! | Root        | Go to Child One · Show sheet                     |
//! | Child One   | Go to Child Two · Back                           |
//! | Child Two   | Go to Grand Child · Back · Back to root          |
//! | Grand Child | Show sheet · Back · Back to root                 |
//! | Sheet       | Dismiss · Dismiss and return to root             |

use ratatui::style::Color;

use crate::core::action::Action;
use crate::core::destination::Destination;
use crate::tui::components::{Button, ScreenCard};

pub fn root() -> ScreenCard {
    ScreenCard::new(
        "Home",
        &[
            "The root screen. It is always at the bottom of the stack.",
            "Push a child to start navigating.",
        ],
        Color::Yellow,
        vec![
            Button::new("Go to Child One", Action::Push(Destination::ChildOne)),
            Button::new("Show sheet", Action::ShowModal),
        ],
    )
}

pub fn for_destination(destination: Destination) -> ScreenCard {
    match destination {
        Destination::ChildOne => child_one(),
        Destination::ChildTwo => child_two(),
        Destination::GrandChild => grand_child(),
    }
}

fn child_one() -> ScreenCard {
    ScreenCard::new(
        Destination::ChildOne.title(),
        &["One level deep."],
        Color::Cyan,
        vec![
            Button::new("Go to Child Two", Action::Push(Destination::ChildTwo)),
            Button::new("Back", Action::Pop),
        ],
    )
}

fn child_two() -> ScreenCard {
    ScreenCard::new(
        Destination::ChildTwo.title(),
        &["Two levels deep."],
        Color::Green,
        vec![
            Button::new("Go to Grand Child", Action::Push(Destination::GrandChild)),
            Button::new("Back", Action::Pop),
            Button::new("Back to root", Action::PopToRoot),
        ],
    )
}

fn grand_child() -> ScreenCard {
    ScreenCard::new(
        Destination::GrandChild.title(),
        &[
            "The deepest screen.",
            "The sheet opens above the whole stack.",
        ],
        Color::Blue,
        vec![
            Button::new("Show sheet", Action::ShowModal),
            Button::new("Back", Action::Pop),
            Button::new("Back to root", Action::PopToRoot),
        ],
    )
}

pub fn sheet() -> ScreenCard {
    ScreenCard::new(
        "Sheet",
        &[
            "A modal overlay, not part of the stack.",
            "The screens below stay where they are.",
        ],
        Color::Magenta,
        vec![
            Button::new("Dismiss", Action::DismissModal),
            Button::new("Dismiss and return to root", Action::DismissModalAndPopToRoot),
        ],
    )
}
