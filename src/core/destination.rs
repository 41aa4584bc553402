//! # Destinations
//!
//! The closed set of screens that can be pushed onto the navigation path.
//! The root screen is not a destination: it is always at the bottom of the
//! stack and can never be pushed or popped.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    ChildOne,
    ChildTwo,
    GrandChild,
}

impl Destination {
    /// Every destination, in nesting order.
    pub const ALL: [Destination; 3] = [
        Destination::ChildOne,
        Destination::ChildTwo,
        Destination::GrandChild,
    ];

    /// Human-readable screen title.
    pub fn title(self) -> &'static str {
        match self {
            Destination::ChildOne => "Child One",
            Destination::ChildTwo => "Child Two",
            Destination::GrandChild => "Grand Child",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
