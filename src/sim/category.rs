//! Body categories and how pairs of them interact
//!
//! Every physics body carries exactly one `Category`. Whether two bodies block
//! each other, and whether their first touch is reported as a contact, is a
//! fixed table keyed by the unordered category pair.

use serde::{Deserialize, Serialize};

/// Semantic tag of a physics body
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// The player-controlled body
    Player,
    /// Obstacles and playfield boundaries
    Solid,
    /// Scoring probe between an obstacle pair
    Gap,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Player, Category::Solid, Category::Gap];
}

/// Behaviour of a category pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interaction {
    /// Bodies block each other's movement
    pub collides: bool,
    /// First overlap produces a contact-begin event
    pub notifies: bool,
}

impl Interaction {
    const NONE: Self = Self {
        collides: false,
        notifies: false,
    };
    const SENSOR: Self = Self {
        collides: false,
        notifies: true,
    };
    const BLOCK: Self = Self {
        collides: true,
        notifies: false,
    };
}

/// Look up how two categories interact. Symmetric in its arguments.
pub fn interaction(a: Category, b: Category) -> Interaction {
    use Category::*;

    match (a, b) {
        (Player, Solid) | (Solid, Player) => Interaction::SENSOR,
        (Player, Gap) | (Gap, Player) => Interaction::SENSOR,
        (Player, Player) => Interaction::BLOCK,
        (Solid, Solid) => Interaction::BLOCK,
        (Solid, Gap) | (Gap, Solid) | (Gap, Gap) => Interaction::NONE,
    }
}
