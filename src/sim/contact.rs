//! Contact events and their classification

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::world::EntityId;

/// One participant of a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactBody {
    pub id: EntityId,
    pub category: Category,
}

/// A contact-begin event between two bodies. The pair is unordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub a: ContactBody,
    pub b: ContactBody,
}

impl Contact {
    pub fn categories(&self) -> (Category, Category) {
        (self.a.category, self.b.category)
    }

}

/// What a contact means for the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// The player passed through a gap
    ScoreGap,
    /// The player hit something solid (or the pair is one that can't happen)
    GameOver,
}

/// Classify a contact from its two categories, in either order.
///
/// Any pair containing a `Gap` scores; every other pair, including ones the
/// world never reports, ends the game.
pub fn classify(a: Category, b: Category) -> ContactOutcome {
    if a == Category::Gap || b == Category::Gap {
        ContactOutcome::ScoreGap
    } else {
        ContactOutcome::GameOver
    }
}
