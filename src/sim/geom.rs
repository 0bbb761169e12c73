//! Body shapes and overlap tests
//!
//! Shapes are centered on their owning entity's position. Only the overlap
//! predicate is needed: the world reports contacts, it never resolves them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Collision shape of a physics body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle { radius: f32 },
    /// Axis-aligned rectangle with full width/height
    Rect { size: Vec2 },
}

impl Shape {
    pub fn circle(radius: f32) -> Self {
        Shape::Circle { radius }
    }

    pub fn rect(size: Vec2) -> Self {
        Shape::Rect { size }
    }

    /// Half extents of the shape's bounding box
    pub fn half_extents(&self) -> Vec2 {
        match *self {
            Shape::Circle { radius } => Vec2::splat(radius),
            Shape::Rect { size } => size * 0.5,
        }
    }
}

/// Check whether two shapes placed at the given centers overlap.
///
/// Touching edges count as overlap, so a contact fires on the first frame the
/// regions meet.
pub fn shapes_overlap(a: &Shape, a_pos: Vec2, b: &Shape, b_pos: Vec2) -> bool {
    match (*a, *b) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            a_pos.distance_squared(b_pos) <= (ra + rb) * (ra + rb)
        }
        (Shape::Circle { radius }, Shape::Rect { size }) => {
            circle_rect_overlap(a_pos, radius, b_pos, size * 0.5)
        }
        (Shape::Rect { size }, Shape::Circle { radius }) => {
            circle_rect_overlap(b_pos, radius, a_pos, size * 0.5)
        }
        (Shape::Rect { size: sa }, Shape::Rect { size: sb }) => {
            let d = (a_pos - b_pos).abs();
            let reach = (sa + sb) * 0.5;
            d.x <= reach.x && d.y <= reach.y
        }
    }
}

/// Circle vs axis-aligned box, via the closest point on the box
fn circle_rect_overlap(center: Vec2, radius: f32, rect_center: Vec2, half: Vec2) -> bool {
    let closest = center.clamp(rect_center - half, rect_center + half);
    center.distance_squared(closest) <= radius * radius
}
