//! Structures used to map areas on the screen

use crate::types::Edges;
use serde::{Deserialize, Serialize};
use std::{fmt, ops::Sub};

// ============================== Padding =============================
// ====================================================================

/// Padding reserved inside of a screen
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    /// Padding on the top
    pub top:    u32,
    /// Padding on the right
    pub right:  u32,
    /// Padding on the bottom
    pub bottom: u32,
    /// Padding on the left
    pub left:   u32,
}

impl Padding {
    /// Create a new [`Padding`]
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }
}

// =============================== Point ==============================
// ====================================================================

/// A position on the root window. When this is used with a [`Rectangle`], it
/// represents the top-left corner
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Point {
    /// X-coordinate
    pub x: i32,
    /// Y-coordinate
    pub y: i32,
}

impl Point {
    /// Create a new [`Point`]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "x: {}, y: {}", self.x, self.y)
    }
}

// ============================= Dimension ===========================
// ====================================================================

/// A `width` and a `height`. The area of a [`Rectangle`]
#[derive(
    Debug, Default, Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct Dimension {
    /// The width of the [`Rectangle`]
    pub width:  u32,
    /// The height of the [`Rectangle`]
    pub height: u32,
}

impl Dimension {
    /// Create a new [`Dimension`]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check if either side of the [`Dimension`] is `0`
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Swap `width` and `height`
    pub const fn transposed(self) -> Self {
        Self {
            width:  self.height,
            height: self.width,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "w: {}, h: {}", self.width, self.height)
    }
}

impl Sub<Padding> for Dimension {
    type Output = Self;

    fn sub(self, padding: Padding) -> Self::Output {
        Self::Output {
            width:  self.width.saturating_sub(padding.left + padding.right),
            height: self.height.saturating_sub(padding.top + padding.bottom),
        }
    }
}

// ============================= Rectangle ============================
// ====================================================================

/// Equivalent to `xcb_rectangle_t`. Coordinates are relative to the root window
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Rectangle {
    /// Represents the top-left corner of the rectangle
    pub point:     Point,
    /// The width and height of the rectangle
    pub dimension: Dimension,
}

impl Rectangle {
    /// Create a new [`Rectangle`]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            point:     Point::new(x, y),
            dimension: Dimension::new(width, height),
        }
    }

    /// The x-coordinate of the left edge
    pub const fn left(&self) -> i64 {
        self.point.x as i64
    }

    /// The y-coordinate of the top edge
    pub const fn top(&self) -> i64 {
        self.point.y as i64
    }

    /// The x-coordinate one past the right edge
    pub const fn right(&self) -> i64 {
        self.point.x as i64 + self.dimension.width as i64
    }

    /// The y-coordinate one past the bottom edge
    pub const fn bottom(&self) -> i64 {
        self.point.y as i64 + self.dimension.height as i64
    }

    /// The sides of `self` that `other` sits flush against
    ///
    /// The two rectangles have to share a stretch of the edge, touching at a
    /// single corner does not count
    pub fn adjacent_edges(&self, other: &Self) -> Edges {
        let mut edges = Edges::empty();

        let rows_overlap = self.top() < other.bottom() && other.top() < self.bottom();
        let cols_overlap = self.left() < other.right() && other.left() < self.right();

        if rows_overlap && other.right() == self.left() {
            edges |= Edges::LEFT;
        }
        if rows_overlap && other.left() == self.right() {
            edges |= Edges::RIGHT;
        }
        if cols_overlap && other.bottom() == self.top() {
            edges |= Edges::TOP;
        }
        if cols_overlap && other.top() == self.bottom() {
            edges |= Edges::BOTTOM;
        }

        edges
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}), ({})", self.point, self.dimension)
    }
}

impl Sub<Padding> for Rectangle {
    type Output = Self;

    fn sub(self, padding: Padding) -> Self::Output {
        Self::Output {
            point:     Point {
                x: self.point.x + padding.left as i32,
                y: self.point.y + padding.top as i32,
            },
            dimension: self.dimension - padding,
        }
    }
}
