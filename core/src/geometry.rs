//! Geometry Primitives
//!
//! Sizes and rectangles shared by world space and screen space. Both use
//! unsigned cell coordinates with the origin at the top-left corner.

/// Exclusive upper bound for either board dimension
pub const MAX_BOARD_DIM: u32 = 1024;

/// Width and height in cells
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size2D {
    /// Number of columns
    pub width: u32,
    /// Number of rows
    pub height: u32,
}

impl Size2D {
    /// Create a new size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of cells
    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if a coordinate lies inside `[0, width) x [0, height)`
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }
}

/// A half-open rectangle: rows `top..bottom`, columns `left..right`
///
/// Invariant: `top <= bottom` and `left <= right`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect2D {
    /// First row
    pub top: u32,
    /// First column
    pub left: u32,
    /// One past the last row
    pub bottom: u32,
    /// One past the last column
    pub right: u32,
}

impl Rect2D {
    /// Create a rectangle from its bounds
    pub const fn new(top: u32, left: u32, bottom: u32, right: u32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Number of columns covered
    pub const fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Number of rows covered
    pub const fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Check if the rectangle covers no cells
    pub const fn is_empty(&self) -> bool {
        self.top == self.bottom || self.left == self.right
    }

    /// Check if a point lies inside the rectangle
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Grow the rectangle by `margin` cells on every side
    ///
    /// The top-left corner stops at the coordinate origin.
    #[must_use]
    pub const fn expand(&self, margin: u32) -> Self {
        Self {
            top: self.top.saturating_sub(margin),
            left: self.left.saturating_sub(margin),
            bottom: self.bottom + margin,
            right: self.right + margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_contains() {
        let size = Size2D::new(10, 5);
        assert!(size.contains(0, 0));
        assert!(size.contains(9, 4));
        assert!(!size.contains(10, 4));
        assert!(!size.contains(9, 5));
        assert_eq!(size.area(), 50);
    }

    #[test]
    fn test_rect_dimensions() {
        let rect = Rect2D::new(2, 3, 7, 11);
        assert_eq!(rect.width(), 8);
        assert_eq!(rect.height(), 5);
        assert!(!rect.is_empty());
        assert!(Rect2D::new(4, 4, 4, 9).is_empty());
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect2D::new(0, 0, 10, 10);
        assert!(rect.contains(0, 0));
        assert!(rect.contains(9, 9));
        assert!(!rect.contains(10, 9));
        assert!(!rect.contains(9, 10));
    }

    #[test]
    fn test_rect_expand() {
        let rect = Rect2D::new(4, 1, 10, 21);
        assert_eq!(rect.expand(1), Rect2D::new(3, 0, 11, 22));
        assert_eq!(rect.expand(2), Rect2D::new(2, 0, 12, 23));
    }
}
