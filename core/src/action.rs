//! User Actions
//!
//! The closed set of things a keystroke can ask the simulation to do.

/// Direction to move the visible world
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Towards row 0
    Up,
    /// Towards the last row
    Down,
    /// Towards column 0
    Left,
    /// Towards the last column
    Right,
}

impl ScrollDirection {
    /// All directions, in frame edge order (top, left, bottom, right)
    pub const ALL: [Self; 4] = [Self::Up, Self::Left, Self::Down, Self::Right];

    /// World-space `(dx, dy)` for one scroll step
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Key bound to this direction
    pub const fn key(self) -> char {
        match self {
            Self::Up => 'w',
            Self::Down => 's',
            Self::Left => 'a',
            Self::Right => 'd',
        }
    }
}

/// An action requested by the user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Stop the simulation and exit
    Quit,
    /// Move the visible world one cell
    Scroll(ScrollDirection),
    /// Double the target frame rate
    SpeedUp,
    /// Halve the target frame rate
    SlowDown,
}

impl Action {
    /// Map a typed character to an action
    ///
    /// Unbound characters yield `None` and are ignored by the caller.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'q' | 'Q' => Some(Self::Quit),
            'w' => Some(Self::Scroll(ScrollDirection::Up)),
            'a' => Some(Self::Scroll(ScrollDirection::Left)),
            's' => Some(Self::Scroll(ScrollDirection::Down)),
            'd' => Some(Self::Scroll(ScrollDirection::Right)),
            '+' => Some(Self::SpeedUp),
            '-' => Some(Self::SlowDown),
            _ => None,
        }
    }
}
