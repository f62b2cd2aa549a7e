//! Side-indexed bit packing for tile connectivity masks
//!
//! Every mask in the system shares one side order: bit 0 is the top side,
//! followed by right, bottom and left. Border masks spend two bits per side,
//! so side `n` occupies bits `2n` and `2n + 1`.

use std::ops::{Index, IndexMut};

/// Select mask constraining all four sides
pub const ALL_SIDES: u8 = 0b1111;

/// One side of a square tile, in canonical bit order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Upper side, bit 0
    Top,
    /// Right side, bit 1
    Right,
    /// Lower side, bit 2
    Bottom,
    /// Left side, bit 3
    Left,
}

impl Side {
    /// All sides in canonical order
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Bit position of this side in a 4-bit mask
    pub const fn bit(self) -> u32 {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }

    /// The side of the neighbouring cell that shares this side's edge
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Next side when turning a quarter clockwise
    pub const fn clockwise(self) -> Self {
        match self {
            Self::Top => Self::Right,
            Self::Right => Self::Bottom,
            Self::Bottom => Self::Left,
            Self::Left => Self::Top,
        }
    }
}

/// A value for each of the four sides of a tile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PerSide<T> {
    /// Value for the top side
    pub top: T,
    /// Value for the right side
    pub right: T,
    /// Value for the bottom side
    pub bottom: T,
    /// Value for the left side
    pub left: T,
}

impl<T> PerSide<T> {
    /// Build from explicit values in canonical order
    pub const fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Build by evaluating `f` once per side, in canonical order
    pub fn from_fn(mut f: impl FnMut(Side) -> T) -> Self {
        Self {
            top: f(Side::Top),
            right: f(Side::Right),
            bottom: f(Side::Bottom),
            left: f(Side::Left),
        }
    }

    /// Iterate over `(side, value)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().map(move |side| (side, &self[side]))
    }
}

impl<T: Copy> PerSide<T> {
    /// Turn the tile clockwise by `quarter_turns`
    ///
    /// The value on each side moves to the next side clockwise, so a top
    /// value ends up on the right after one turn.
    #[must_use]
    pub fn rotated_clockwise(&self, quarter_turns: u8) -> Self {
        let mut result = *self;
        for _ in 0..quarter_turns % 4 {
            result = Self {
                top: result.left,
                right: result.top,
                bottom: result.right,
                left: result.bottom,
            };
        }
        result
    }
}

impl PerSide<bool> {
    /// Pack into a 4-bit mask
    pub fn to_mask(&self) -> u8 {
        self.iter()
            .fold(0, |acc, (side, &set)| acc | (u8::from(set) << side.bit()))
    }

    /// Unpack the low four bits of `mask`
    pub fn from_mask(mask: u8) -> Self {
        Self::from_fn(|side| (mask >> side.bit()) & 1 == 1)
    }
}

impl PerSide<u8> {
    /// Pack 2-bit codes into an 8-bit mask
    pub fn to_pair_mask(&self) -> u8 {
        self.iter()
            .fold(0, |acc, (side, &code)| acc | ((code & 0b11) << (2 * side.bit())))
    }

    /// Unpack an 8-bit mask into 2-bit codes
    pub fn from_pair_mask(mask: u8) -> Self {
        Self::from_fn(|side| (mask >> (2 * side.bit())) & 0b11)
    }
}

impl<T> Index<Side> for PerSide<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }
}

impl<T> IndexMut<Side> for PerSide<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        }
    }
}

/// Adjacent coordinates in side order: top, right, bottom, left
///
/// Coordinates are `[col, row]` with rows growing downwards. Results may fall
/// outside the map; see [`clamp`].
pub const fn neighbors4(coord: [i32; 2]) -> [[i32; 2]; 4] {
    let [x, y] = coord;
    [[x, y - 1], [x + 1, y], [x, y + 1], [x - 1, y]]
}

/// Clamp a coordinate into a `width` x `height` map
pub fn clamp(coord: [i32; 2], width: usize, height: usize) -> [usize; 2] {
    let clamp_axis = |value: i32, len: usize| {
        usize::try_from(value)
            .unwrap_or(0)
            .min(len.saturating_sub(1))
    };
    [clamp_axis(coord[0], width), clamp_axis(coord[1], height)]
}

/// Widen a per-side mask to the two-bits-per-side border layout
///
/// Bit `n` of the input sets both bits of side `n`'s border group.
pub const fn expand_pairs(mask4: u8) -> u8 {
    let mut expanded = 0;
    let mut side = 0;
    while side < 4 {
        if (mask4 >> side) & 1 == 1 {
            expanded |= 0b11 << (2 * side);
        }
        side += 1;
    }
    expanded
}

/// Collapse each 2-bit border group to one bit, set if either bit is set
pub const fn shrink_pairs(mask8: u8) -> u8 {
    let mut shrunk = 0;
    let mut side = 0;
    while side < 4 {
        if (mask8 >> (2 * side)) & 0b11 != 0 {
            shrunk |= 1 << side;
        }
        side += 1;
    }
    shrunk
}

/// Read a border code from the other cell's point of view
///
/// A border code lists its two corner points in the writer's orientation.
/// The neighbour across the edge walks them in the opposite order, which
/// swaps codes 1 and 2; codes 0 and 3 are symmetric.
pub const fn swap_border_direction(code: u8) -> u8 {
    match code & 0b11 {
        1 => 2,
        2 => 1,
        other => other,
    }
}
