use crate::constants::LANE_WIDTH;

/// One of the three horizontal slots shared by the car and the obstacles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    Left,
    Center,
    Right,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Left, Lane::Center, Lane::Right];

    pub fn index(self) -> u32 {
        match self {
            Lane::Left => 0,
            Lane::Center => 1,
            Lane::Right => 2,
        }
    }

    /// Indices past the last lane clamp to `Right`.
    pub fn from_index(index: u32) -> Lane {
        match index {
            0 => Lane::Left,
            1 => Lane::Center,
            _ => Lane::Right,
        }
    }

    /// Neighbour to the left, or `self` at the boundary.
    pub fn left(self) -> Lane {
        match self {
            Lane::Left | Lane::Center => Lane::Left,
            Lane::Right => Lane::Center,
        }
    }

    /// Neighbour to the right, or `self` at the boundary.
    pub fn right(self) -> Lane {
        match self {
            Lane::Left => Lane::Center,
            Lane::Center | Lane::Right => Lane::Right,
        }
    }

    /// Left edge of a box of `width` centered in this lane.
    pub fn x_for(self, width: u32) -> f32 {
        (LANE_WIDTH * self.index() + (LANE_WIDTH - width) / 2) as f32
    }
}
