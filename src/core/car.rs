use crate::constants::{CAR_HEIGHT, CAR_WIDTH, CAR_Y};
use crate::geometry::{BoundingBox, Lane};

/// The player's car. Only the lane is state; `x` is derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    lane: Lane,
    x: f32,
    y: f32,
}

impl Car {
    pub const WIDTH: u32 = CAR_WIDTH;
    pub const HEIGHT: u32 = CAR_HEIGHT;

    pub fn new() -> Self {
        Self::in_lane(Lane::Center)
    }

    pub fn in_lane(lane: Lane) -> Self {
        Car {
            lane,
            x: lane.x_for(Self::WIDTH),
            y: CAR_Y,
        }
    }

    pub fn lane(&self) -> Lane {
        self.lane
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn move_left(&mut self) {
        self.set_lane(self.lane.left());
    }

    pub fn move_right(&mut self) {
        self.set_lane(self.lane.right());
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, Self::WIDTH, Self::HEIGHT)
    }

    fn set_lane(&mut self, lane: Lane) {
        self.lane = lane;
        self.x = lane.x_for(Self::WIDTH);
    }
}

impl Default for Car {
    fn default() -> Self {
        Self::new()
    }
}
