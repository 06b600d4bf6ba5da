use crate::constants::*;
use crate::core::{RandomSource, Rgb};
use crate::geometry::{BoundingBox, Lane};

/// A falling block. Lane, `x` and color are fixed at spawn; `y` and
/// `speed` change every tick and every ramp respectively.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    lane: Lane,
    x: f32,
    y: f32,
    speed: f32,
    color: Rgb,
}

impl Obstacle {
    pub const WIDTH: u32 = OBSTACLE_WIDTH;
    pub const HEIGHT: u32 = OBSTACLE_HEIGHT;

    /// Draws lane, speed, then red, green and blue from `random`.
    pub fn spawn(random: &mut impl RandomSource) -> Self {
        let lane = Lane::from_index(random.between(0, LANE_COUNT - 1));
        let speed = random.between(OBSTACLE_MIN_SPEED, OBSTACLE_MAX_SPEED) as f32;
        let mut channel = || random.between(OBSTACLE_MIN_CHANNEL, OBSTACLE_MAX_CHANNEL) as u8;
        let color = Rgb::new(channel(), channel(), channel());

        Self::new(lane, speed, color)
    }

    pub fn new(lane: Lane, speed: f32, color: Rgb) -> Self {
        Obstacle {
            lane,
            x: lane.x_for(Self::WIDTH),
            y: OBSTACLE_SPAWN_Y,
            speed,
            color,
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

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn advance(&mut self) {
        self.y += self.speed;
    }

    pub fn accelerate(&mut self, increment: f32) {
        self.speed += increment;
    }

    /// True once the top edge is below the bottom of the play area.
    pub fn is_past_bottom(&self) -> bool {
        self.y > WINDOW_HEIGHT as f32
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, Self::WIDTH, Self::HEIGHT)
    }

    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.bounding_box().overlaps(other)
    }
}
