use crate::constants::{MIN_SPAWN_DELAY, RAMP_INTERVAL, SPAWN_DELAY_STEP};
use crate::core::{Car, Obstacle};

pub struct CollisionDetector;

impl CollisionDetector {
    pub fn collides(car: &Car, obstacle: &Obstacle) -> bool {
        obstacle.overlaps(&car.bounding_box())
    }
}

pub fn spawn_due(spawn_timer: u32, spawn_delay: u32) -> bool {
    spawn_timer >= spawn_delay
}

pub fn ramp_due(ramp_timer: u32) -> bool {
    ramp_timer >= RAMP_INTERVAL
}

/// Spawn delay after one ramp step, never below the minimum.
pub fn ramped_spawn_delay(spawn_delay: u32) -> u32 {
    spawn_delay.saturating_sub(SPAWN_DELAY_STEP).max(MIN_SPAWN_DELAY)
}
