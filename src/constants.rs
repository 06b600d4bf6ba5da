use crate::core::Rgb;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const WINDOW_TITLE: &str = "Car Racing Game";

pub const LANE_COUNT: u32 = 3;
pub const LANE_WIDTH: u32 = WINDOW_WIDTH / LANE_COUNT;

pub const CAR_WIDTH: u32 = 60;
pub const CAR_HEIGHT: u32 = 100;
// Top edge of the car; it never moves vertically.
pub const CAR_Y: f32 = (WINDOW_HEIGHT - 150) as f32;

pub const OBSTACLE_WIDTH: u32 = 60;
pub const OBSTACLE_HEIGHT: u32 = 60;
pub const OBSTACLE_SPAWN_Y: f32 = -(OBSTACLE_HEIGHT as f32);
pub const OBSTACLE_MIN_SPEED: u32 = 3;
pub const OBSTACLE_MAX_SPEED: u32 = 7;
pub const OBSTACLE_MIN_CHANNEL: u32 = 100;
pub const OBSTACLE_MAX_CHANNEL: u32 = 255;

pub const DODGE_REWARD: u32 = 10;

// Difficulty ramp, all in ticks
pub const INITIAL_SPAWN_DELAY: u32 = 60;
pub const MIN_SPAWN_DELAY: u32 = 20;
pub const SPAWN_DELAY_STEP: u32 = 5;
pub const RAMP_INTERVAL: u32 = 300;
pub const RAMP_SPEED_INCREMENT: f32 = 0.5;

pub const FPS: u32 = 60;
pub const FRAME_DURATION: std::time::Duration = std::time::Duration::from_millis(1000 / FPS as u64);

pub const ROAD_MARK_WIDTH: u32 = 10;
pub const ROAD_MARK_HEIGHT: u32 = 50;

pub const ROAD_COLOR: Rgb = Rgb::new(50, 50, 50);
pub const ROAD_MARK_COLOR: Rgb = Rgb::new(255, 255, 255);
pub const CAR_BODY_COLOR: Rgb = Rgb::new(255, 0, 0);
pub const CAR_WINDOW_COLOR: Rgb = Rgb::new(0, 0, 255);
pub const WHEEL_COLOR: Rgb = Rgb::new(0, 0, 0);
pub const HEADLIGHT_COLOR: Rgb = Rgb::new(255, 255, 0);
pub const TEXT_COLOR: Rgb = Rgb::new(255, 255, 255);
pub const GAME_OVER_COLOR: Rgb = Rgb::new(255, 0, 0);
