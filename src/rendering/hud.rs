use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use super::glyphs::{text_rects, text_width};
use crate::constants::*;
use crate::core::Rgb;

const SCORE_SCALE: u32 = 3;
const BEST_SCALE: u32 = 2;
const TITLE_SCALE: u32 = 8;
const PROMPT_SCALE: u32 = 3;

pub struct Hud;

impl Hud {
    pub fn render_score(canvas: &mut Canvas<Window>, score: u32, best: u32) -> Result<(), String> {
        Self::draw_text(canvas, &format!("SCORE: {}", score), 10, 10, SCORE_SCALE, TEXT_COLOR)?;
        Self::draw_text(canvas, &format!("BEST: {}", best), 10, 40, BEST_SCALE, TEXT_COLOR)
    }

    pub fn render_game_over(canvas: &mut Canvas<Window>) -> Result<(), String> {
        let mid_y = (WINDOW_HEIGHT / 2) as i32;
        Self::draw_centered(canvas, "GAME OVER", mid_y - 50, TITLE_SCALE, GAME_OVER_COLOR)?;
        Self::draw_centered(canvas, "PRESS R TO RESTART", mid_y + 30, PROMPT_SCALE, TEXT_COLOR)
    }

    pub fn centered_x(text: &str, scale: u32) -> i32 {
        WINDOW_WIDTH as i32 / 2 - text_width(text, scale) as i32 / 2
    }

    fn draw_centered(
        canvas: &mut Canvas<Window>,
        text: &str,
        y: i32,
        scale: u32,
        color: Rgb,
    ) -> Result<(), String> {
        Self::draw_text(canvas, text, Self::centered_x(text, scale), y, scale, color)
    }

    fn draw_text(
        canvas: &mut Canvas<Window>,
        text: &str,
        x: i32,
        y: i32,
        scale: u32,
        color: Rgb,
    ) -> Result<(), String> {
        canvas.set_draw_color(Color::from(color));
        canvas.fill_rects(&text_rects(text, x, y, scale))
    }
}
