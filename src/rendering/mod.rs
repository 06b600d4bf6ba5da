pub mod glyphs;
pub mod hud;
pub mod road_renderer;
pub mod sprite_renderer;

use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::core::{RandomSource, Rgb};
use crate::game::Game;
use hud::Hud;
use road_renderer::RoadRenderer;
use sprite_renderer::SpriteRenderer;

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Color {
        Color::RGB(rgb.r, rgb.g, rgb.b)
    }
}

/// Draws a frame from the game's read-only state. Owns the canvas so the
/// simulation never sees SDL.
pub struct Renderer {
    canvas: Canvas<Window>,
}

impl Renderer {
    pub fn new(canvas: Canvas<Window>) -> Self {
        Renderer { canvas }
    }

    pub fn render<R: RandomSource>(&mut self, game: &Game<R>) -> Result<(), String> {
        let canvas = &mut self.canvas;

        RoadRenderer::render_background(canvas);
        RoadRenderer::render_lane_markers(canvas)?;

        SpriteRenderer::render_car(canvas, game.car())?;
        for obstacle in game.obstacles() {
            SpriteRenderer::render_obstacle(canvas, obstacle)?;
        }

        Hud::render_score(canvas, game.score(), game.statistics().best_score)?;
        if game.is_game_over() {
            Hud::render_game_over(canvas)?;
        }

        canvas.present();
        Ok(())
    }
}
