use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::constants::*;
use crate::core::{Car, Obstacle, Rgb};
use crate::geometry::RectExtensions;

pub struct SpriteRenderer;

impl SpriteRenderer {
    pub fn render_car(canvas: &mut Canvas<Window>, car: &Car) -> Result<(), String> {
        for (color, rects) in Self::car_parts(car) {
            canvas.set_draw_color(Color::from(color));
            canvas.fill_rects(&rects)?;
        }
        Ok(())
    }

    pub fn render_obstacle(canvas: &mut Canvas<Window>, obstacle: &Obstacle) -> Result<(), String> {
        canvas.set_draw_color(Color::from(obstacle.color()));
        canvas.fill_rect(obstacle.bounding_box().to_rect())
    }

    /// Body, window, four wheels and two headlights, in drawing order.
    pub fn car_parts(car: &Car) -> Vec<(Rgb, Vec<Rect>)> {
        let body = car.bounding_box().to_rect();
        let (x, y) = (body.x(), body.y());
        let (w, h) = (Car::WIDTH as i32, Car::HEIGHT as i32);

        let window = Rect::new(x + 5, y + 5, Car::WIDTH - 10, 30);
        let wheels = vec![
            Rect::new(x - 5, y + 15, 10, 25),
            Rect::new(x + w - 5, y + 15, 10, 25),
            Rect::new(x - 5, y + h - 40, 10, 25),
            Rect::new(x + w - 5, y + h - 40, 10, 25),
        ];
        let headlights = vec![
            Rect::new(x + 5, y, 10, 5),
            Rect::new(x + w - 15, y, 10, 5),
        ];

        vec![
            (CAR_BODY_COLOR, vec![body]),
            (CAR_WINDOW_COLOR, vec![window]),
            (WHEEL_COLOR, wheels),
            (HEADLIGHT_COLOR, headlights),
        ]
    }
}
