use crate::constants::*;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub struct RoadRenderer;

impl RoadRenderer {
    pub fn render_background(canvas: &mut Canvas<Window>) {
        canvas.set_draw_color(Color::from(ROAD_COLOR));
        canvas.clear();
    }

    pub fn render_lane_markers(canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(Color::from(ROAD_MARK_COLOR));
        canvas.fill_rects(&Self::lane_marker_rects())
    }

    /// Dashes on the two lane boundaries, one every two dash lengths.
    pub fn lane_marker_rects() -> Vec<Rect> {
        let mut rects = Vec::new();
        for boundary in 1..LANE_COUNT {
            let x = (boundary * LANE_WIDTH) as i32 - (ROAD_MARK_WIDTH / 2) as i32;
            for y in (0..WINDOW_HEIGHT).step_by((ROAD_MARK_HEIGHT * 2) as usize) {
                rects.push(Rect::new(x, y as i32, ROAD_MARK_WIDTH, ROAD_MARK_HEIGHT));
            }
        }
        rects
    }
}
