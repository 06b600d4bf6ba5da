use sdl2::rect::Rect;

use super::BoundingBox;

pub trait RectExtensions {
    fn to_rect(&self) -> Rect;
}

impl RectExtensions for BoundingBox {
    // Truncates toward zero like the integer rects SDL draws with.
    fn to_rect(&self) -> Rect {
        Rect::new(
            self.x as i32,
            self.y as i32,
            self.width as u32,
            self.height as u32,
        )
    }
}
