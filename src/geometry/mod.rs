pub mod bounds;
pub mod lane;
pub mod rect_extensions;

pub use bounds::BoundingBox;
pub use lane::Lane;
pub use rect_extensions::RectExtensions;
