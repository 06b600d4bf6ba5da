pub mod car;
pub mod color;
pub mod obstacle;
pub mod random;
pub mod rules;
pub mod session;

pub use car::Car;
pub use color::Rgb;
pub use obstacle::Obstacle;
pub use random::{RandomSource, SeededRandom};
pub use session::{Phase, Session, TickReport};
