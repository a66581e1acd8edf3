mod ellipse;
mod rectangle;

pub use ellipse::{Circle, Ellipse};
pub use rectangle::{Rectangle, Square};
