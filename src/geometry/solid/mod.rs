mod cuboid;
mod ellipsoid;

pub use cuboid::{Cube, Cuboid};
pub use ellipsoid::{Ellipsoid, Sphere};
