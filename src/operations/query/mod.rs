mod area;
mod measure;
mod volume;

pub use area::Area;
pub use measure::{Measure, Measurement};
pub use volume::Volume;
