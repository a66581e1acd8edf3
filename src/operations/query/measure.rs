use std::fmt;

use crate::error::Result;
use crate::geometry::{Dimension, Shape};
use crate::store::{ShapeId, ShapeStore};

/// The tag, area and (for solids) volume of one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Name of the shape kind.
    pub tag: String,
    /// Whether the shape is flat or solid.
    pub dimension: Dimension,
    /// Area, or surface area for solids.
    pub area: f64,
    /// `None` for flat shapes, which have no volume.
    pub volume: Option<f64>,
}

impl Measurement {
    /// Measures a shape directly.
    ///
    /// The volume is only requested from solid shapes, so a flat shape
    /// yields `volume: None` instead of an error.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the shape's `volume()`.
    pub fn of(shape: &dyn Shape) -> Result<Self> {
        let dimension = shape.dimension();
        let volume = match dimension {
            Dimension::Flat => None,
            Dimension::Solid => Some(shape.volume()?),
        };
        Ok(Self {
            tag: shape.tag().into_owned(),
            dimension,
            area: shape.area(),
            volume,
        })
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Area of {} = {}", self.tag, self.area)?;
        if let Some(volume) = self.volume {
            write!(f, "\nVolume of {} = {volume}", self.tag)?;
        }
        Ok(())
    }
}

/// Measures a stored shape.
pub struct Measure {
    shape: ShapeId,
}

impl Measure {
    /// Creates a new `Measure` query.
    #[must_use]
    pub fn new(shape: ShapeId) -> Self {
        Self { shape }
    }

    /// Executes the query, returning the measurement.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not in the store.
    pub fn execute(&self, store: &ShapeStore) -> Result<Measurement> {
        Measurement::of(store.shape(self.shape)?)
    }
}
