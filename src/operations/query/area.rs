use crate::error::Result;
use crate::store::{ShapeId, ShapeStore};

/// Computes the area of a stored shape (surface area for solids).
pub struct Area {
    shape: ShapeId,
}

impl Area {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(shape: ShapeId) -> Self {
        Self { shape }
    }

    /// Executes the query, returning the area.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not in the store.
    pub fn execute(&self, store: &ShapeStore) -> Result<f64> {
        Ok(store.shape(self.shape)?.area())
    }
}
