use crate::error::Result;
use crate::store::{ShapeId, ShapeStore};

/// Computes the volume of a stored shape.
pub struct Volume {
    shape: ShapeId,
}

impl Volume {
    /// Creates a new `Volume` query.
    #[must_use]
    pub fn new(shape: ShapeId) -> Self {
        Self { shape }
    }

    /// Executes the query, returning the volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not in the store, or
    /// [`ShapeError::UnsupportedOperation`](crate::error::ShapeError::UnsupportedOperation)
    /// if it is flat.
    pub fn execute(&self, store: &ShapeStore) -> Result<f64> {
        store.shape(self.shape)?.volume()
    }
}
