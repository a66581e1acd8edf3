use crate::error::Result;
use crate::geometry::Prism;
use crate::store::{ShapeId, ShapeStore};

/// Extrudes a stored flat shape into a prism.
pub struct Extrude {
    base: ShapeId,
    length: f64,
}

impl Extrude {
    /// Creates a new `Extrude` operation.
    #[must_use]
    pub fn new(base: ShapeId, length: f64) -> Self {
        Self { base, length }
    }

    /// Executes the extrusion, adding the prism to the store.
    ///
    /// The prism shares the base shape, so removing `base` from the store
    /// afterwards leaves the prism intact.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EntityNotFound`](crate::error::StoreError::EntityNotFound)
    /// if the base is not in the store and
    /// [`StoreError::NotFlat`](crate::error::StoreError::NotFlat) if it was not
    /// added as a flat shape.
    pub fn execute(&self, store: &mut ShapeStore) -> Result<ShapeId> {
        let base = store.flat(self.base)?;
        let prism = store.add(Prism::new(self.length, base));
        tracing::debug!(base = ?self.base, ?prism, length = self.length, "extruded");
        Ok(prism)
    }
}
