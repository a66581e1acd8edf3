use std::rc::Rc;

use slotmap::{SecondaryMap, SlotMap};

use crate::error::StoreError;
use crate::geometry::{FlatShape, Shape};

slotmap::new_key_type! {
    /// Unique identifier for a shape in the shape store.
    pub struct ShapeId;
}

/// Arena that owns shapes behind generational IDs.
///
/// Flat shapes inserted through [`ShapeStore::add_flat`] are also indexed
/// as [`FlatShape`]s so they can serve as prism bases. Removing an entry
/// never invalidates a prism built from it: the prism holds its own
/// reference to the base.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: SlotMap<ShapeId, Rc<dyn Shape>>,
    flats: SecondaryMap<ShapeId, Rc<dyn FlatShape>>,
}

impl ShapeStore {
    /// Creates a new, empty shape store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a shape and returns its ID.
    ///
    /// Shapes added this way cannot be extruded, even when flat; use
    /// [`ShapeStore::add_flat`] for prism bases.
    pub fn add<S: Shape + 'static>(&mut self, shape: S) -> ShapeId {
        let id = self.shapes.insert(Rc::new(shape));
        tracing::debug!(?id, tag = %self.shapes[id].tag(), "added shape");
        id
    }

    /// Inserts a flat shape and returns its ID.
    pub fn add_flat<S: FlatShape + 'static>(&mut self, shape: S) -> ShapeId {
        let shared = Rc::new(shape);
        let flat: Rc<dyn FlatShape> = shared.clone();
        let id = self.shapes.insert(shared);
        self.flats.insert(id, flat);
        tracing::debug!(?id, tag = %self.shapes[id].tag(), "added flat shape");
        id
    }

    /// Returns a reference to the shape, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn shape(&self, id: ShapeId) -> Result<&dyn Shape, StoreError> {
        self.shapes
            .get(id)
            .map(|shape| &**shape)
            .ok_or_else(|| StoreError::EntityNotFound(format!("{id:?}")))
    }

    /// Returns a shared handle to a flat shape.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EntityNotFound`] if the ID is unknown and
    /// [`StoreError::NotFlat`] if the shape was not added through
    /// [`ShapeStore::add_flat`], even when its dimension is flat.
    pub fn flat(&self, id: ShapeId) -> Result<Rc<dyn FlatShape>, StoreError> {
        if let Some(flat) = self.flats.get(id) {
            return Ok(Rc::clone(flat));
        }
        let shape = self.shape(id)?;
        Err(StoreError::NotFlat(shape.tag().into_owned()))
    }

    /// Removes a shape from the store and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn remove(&mut self, id: ShapeId) -> Result<Rc<dyn Shape>, StoreError> {
        let shape = self
            .shapes
            .remove(id)
            .ok_or_else(|| StoreError::EntityNotFound(format!("{id:?}")))?;
        self.flats.remove(id);
        tracing::debug!(?id, tag = %shape.tag(), "removed shape");
        Ok(shape)
    }

    /// Returns whether the ID refers to a live entry.
    #[must_use]
    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(id)
    }

    /// Returns the number of shapes in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterates over the IDs of all shapes. The order is unspecified.
    pub fn ids(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.shapes.keys()
    }

    /// Iterates over all shapes. The order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &dyn Shape)> {
        self.shapes.iter().map(|(id, shape)| (id, &**shape))
    }
}
