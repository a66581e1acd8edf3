use std::rc::Rc;

use crate::error::Result;
use crate::math::check_dimension;

use super::{Dimension, FlatShape, Shape, Tag};

/// A flat shape extruded along its normal by a fixed length.
///
/// The base is shared, not owned: several prisms (and the caller) may hold
/// the same flat shape, and it lives as long as any of them.
///
/// `A = base.area()`, `V = base.area() * length`
#[derive(Debug, Clone)]
pub struct Prism {
    length: f64,
    base: Rc<dyn FlatShape>,
}

impl Prism {
    /// Creates a new prism over a shared flat base. The length is not
    /// checked.
    #[must_use]
    pub fn new(length: f64, base: Rc<dyn FlatShape>) -> Self {
        Self { length, base }
    }

    /// Creates a new prism, rejecting a negative or non-finite length.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionError`](crate::error::DimensionError) for an
    /// invalid length.
    pub fn try_new(length: f64, base: Rc<dyn FlatShape>) -> Result<Self> {
        Ok(Self::new(check_dimension("length", length)?, base))
    }

    /// Creates a new prism that takes sole ownership of `base`.
    #[must_use]
    pub fn extrude<S: FlatShape + 'static>(length: f64, base: S) -> Self {
        Self::new(length, Rc::new(base))
    }

    /// Returns the extrusion length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the shared base shape.
    #[must_use]
    pub fn base(&self) -> &Rc<dyn FlatShape> {
        &self.base
    }
}

impl Shape for Prism {
    fn area(&self) -> f64 {
        self.base.area()
    }

    fn volume(&self) -> Result<f64> {
        Ok(self.base.area() * self.length)
    }

    fn tag(&self) -> Tag {
        Tag::Owned(format!("{} prism", self.base.tag()))
    }

    fn dimension(&self) -> Dimension {
        Dimension::Solid
    }
}
